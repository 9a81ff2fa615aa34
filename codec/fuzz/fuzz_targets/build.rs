#![no_main]

use arbitrary::Arbitrary;
use keypad_codec::{EncodedAction, SessionId, ViewId};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    ViewId(u32),
    SessionId(u32),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Written {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(u32),
    F64(u64),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut action = EncodedAction::new();
    let mut written: Vec<Option<Written>> = Vec::new();
    let mut strings: Vec<(u8, String)> = Vec::new();

    for op in ops {
        let count = action.arg_count();
        let free = action.free_offset();
        let (result, value) = match op {
            Op::ViewId(v) => {
                action.set_view_id(ViewId(v));
                assert_eq!(action.view_id(), ViewId(v));
                continue;
            }
            Op::SessionId(v) => {
                action.set_session_id(SessionId(v));
                assert_eq!(action.session_id(), SessionId(v));
                continue;
            }
            Op::Reset => {
                action.reset();
                written.clear();
                strings.clear();
                assert_eq!(action.arg_count(), 0);
                assert_eq!(action.free_offset(), 10);
                continue;
            }
            Op::I8(v) => (action.put_i8(v), Some(Written::I8(v))),
            Op::I16(v) => (action.put_i16(v), Some(Written::I16(v))),
            Op::I32(v) => (action.put_i32(v), Some(Written::I32(v))),
            Op::I64(v) => (action.put_i64(v), Some(Written::I64(v))),
            Op::U8(v) => (action.put_u8(v), Some(Written::U8(v))),
            Op::U16(v) => (action.put_u16(v), Some(Written::U16(v))),
            Op::U32(v) => (action.put_u32(v), Some(Written::U32(v))),
            Op::U64(v) => (action.put_u64(v), Some(Written::U64(v))),
            Op::F32(v) => (action.put_f32(v), Some(Written::F32(v.to_bits()))),
            Op::F64(v) => (action.put_f64(v), Some(Written::F64(v.to_bits()))),
            Op::Str(s) => {
                let result = action.put_str(&s);
                if let Ok(index) = result {
                    strings.push((index, s));
                }
                (result, None)
            }
        };

        match result {
            Ok(index) => {
                assert_eq!(index, count);
                assert_eq!(action.arg_count(), count + 1);
                assert!(action.free_offset() > free);
                written.push(value);
            }
            Err(_) => {
                assert_eq!(action.arg_count(), count);
                assert_eq!(action.free_offset(), free);
            }
        }
        assert!(action.free_offset() <= 64);
    }

    // Reading at an argument's own index returns that argument.
    for (index, value) in written.iter().enumerate() {
        let index = index as u8;
        match value {
            Some(Written::I8(v)) => assert_eq!(action.get_i8(index), Some(*v)),
            Some(Written::I16(v)) => assert_eq!(action.get_i16(index), Some(*v)),
            Some(Written::I32(v)) => assert_eq!(action.get_i32(index), Some(*v)),
            Some(Written::I64(v)) => assert_eq!(action.get_i64(index), Some(*v)),
            Some(Written::U8(v)) => assert_eq!(action.get_u8(index), Some(*v)),
            Some(Written::U16(v)) => assert_eq!(action.get_u16(index), Some(*v)),
            Some(Written::U32(v)) => assert_eq!(action.get_u32(index), Some(*v)),
            Some(Written::U64(v)) => assert_eq!(action.get_u64(index), Some(*v)),
            Some(Written::F32(v)) => {
                assert_eq!(action.get_f32(index).map(f32::to_bits), Some(*v))
            }
            Some(Written::F64(v)) => {
                assert_eq!(action.get_f64(index).map(f64::to_bits), Some(*v))
            }
            None => {}
        }
    }
    for (index, s) in &strings {
        assert_eq!(action.get_str(*index), Some(s.as_str()));
    }

    let decoded = EncodedAction::from_slice(action.as_bytes()).unwrap();
    assert_eq!(decoded, action);
    assert_eq!(decoded.dump().len(), 4 + written.len());
});
