#![no_main]

use keypad_codec::{EncodedAction, Error, NodeKind, Value};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let action = match EncodedAction::from_slice(data) {
        Ok(action) => action,
        Err(Error::ExtraData(n)) => {
            assert_eq!(n, data.len() - 64);
            return;
        }
        Err(e) => panic!("unexpected error: {e}"),
    };

    for start in 0..=action.arg_count() {
        let _ = action.get_i8(start);
        let _ = action.get_i16(start);
        let _ = action.get_i32(start);
        let _ = action.get_i64(start);
        let _ = action.get_u8(start);
        let _ = action.get_u16(start);
        let _ = action.get_u32(start);
        let _ = action.get_u64(start);
        let _ = action.get_f32(start);
        let _ = action.get_f64(start);
        let _ = action.get_str(start);
        let _ = action.get_bytes(start);
    }

    // Every decodable argument must agree with its typed reader.
    let args: Vec<_> = action.args().collect();
    let nodes = action.dump();
    for (arg, node) in args.iter().zip(&nodes[4..]) {
        assert_eq!(node.kind, NodeKind::Argument(Some(arg.tag)));
        match arg.value {
            Value::I32(v) => assert_eq!(action.get_i32(arg.index), Some(v)),
            Value::U64(v) => assert_eq!(action.get_u64(arg.index), Some(v)),
            Value::Str(v) => assert_eq!(action.get_str(arg.index), Some(v)),
            Value::Bytes(v) => assert_eq!(action.get_bytes(arg.index), Some(v)),
            _ => {}
        }
    }

    // Writing to a foreign payload must never grow past the buffer.
    let mut copy = action;
    let _ = copy.put_u64(u64::MAX);
    let _ = copy.put_str("fuzz");
    assert!(copy.free_offset() == action.free_offset() || copy.free_offset() <= 64);
});
