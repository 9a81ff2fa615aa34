//! Configuration for decoding inbound payloads.

use crate::layout::SIZE;
use core::ops::{Bound, RangeBounds};

/// Configuration for limiting the range of a value.
///
/// # Examples
///
/// ```
/// use keypad_codec::RangeCfg;
///
/// let cfg = RangeCfg::new(10..=64);
/// assert!(cfg.contains(&32));
/// assert!(!cfg.contains(&8));
///
/// let cfg = RangeCfg::exact(64);
/// assert!(cfg.contains(&64));
/// assert!(!cfg.contains(&63));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RangeCfg<T: Copy + PartialOrd> {
    start: Bound<T>,
    end: Bound<T>,
}

impl<T: Copy + PartialOrd> RangeCfg<T> {
    /// Creates a new `RangeCfg` from any type implementing `RangeBounds<T>`.
    pub fn new(r: impl RangeBounds<T>) -> Self {
        Self {
            start: r.start_bound().cloned(),
            end: r.end_bound().cloned(),
        }
    }

    /// Creates a `RangeCfg` that only accepts exactly `value`.
    pub fn exact(value: T) -> Self {
        Self {
            start: Bound::Included(value),
            end: Bound::Included(value),
        }
    }

    /// Returns true if the value is within this range.
    pub fn contains(&self, value: &T) -> bool {
        match &self.start {
            Bound::Included(s) if value < s => return false,
            Bound::Excluded(s) if value <= s => return false,
            _ => {}
        }
        match &self.end {
            Bound::Included(e) if value > e => return false,
            Bound::Excluded(e) if value >= e => return false,
            _ => {}
        }
        true
    }
}

impl<T: Copy + PartialOrd> From<core::ops::Range<T>> for RangeCfg<T> {
    fn from(r: core::ops::Range<T>) -> Self {
        Self::new(r)
    }
}

impl<T: Copy + PartialOrd> From<core::ops::RangeInclusive<T>> for RangeCfg<T> {
    fn from(r: core::ops::RangeInclusive<T>) -> Self {
        Self::new(r)
    }
}

impl<T: Copy + PartialOrd> RangeBounds<T> for RangeCfg<T> {
    fn start_bound(&self) -> Bound<&T> {
        self.start.as_ref()
    }

    fn end_bound(&self) -> Bound<&T> {
        self.end.as_ref()
    }
}

/// Configuration for [crate::EncodedAction::from_slice_cfg].
///
/// Inputs longer than [SIZE] are always rejected, whatever `len` allows.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Config {
    /// Accepted length of an inbound payload. Shorter payloads are zero-padded.
    pub len: RangeCfg<usize>,
}

impl Config {
    /// Only accept payloads of exactly [SIZE] bytes.
    pub fn strict() -> Self {
        Self {
            len: RangeCfg::exact(SIZE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            len: RangeCfg::new(0..=SIZE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ops::Bound::{Excluded, Included, Unbounded};

    #[test]
    fn test_range_cfg_from() {
        let cfg: RangeCfg<usize> = (5..10).into();
        assert_eq!(cfg.start_bound(), Included(&5));
        assert_eq!(cfg.end_bound(), Excluded(&10));

        let cfg: RangeCfg<usize> = (5..=10).into();
        assert_eq!(cfg.end_bound(), Included(&10));

        let cfg = RangeCfg::<usize>::new(..);
        assert_eq!(cfg.start_bound(), Unbounded);
        assert_eq!(cfg.end_bound(), Unbounded);
    }

    #[test]
    fn test_range_cfg_contains() {
        let cfg = RangeCfg::new(5..10);
        assert!(!cfg.contains(&4));
        assert!(cfg.contains(&5));
        assert!(cfg.contains(&9));
        assert!(!cfg.contains(&10));

        let cfg = RangeCfg::new(..=10);
        assert!(cfg.contains(&0));
        assert!(cfg.contains(&10));
        assert!(!cfg.contains(&11));
    }

    #[test]
    fn test_config() {
        let cfg = Config::default();
        assert!(cfg.len.contains(&0));
        assert!(cfg.len.contains(&SIZE));
        assert!(!cfg.len.contains(&(SIZE + 1)));

        let cfg = Config::strict();
        assert!(cfg.len.contains(&SIZE));
        assert!(!cfg.len.contains(&(SIZE - 1)));
    }
}
