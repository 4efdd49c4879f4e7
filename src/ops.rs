use std::{
    fmt::{Debug, Formatter},
    ops::Sub,
};

use chrono::{DateTime, Utc};

/// Half-open time interval.
pub type Interval<Tz = Utc> = RangeExclusive<DateTime<Tz>>;

#[must_use]
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct RangeExclusive<T: Copy> {
    /// Inclusive.
    pub start: T,

    /// Exclusive.
    pub end: T,
}

impl<T: Copy + Debug> Debug for RangeExclusive<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl<T: Copy> RangeExclusive<T> {
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    pub const fn with_start(mut self, start: T) -> Self {
        self.start = start;
        self
    }
}

impl<T: Copy + Sub> RangeExclusive<T> {
    #[must_use]
    pub fn len(self) -> <T as Sub>::Output {
        self.end - self.start
    }
}

impl<T: Copy + PartialOrd> RangeExclusive<T> {
    #[must_use]
    pub fn contains(self, other: T) -> bool {
        (self.start <= other) && (other < self.end)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// Check whether the range fully covers the other one.
    #[must_use]
    pub fn covers(self, other: Self) -> bool {
        (self.start <= other.start) && (other.end <= self.end)
    }

    /// Get the non-empty common part of the ranges, if any.
    #[must_use]
    pub fn intersection(self, other: Self) -> Option<Self> {
        let start = if other.start > self.start { other.start } else { self.start };
        let end = if other.end < self.end { other.end } else { self.end };
        (start < end).then_some(Self { start, end })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone};

    use super::*;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 11, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_contains_is_half_open() {
        let interval = Interval::new(at(10, 0), at(11, 0));
        assert!(interval.contains(at(10, 0)));
        assert!(interval.contains(at(10, 59)));
        assert!(!interval.contains(at(11, 0)));
    }

    #[test]
    fn test_len() {
        assert_eq!(Interval::new(at(10, 15), at(11, 0)).len(), TimeDelta::minutes(45));
    }

    #[test]
    fn test_intersection() {
        let lhs = Interval::new(at(10, 0), at(11, 0));
        assert_eq!(
            lhs.intersection(Interval::new(at(10, 30), at(12, 0))),
            Some(Interval::new(at(10, 30), at(11, 0))),
        );
        assert_eq!(lhs.intersection(Interval::new(at(11, 0), at(12, 0))), None);
        assert_eq!(
            lhs.intersection(Interval::new(at(9, 0), at(12, 0))),
            Some(lhs),
            "the covered range is returned as is",
        );
    }

    #[test]
    fn test_covers() {
        let outer = Interval::new(at(10, 0), at(12, 0));
        assert!(outer.covers(Interval::new(at(10, 0), at(12, 0))));
        assert!(outer.covers(Interval::new(at(10, 30), at(11, 0))));
        assert!(!outer.covers(Interval::new(at(9, 59), at(11, 0))));
    }
}
