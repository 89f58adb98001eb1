//! Compressed animation time span.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A duration stored as a compact 32-bit tick count at 100,000 ticks per
/// second.
///
/// Animation curves hold one timestamp per keyframe, so the engine trades
/// range and sub-tick precision for half the memory of a full time span.
/// The 10 microsecond tick is still finer than any frame rate the importer
/// meets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct CompressedTimeSpan {
    ticks: i32,
}

impl CompressedTimeSpan {
    /// Engine ticks per millisecond.
    pub const TICKS_PER_MILLISECOND: i32 = 100;

    /// Engine ticks per second.
    pub const TICKS_PER_SECOND: i32 = Self::TICKS_PER_MILLISECOND * 1000;

    /// The zero-length span.
    pub const ZERO: Self = Self { ticks: 0 };

    /// Create a span from a raw engine tick count.
    #[must_use]
    pub const fn new(ticks: i32) -> Self {
        Self { ticks }
    }

    /// The raw engine tick count.
    #[must_use]
    pub const fn ticks(self) -> i32 {
        self.ticks
    }

    /// The span in seconds.
    #[must_use]
    pub fn total_seconds(self) -> f64 {
        f64::from(self.ticks) / f64::from(Self::TICKS_PER_SECOND)
    }
}

impl Add for CompressedTimeSpan {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.ticks + rhs.ticks)
    }
}

impl Sub for CompressedTimeSpan {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.ticks - rhs.ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_arithmetic() {
        let half = CompressedTimeSpan::new(CompressedTimeSpan::TICKS_PER_SECOND / 2);
        assert_eq!((half + half).ticks(), CompressedTimeSpan::TICKS_PER_SECOND);
        assert_eq!(half - half, CompressedTimeSpan::ZERO);
    }

    #[test]
    fn test_total_seconds() {
        let span = CompressedTimeSpan::new(250 * CompressedTimeSpan::TICKS_PER_MILLISECOND);
        assert!((span.total_seconds() - 0.25).abs() < f64::EPSILON);
    }
}
