//! The FBX SDK time representation.

/// A timestamp as counted by the FBX SDK (`FbxTime`).
///
/// The SDK counts time in ticks at a fixed 46,186,158,000 per second, a rate
/// chosen so that every common frame rate divides it without remainder.
/// Values are signed; a negative tick count is a time before the scene
/// origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FbxTime {
    ticks: i64,
}

impl FbxTime {
    /// SDK ticks per second.
    pub const TICKS_PER_SECOND: i64 = 46186158000;

    /// Exactly one second of SDK time.
    pub const ONE_SECOND: Self = Self {
        ticks: Self::TICKS_PER_SECOND,
    };

    /// Create a time from a raw SDK tick count.
    #[must_use]
    pub const fn from_ticks(ticks: i64) -> Self {
        Self { ticks }
    }

    /// The raw SDK tick count.
    #[must_use]
    pub const fn ticks(self) -> i64 {
        self.ticks
    }
}
