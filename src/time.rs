//! Time abstraction traits for platform-agnostic timing.
//!
//! The countdown never reads an ambient clock. Everything that needs "now"
//! is handed a [`TimeSource`], and instants/durations are whatever the
//! platform provides as long as they implement [`TimeInstant`] and
//! [`TimeDuration`]. [`UnixMillis`] and [`Millis`] are built-in
//! implementations for wall-clock UTC time.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy + Ord {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Returns `ZERO` if `earlier` is actually later than `self`.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds duration to instant, returns None on overflow.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;
}

/// A span of time in whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u64);

impl Millis {
    /// One second.
    pub const SECOND: Self = Millis(1_000);

    /// Creates a duration from whole seconds, saturating on overflow.
    pub const fn from_secs(secs: u64) -> Self {
        Millis(secs.saturating_mul(1_000))
    }
}

impl TimeDuration for Millis {
    const ZERO: Self = Millis(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        Millis(millis)
    }
}

/// A UTC instant as milliseconds since the Unix epoch.
///
/// Negative values are instants before 1970 and are accepted like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnixMillis(pub i64);

impl UnixMillis {
    /// Milliseconds since the Unix epoch.
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl TimeInstant for UnixMillis {
    type Duration = Millis;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        // i128 keeps i64::MAX - i64::MIN exact
        let diff = i128::from(self.0) - i128::from(earlier.0);
        if diff <= 0 {
            Millis::ZERO
        } else {
            Millis(u64::try_from(diff).unwrap_or(u64::MAX))
        }
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        let millis = i64::try_from(duration.0).ok()?;
        self.0.checked_add(millis).map(UnixMillis)
    }
}
