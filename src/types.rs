//! Core countdown value types.

use core::fmt::Write;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60_000;
const MILLIS_PER_HOUR: u64 = 3_600_000;
const MILLIS_PER_DAY: u64 = 86_400_000;

/// Capacity of the string returned by [`Remaining::to_banner`].
///
/// The longest rendering of any `Remaining`, including hand-built values
/// with out-of-range fields, is `u64::MAX` days (twenty digits) followed by
/// three `:NNN` groups for `u8::MAX` hours, minutes and seconds: exactly 32.
pub const BANNER_CAPACITY: usize = 32;

/// Whole days, hours, minutes and seconds left until a target instant.
///
/// Values built by [`from_millis`](Self::from_millis) or
/// [`compute_remaining`](crate::compute_remaining) keep `hours` in `0..24`
/// and `minutes` and `seconds` in `0..60`. For those values the derived
/// `Ord` compares by the amount of time left. The fields are public, so a
/// hand-built value such as `Remaining { hours: 200, .. }` is not
/// normalised and neither guarantee applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Remaining {
    /// Whole days left. Unbounded.
    pub days: u64,

    /// Hours past the whole days, `0..24`.
    pub hours: u8,

    /// Minutes past the whole hours, `0..60`.
    pub minutes: u8,

    /// Seconds past the whole minutes, `0..60`.
    pub seconds: u8,
}

impl Remaining {
    /// Decomposes a millisecond span by floor division.
    ///
    /// Sub-second leftovers are dropped, so anything below one second is
    /// `(0, 0, 0, 0)`.
    pub const fn from_millis(total_ms: u64) -> Self {
        Self {
            days: total_ms / MILLIS_PER_DAY,
            hours: ((total_ms / MILLIS_PER_HOUR) % 24) as u8,
            minutes: ((total_ms / MILLIS_PER_MINUTE) % 60) as u8,
            seconds: ((total_ms / MILLIS_PER_SECOND) % 60) as u8,
        }
    }

    /// Total whole seconds represented by this value.
    pub const fn total_seconds(&self) -> u64 {
        self.days
            .saturating_mul(86_400)
            .saturating_add(self.hours as u64 * 3_600)
            .saturating_add(self.minutes as u64 * 60)
            .saturating_add(self.seconds as u64)
    }

    /// Renders the banner form `DD:HH:MM:SS` without allocating.
    pub fn to_banner(&self) -> heapless::String<BANNER_CAPACITY> {
        let mut out = heapless::String::new();
        // cannot overflow: BANNER_CAPACITY is the longest possible rendering
        let _ = write!(out, "{self}");
        out
    }
}

impl core::fmt::Display for Remaining {
    /// Each field zero-padded to two digits; days grow past two when needed.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// One observation of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Observation {
    /// Target still in the future.
    Counting(Remaining),

    /// Target instant is no longer in the future.
    Reached,
}

impl Observation {
    /// Returns the remaining duration while counting.
    pub const fn remaining(&self) -> Option<Remaining> {
        match self {
            Observation::Counting(remaining) => Some(*remaining),
            Observation::Reached => None,
        }
    }

    /// Returns true once the target has been reached.
    pub const fn is_reached(&self) -> bool {
        matches!(self, Observation::Reached)
    }
}

/// Countdown configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountdownError {
    /// Builder finished without a target instant.
    MissingTarget,

    /// Tick period of zero.
    ZeroPeriod,

    /// Target text is not a valid RFC 3339 timestamp.
    InvalidTarget,
}

impl core::fmt::Display for CountdownError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CountdownError::MissingTarget => {
                write!(f, "countdown has no target instant")
            }
            CountdownError::ZeroPeriod => {
                write!(f, "tick period must be greater than zero")
            }
            CountdownError::InvalidTarget => {
                write!(f, "target is not a valid RFC 3339 timestamp")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CountdownError {}
