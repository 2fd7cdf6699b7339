//! `chrono` integration: calendar instants and RFC 3339 targets.
//!
//! Enabled by the `chrono` feature. `DateTime<Utc>` becomes a
//! [`TimeInstant`] with [`Millis`] durations, so a countdown can be declared
//! directly from an ISO-8601 timestamp such as `"2025-08-01T00:00:00Z"`.

use chrono::{DateTime, TimeDelta, Utc};

use crate::countdown::{Countdown, CountdownBuilder};
use crate::time::{Millis, TimeDuration, TimeInstant, UnixMillis};
use crate::types::CountdownError;

impl TimeInstant for DateTime<Utc> {
    type Duration = Millis;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        let delta = *self - earlier;
        Millis(u64::try_from(delta.num_milliseconds()).unwrap_or(0))
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        let millis = i64::try_from(duration.as_millis()).ok()?;
        self.checked_add_signed(TimeDelta::try_milliseconds(millis)?)
    }
}

/// Parses an RFC 3339 timestamp and normalises it to UTC.
///
/// # Errors
/// Returns `InvalidTarget` if the text is not a valid timestamp.
pub fn parse_rfc3339(text: &str) -> Result<DateTime<Utc>, CountdownError> {
    DateTime::parse_from_rfc3339(text)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| CountdownError::InvalidTarget)
}

impl From<DateTime<Utc>> for UnixMillis {
    fn from(instant: DateTime<Utc>) -> Self {
        UnixMillis(instant.timestamp_millis())
    }
}

impl UnixMillis {
    /// Parses an RFC 3339 timestamp into Unix milliseconds.
    ///
    /// # Errors
    /// Returns `InvalidTarget` if the text is not a valid timestamp.
    pub fn parse_rfc3339(text: &str) -> Result<Self, CountdownError> {
        parse_rfc3339(text).map(UnixMillis::from)
    }
}

impl Countdown<DateTime<Utc>> {
    /// Countdown to an RFC 3339 timestamp, one tick per second.
    ///
    /// # Errors
    /// Returns `InvalidTarget` if the text is not a valid timestamp.
    pub fn from_rfc3339(text: &str) -> Result<Self, CountdownError> {
        parse_rfc3339(text).map(Countdown::new)
    }
}

impl CountdownBuilder<DateTime<Utc>> {
    /// Sets the target from an RFC 3339 timestamp.
    ///
    /// # Errors
    /// Returns `InvalidTarget` if the text is not a valid timestamp.
    pub fn target_rfc3339(self, text: &str) -> Result<Self, CountdownError> {
        Ok(self.target(parse_rfc3339(text)?))
    }
}
