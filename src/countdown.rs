//! Countdown definition and the pure remaining-time computation.

use crate::time::{Millis, TimeDuration, TimeInstant, UnixMillis};
use crate::types::{CountdownError, Observation, Remaining};

/// Launch instant of the Next Corner landing page.
pub const LAUNCH_DATE_RFC3339: &str = "2025-08-01T00:00:00Z";

/// [`LAUNCH_DATE_RFC3339`] as milliseconds since the Unix epoch.
pub const LAUNCH_DATE_UNIX_MILLIS: i64 = 1_754_006_400_000;

/// Default re-computation cadence in milliseconds.
pub const DEFAULT_PERIOD_MILLIS: u64 = 1_000;

/// Computes what is left between `now` and `target`.
///
/// Total over all inputs: when `target <= now` the result is
/// [`Observation::Reached`], otherwise the millisecond difference decomposed
/// into days, hours, minutes and seconds.
pub fn compute_remaining<I: TimeInstant>(target: I, now: I) -> Observation {
    if target <= now {
        return Observation::Reached;
    }

    let total_ms = target.duration_since(now).as_millis();
    Observation::Counting(Remaining::from_millis(total_ms))
}

/// A fixed target instant plus the cadence it is observed at.
///
/// The target is immutable once built.
///
/// # Type Parameters
/// * `I` - The instant type (e.g. [`UnixMillis`] or `chrono::DateTime<Utc>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown<I: TimeInstant> {
    target: I,
    period: I::Duration,
}

impl<I: TimeInstant> Countdown<I> {
    /// Creates a new countdown builder.
    pub fn builder() -> CountdownBuilder<I> {
        CountdownBuilder::new()
    }

    /// Creates a countdown to `target` ticking once per second.
    pub fn new(target: I) -> Self {
        Self {
            target,
            period: I::Duration::from_millis(DEFAULT_PERIOD_MILLIS),
        }
    }

    /// Observation at the given instant.
    #[inline]
    pub fn remaining_at(&self, now: I) -> Observation {
        compute_remaining(self.target, now)
    }

    /// Returns the target instant.
    pub fn target(&self) -> I {
        self.target
    }

    /// Returns the tick period.
    pub fn period(&self) -> I::Duration {
        self.period
    }
}

impl Countdown<UnixMillis> {
    /// Countdown to the Next Corner launch, one tick per second.
    pub fn launch() -> Self {
        Self::new(UnixMillis(LAUNCH_DATE_UNIX_MILLIS))
    }

    /// Countdown to an instant given as Unix milliseconds.
    pub fn from_unix_millis(target: i64) -> Self {
        Self::new(UnixMillis(target))
    }
}

/// Builder for constructing validated countdowns.
#[derive(Debug)]
pub struct CountdownBuilder<I: TimeInstant> {
    target: Option<I>,
    period: I::Duration,
}

impl<I: TimeInstant> CountdownBuilder<I> {
    /// Creates an empty builder with the default one second period.
    pub fn new() -> Self {
        Self {
            target: None,
            period: I::Duration::from_millis(DEFAULT_PERIOD_MILLIS),
        }
    }

    /// Sets the target instant.
    pub fn target(mut self, target: I) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the re-computation cadence.
    ///
    /// Default is one second.
    pub fn period(mut self, period: I::Duration) -> Self {
        self.period = period;
        self
    }

    /// Builds and validates the countdown.
    ///
    /// # Errors
    /// * `MissingTarget` - No target was set
    /// * `ZeroPeriod` - The period is zero
    pub fn build(self) -> Result<Countdown<I>, CountdownError> {
        let target = self.target.ok_or(CountdownError::MissingTarget)?;

        if self.period.as_millis() == 0 {
            return Err(CountdownError::ZeroPeriod);
        }

        Ok(Countdown {
            target,
            period: self.period,
        })
    }
}

impl<I: TimeInstant> Default for CountdownBuilder<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownBuilder<UnixMillis> {
    /// Sets the target from Unix milliseconds.
    pub fn target_unix_millis(self, target: i64) -> Self {
        self.target(UnixMillis(target))
    }

    /// Sets the period from whole seconds.
    pub fn period_secs(self, secs: u64) -> Self {
        self.period(Millis::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_in_the_past_or_now_is_reached() {
        let target = UnixMillis(10_000);
        assert_eq!(compute_remaining(target, UnixMillis(10_000)), Observation::Reached);
        assert_eq!(compute_remaining(target, UnixMillis(10_001)), Observation::Reached);
        assert_eq!(compute_remaining(target, UnixMillis(i64::MAX)), Observation::Reached);
    }

    #[test]
    fn one_millisecond_before_target_is_still_counting() {
        let target = UnixMillis(10_000);
        assert_eq!(
            compute_remaining(target, UnixMillis(9_999)),
            Observation::Counting(Remaining::default())
        );
    }

    #[test]
    fn extreme_instants_do_not_overflow() {
        let observation = compute_remaining(UnixMillis(i64::MAX), UnixMillis(i64::MIN));
        assert_eq!(
            observation,
            Observation::Counting(Remaining::from_millis(u64::MAX))
        );
    }

    #[test]
    fn builder_requires_target() {
        let result = Countdown::<UnixMillis>::builder().build();
        assert_eq!(result, Err(CountdownError::MissingTarget));
    }

    #[test]
    fn builder_rejects_zero_period() {
        let result = Countdown::builder()
            .target(UnixMillis(0))
            .period(Millis::ZERO)
            .build();
        assert_eq!(result, Err(CountdownError::ZeroPeriod));
    }

    #[test]
    fn builder_defaults_to_one_second() {
        let countdown = Countdown::<UnixMillis>::builder()
            .target_unix_millis(5)
            .build()
            .unwrap();
        assert_eq!(countdown.period(), Millis::SECOND);
        assert_eq!(countdown.target(), UnixMillis(5));
    }

    #[test]
    fn launch_countdown_targets_launch_date() {
        let countdown = Countdown::<UnixMillis>::launch();
        assert_eq!(countdown.target().as_i64(), LAUNCH_DATE_UNIX_MILLIS);
        assert_eq!(
            countdown.remaining_at(UnixMillis(LAUNCH_DATE_UNIX_MILLIS - 86_400_000)),
            Observation::Counting(Remaining {
                days: 1,
                hours: 0,
                minutes: 0,
                seconds: 0
            })
        );
    }
}
