//! Periodic countdown observation with an explicit lifecycle.
//!
//! Provides [`CountdownTimer`] which publishes [`Observation`]s of a
//! [`Countdown`] to a display on a fixed cadence, and the
//! [`CountdownDisplay`] trait the display surface implements.
//!
//! The timer never sleeps and never spawns anything. Each call returns a
//! [`ServiceTiming`] telling the caller's cooperative loop how long to yield
//! before calling [`CountdownTimer::service`] again. All scheduling state
//! lives inside the timer, so deactivating, releasing or dropping it is the
//! whole of cancellation.

use crate::command::TimerAction;
use crate::countdown::Countdown;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::Observation;

/// Trait for abstracting the surface a countdown is shown on.
///
/// Implement this for a terminal banner, a web view binding, an LCD line,
/// etc. Formatting is entirely the implementor's job.
pub trait CountdownDisplay {
    /// Shows the latest observation.
    ///
    /// On [`Observation::Reached`] the surface should stop rendering the
    /// countdown. It is the last observation a timer publishes.
    fn show(&mut self, observation: Observation);
}

/// The current state of a countdown timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerState {
    /// Not activated, or deactivated. Nothing is scheduled.
    Inactive,
    /// Ticking. The last observation was a remaining duration.
    Counting,
    /// Target reached and published. Nothing is scheduled.
    Reached,
}

/// Timing information returned by lifecycle and service operations.
///
/// Indicates when the timer needs to be serviced again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceTiming<D> {
    /// Next tick is due after this delay. Yield for exactly this long.
    Delay(D),

    /// No further servicing is needed.
    ///
    /// Returned once the target is reached and after deactivation.
    Complete,
}

/// Errors that can occur during timer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Operation called from an invalid state.
    InvalidState {
        /// Human-readable description of the expected state(s)
        expected: &'static str,
        /// The actual current state
        actual: TimerState,
    },
}

impl core::fmt::Display for TimerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimerError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {}, but timer is in {:?}",
                    expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimerError {}

#[derive(Debug, Clone, Copy)]
enum Phase<I> {
    Inactive,
    Counting { next_tick: I },
    Reached,
}

/// Drives a countdown display through periodic observations.
///
/// Owns the display for as long as it is active: a display cannot be shown
/// a tick by anything but its timer, and [`release`](Self::release) hands
/// it back once no more ticks can happen.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `D` - Display implementation type
/// * `T` - Time source implementation type
pub struct CountdownTimer<'t, I: TimeInstant, D: CountdownDisplay, T: TimeSource<I>> {
    countdown: Countdown<I>,
    display: D,
    time_source: &'t T,
    phase: Phase<I>,
    last_observation: Option<Observation>,
}

impl<'t, I: TimeInstant, D: CountdownDisplay, T: TimeSource<I>> CountdownTimer<'t, I, D, T> {
    /// Creates an inactive timer. Nothing is shown until activation.
    pub fn new(countdown: Countdown<I>, display: D, time_source: &'t T) -> Self {
        Self {
            countdown,
            display,
            time_source,
            phase: Phase::Inactive,
            last_observation: None,
        }
    }

    /// Handles a timer action by dispatching to the appropriate method.
    ///
    /// # Returns
    /// * `Ok(ServiceTiming)` - Timing for actions that (re)activate
    /// * `Ok(ServiceTiming::Complete)` - After deactivation
    /// * `Err` - Operation failed (invalid state)
    pub fn handle_action(
        &mut self,
        action: TimerAction,
    ) -> Result<ServiceTiming<I::Duration>, TimerError> {
        match action {
            TimerAction::Activate => self.activate(),
            TimerAction::Deactivate => {
                self.deactivate()?;
                Ok(ServiceTiming::Complete)
            }
            TimerAction::Restart => self.restart(),
        }
    }

    /// Publishes the current observation and starts ticking.
    ///
    /// Must be called from `Inactive` state.
    ///
    /// # Returns
    /// * `Ok(ServiceTiming::Delay(period))` - Still counting
    /// * `Ok(ServiceTiming::Complete)` - Target already reached
    /// * `Err` - Already active
    pub fn activate(&mut self) -> Result<ServiceTiming<I::Duration>, TimerError> {
        if !matches!(self.phase, Phase::Inactive) {
            return Err(TimerError::InvalidState {
                expected: "Inactive",
                actual: self.state(),
            });
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("countdown activated");

        let now = self.time_source.now();
        Ok(self.tick(now, now))
    }

    /// Services the timer, publishing an observation if a tick is due.
    ///
    /// Must be called from `Counting` state. Calling it early is harmless:
    /// nothing is published and the remaining wait is returned. If several
    /// periods were missed, a single observation is published and the
    /// missed ticks are skipped.
    ///
    /// # Returns
    /// - `Ok(ServiceTiming::Delay(duration))` - Service again after this delay
    /// - `Ok(ServiceTiming::Complete)` - Target reached, transitions to `Reached`
    /// - `Err` - Invalid state
    pub fn service(&mut self) -> Result<ServiceTiming<I::Duration>, TimerError> {
        let Phase::Counting { next_tick } = self.phase else {
            return Err(TimerError::InvalidState {
                expected: "Counting",
                actual: self.state(),
            });
        };

        let now = self.time_source.now();
        if now < next_tick {
            return Ok(ServiceTiming::Delay(Self::wait_until(next_tick, now)));
        }

        Ok(self.tick(next_tick, now))
    }

    /// Stops ticking. No further observation is published.
    ///
    /// Can be called from `Counting` or `Reached`.
    pub fn deactivate(&mut self) -> Result<(), TimerError> {
        if matches!(self.phase, Phase::Inactive) {
            return Err(TimerError::InvalidState {
                expected: "Counting or Reached",
                actual: self.state(),
            });
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("countdown deactivated");

        self.phase = Phase::Inactive;
        self.last_observation = None;
        Ok(())
    }

    /// Deactivates if needed and activates again. Can be called from any state.
    pub fn restart(&mut self) -> Result<ServiceTiming<I::Duration>, TimerError> {
        self.phase = Phase::Inactive;
        self.last_observation = None;
        self.activate()
    }

    /// Consumes the timer and returns the display.
    pub fn release(self) -> D {
        self.display
    }

    /// Returns the current state of the timer.
    pub fn state(&self) -> TimerState {
        match self.phase {
            Phase::Inactive => TimerState::Inactive,
            Phase::Counting { .. } => TimerState::Counting,
            Phase::Reached => TimerState::Reached,
        }
    }

    /// Returns true while the timer is ticking.
    pub fn is_counting(&self) -> bool {
        matches!(self.phase, Phase::Counting { .. })
    }

    /// Returns the instant the next tick is due, if one is scheduled.
    pub fn next_tick(&self) -> Option<I> {
        match self.phase {
            Phase::Counting { next_tick } => Some(next_tick),
            _ => None,
        }
    }

    /// Returns the observation most recently published since activation.
    pub fn last_observation(&self) -> Option<Observation> {
        self.last_observation
    }

    /// Returns the countdown this timer observes.
    pub fn countdown(&self) -> &Countdown<I> {
        &self.countdown
    }

    /// Returns a reference to the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Publishes one observation at `now` and schedules the following tick.
    ///
    /// `due` is the deadline that triggered this tick; the next deadline is
    /// the first multiple of the period after it that lies in the future,
    /// but never later than the target itself.
    fn tick(&mut self, due: I, now: I) -> ServiceTiming<I::Duration> {
        let observation = self.countdown.remaining_at(now);
        self.display.show(observation);
        self.last_observation = Some(observation);

        if observation.is_reached() {
            #[cfg(feature = "defmt")]
            defmt::debug!("countdown reached");

            self.phase = Phase::Reached;
            return ServiceTiming::Complete;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("countdown tick {}", observation);

        let target = self.countdown.target();
        let next_tick = self.next_deadline(due, now).map_or(target, |next| next.min(target));
        self.phase = Phase::Counting { next_tick };
        ServiceTiming::Delay(Self::wait_until(next_tick, now))
    }

    /// Time left until `next_tick`, never zero while it lies in the future.
    ///
    /// Instants finer than a millisecond floor the gap; a sub-millisecond
    /// wait is reported as one millisecond so callers always make progress.
    fn wait_until(next_tick: I, now: I) -> I::Duration {
        let wait = next_tick.duration_since(now);
        if wait == I::Duration::ZERO && now < next_tick {
            I::Duration::from_millis(1)
        } else {
            wait
        }
    }

    fn next_deadline(&self, due: I, now: I) -> Option<I> {
        let period = self.countdown.period().as_millis().max(1);
        let late = now.duration_since(due).as_millis();
        let periods = late / period + 1;

        #[cfg(feature = "defmt")]
        {
            if periods > 1 {
                defmt::debug!("skipped {=u64} missed ticks", periods - 1);
            }
        }

        let offset = periods.checked_mul(period)?;
        due.checked_add(I::Duration::from_millis(offset))
    }
}
