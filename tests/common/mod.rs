//! Shared test infrastructure for launch-countdown integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use launch_countdown::{
    CountdownDisplay, CountdownTimer, Observation, ServiceTiming, TimeDuration, TimeInstant,
    TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing (milliseconds since an arbitrary origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource<I> {
    current_time: core::cell::Cell<I>,
}

impl<I: TimeInstant> MockTimeSource<I> {
    pub fn new(start: I) -> Self {
        Self {
            current_time: core::cell::Cell::new(start),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: I::Duration) {
        let current = self.current_time.get();
        self.current_time
            .set(current.checked_add(duration).expect("mock clock overflow"));
    }

    pub fn set_time(&self, time: I) {
        self.current_time.set(time);
    }
}

impl<I: TimeInstant> TimeSource<I> for MockTimeSource<I> {
    fn now(&self) -> I {
        self.current_time.get()
    }
}

// ============================================================================
// Recording Display
// ============================================================================

/// Display that records every observation it is shown
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    shown: Vec<Observation>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> &[Observation] {
        &self.shown
    }

    pub fn count(&self) -> usize {
        self.shown.len()
    }

    pub fn last(&self) -> Option<Observation> {
        self.shown.last().copied()
    }
}

impl CountdownDisplay for RecordingDisplay {
    fn show(&mut self, observation: Observation) {
        self.shown.push(observation);
    }
}

// ============================================================================
// Fake Cooperative Scheduler
// ============================================================================

/// Plays the caller's cooperative loop on a fake clock.
///
/// Starting from `timing`, yields for each returned delay by advancing the
/// clock, then services the timer. Stops when the timer completes or when
/// the next yield would pass `budget` of fake time. Returns the last timing
/// and how many `service()` calls were made.
pub fn drive<I, D>(
    timer: &mut CountdownTimer<'_, I, D, MockTimeSource<I>>,
    clock: &MockTimeSource<I>,
    mut timing: ServiceTiming<I::Duration>,
    budget: I::Duration,
) -> (ServiceTiming<I::Duration>, usize)
where
    I: TimeInstant,
    D: CountdownDisplay,
{
    let mut spent = 0u64;
    let mut calls = 0;

    while let ServiceTiming::Delay(delay) = timing {
        if spent + delay.as_millis() > budget.as_millis() {
            break;
        }
        spent += delay.as_millis();
        clock.advance(delay);
        timing = timer.service().expect("service while counting");
        calls += 1;
    }

    (timing, calls)
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Asserts the range invariants of a counting observation
pub fn assert_in_range(observation: Observation) {
    if let Some(remaining) = observation.remaining() {
        assert!(remaining.hours < 24, "hours out of range: {remaining:?}");
        assert!(remaining.minutes < 60, "minutes out of range: {remaining:?}");
        assert!(remaining.seconds < 60, "seconds out of range: {remaining:?}");
    }
}
