//! Wall-clock time source, enabled by the `std` feature.

use chrono::{DateTime, Utc};

use crate::time::{TimeSource, UnixMillis};

/// Time source reading the system clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource<UnixMillis> for SystemClock {
    fn now(&self) -> UnixMillis {
        UnixMillis(Utc::now().timestamp_millis())
    }
}

impl TimeSource<DateTime<Utc>> for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
