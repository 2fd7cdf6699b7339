#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Countdown`**: A fixed target instant plus the cadence it is observed at
//! - **`CountdownBuilder`**: Validated construction of a `Countdown`
//! - **`compute_remaining`**: Pure target/now comparison producing an `Observation`
//! - **`Observation`**: Either `Counting(Remaining)` or `Reached`
//! - **`Remaining`**: Whole days, hours, minutes and seconds left
//! - **`CountdownTimer`**: Publishes observations to a display on a fixed cadence
//! - **`CountdownDisplay`**: Trait to implement for your display surface
//! - **`TimeSource`**: Trait to implement for your clock
//! - **`TimerAction`**: Commands that can be sent to control timers
//!
//! Instants are generic. `UnixMillis` works everywhere; with the `chrono`
//! feature `chrono::DateTime<Utc>` does too, and targets can be given as
//! RFC 3339 text. The `std` feature adds `SystemClock`.

pub mod command;
pub mod countdown;
pub mod time;
pub mod timer;
pub mod types;

#[cfg(feature = "std")]
pub mod system;
#[cfg(feature = "chrono")]
pub mod utc;

pub use command::TimerAction;
pub use countdown::{
    Countdown, CountdownBuilder, DEFAULT_PERIOD_MILLIS, LAUNCH_DATE_RFC3339,
    LAUNCH_DATE_UNIX_MILLIS, compute_remaining,
};
pub use time::{Millis, TimeDuration, TimeInstant, TimeSource, UnixMillis};
pub use timer::{CountdownDisplay, CountdownTimer, ServiceTiming, TimerError, TimerState};
pub use types::{BANNER_CAPACITY, CountdownError, Observation, Remaining};

#[cfg(feature = "std")]
pub use system::SystemClock;
#[cfg(feature = "chrono")]
pub use utc::parse_rfc3339;
