//! Command-based control for countdown timers.

/// Lifecycle actions for a [`CountdownTimer`](crate::CountdownTimer).
///
/// Useful when the view that owns the display and the task that services
/// the timer talk over a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerAction {
    /// Publish immediately and start ticking.
    Activate,
    /// Stop ticking.
    Deactivate,
    /// Stop if running, then activate again.
    Restart,
}
