//! Scheduler Port - cancellable one-shot deferred work.
//!
//! The only deferred work in the system is clearing the copy confirmation,
//! so the contract is deliberately small: schedule a callback once, and
//! cancel it before it fires.

use std::time::Duration;
use thiserror::Error;

/// Boxed callback run when a scheduled delay elapses.
pub type ScheduledTask = Box<dyn FnOnce() + Send + 'static>;

/// Port for running a callback once after a delay.
///
/// # Contract
///
/// - The callback runs at most once, no earlier than `delay` after scheduling.
/// - After [`TimerHandle::cancel`] returns, the callback never runs.
/// - Callbacks may run on another thread and must not assume the caller's
///   locks are held.
pub trait Scheduler: Send + Sync {
    fn schedule_once(
        &self,
        delay: Duration,
        task: ScheduledTask,
    ) -> Result<Box<dyn TimerHandle>, SchedulerError>;
}

/// Handle to a pending scheduled callback.
pub trait TimerHandle: Send + Sync {
    /// Prevents the callback from running. No-op if it already ran.
    fn cancel(&self);

    /// True once the callback ran or was cancelled.
    fn is_finished(&self) -> bool;
}

/// Errors that can occur scheduling work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// No runtime is available to drive the timer.
    #[error("Scheduler unavailable: {0}")]
    Unavailable(String),
}
