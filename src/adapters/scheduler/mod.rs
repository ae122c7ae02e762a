//! Scheduler adapters.
//!
//! - `TokioScheduler` - Real timers on a tokio runtime
//! - `ManualScheduler` - Virtual clock advanced explicitly by tests

mod manual_scheduler;
mod tokio_scheduler;

pub use manual_scheduler::ManualScheduler;
pub use tokio_scheduler::TokioScheduler;

use std::sync::{Arc, Mutex, PoisonError};

use crate::ports::ScheduledTask;

/// Holds a scheduled callback until it is either run or cancelled.
///
/// Whoever takes the task first wins, so a cancelled task can never run and
/// a task can never run twice.
#[derive(Clone)]
struct TaskSlot(Arc<Mutex<Option<ScheduledTask>>>);

impl TaskSlot {
    fn new(task: ScheduledTask) -> Self {
        Self(Arc::new(Mutex::new(Some(task))))
    }

    fn take(&self) -> Option<ScheduledTask> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).take()
    }

    fn is_empty(&self) -> bool {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).is_none()
    }

    /// Runs the task if it is still pending.
    fn fire(&self) {
        // Taken before running so the lock is not held during the callback.
        if let Some(task) = self.take() {
            task();
        }
    }
}
