//! Tokio-backed scheduler.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

use super::TaskSlot;
use crate::ports::{ScheduledTask, Scheduler, SchedulerError, TimerHandle};

/// Runs each scheduled callback on a spawned task after `tokio::time::sleep`.
///
/// Uses tokio's clock, so paused-time tests (`start_paused = true`) can drive
/// it with `tokio::time::advance`.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Binds to the runtime of the calling context.
    pub fn try_current() -> Result<Self, SchedulerError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|e| SchedulerError::Unavailable(e.to_string()))
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_once(
        &self,
        delay: Duration,
        task: ScheduledTask,
    ) -> Result<Box<dyn TimerHandle>, SchedulerError> {
        let slot = TaskSlot::new(task);
        let timer_slot = slot.clone();
        let deadline = tokio::time::Instant::now() + delay;
        let join = self.handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            timer_slot.fire();
        });

        Ok(Box::new(TokioTimerHandle {
            slot,
            abort: join.abort_handle(),
        }))
    }
}

struct TokioTimerHandle {
    slot: TaskSlot,
    abort: AbortHandle,
}

impl TimerHandle for TokioTimerHandle {
    fn cancel(&self) {
        drop(self.slot.take());
        self.abort.abort();
    }

    fn is_finished(&self) -> bool {
        self.slot.is_empty()
    }
}
