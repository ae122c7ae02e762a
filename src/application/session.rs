//! WizardSession - the single owner of a wizard's mutable state.
//!
//! Presentation code reads through [`WizardSession::snapshot`] and writes
//! through [`WizardSession::dispatch`]. The state sits behind a mutex only so
//! the deferred copy-confirmation callback can reach it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::persona::{WizardCommand, WizardState};
use crate::ports::{Scheduler, SchedulerError, TimerHandle};

/// One user's wizard run.
pub struct WizardSession {
    id: SessionId,
    state: Arc<Mutex<WizardState>>,
    /// Bumped on every copy; a clear callback only acts if it still matches.
    copy_generation: Arc<AtomicU64>,
    copy_timer: Mutex<Option<Box<dyn TimerHandle>>>,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::with_state(WizardState::new())
    }

    /// Resumes from an existing answer set.
    pub fn with_state(state: WizardState) -> Self {
        Self {
            id: SessionId::new(),
            state: Arc::new(Mutex::new(state)),
            copy_generation: Arc::new(AtomicU64::new(0)),
            copy_timer: Mutex::new(None),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// A copy of the current state, safe to render or serialize.
    pub fn snapshot(&self) -> WizardState {
        self.lock_state().clone()
    }

    pub fn is_copied(&self) -> bool {
        self.lock_state().is_copied()
    }

    /// Applies one presentation action.
    pub fn dispatch(&self, command: WizardCommand) {
        debug!(session_id = %self.id, command = command.kind(), "Dispatching wizard command");
        self.lock_state().apply(command);
    }

    /// Parses and applies a JSON action. State is untouched on error.
    pub fn dispatch_json(&self, json: &str) -> Result<(), DomainError> {
        match WizardCommand::from_json(json) {
            Ok(command) => {
                self.dispatch(command);
                Ok(())
            }
            Err(err) => {
                warn!(session_id = %self.id, code = %err.code, error = %err.message, "Rejected wizard command");
                Err(err)
            }
        }
    }

    /// Shows the "copied" confirmation for `window`.
    ///
    /// A pending clear from an earlier copy is cancelled, so the window always
    /// restarts from the latest copy. If scheduling fails nothing changes.
    ///
    /// The state lock is released before scheduling, so a scheduler may run
    /// the clear inline.
    pub fn confirm_copy(
        &self,
        scheduler: &dyn Scheduler,
        window: Duration,
    ) -> Result<(), SchedulerError> {
        let mut timer = self.copy_timer.lock().unwrap_or_else(PoisonError::into_inner);

        let generation = self.copy_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let was_copied = {
            let mut state = self.lock_state();
            let was_copied = state.is_copied();
            state.mark_copied();
            was_copied
        };

        let task = clear_copied_task(
            Arc::downgrade(&self.state),
            Arc::clone(&self.copy_generation),
            generation,
            self.id,
        );

        match scheduler.schedule_once(window, task) {
            Ok(handle) => {
                if let Some(previous) = timer.replace(handle) {
                    previous.cancel();
                }
                Ok(())
            }
            Err(err) => {
                let mut state = self.lock_state();
                self.copy_generation.fetch_sub(1, Ordering::SeqCst);
                if !was_copied {
                    state.clear_copied();
                }
                Err(err)
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, WizardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for WizardSession {
    fn drop(&mut self) {
        let timer = self.copy_timer.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = timer.take() {
            handle.cancel();
        }
    }
}

fn clear_copied_task(
    state: Weak<Mutex<WizardState>>,
    current: Arc<AtomicU64>,
    generation: u64,
    session_id: SessionId,
) -> Box<dyn FnOnce() + Send> {
    Box::new(move || {
        let Some(state) = state.upgrade() else {
            return;
        };
        let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
        if current.load(Ordering::SeqCst) == generation {
            state.clear_copied();
            debug!(session_id = %session_id, "Copy confirmation cleared");
        }
    })
}
