//! CopyDocumentHandler - puts the persona document on the clipboard.
//!
//! On success the session shows a "copied" confirmation that clears itself
//! after the configured window. A later copy restarts the window.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use super::GenerateDocumentHandler;
use crate::application::WizardSession;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{Clipboard, ClipboardError, Scheduler, SchedulerError};

/// Result of a successful copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyDocumentResult {
    /// Bytes written to the clipboard.
    pub bytes: usize,
}

/// Error type for copying.
#[derive(Debug, Clone, Error)]
pub enum CopyDocumentError {
    /// Clipboard write failed; the confirmation was not shown.
    #[error("Copy failed: {0}")]
    Clipboard(#[from] ClipboardError),

    /// The text was copied but the confirmation timer could not be started.
    #[error("Copy confirmation could not be scheduled: {0}")]
    Scheduler(#[from] SchedulerError),
}

impl From<CopyDocumentError> for DomainError {
    fn from(err: CopyDocumentError) -> Self {
        let code = match err {
            CopyDocumentError::Clipboard(_) => ErrorCode::ClipboardUnavailable,
            CopyDocumentError::Scheduler(_) => ErrorCode::InternalError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Handler for the copy action.
///
/// # Dependencies
///
/// - `GenerateDocumentHandler`: Render the document
/// - `Clipboard`: Copy target
/// - `Scheduler`: Clears the confirmation after `confirmation_window`
pub struct CopyDocumentHandler {
    generate: GenerateDocumentHandler,
    clipboard: Arc<dyn Clipboard>,
    scheduler: Arc<dyn Scheduler>,
    confirmation_window: Duration,
}

impl CopyDocumentHandler {
    pub fn new(
        generate: GenerateDocumentHandler,
        clipboard: Arc<dyn Clipboard>,
        scheduler: Arc<dyn Scheduler>,
        confirmation_window: Duration,
    ) -> Self {
        Self {
            generate,
            clipboard,
            scheduler,
            confirmation_window,
        }
    }

    pub async fn handle(
        &self,
        session: &WizardSession,
    ) -> Result<CopyDocumentResult, CopyDocumentError> {
        let document = self.generate.handle(session);
        let bytes = document.content.len();

        if let Err(err) = self.clipboard.write_text(&document.content).await {
            warn!(session_id = %session.id(), error = %err, "Clipboard write failed");
            return Err(err.into());
        }

        session
            .confirm_copy(self.scheduler.as_ref(), self.confirmation_window)
            .map_err(|err| {
                warn!(session_id = %session.id(), error = %err, "Copy confirmation not scheduled");
                CopyDocumentError::from(err)
            })?;

        info!(session_id = %session.id(), bytes, "Persona document copied");
        Ok(CopyDocumentResult { bytes })
    }
}
