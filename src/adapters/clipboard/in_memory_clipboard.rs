//! In-memory clipboard for headless runs and tests.
//!
//! Records every write so callers can inspect what was copied, and can be
//! switched into a failing mode to exercise error paths.
//!
//! # Example
//!
//! ```ignore
//! let clipboard = InMemoryClipboard::new();
//! clipboard.write_text("hello").await?;
//! assert_eq!(clipboard.contents().as_deref(), Some("hello"));
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use crate::ports::{Clipboard, ClipboardError};

/// Clipboard backed by a shared `Vec` of writes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<ClipboardError>>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes fail with `error` until [`Self::recover`].
    pub fn failing(error: ClipboardError) -> Self {
        let clipboard = Self::new();
        clipboard.fail_with(error);
        clipboard
    }

    pub fn fail_with(&self, error: ClipboardError) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = Some(error);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Current clipboard text (the last successful write).
    pub fn contents(&self) -> Option<String> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[async_trait]
impl Clipboard for InMemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(error) = self
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
        Ok(())
    }
}
