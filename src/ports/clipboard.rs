//! Clipboard Port - system clipboard interface.

use async_trait::async_trait;
use thiserror::Error;

/// Port for placing text on the user's clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Errors that can occur writing to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard is reachable in this environment.
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard refused the write.
    #[error("Clipboard write denied: {0}")]
    Denied(String),
}

impl ClipboardError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    pub fn denied(reason: impl Into<String>) -> Self {
        Self::Denied(reason.into())
    }
}
