//! DownloadDocumentHandler - saves the persona document as a file.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use super::GenerateDocumentHandler;
use crate::application::WizardSession;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{DocumentExport, DocumentFileStorage, FilePath, StorageError};

/// Result of a successful download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadDocumentResult {
    pub path: FilePath,
    pub filename: String,
    pub mime_type: String,
    pub bytes: u64,
}

/// Error type for downloading.
#[derive(Debug, Clone, Error)]
pub enum DownloadDocumentError {
    #[error("Download failed: {0}")]
    Storage(#[from] StorageError),
}

impl From<DownloadDocumentError> for DomainError {
    fn from(err: DownloadDocumentError) -> Self {
        DomainError::new(ErrorCode::StorageFailed, err.to_string())
    }
}

/// Handler for the download action.
///
/// # Dependencies
///
/// - `GenerateDocumentHandler`: Render the document
/// - `DocumentFileStorage`: Persist it under `filename`
pub struct DownloadDocumentHandler {
    generate: GenerateDocumentHandler,
    storage: Arc<dyn DocumentFileStorage>,
    filename: String,
    mime_type: String,
}

impl DownloadDocumentHandler {
    pub fn new(
        generate: GenerateDocumentHandler,
        storage: Arc<dyn DocumentFileStorage>,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            generate,
            storage,
            filename: filename.into(),
            mime_type: mime_type.into(),
        }
    }

    pub async fn handle(
        &self,
        session: &WizardSession,
    ) -> Result<DownloadDocumentResult, DownloadDocumentError> {
        let document = self.generate.handle(session);
        let export = DocumentExport::new(&self.filename, &self.mime_type, document.content);
        let bytes = export.size_bytes();

        let path = self.storage.save(&export).await.map_err(|err| {
            warn!(session_id = %session.id(), error = %err, "Document save failed");
            err
        })?;

        info!(
            session_id = %session.id(),
            path = %path,
            bytes,
            "Persona document downloaded"
        );

        Ok(DownloadDocumentResult {
            path,
            filename: export.filename,
            mime_type: export.mime_type,
            bytes,
        })
    }
}
