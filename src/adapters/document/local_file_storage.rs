//! Local Filesystem Storage Adapter - Implementation of DocumentFileStorage.
//!
//! Saves exported documents into a single output directory using atomic
//! writes.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{DocumentExport, DocumentFileStorage, FilePath, StorageError};

/// Maximum file size allowed (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Local filesystem storage for exported documents.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `.{filename}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{filename}`
///
/// If any step fails the temporary file is removed before the error is
/// returned.
#[derive(Debug, Clone)]
pub struct LocalDocumentFileStorage {
    /// Directory all exports are written into.
    base_path: PathBuf,
}

impl LocalDocumentFileStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn temp_path(&self, filename: &str) -> PathBuf {
        self.base_path.join(format!(".{}.tmp", filename))
    }

    /// Rejects names that are empty or could escape `base_path`.
    fn validate_filename(filename: &str) -> Result<(), StorageError> {
        if filename.is_empty()
            || filename == "."
            || filename == ".."
            || filename.contains(['/', '\\'])
        {
            return Err(StorageError::invalid_filename(filename));
        }
        Ok(())
    }

    async fn ensure_base_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create output directory {}: {}",
                self.base_path.display(),
                e
            ))
        })
    }

    async fn write_temp(&self, temp_path: &Path, content: &str) -> Result<(), StorageError> {
        let mut file = fs::File::create(temp_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(content.as_bytes()).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl DocumentFileStorage for LocalDocumentFileStorage {
    async fn save(&self, export: &DocumentExport) -> Result<FilePath, StorageError> {
        Self::validate_filename(&export.filename)?;

        let size = export.size_bytes();
        if size > MAX_FILE_SIZE_BYTES {
            return Err(StorageError::file_too_large(size, MAX_FILE_SIZE_BYTES));
        }

        self.ensure_base_dir().await?;

        let temp_path = self.temp_path(&export.filename);
        let final_path = self.base_path.join(&export.filename);

        let written = match self.write_temp(&temp_path, &export.content).await {
            Ok(()) => fs::rename(&temp_path, &final_path).await.map_err(|e| {
                StorageError::io(format!(
                    "Failed to rename {} to {}: {}",
                    temp_path.display(),
                    final_path.display(),
                    e
                ))
            }),
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        tracing::debug!(path = %final_path.display(), bytes = size, "Document written");
        Ok(FilePath::new(final_path))
    }

    fn file_path(&self, filename: &str) -> FilePath {
        FilePath::new(self.base_path.join(filename))
    }
}
