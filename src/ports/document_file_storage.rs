//! Document File Storage Port - download target interface.
//!
//! This port defines the contract for persisting an exported persona
//! document. The application layer depends on this trait, while adapters
//! (like `LocalDocumentFileStorage`) provide the implementation.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Port for saving exported documents.
///
/// # Contract
///
/// Implementations must:
/// - Write atomically (no partial file is ever visible under `filename`)
/// - Leave no temporary artifact behind, on success or failure
/// - Store the content byte-for-byte as UTF-8
///
/// # Usage
///
/// ```rust,ignore
/// let storage: &dyn DocumentFileStorage = get_storage();
/// let path = storage.save(&DocumentExport::markdown("personality.md", text)).await?;
/// ```
#[async_trait]
pub trait DocumentFileStorage: Send + Sync {
    /// Saves the export, replacing any existing file of the same name.
    ///
    /// # Returns
    ///
    /// The path where the file was written.
    async fn save(&self, export: &DocumentExport) -> Result<FilePath, StorageError>;

    /// Returns the path `filename` would be saved to.
    fn file_path(&self, filename: &str) -> FilePath;
}

/// A rendered document ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentExport {
    pub filename: String,
    pub mime_type: String,
    pub content: String,
}

impl DocumentExport {
    pub fn new(
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            content: content.into(),
        }
    }

    /// Content length in bytes.
    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Represents a file path (absolute or relative).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePath(PathBuf);

impl FilePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string (lossy conversion for non-UTF8 paths).
    pub fn to_string_lossy(&self) -> String {
        self.0.to_string_lossy().to_string()
    }

    pub fn as_path(&self) -> &std::path::Path {
        &self.0
    }

    /// Returns the file name without the directory.
    pub fn file_name(&self) -> Option<String> {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
    }
}

impl std::fmt::Display for FilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for FilePath {
    fn from(s: &str) -> Self {
        Self::new(PathBuf::from(s))
    }
}

/// Errors that can occur during file storage operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// IO error during file operation.
    #[error("IO error: {message}")]
    Io { message: String },

    /// Filename is empty or would escape the output directory.
    #[error("Invalid filename: {filename}")]
    InvalidFilename { filename: String },

    /// File is too large.
    #[error("File too large: {size_bytes} bytes (max: {max_bytes})")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },
}

impl StorageError {
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn invalid_filename(filename: impl Into<String>) -> Self {
        Self::InvalidFilename {
            filename: filename.into(),
        }
    }

    pub fn file_too_large(size_bytes: u64, max_bytes: u64) -> Self {
        Self::FileTooLarge {
            size_bytes,
            max_bytes,
        }
    }
}
