//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod export;

pub use export::{
    CopyDocumentError, CopyDocumentHandler, CopyDocumentResult, DownloadDocumentError,
    DownloadDocumentHandler, DownloadDocumentResult, GenerateDocumentHandler,
    GenerateDocumentResult,
};
