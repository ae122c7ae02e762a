//! Export handlers - render, copy, and download the persona document.

mod copy_document;
mod download_document;
mod generate_document;

pub use copy_document::{CopyDocumentError, CopyDocumentHandler, CopyDocumentResult};
pub use download_document::{DownloadDocumentError, DownloadDocumentHandler, DownloadDocumentResult};
pub use generate_document::{GenerateDocumentHandler, GenerateDocumentResult};
