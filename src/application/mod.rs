//! Application layer - session ownership and export handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
mod services;
mod session;

pub use handlers::{
    CopyDocumentError, CopyDocumentHandler, CopyDocumentResult, DownloadDocumentError,
    DownloadDocumentHandler, DownloadDocumentResult, GenerateDocumentHandler,
    GenerateDocumentResult,
};
pub use services::PersonaServices;
pub use session::WizardSession;
