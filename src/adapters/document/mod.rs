//! Document adapters - Implementations for document generation and storage.
//!
//! - `TemplateDocumentGenerator` - Renders `personality.md` from wizard state
//! - `LocalDocumentFileStorage` - Saves exports on the local filesystem

mod local_file_storage;
mod template_generator;

pub use local_file_storage::LocalDocumentFileStorage;
pub use template_generator::{format_document_date, generate_document, TemplateDocumentGenerator};
