//! Adapters - Implementations of port interfaces.
//!
//! - `document` - Markdown rendering and filesystem export
//! - `clipboard` - Clipboard targets
//! - `scheduler` - Tokio and virtual-clock timers
//! - `clock` - Date sources

pub mod clipboard;
pub mod clock;
pub mod document;
pub mod scheduler;

pub use clipboard::InMemoryClipboard;
pub use clock::{FixedClock, SystemClock};
pub use document::{
    format_document_date, generate_document, LocalDocumentFileStorage, TemplateDocumentGenerator,
};
pub use scheduler::{ManualScheduler, TokioScheduler};
