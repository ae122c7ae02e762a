//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Export Ports
//!
//! - `DocumentGenerator` - Renders the persona document
//! - `Clipboard` - Copy target
//! - `DocumentFileStorage` - Download target
//!
//! ## Runtime Ports
//!
//! - `Scheduler` - Cancellable one-shot timers (copy confirmation)
//! - `Clock` - Today's date for the document header

mod clipboard;
mod clock;
mod document_file_storage;
mod document_generator;
mod scheduler;

pub use clipboard::{Clipboard, ClipboardError};
pub use clock::Clock;
pub use document_file_storage::{DocumentExport, DocumentFileStorage, FilePath, StorageError};
pub use document_generator::DocumentGenerator;
pub use scheduler::{ScheduledTask, Scheduler, SchedulerError, TimerHandle};
