//! PersonaServices - wires the export handlers from configuration.

use std::sync::Arc;

use crate::adapters::{LocalDocumentFileStorage, TemplateDocumentGenerator};
use crate::config::AppConfig;
use crate::ports::{Clipboard, Clock, DocumentFileStorage, Scheduler};

use super::handlers::{CopyDocumentHandler, DownloadDocumentHandler, GenerateDocumentHandler};

/// The three export handlers, sharing one generator and clock.
pub struct PersonaServices {
    pub generate: GenerateDocumentHandler,
    pub copy: CopyDocumentHandler,
    pub download: DownloadDocumentHandler,
}

impl PersonaServices {
    /// Builds the handlers with the template generator and local file
    /// storage rooted at `config.export.output_dir`.
    pub fn from_config(
        config: &AppConfig,
        clipboard: Arc<dyn Clipboard>,
        scheduler: Arc<dyn Scheduler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let storage = Arc::new(LocalDocumentFileStorage::new(&config.export.output_dir));
        Self::with_storage(config, clipboard, scheduler, clock, storage)
    }

    /// Same as [`Self::from_config`] with a caller-supplied storage port.
    pub fn with_storage(
        config: &AppConfig,
        clipboard: Arc<dyn Clipboard>,
        scheduler: Arc<dyn Scheduler>,
        clock: Arc<dyn Clock>,
        storage: Arc<dyn DocumentFileStorage>,
    ) -> Self {
        let generator = Arc::new(TemplateDocumentGenerator::new(config.branding.clone()));
        let generate = GenerateDocumentHandler::new(generator, clock);

        let copy = CopyDocumentHandler::new(
            generate.clone(),
            clipboard,
            scheduler,
            config.export.copy_confirmation(),
        );
        let download = DownloadDocumentHandler::new(
            generate.clone(),
            storage,
            &config.export.filename,
            &config.export.mime_type,
        );

        Self {
            generate,
            copy,
            download,
        }
    }
}
