//! GenerateDocumentHandler - renders the persona document for a session.
//!
//! Query-like: reads a snapshot and produces text without side effects.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::WizardSession;
use crate::ports::{Clock, DocumentGenerator};

/// Result of document generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateDocumentResult {
    /// The rendered Markdown.
    pub content: String,
    /// Date stamped into the header.
    pub date: NaiveDate,
}

/// Handler for rendering the persona document.
///
/// # Dependencies
///
/// - `DocumentGenerator`: Render Markdown from state
/// - `Clock`: Supply the header date
///
/// # Usage
///
/// ```rust,ignore
/// let handler = GenerateDocumentHandler::new(generator, clock);
/// let result = handler.handle(&session);
/// println!("{}", result.content);
/// ```
#[derive(Clone)]
pub struct GenerateDocumentHandler {
    document_generator: Arc<dyn DocumentGenerator>,
    clock: Arc<dyn Clock>,
}

impl GenerateDocumentHandler {
    pub fn new(document_generator: Arc<dyn DocumentGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            document_generator,
            clock,
        }
    }

    pub fn handle(&self, session: &WizardSession) -> GenerateDocumentResult {
        let snapshot = session.snapshot();
        let date = self.clock.today();
        let content = self.document_generator.generate(&snapshot, date);

        GenerateDocumentResult { content, date }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, TemplateDocumentGenerator};
    use crate::domain::persona::{WizardCommand, WizardState};

    fn handler() -> GenerateDocumentHandler {
        GenerateDocumentHandler::new(
            Arc::new(TemplateDocumentGenerator::default()),
            Arc::new(FixedClock::new(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())),
        )
    }

    #[test]
    fn stamps_clock_date() {
        let result = handler().handle(&WizardSession::new());
        assert_eq!(result.date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert!(result.content.contains("> Built with Fr-sona · 3 June 2024"));
    }

    #[test]
    fn reflects_current_session_state() {
        let session = WizardSession::new();
        session.dispatch(WizardCommand::SetName { value: "Sam".into() });

        let result = handler().handle(&session);

        assert!(result.content.contains("**Name:** Sam\n"));
    }

    #[test]
    fn does_not_mutate_session() {
        let session = WizardSession::with_state(WizardState::new());
        let before = session.snapshot();

        handler().handle(&session);

        assert_eq!(session.snapshot(), before);
    }
}
