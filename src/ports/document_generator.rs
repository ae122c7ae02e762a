//! Document Generator Port - persona document rendering interface.
//!
//! The application layer depends on this trait, while adapters (like
//! `TemplateDocumentGenerator`) provide the implementation.

use chrono::NaiveDate;

use crate::domain::persona::WizardState;

/// Port for rendering the persona document from wizard answers.
///
/// # Contract
///
/// Implementations must be pure: the same state and date always produce
/// byte-identical output, and the state is never modified. Rendering cannot
/// fail, since every answer set (including an empty one) has a document.
///
/// # Usage
///
/// ```rust,ignore
/// let generator: &dyn DocumentGenerator = get_generator();
/// let markdown = generator.generate(&state, clock.today());
/// ```
pub trait DocumentGenerator: Send + Sync {
    /// Renders the full Markdown document, stamped with `date`.
    fn generate(&self, state: &WizardState, date: NaiveDate) -> String;
}
