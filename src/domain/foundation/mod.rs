//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the persona builder domain.

mod axis_value;
mod errors;
mod ids;
mod wizard_step;

pub use axis_value::AxisValue;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use wizard_step::WizardStep;
