//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction and catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Unknown {catalog} '{value}'")]
    UnknownCatalogEntry { catalog: String, value: String },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an error for a value outside a closed catalog vocabulary.
    pub fn unknown_entry(catalog: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::UnknownCatalogEntry {
            catalog: catalog.into(),
            value: value.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    UnknownCatalogEntry,
    InvalidCommand,

    // Export boundary errors
    ClipboardUnavailable,
    StorageFailed,

    // Infrastructure errors
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::UnknownCatalogEntry => "UNKNOWN_CATALOG_ENTRY",
            ErrorCode::InvalidCommand => "INVALID_COMMAND",
            ErrorCode::ClipboardUnavailable => "CLIPBOARD_UNAVAILABLE",
            ErrorCode::StorageFailed => "STORAGE_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        match &err {
            ValidationError::UnknownCatalogEntry { catalog, value } => {
                DomainError::new(ErrorCode::UnknownCatalogEntry, err.to_string())
                    .with_detail("catalog", catalog.clone())
                    .with_detail("value", value.clone())
            }
            ValidationError::OutOfRange { field, .. } => {
                DomainError::validation(field.clone(), err.to_string())
            }
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("formality", 0, 100, 150);
        assert_eq!(
            format!("{}", err),
            "Field 'formality' must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn validation_error_unknown_entry_displays_catalog_and_value() {
        let err = ValidationError::unknown_entry("tone", "Sarcastic");
        assert_eq!(format!("{}", err), "Unknown tone 'Sarcastic'");
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::InvalidCommand, "Malformed command");
        assert_eq!(format!("{}", err), "[INVALID_COMMAND] Malformed command");
    }

    #[test]
    fn unknown_entry_converts_to_coded_domain_error() {
        let err: DomainError = ValidationError::unknown_entry("platform", "myspace").into();

        assert_eq!(err.code, ErrorCode::UnknownCatalogEntry);
        assert_eq!(err.details.get("catalog"), Some(&"platform".to_string()));
        assert_eq!(err.details.get("value"), Some(&"myspace".to_string()));
    }

    #[test]
    fn out_of_range_converts_to_validation_failed() {
        let err: DomainError = ValidationError::out_of_range("warmth", 0, 100, 101).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"warmth".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::ClipboardUnavailable), "CLIPBOARD_UNAVAILABLE");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
