//! Export configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Where and how the persona document is handed to the user
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExportConfig {
    /// Download file name
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Download MIME type
    #[serde(default = "default_mime_type")]
    pub mime_type: String,

    /// Directory downloads are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// How long the "copied" confirmation stays visible
    #[serde(default = "default_copy_confirmation_ms")]
    pub copy_confirmation_ms: u64,
}

impl ExportConfig {
    pub fn copy_confirmation(&self) -> Duration {
        Duration::from_millis(self.copy_confirmation_ms)
    }

    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.filename.is_empty() {
            return Err(ValidationError::MissingRequired("export.filename"));
        }
        if self.filename.contains(['/', '\\']) || self.filename == "." || self.filename == ".." {
            return Err(ValidationError::InvalidFilename(self.filename.clone()));
        }
        match self.mime_type.split_once('/') {
            Some((kind, sub)) if !kind.is_empty() && !sub.is_empty() && !sub.contains('/') => {}
            _ => return Err(ValidationError::InvalidMimeType(self.mime_type.clone())),
        }
        if self.copy_confirmation_ms == 0 {
            return Err(ValidationError::InvalidConfirmationWindow);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: default_filename(),
            mime_type: default_mime_type(),
            output_dir: default_output_dir(),
            copy_confirmation_ms: default_copy_confirmation_ms(),
        }
    }
}

fn default_filename() -> String {
    "personality.md".to_string()
}

fn default_mime_type() -> String {
    "text/markdown".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_copy_confirmation_ms() -> u64 {
    2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_config_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.filename, "personality.md");
        assert_eq!(config.mime_type, "text/markdown");
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.copy_confirmation(), Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_path_in_filename() {
        let config = ExportConfig {
            filename: "../personality.md".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidFilename(_))
        ));
    }

    #[test]
    fn test_rejects_empty_filename() {
        let config = ExportConfig {
            filename: String::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("export.filename"))
        );
    }

    #[test]
    fn test_rejects_malformed_mime_type() {
        for bad in ["markdown", "text/", "/markdown", "text/x/y"] {
            let config = ExportConfig {
                mime_type: bad.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_rejects_zero_confirmation_window() {
        let config = ExportConfig {
            copy_confirmation_ms: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidConfirmationWindow)
        );
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: ExportConfig = serde_json::from_str(r#"{"output_dir": "/tmp/out"}"#).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.filename, "personality.md");
    }
}
