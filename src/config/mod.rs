//! Application configuration module
//!
//! Every section has defaults, so a bare `AppConfig::default()` is a working
//! configuration. [`AppConfig::load`] layers an optional TOML file over those
//! defaults using the `config` crate.
//!
//! # Example
//!
//! ```no_run
//! use persona_builder::config::AppConfig;
//! use std::path::Path;
//!
//! let config = AppConfig::load(Some(Path::new("persona.toml")))?;
//! config.validate()?;
//! config.logging.init_tracing()?;
//! # Ok::<(), persona_builder::config::ConfigError>(())
//! ```

mod branding;
mod error;
mod export;
mod logging;

pub use branding::BrandingConfig;
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;
use std::path::Path;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Download/copy settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Document header and signature wording
    #[serde(default)]
    pub branding: BrandingConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional TOML file
    ///
    /// Missing keys (or a missing `path`) fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` if the file cannot be read or a value
    /// has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }

        let config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.export.validate()?;
        self.branding.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
