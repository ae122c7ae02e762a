//! Product branding used in the generated document

use serde::Deserialize;

use super::error::ValidationError;

/// Header and signature wording
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BrandingConfig {
    #[serde(default = "default_product_name")]
    pub product_name: String,

    #[serde(default = "default_document_version")]
    pub document_version: String,

    #[serde(default = "default_signature_tagline")]
    pub signature_tagline: String,
}

impl BrandingConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.product_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("branding.product_name"));
        }
        Ok(())
    }
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            product_name: default_product_name(),
            document_version: default_document_version(),
            signature_tagline: default_signature_tagline(),
        }
    }
}

fn default_product_name() -> String {
    "Fr-sona".to_string()
}

fn default_document_version() -> String {
    "1.0".to_string()
}

fn default_signature_tagline() -> String {
    "fr, this is you.".to_string()
}
