//! Wizard commands - the serialisable form of every presentation action.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::catalog::{Axis, PlatformId, Tone, Topic};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// One user action, as sent by a presentation layer.
///
/// Catalog ids are typed, so an unknown platform, axis, tone or topic fails
/// at parse time and never reaches [`WizardState`](super::WizardState).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardCommand {
    SetName { value: String },
    SetRole { value: String },
    SetBio { value: String },
    SetAvoid { value: String },
    SetNogo { value: String },
    ToggleTone { tone: Tone },
    ToggleTopic { topic: Topic },
    TogglePlatform { platform: PlatformId },
    SelectPlatform { platform: PlatformId },
    SetAxis {
        platform: PlatformId,
        axis: Axis,
        value: i64,
    },
    ResetPlatformAxes { platform: PlatformId },
    GoToStep { index: i64 },
    AdvanceStep,
    RetreatStep,
}

impl WizardCommand {
    /// Every `type` tag, in declaration order.
    pub const KINDS: [&'static str; 14] = [
        "set_name",
        "set_role",
        "set_bio",
        "set_avoid",
        "set_nogo",
        "toggle_tone",
        "toggle_topic",
        "toggle_platform",
        "select_platform",
        "set_axis",
        "reset_platform_axes",
        "go_to_step",
        "advance_step",
        "retreat_step",
    ];

    /// Parses a JSON command.
    ///
    /// A bad `type` tag or malformed payload is `InvalidCommand`; a known
    /// command naming an id outside the catalog is `UnknownCatalogEntry`.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let raw: Value = serde_json::from_str(json).map_err(|e| {
            DomainError::new(
                ErrorCode::InvalidCommand,
                format!("Invalid wizard command: {}", e),
            )
        })?;

        let kind = raw.get("type").and_then(Value::as_str).unwrap_or_default();
        if !Self::KINDS.contains(&kind) {
            return Err(DomainError::new(
                ErrorCode::InvalidCommand,
                format!("Unknown wizard command type '{}'", kind),
            )
            .with_detail("type", kind));
        }
        let kind = kind.to_string();

        check_catalog_fields(&kind, &raw)
            .map_err(|e| DomainError::from(e).with_detail("type", kind.as_str()))?;

        serde_json::from_value(raw).map_err(|e| {
            DomainError::new(
                ErrorCode::InvalidCommand,
                format!("Invalid wizard command: {}", e),
            )
            .with_detail("type", kind)
        })
    }

    /// Short name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            WizardCommand::SetName { .. } => "set_name",
            WizardCommand::SetRole { .. } => "set_role",
            WizardCommand::SetBio { .. } => "set_bio",
            WizardCommand::SetAvoid { .. } => "set_avoid",
            WizardCommand::SetNogo { .. } => "set_nogo",
            WizardCommand::ToggleTone { .. } => "toggle_tone",
            WizardCommand::ToggleTopic { .. } => "toggle_topic",
            WizardCommand::TogglePlatform { .. } => "toggle_platform",
            WizardCommand::SelectPlatform { .. } => "select_platform",
            WizardCommand::SetAxis { .. } => "set_axis",
            WizardCommand::ResetPlatformAxes { .. } => "reset_platform_axes",
            WizardCommand::GoToStep { .. } => "go_to_step",
            WizardCommand::AdvanceStep => "advance_step",
            WizardCommand::RetreatStep => "retreat_step",
        }
    }
}

/// Parses the catalog-typed fields of `kind` through `FromStr`.
///
/// Missing or non-string fields are left for serde to report.
fn check_catalog_fields(kind: &str, raw: &Value) -> Result<(), ValidationError> {
    let field = |name: &str| raw.get(name).and_then(Value::as_str);

    match kind {
        "toggle_tone" => {
            if let Some(tone) = field("tone") {
                tone.parse::<Tone>()?;
            }
        }
        "toggle_topic" => {
            if let Some(topic) = field("topic") {
                topic.parse::<Topic>()?;
            }
        }
        "toggle_platform" | "select_platform" | "reset_platform_axes" | "set_axis" => {
            if let Some(platform) = field("platform") {
                platform.parse::<PlatformId>()?;
            }
            if kind == "set_axis" {
                if let Some(axis) = field("axis") {
                    axis.parse::<Axis>()?;
                }
            }
        }
        _ => {}
    }
    Ok(())
}
