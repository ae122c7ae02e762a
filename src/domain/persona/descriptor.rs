//! Threshold classification of slider readings into words.
//!
//! Two independent cut schemes are in play:
//!
//! - [`classify`] uses exclusive thresholds at 30 and 70, so both 30 and 70
//!   read as "balanced".
//! - [`lead_phrase`] and [`priority_sentence`] use a single cut at 60 for
//!   boldness and warmth respectively.

use super::catalog::{Axis, PlatformDefinition};
use super::platform::AxisSettings;
use crate::domain::foundation::AxisValue;

/// Readings strictly below this are described by the low label.
pub const LOW_THRESHOLD: u8 = 30;

/// Readings strictly above this are described by the high label.
pub const HIGH_THRESHOLD: u8 = 70;

/// Boldness/warmth readings strictly above this flip the instruction phrasing.
pub const EMPHASIS_THRESHOLD: u8 = 60;

/// Describes `value` as `low`, `high`, or `balanced low/high` (lowercased).
pub fn classify(value: AxisValue, low: &str, high: &str) -> String {
    let v = value.value();
    if v < LOW_THRESHOLD {
        low.to_string()
    } else if v > HIGH_THRESHOLD {
        high.to_string()
    } else {
        format!("balanced {}/{}", low.to_lowercase(), high.to_lowercase())
    }
}

/// Classifies a reading with the axis' own catalog descriptors.
pub fn describe_axis(axis: Axis, value: AxisValue) -> String {
    let def = axis.definition();
    classify(value, def.low_descriptor, def.high_descriptor)
}

/// What a draft should open with.
pub fn lead_phrase(boldness: AxisValue) -> &'static str {
    if boldness.value() > EMPHASIS_THRESHOLD {
        "a strong opinion or hook"
    } else {
        "context and nuance"
    }
}

/// What a draft should optimise for.
pub fn priority_sentence(warmth: AxisValue) -> &'static str {
    if warmth.value() > EMPHASIS_THRESHOLD {
        "Prioritize connection and relatability."
    } else {
        "Prioritize clarity and credibility."
    }
}

/// The one-sentence drafting instruction for a platform.
pub fn behavioral_instruction(platform: &PlatformDefinition, axes: &AxisSettings) -> String {
    format!(
        "When drafting {} content, write in a {}, {} style. Lead with {}. {}",
        platform.display_name,
        classify(axes.formality, "casual", "formal"),
        classify(axes.brevity, "expansive", "concise"),
        lead_phrase(axes.boldness),
        priority_sentence(axes.warmth),
    )
}
