//! Persona module - the wizard's answer set and everything derived from it.
//!
//! # Module Organization
//!
//! - `catalog` - Closed vocabularies: platforms, axes, tones, topics
//! - `identity` - Free-text identity answers
//! - `voice` - Tone/topic tags and no-go zones
//! - `platform` - Per-platform enabled flag and axis calibration
//! - `descriptor` - Threshold wording for axis readings
//! - `command` - Serialisable presentation actions
//! - `wizard` - The `WizardState` aggregate

mod catalog;
mod command;
mod descriptor;
mod identity;
mod platform;
mod voice;
mod wizard;

pub use catalog::{
    Axis, AxisDefinition, PlatformDefinition, PlatformId, Tone, Topic, AXES, PLATFORMS,
};
pub use command::WizardCommand;
pub use descriptor::{
    behavioral_instruction, classify, describe_axis, lead_phrase, priority_sentence,
    EMPHASIS_THRESHOLD, HIGH_THRESHOLD, LOW_THRESHOLD,
};
pub use identity::IdentityState;
pub use platform::{AxisSettings, PlatformSettings, PlatformState};
pub use voice::VoiceState;
pub use wizard::WizardState;
