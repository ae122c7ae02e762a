//! Template-based persona document generator.
//!
//! Renders `personality.md` from a [`WizardState`] snapshot. Output is a pure
//! function of the state, the date and the branding strings.

use chrono::NaiveDate;

use crate::config::BrandingConfig;
use crate::domain::persona::{
    behavioral_instruction, describe_axis, Axis, PlatformId, WizardState,
};
use crate::ports::DocumentGenerator;

const NOT_SPECIFIED: &str = "Not specified";
const RULE: &str = "\n---\n\n";

/// Renders `state` with the default branding.
pub fn generate_document(state: &WizardState, date: NaiveDate) -> String {
    TemplateDocumentGenerator::default().generate(state, date)
}

/// Formats a date as `3 June 2024`.
pub fn format_document_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Markdown generator driven by fixed section templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateDocumentGenerator {
    branding: BrandingConfig,
}

impl TemplateDocumentGenerator {
    pub fn new(branding: BrandingConfig) -> Self {
        Self { branding }
    }

    fn header(&self, date: NaiveDate) -> String {
        let mut section = String::new();
        section.push_str(&format!("# personality.md — {}\n", self.branding.product_name));
        section.push_str(
            "> Your real persona, portable. Use this as a system prompt prefix for any LLM agent.\n",
        );
        section.push_str(&format!(
            "> Built with {} · {}\n",
            self.branding.product_name,
            format_document_date(date)
        ));
        section
    }

    fn identity_section(&self, state: &WizardState) -> String {
        let identity = state.identity();
        let mut section = String::from("## Identity\n\n");
        section.push_str(&format!("**Name:** {}\n", or_default(&identity.name, NOT_SPECIFIED)));
        section.push_str(&format!("**Role:** {}\n", or_default(&identity.role, NOT_SPECIFIED)));
        section.push_str(&format!("**Bio:** {}\n", or_default(&identity.bio, NOT_SPECIFIED)));
        if !identity.avoid.is_empty() {
            section.push_str(&format!("**Never represent me as:** {}\n", identity.avoid));
        }
        section
    }

    fn voice_section(&self, state: &WizardState) -> String {
        let voice = state.voice();
        let tones = voice.tone_list();
        let topics = voice.topic_list();

        let mut section = String::from("## Core Voice\n\n");
        section.push_str(&format!(
            "**Tonal qualities:** {}\n",
            tones.as_deref().unwrap_or(NOT_SPECIFIED)
        ));
        section.push_str(&format!(
            "**Subject matter expertise:** {}\n",
            topics.as_deref().unwrap_or(NOT_SPECIFIED)
        ));
        if !voice.nogo.is_empty() {
            section.push_str(&format!("**Hard no-go zones:** {}\n", voice.nogo));
        }
        section
    }

    fn platform_section(&self, state: &WizardState) -> String {
        let enabled = state.enabled_platforms();
        let mut section = String::from("## Platform Personas\n");

        if enabled.is_empty() {
            section.push_str("\nNo platforms configured.\n");
            return section;
        }

        for id in enabled {
            section.push_str(&self.platform_subsection(state, id));
        }
        section
    }

    fn platform_subsection(&self, state: &WizardState, id: PlatformId) -> String {
        let definition = id.definition();
        let axes = state.platform(id).axes;

        let mut section = format!("\n### {}\n\n", definition.display_name);
        for axis in Axis::all() {
            let value = axes.get(*axis);
            section.push_str(&format!(
                "- **{}:** {} ({}/100)\n",
                axis.definition().label,
                describe_axis(*axis, value),
                value.value()
            ));
        }
        section.push_str(&format!(
            "\n**Behavioral instruction:** {}\n",
            behavioral_instruction(definition, &axes)
        ));
        section
    }

    fn agent_instructions(&self, state: &WizardState) -> String {
        let identity = state.identity();
        let voice = state.voice();
        let topics = voice.topic_list();

        let mut section = String::from("## Agent Instructions\n\n");
        section.push_str(&format!(
            "You are acting as a communication proxy for {}. Your job is to draft messages, \
             replies, comments, and content that authentically represent their voice.\n\n",
            or_default(&identity.name, "the user")
        ));

        section.push_str("**Always:**\n");
        section.push_str("- Match the platform-specific persona defined above\n");
        section.push_str(&format!(
            "- Preserve their subject matter perspective on: {}\n",
            topics.as_deref().unwrap_or("their areas of expertise")
        ));
        section.push_str("- Default to their core tonal qualities when no platform context is given\n\n");

        section.push_str("**Never:**\n");
        section.push_str("- Invent opinions they haven't expressed\n");
        section.push_str("- Use language that contradicts their formality/warmth calibration\n");
        if voice.nogo.is_empty() {
            section.push_str("- Cross their stated no-go zones\n");
        } else {
            section.push_str(&format!("- Cross their stated no-go zones: {}\n", voice.nogo));
        }
        section.push_str("- Sound generic — every output should be unmistakably theirs\n");
        section
    }

    fn signature(&self) -> String {
        format!(
            "---\n*Generated with {} · personality.md v{} · {}*\n",
            self.branding.product_name,
            self.branding.document_version,
            self.branding.signature_tagline
        )
    }
}

impl DocumentGenerator for TemplateDocumentGenerator {
    fn generate(&self, state: &WizardState, date: NaiveDate) -> String {
        let mut doc = self.header(date);
        doc.push_str(RULE);
        doc.push_str(&self.identity_section(state));
        doc.push_str(RULE);
        doc.push_str(&self.voice_section(state));
        doc.push_str(RULE);
        doc.push_str(&self.platform_section(state));
        doc.push_str(RULE);
        doc.push_str(&self.agent_instructions(state));
        doc.push('\n');
        doc.push_str(&self.signature());
        doc
    }
}
