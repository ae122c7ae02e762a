//! Built-in catalog: platforms, style axes, tone tags, and topic tags.
//!
//! Every vocabulary here is closed. Ids are matched exactly, using the same
//! spelling serde writes, and anything outside the catalog is rejected with
//! [`ValidationError::UnknownCatalogEntry`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::platform::AxisSettings;
use crate::domain::foundation::{AxisValue, ValidationError};

// ════════════════════════════════════════════════════════════════════════════════
// Platforms
// ════════════════════════════════════════════════════════════════════════════════

/// Identifier of a destination platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    Twitter,
    LinkedIn,
    Email,
    Discord,
    Instagram,
    Reddit,
}

impl PlatformId {
    /// Returns all platforms in catalog order.
    pub fn all() -> &'static [PlatformId] {
        &[
            PlatformId::Twitter,
            PlatformId::LinkedIn,
            PlatformId::Email,
            PlatformId::Discord,
            PlatformId::Instagram,
            PlatformId::Reddit,
        ]
    }

    /// Returns the 0-based catalog position.
    pub fn order_index(&self) -> usize {
        match self {
            PlatformId::Twitter => 0,
            PlatformId::LinkedIn => 1,
            PlatformId::Email => 2,
            PlatformId::Discord => 3,
            PlatformId::Instagram => 4,
            PlatformId::Reddit => 5,
        }
    }

    /// Returns the stable string id.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformId::Twitter => "twitter",
            PlatformId::LinkedIn => "linkedin",
            PlatformId::Email => "email",
            PlatformId::Discord => "discord",
            PlatformId::Instagram => "instagram",
            PlatformId::Reddit => "reddit",
        }
    }

    /// Returns the static definition for this platform.
    pub fn definition(&self) -> &'static PlatformDefinition {
        &PLATFORMS[self.order_index()]
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlatformId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_entry("platform", s))
    }
}

/// Static description of a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformDefinition {
    pub id: PlatformId,
    pub display_name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub default_axes: AxisSettings,
}

const fn axes(formality: u8, brevity: u8, warmth: u8, boldness: u8) -> AxisSettings {
    AxisSettings {
        formality: AxisValue::new(formality),
        brevity: AxisValue::new(brevity),
        warmth: AxisValue::new(warmth),
        boldness: AxisValue::new(boldness),
    }
}

/// The six platforms, indexed by [`PlatformId::order_index`].
pub static PLATFORMS: [PlatformDefinition; 6] = [
    PlatformDefinition {
        id: PlatformId::Twitter,
        display_name: "X / Twitter",
        description: "Punchy, real-time takes",
        icon: "𝕏",
        default_axes: axes(15, 85, 40, 80),
    },
    PlatformDefinition {
        id: PlatformId::LinkedIn,
        display_name: "LinkedIn",
        description: "Professional narrative",
        icon: "in",
        default_axes: axes(80, 35, 60, 55),
    },
    PlatformDefinition {
        id: PlatformId::Email,
        display_name: "Email",
        description: "Structured, purposeful",
        icon: "✉",
        default_axes: axes(70, 45, 55, 40),
    },
    PlatformDefinition {
        id: PlatformId::Discord,
        display_name: "Discord",
        description: "Community, casual",
        icon: "◈",
        default_axes: axes(10, 70, 80, 50),
    },
    PlatformDefinition {
        id: PlatformId::Instagram,
        display_name: "Instagram",
        description: "Visual, aspirational",
        icon: "◎",
        default_axes: axes(25, 60, 85, 65),
    },
    PlatformDefinition {
        id: PlatformId::Reddit,
        display_name: "Reddit",
        description: "Informative, direct",
        icon: "◉",
        default_axes: axes(30, 50, 35, 60),
    },
];

// ════════════════════════════════════════════════════════════════════════════════
// Axes
// ════════════════════════════════════════════════════════════════════════════════

/// One of the four calibration sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Formality,
    Brevity,
    Warmth,
    Boldness,
}

impl Axis {
    /// Returns all axes in display order.
    pub fn all() -> &'static [Axis] {
        &[Axis::Formality, Axis::Brevity, Axis::Warmth, Axis::Boldness]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Formality => "formality",
            Axis::Brevity => "brevity",
            Axis::Warmth => "warmth",
            Axis::Boldness => "boldness",
        }
    }

    /// Returns the static label/descriptor set for this axis.
    pub fn definition(&self) -> &'static AxisDefinition {
        match self {
            Axis::Formality => &AXES[0],
            Axis::Brevity => &AXES[1],
            Axis::Warmth => &AXES[2],
            Axis::Boldness => &AXES[3],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Axis {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_entry("axis", s))
    }
}

/// Label and end-point descriptors for a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisDefinition {
    pub id: Axis,
    pub label: &'static str,
    pub low_descriptor: &'static str,
    pub high_descriptor: &'static str,
}

pub static AXES: [AxisDefinition; 4] = [
    AxisDefinition {
        id: Axis::Formality,
        label: "Formality",
        low_descriptor: "Casual",
        high_descriptor: "Formal",
    },
    AxisDefinition {
        id: Axis::Brevity,
        label: "Brevity",
        low_descriptor: "Verbose",
        high_descriptor: "Terse",
    },
    AxisDefinition {
        id: Axis::Warmth,
        label: "Warmth",
        low_descriptor: "Authoritative",
        high_descriptor: "Warm",
    },
    AxisDefinition {
        id: Axis::Boldness,
        label: "Boldness",
        low_descriptor: "Reserved",
        high_descriptor: "Bold",
    },
];

// ════════════════════════════════════════════════════════════════════════════════
// Tags
// ════════════════════════════════════════════════════════════════════════════════

/// Tonal quality tag. Ordering follows the catalog, which is also render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tone {
    Direct,
    Empathetic,
    Witty,
    Educational,
    Inspiring,
    Provocative,
    Collaborative,
}

impl Tone {
    pub fn all() -> &'static [Tone] {
        &[
            Tone::Direct,
            Tone::Empathetic,
            Tone::Witty,
            Tone::Educational,
            Tone::Inspiring,
            Tone::Provocative,
            Tone::Collaborative,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Direct => "Direct",
            Tone::Empathetic => "Empathetic",
            Tone::Witty => "Witty",
            Tone::Educational => "Educational",
            Tone::Inspiring => "Inspiring",
            Tone::Provocative => "Provocative",
            Tone::Collaborative => "Collaborative",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Tone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.label() == s)
            .ok_or_else(|| ValidationError::unknown_entry("tone", s))
    }
}

/// Subject-matter tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topic {
    Tech,
    Business,
    Design,
    Culture,
    Finance,
    Health,
    Politics,
    Science,
    Arts,
}

impl Topic {
    pub fn all() -> &'static [Topic] {
        &[
            Topic::Tech,
            Topic::Business,
            Topic::Design,
            Topic::Culture,
            Topic::Finance,
            Topic::Health,
            Topic::Politics,
            Topic::Science,
            Topic::Arts,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Topic::Tech => "Tech",
            Topic::Business => "Business",
            Topic::Design => "Design",
            Topic::Culture => "Culture",
            Topic::Finance => "Finance",
            Topic::Health => "Health",
            Topic::Politics => "Politics",
            Topic::Science => "Science",
            Topic::Arts => "Arts",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Topic {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.label() == s)
            .ok_or_else(|| ValidationError::unknown_entry("topic", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_table_is_indexed_by_order() {
        for (i, id) in PlatformId::all().iter().enumerate() {
            assert_eq!(id.order_index(), i);
            assert_eq!(PLATFORMS[i].id, *id);
            assert_eq!(id.definition().id, *id);
        }
    }

    #[test]
    fn platform_catalog_order_is_fixed() {
        let ids: Vec<&str> = PlatformId::all().iter().map(|p| p.as_str()).collect();
        assert_eq!(
            ids,
            vec!["twitter", "linkedin", "email", "discord", "instagram", "reddit"]
        );
    }

    #[test]
    fn twitter_defaults_match_catalog() {
        let d = PlatformId::Twitter.definition();
        assert_eq!(d.display_name, "X / Twitter");
        assert_eq!(d.default_axes.formality.value(), 15);
        assert_eq!(d.default_axes.brevity.value(), 85);
        assert_eq!(d.default_axes.warmth.value(), 40);
        assert_eq!(d.default_axes.boldness.value(), 80);
    }

    #[test]
    fn axis_definitions_line_up_with_ids() {
        for axis in Axis::all() {
            assert_eq!(axis.definition().id, *axis);
        }
        assert_eq!(Axis::Warmth.definition().low_descriptor, "Authoritative");
        assert_eq!(Axis::Brevity.definition().high_descriptor, "Terse");
    }

    #[test]
    fn vocabularies_have_expected_sizes() {
        assert_eq!(PlatformId::all().len(), 6);
        assert_eq!(Axis::all().len(), 4);
        assert_eq!(Tone::all().len(), 7);
        assert_eq!(Topic::all().len(), 9);
    }

    #[test]
    fn parsing_accepts_catalog_spelling() {
        assert_eq!("linkedin".parse::<PlatformId>().unwrap(), PlatformId::LinkedIn);
        assert_eq!("Witty".parse::<Tone>().unwrap(), Tone::Witty);
        assert_eq!("Arts".parse::<Topic>().unwrap(), Topic::Arts);
        assert_eq!("boldness".parse::<Axis>().unwrap(), Axis::Boldness);
    }

    #[test]
    fn parsing_is_exact_match() {
        assert!("LinkedIn".parse::<PlatformId>().is_err());
        assert!("witty".parse::<Tone>().is_err());
        assert!(" Arts ".parse::<Topic>().is_err());
        assert!("BOLDNESS".parse::<Axis>().is_err());
    }

    #[test]
    fn from_str_agrees_with_serde_for_every_entry() {
        for id in PlatformId::all() {
            let json = serde_json::to_value(id).unwrap();
            assert_eq!(json.as_str().unwrap().parse::<PlatformId>().unwrap(), *id);
        }
        for axis in Axis::all() {
            let json = serde_json::to_value(axis).unwrap();
            assert_eq!(json.as_str().unwrap().parse::<Axis>().unwrap(), *axis);
        }
        for tone in Tone::all() {
            let json = serde_json::to_value(tone).unwrap();
            assert_eq!(json.as_str().unwrap().parse::<Tone>().unwrap(), *tone);
        }
        for topic in Topic::all() {
            let json = serde_json::to_value(topic).unwrap();
            assert_eq!(json.as_str().unwrap().parse::<Topic>().unwrap(), *topic);
        }
    }

    #[test]
    fn parsing_rejects_unknown_tags() {
        let err = "Sarcastic".parse::<Tone>().unwrap_err();
        assert_eq!(err, ValidationError::unknown_entry("tone", "Sarcastic"));
        assert!("Sports".parse::<Topic>().is_err());
        assert!("myspace".parse::<PlatformId>().is_err());
        assert!("volume".parse::<Axis>().is_err());
    }

    #[test]
    fn serde_uses_catalog_spelling() {
        assert_eq!(serde_json::to_string(&PlatformId::LinkedIn).unwrap(), "\"linkedin\"");
        assert_eq!(serde_json::to_string(&Tone::Direct).unwrap(), "\"Direct\"");
        assert_eq!(serde_json::to_string(&Axis::Warmth).unwrap(), "\"warmth\"");
    }
}
