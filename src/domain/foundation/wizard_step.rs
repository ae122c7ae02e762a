//! WizardStep enum representing the four wizard pages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four wizard pages, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Identity,
    Voice,
    Platforms,
    Export,
}

impl WizardStep {
    /// Returns all steps in canonical order.
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Identity,
            WizardStep::Voice,
            WizardStep::Platforms,
            WizardStep::Export,
        ]
    }

    /// The first page a new session opens on.
    pub fn first() -> Self {
        WizardStep::Identity
    }

    /// The final (export) page.
    pub fn last() -> Self {
        WizardStep::Export
    }

    /// Returns the 0-based index of this step.
    pub fn order_index(&self) -> usize {
        match self {
            WizardStep::Identity => 0,
            WizardStep::Voice => 1,
            WizardStep::Platforms => 2,
            WizardStep::Export => 3,
        }
    }

    /// Maps any index onto a step, clamping to the first/last page.
    pub fn from_index_clamped(index: i64) -> Self {
        let last = (Self::all().len() - 1) as i64;
        Self::all()[index.clamp(0, last) as usize]
    }

    /// Returns the next step in order, if any.
    pub fn next(&self) -> Option<WizardStep> {
        Self::all().get(self.order_index() + 1).copied()
    }

    /// Returns the previous step in order, if any.
    pub fn previous(&self) -> Option<WizardStep> {
        let idx = self.order_index();
        if idx == 0 {
            None
        } else {
            Self::all().get(idx - 1).copied()
        }
    }

    /// Returns true if this step comes before another.
    pub fn is_before(&self, other: &WizardStep) -> bool {
        self.order_index() < other.order_index()
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            WizardStep::Identity => "Identity",
            WizardStep::Voice => "Voice",
            WizardStep::Platforms => "Platforms",
            WizardStep::Export => "Export",
        }
    }

    /// Tab label with a zero-padded ordinal, e.g. `01 Identity`.
    pub fn indicator(&self) -> String {
        format!("{:02} {}", self.order_index() + 1, self.display_name())
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
