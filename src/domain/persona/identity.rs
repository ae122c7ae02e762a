//! Identity answers from the first wizard page.

use serde::{Deserialize, Serialize};

/// Free-text identity fields. Empty means "not answered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityState {
    /// Name or handle.
    pub name: String,
    /// What the user actually does.
    pub role: String,
    /// Bio in the user's own words.
    pub bio: String,
    /// "Never represent me as..." guardrail.
    pub avoid: String,
}

impl IdentityState {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.role.is_empty() && self.bio.is_empty() && self.avoid.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_identity_is_empty() {
        assert!(IdentityState::default().is_empty());
    }

    #[test]
    fn any_answer_makes_identity_non_empty() {
        let identity = IdentityState {
            avoid: "salesy".to_string(),
            ..Default::default()
        };
        assert!(!identity.is_empty());
    }
}
