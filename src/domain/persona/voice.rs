//! Core voice selections from the second wizard page.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::catalog::{Tone, Topic};

/// Selected tone and topic tags plus free-text no-go zones.
///
/// Tags live in ordered sets, so iteration always follows catalog order no
/// matter which order they were toggled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceState {
    pub tones: BTreeSet<Tone>,
    pub topics: BTreeSet<Topic>,
    pub nogo: String,
}

impl VoiceState {
    /// Flips membership of `tone`. Returns true if it is now selected.
    pub fn toggle_tone(&mut self, tone: Tone) -> bool {
        if self.tones.remove(&tone) {
            false
        } else {
            self.tones.insert(tone)
        }
    }

    /// Flips membership of `topic`. Returns true if it is now selected.
    pub fn toggle_topic(&mut self, topic: Topic) -> bool {
        if self.topics.remove(&topic) {
            false
        } else {
            self.topics.insert(topic)
        }
    }

    /// Tone labels joined with `", "`, or `None` when nothing is selected.
    pub fn tone_list(&self) -> Option<String> {
        join_labels(self.tones.iter().map(Tone::label))
    }

    /// Topic labels joined with `", "`, or `None` when nothing is selected.
    pub fn topic_list(&self) -> Option<String> {
        join_labels(self.topics.iter().map(Topic::label))
    }
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Option<String> {
    let joined = labels.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}
