//! Transition node: the aggregated record for one lowercase word.

use crate::config::MEANINGFUL_DOOR_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node of the transition graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionNode {
    /// Lowercase canonical form (identity).
    pub key: String,
    /// Most recently seen spelling of this word.
    pub surface_form: String,
    /// Number of occurrences in the corpus.
    pub seen_count: u64,
    /// Exact successor spelling -> number of times it followed this word.
    pub exit_frequency: BTreeMap<String, u64>,
    /// Successors, sorted by spelling and deduplicated by lowercase form.
    pub doors: Vec<String>,
}

impl TransitionNode {
    /// Create an empty node for a lowercase key.
    pub(crate) fn new(key: String) -> Self {
        Self {
            surface_form: key.clone(),
            key,
            seen_count: 0,
            exit_frequency: BTreeMap::new(),
            doors: Vec::new(),
        }
    }

    /// Record one occurrence of this word, followed by `next` if any.
    pub(crate) fn observe(&mut self, surface: &str, next: Option<&str>) {
        self.seen_count += 1;
        self.surface_form = surface.to_string();
        if let Some(next) = next {
            *self.exit_frequency.entry(next.to_string()).or_insert(0) += 1;
        }
    }

    /// Derive `doors` from the recorded exits.
    ///
    /// `exit_frequency` iterates in byte order, so the first spelling seen for
    /// each lowercase successor is its lexicographically smallest one.
    pub(crate) fn seal(&mut self) {
        let mut doors: Vec<String> = Vec::with_capacity(self.exit_frequency.len());
        let mut seen = std::collections::HashSet::new();

        for successor in self.exit_frequency.keys() {
            if seen.insert(successor.to_lowercase()) {
                doors.push(successor.clone());
            }
        }

        self.doors = doors;
    }

    /// Number of distinct successors.
    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    /// Whether a visit to this node carries a nibble.
    pub fn is_meaningful(&self) -> bool {
        self.door_count() > MEANINGFUL_DOOR_THRESHOLD
    }

    /// Index of the door whose lowercase form matches `word`, if any.
    pub fn door_index(&self, word: &str) -> Option<usize> {
        let wanted = word.to_lowercase();
        self.doors.iter().position(|d| d.to_lowercase() == wanted)
    }
}
