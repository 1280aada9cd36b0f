//! Expansion-state tracking for collapsible list entries.

use std::collections::HashSet;

/// The set of entry identifiers currently expanded.
///
/// Deliberately permissive: `toggle` and `is_expanded` accept any identifier,
/// including ones not present in the compendium, since ids come from data
/// rather than user input. Created empty per session and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleSet {
    expanded: HashSet<String>,
}

impl ToggleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `id`: remove it when present, insert it when absent.
    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    /// Membership test — `true` means the entry's detail panel is visible.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
