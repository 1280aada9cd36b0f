//! User-adjustable filter state for the spell list.
//!
//! Three dimensions: spell list tags, spell levels, and a free-text search
//! string. Every operation is total — there are no error conditions, and
//! toggling is a symmetric-difference update on the relevant set.

use crate::catalog::{ALL_LEVELS, SPELL_LISTS};
use std::collections::BTreeSet;

/// Current filter selection.
///
/// Defaults to everything active: all spell lists, all levels, empty search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active_lists: BTreeSet<String>,
    active_levels: BTreeSet<u8>,
    search_text: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_lists: SPELL_LISTS.iter().map(|s| s.to_string()).collect(),
            active_levels: ALL_LEVELS.into_iter().collect(),
            search_text: String::new(),
        }
    }
}

/// Two-state "All" cycle: a nonempty set clears to empty, an empty set
/// fills to `full`. Partial selections clear on the first call.
fn toggle_all<T: Ord>(set: &mut BTreeSet<T>, full: impl IntoIterator<Item = T>) {
    if set.is_empty() {
        set.extend(full);
    } else {
        set.clear();
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Spell lists --

    /// Symmetric-difference update of the active lists with `{tag}`.
    pub fn toggle_list(&mut self, tag: &str) {
        if !self.active_lists.remove(tag) {
            self.active_lists.insert(tag.to_string());
        }
    }

    /// The "All" button for spell lists.
    pub fn toggle_all_lists(&mut self) {
        toggle_all(
            &mut self.active_lists,
            SPELL_LISTS.iter().map(|s| s.to_string()),
        );
    }

    pub fn list_active(&self, tag: &str) -> bool {
        self.active_lists.contains(tag)
    }

    /// Whether every known spell list is active. Drives the highlight state
    /// of the "All" button, which lights up only on the full set, not on any
    /// nonempty subset.
    pub fn all_lists_active(&self) -> bool {
        SPELL_LISTS.iter().all(|tag| self.active_lists.contains(*tag))
    }

    pub fn active_lists(&self) -> &BTreeSet<String> {
        &self.active_lists
    }

    // -- Levels --

    /// Symmetric-difference update of the active levels with `{n}`.
    pub fn toggle_level(&mut self, n: u8) {
        if !self.active_levels.remove(&n) {
            self.active_levels.insert(n);
        }
    }

    /// The "All" button for levels.
    pub fn toggle_all_levels(&mut self) {
        toggle_all(&mut self.active_levels, ALL_LEVELS);
    }

    pub fn level_active(&self, n: u8) -> bool {
        self.active_levels.contains(&n)
    }

    pub fn all_levels_active(&self) -> bool {
        ALL_LEVELS.iter().all(|n| self.active_levels.contains(n))
    }

    // -- Search --

    /// Replace the search text verbatim. Case handling happens at match
    /// time, not here.
    pub fn set_search_text(&mut self, s: impl Into<String>) {
        self.search_text = s.into();
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn defaults_are_everything_active() {
        let f = FilterState::default();
        assert!(f.all_lists_active());
        assert!(f.all_levels_active());
        assert_eq!(f.search_text(), "");
    }

    #[test]
    fn toggle_list_twice_restores_state() {
        let mut f = FilterState::default();
        let before = f.clone();

        f.toggle_list("Arcane");
        assert!(!f.list_active("Arcane"));
        assert!(f.list_active("Divine"));

        f.toggle_list("Arcane");
        assert_eq!(f, before);
    }

    #[test]
    fn toggle_all_lists_cycles_between_full_and_empty() {
        let mut f = FilterState::default();

        f.toggle_all_lists();
        assert!(f.active_lists().is_empty());

        f.toggle_all_lists();
        assert!(f.all_lists_active());
    }

    #[test]
    fn toggle_all_clears_partial_selections_first() {
        let mut f = FilterState::default();
        f.toggle_level(3);
        f.toggle_level(7);
        assert!(!f.level_active(3));

        // Nonempty (partial) set: first call clears, second refills.
        f.toggle_all_levels();
        for n in ALL_LEVELS {
            assert!(!f.level_active(n));
        }

        f.toggle_all_levels();
        assert!(f.all_levels_active());
    }

    #[test]
    fn all_active_requires_the_full_set() {
        let mut f = FilterState::default();
        f.toggle_list("Primal");
        // Still nonempty, but no longer "all".
        assert!(!f.all_lists_active());
        assert!(f.list_active("Arcane"));
    }

    #[test]
    fn levels_outside_declared_domain_are_tolerated() {
        let mut f = FilterState::default();
        f.toggle_level(12);
        assert!(f.level_active(12));
        f.toggle_level(12);
        assert!(!f.level_active(12));
    }

    #[test]
    fn search_text_is_stored_verbatim() {
        let mut f = FilterState::default();
        f.set_search_text("FireBALL ");
        assert_eq!(f.search_text(), "FireBALL ");
    }

    proptest! {
        /// Level toggling is a symmetric difference: any id toggled an even
        /// number of times leaves the set unchanged.
        #[test]
        fn level_toggle_pairs_are_identity(n in 0u8..=9) {
            let mut f = FilterState::default();
            let before = f.clone();
            f.toggle_level(n);
            f.toggle_level(n);
            prop_assert_eq!(f, before);
        }

        /// From any nonempty starting point, the first All-toggle clears and
        /// the second restores the full set.
        #[test]
        fn all_toggle_two_state_cycle(toggles in proptest::collection::vec(0u8..=9, 0..10)) {
            let mut f = FilterState::default();
            for n in &toggles {
                f.toggle_level(*n);
            }
            // Re-toggle until nonempty so the first call is a clear.
            if !ALL_LEVELS.iter().any(|n| f.level_active(*n)) {
                f.toggle_level(0);
            }

            f.toggle_all_levels();
            prop_assert!(ALL_LEVELS.iter().all(|n| !f.level_active(*n)));

            f.toggle_all_levels();
            prop_assert!(f.all_levels_active());
        }
    }
}
