//! Integration tests for the filter/toggle pipeline: filter state, the
//! visibility predicate, and the visible-list builder working together over
//! a small compendium, the way the UI drives them.

use grimoire::browse::{
    is_relevant, is_visible, search_haystack, visible_spells, FilterState, ToggleSet,
};
use grimoire::catalog::{Compendium, Spell};
use pretty_assertions::assert_eq;

fn two_entry_compendium() -> Compendium {
    serde_json::from_str(
        r#"{
            "CANTRIPS": [
                {"id": "a", "name": "Light", "tags": ["Arcane"], "level": 0},
                {"id": "b", "name": "Bless", "tags": ["Divine"], "level": 0}
            ]
        }"#,
    )
    .unwrap()
}

fn evocation_spell() -> Spell {
    serde_json::from_str(
        r#"{
            "id": "fireball",
            "name": "Fireball",
            "level": 3,
            "tags": ["Arcane"],
            "school": "Evocation",
            "components": ["V", "S", "M"],
            "description": "Fireball"
        }"#,
    )
    .unwrap()
}

// ============================================================================
// Toggle and Filter Laws
// ============================================================================

#[test]
fn toggle_pairs_restore_the_set_exactly() {
    let mut toggles = ToggleSet::new();
    toggles.toggle("a");
    let before = toggles.clone();

    toggles.toggle("b");
    toggles.toggle("b");

    assert_eq!(toggles, before);
}

#[test]
fn category_toggle_is_a_symmetric_difference() {
    let mut filter = FilterState::default();
    let before = filter.clone();

    filter.toggle_list("Arcane");
    assert!(!filter.list_active("Arcane"));

    filter.toggle_list("Arcane");
    assert_eq!(filter, before);
}

#[test]
fn all_toggle_cycles_between_empty_and_full() {
    let mut filter = FilterState::default();

    // First call from the full set clears...
    filter.toggle_all_levels();
    assert!((0..=9).all(|n| !filter.level_active(n)));

    // ...second call refills.
    filter.toggle_all_levels();
    assert!(filter.all_levels_active());

    // From a partial (nonempty) selection the first call still clears.
    filter.toggle_level(4);
    filter.toggle_level(8);
    filter.toggle_all_levels();
    assert!((0..=9).all(|n| !filter.level_active(n)));
}

// ============================================================================
// Entry Matcher
// ============================================================================

#[test]
fn search_matches_the_concatenated_field_string() {
    let spell = evocation_spell();
    assert_eq!(
        search_haystack(&spell),
        "Fireball,Fireball,Evocation,Evocation,V,S,M"
    );

    let mut filter = FilterState::default();
    filter.set_search_text("evoc");
    assert!(is_relevant(&spell, &filter));

    filter.set_search_text("necro");
    assert!(!is_relevant(&spell, &filter));
}

#[test]
fn untagged_entries_are_never_visible() {
    let spell: Spell =
        serde_json::from_str(r#"{"id": "x", "name": "X", "level": 0, "tags": []}"#).unwrap();

    // All categories active — still no match.
    let filter = FilterState::default();
    assert!(!is_visible(&spell, &filter));

    // Nor under any single-category selection.
    for tag in ["Arcane", "Divine", "Primal"] {
        let mut filter = FilterState::default();
        filter.toggle_all_lists();
        filter.toggle_list(tag);
        assert!(!is_visible(&spell, &filter));
    }
}

#[test]
fn level_gating_hides_the_whole_bucket() {
    let compendium: Compendium = serde_json::from_str(
        r#"{
            "FIRST_LEVEL_SPELLS": [
                {"id": "bless", "name": "Bless", "tags": ["Divine"], "level": 1},
                {"id": "entangle", "name": "Entangle", "tags": ["Primal"], "level": 1}
            ]
        }"#,
    )
    .unwrap();

    let mut filter = FilterState::default();
    // Both entries pass the matcher on their own.
    assert!(compendium
        .first_level_spells
        .iter()
        .all(|s| is_visible(s, &filter)));

    filter.toggle_level(1);
    let buckets = visible_spells(&compendium, &filter, &ToggleSet::new());
    assert!(buckets.is_empty());
}

// ============================================================================
// End-to-End Scenario
// ============================================================================

#[test]
fn two_entry_scenario_filters_and_expands() {
    let compendium = two_entry_compendium();
    let mut filter = FilterState::default();
    let mut expanded = ToggleSet::new();

    // Defaults: both entries visible, in source order, collapsed.
    let buckets = visible_spells(&compendium, &filter, &expanded);
    assert_eq!(buckets.len(), 1);
    let ids: Vec<_> = buckets[0].entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
    assert!(buckets[0].entries.iter().all(|e| !e.expanded));

    // Toggling Divine off hides "b" only.
    filter.toggle_list("Divine");
    let buckets = visible_spells(&compendium, &filter, &expanded);
    let ids: Vec<_> = buckets[0].entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a"]);

    // Expanding "a" flips its detail flag without removing it.
    expanded.toggle("a");
    let buckets = visible_spells(&compendium, &filter, &expanded);
    assert_eq!(buckets[0].entries.len(), 1);
    assert!(buckets[0].entries[0].expanded);
}

#[test]
fn search_and_category_filters_compose() {
    let compendium = two_entry_compendium();
    let mut filter = FilterState::default();

    // "light" matches entry "a" by name.
    filter.set_search_text("light");
    let buckets = visible_spells(&compendium, &filter, &ToggleSet::new());
    let ids: Vec<_> = buckets[0].entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a"]);

    // But with Arcane off, the match is filtered by category anyway.
    filter.toggle_list("Arcane");
    let buckets = visible_spells(&compendium, &filter, &ToggleSet::new());
    assert!(buckets[0].entries.is_empty());
}
