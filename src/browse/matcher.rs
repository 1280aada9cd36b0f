//! Visibility predicate for spell entries.
//!
//! A spell is visible when it is both relevant to the search text and a
//! member of at least one active spell list. Level gating is not decided
//! here — whole level buckets are skipped by the view builder instead.

use super::filter::FilterState;
use crate::catalog::Spell;

/// The string the search text is matched against, built from the spell's
/// descriptive fields joined with commas. The school field appears twice,
/// and absent fields contribute an empty string while keeping their
/// delimiter.
pub fn search_haystack(spell: &Spell) -> String {
    format!(
        "{},{},{},{},{}",
        spell.description(),
        spell.name,
        spell.school(),
        spell.school(),
        spell.components.join(",")
    )
}

/// Case-insensitive substring match against the haystack. An empty search
/// matches everything.
pub fn is_relevant(spell: &Spell, filter: &FilterState) -> bool {
    let search = filter.search_text();
    search.is_empty()
        || search_haystack(spell)
            .to_lowercase()
            .contains(&search.to_lowercase())
}

/// Whether any of the spell's tags is an active spell list. A spell with no
/// tags matches nothing, so it is never visible while this predicate gates
/// the list.
pub fn is_in_active_list(spell: &Spell, filter: &FilterState) -> bool {
    spell.tags.iter().any(|tag| filter.list_active(tag))
}

/// The full per-entry predicate: relevance AND list membership.
pub fn is_visible(spell: &Spell, filter: &FilterState) -> bool {
    is_relevant(spell, filter) && is_in_active_list(spell, filter)
}
