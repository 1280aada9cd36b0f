//! View-model builder for the spell list.
//!
//! Combines the compendium, the filter state, and the expansion set into the
//! visible, ordered list of entries. This is a pure function of current
//! state, recomputed in full on every interaction; the dataset is small
//! enough that no caching is needed.

use super::filter::FilterState;
use super::matcher::is_visible;
use super::toggle::ToggleSet;
use crate::catalog::{Compendium, Spell};

/// Sentinel id for the collapsible "Search and Filter" panel. It shares the
/// spell expansion set with the entries themselves.
pub const FILTER_PANEL_ID: &str = "filters";

// ============================================================================
// View Models
// ============================================================================

/// One labelled field of an expanded detail panel. `label` is `None` for
/// free-standing text such as the description body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: Option<&'static str>,
    pub value: String,
}

impl DetailField {
    fn labelled(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label: Some(label),
            value: value.into(),
        }
    }

    fn text(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: value.into(),
        }
    }
}

/// A level bucket with its visible entries. A bucket whose level is active
/// is emitted even when every entry in it fails the matcher: the heading
/// still renders, the list under it is just empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketView {
    pub label: &'static str,
    pub level: u8,
    pub entries: Vec<SpellEntryView>,
}

/// Everything the presentation layer needs for one visible spell: the
/// collapsed summary, the expanded detail, the current expansion state, and
/// the id to feed back to the toggle set when the entry is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellEntryView {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    /// Shown on the collapsed row only (the spell's casting speed).
    pub extra_info: String,
    pub expanded: bool,
    pub detail: Vec<DetailField>,
}

// ============================================================================
// Builders
// ============================================================================

/// Build the visible spell list: buckets in fixed level order, entries in
/// source order, with filtered-out levels skipped and non-matching entries
/// dropped. Toggling an entry never removes it from this list, only its
/// `expanded` flag changes.
pub fn visible_spells(
    compendium: &Compendium,
    filter: &FilterState,
    expanded: &ToggleSet,
) -> Vec<BucketView> {
    compendium
        .spell_buckets()
        .into_iter()
        .filter(|bucket| filter.level_active(bucket.level))
        .map(|bucket| BucketView {
            label: bucket.label,
            level: bucket.level,
            entries: bucket
                .spells
                .iter()
                .filter(|spell| is_visible(spell, filter))
                .map(|spell| spell_entry_view(spell, expanded))
                .collect(),
        })
        .collect()
}

fn spell_entry_view(spell: &Spell, expanded: &ToggleSet) -> SpellEntryView {
    SpellEntryView {
        id: spell.id.clone(),
        name: spell.name.clone(),
        tags: spell.tags.clone(),
        extra_info: spell.casting_speed().to_string(),
        expanded: expanded.is_expanded(&spell.id),
        detail: spell_detail(spell),
    }
}

/// The expanded detail panel, in display order, with empty fields omitted.
pub fn spell_detail(spell: &Spell) -> Vec<DetailField> {
    let mut fields = Vec::new();

    if !spell.casting_speed().is_empty() {
        fields.push(DetailField::labelled("Casting Speed", spell.casting_speed()));
    }
    if !spell.duration().is_empty() {
        let duration = if spell.concentration {
            format!("{} (Requires concentration)", spell.duration())
        } else {
            spell.duration().to_string()
        };
        fields.push(DetailField::labelled("Duration", duration));
    }
    if !spell.range().is_empty() {
        fields.push(DetailField::labelled("Range", spell.range()));
    }
    if !spell.school().is_empty() {
        fields.push(DetailField::labelled("School", spell.school()));
    }
    if !spell.components.is_empty() {
        fields.push(DetailField::labelled(
            "Components",
            spell.components.join(", "),
        ));
    }
    if !spell.description().is_empty() {
        fields.push(DetailField::text(spell.description()));
    }
    if !spell.at_higher_levels().is_empty() {
        fields.push(DetailField::labelled(
            "At higher levels",
            spell.at_higher_levels(),
        ));
    }

    fields
}
