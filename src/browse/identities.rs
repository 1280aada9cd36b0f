//! View-model builder for the core identities page.
//!
//! The same collapse pattern as the spell list, applied to two independently
//! keyed toggle sets: one for the identities themselves, one for their nested
//! abilities. Ability rows are keyed by a composite id so the same ability
//! expanded under one identity stays collapsed under another.

use super::spells::DetailField;
use super::toggle::ToggleSet;
use crate::catalog::Compendium;

/// Composite toggle key for an ability row under a specific identity.
pub fn ability_toggle_id(identity_id: &str, ability_id: &str) -> String {
    format!("{identity_id}--{ability_id}")
}

// ============================================================================
// View Models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityView {
    pub id: String,
    pub name: String,
    pub expanded: bool,
    /// Stat block shown when expanded, empty fields omitted.
    pub stats: Vec<DetailField>,
    /// Ability rows in declared order, including unresolved placeholders.
    pub abilities: Vec<AbilityView>,
}

/// One ability row. `ability` is `None` when the declared id has no match in
/// the ability catalog; the row still appears so a data problem is visible in
/// the list instead of silently shrinking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityView {
    pub toggle_id: String,
    pub ability_id: String,
    pub ability: Option<ResolvedAbility>,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAbility {
    pub name: String,
    pub description: String,
}

// ============================================================================
// Builder
// ============================================================================

/// Build the identity list in source order. There is no filtering on this
/// page; only expansion state varies.
pub fn identity_views(
    compendium: &Compendium,
    expanded_identities: &ToggleSet,
    expanded_abilities: &ToggleSet,
) -> Vec<IdentityView> {
    compendium
        .core_identities
        .iter()
        .map(|identity| {
            let abilities = identity
                .core_ability_ids
                .iter()
                .map(|ability_id| {
                    let toggle_id = ability_toggle_id(&identity.id, ability_id);
                    AbilityView {
                        expanded: expanded_abilities.is_expanded(&toggle_id),
                        ability: compendium.find_ability(ability_id).map(|a| {
                            ResolvedAbility {
                                name: a.name.clone(),
                                description: a.description().to_string(),
                            }
                        }),
                        ability_id: ability_id.clone(),
                        toggle_id,
                    }
                })
                .collect();

            IdentityView {
                id: identity.id.clone(),
                name: identity.name.clone(),
                expanded: expanded_identities.is_expanded(&identity.id),
                stats: identity_stats(identity),
                abilities,
            }
        })
        .collect()
}

fn identity_stats(identity: &crate::catalog::Identity) -> Vec<DetailField> {
    let mut fields = Vec::new();
    for (label, value) in [
        ("Health at Level 1", identity.health_at_first_level()),
        ("Health at Level 2+", identity.health_beyond_first_level()),
        ("Starting Equipment", identity.starting_equipment()),
        ("Initial Proficiencies", identity.initial_proficiencies()),
    ] {
        if !value.is_empty() {
            fields.push(DetailField {
                label: Some(label),
                value: value.to_string(),
            });
        }
    }
    fields
}
