//! Integration tests for the identities page view models and the embedded
//! compendium data.

use grimoire::browse::{ability_toggle_id, identity_views, ToggleSet};
use grimoire::catalog::Compendium;
use pretty_assertions::assert_eq;

#[test]
fn embedded_compendium_identities_resolve_their_abilities() {
    let compendium = Compendium::load(None).unwrap();
    let views = identity_views(&compendium, &ToggleSet::new(), &ToggleSet::new());

    assert!(!views.is_empty());
    // The shipped data declares no dangling ability ids.
    for identity in &views {
        for ability in &identity.abilities {
            assert!(
                ability.ability.is_some(),
                "identity '{}' declares unknown ability '{}'",
                identity.id,
                ability.ability_id
            );
        }
    }
}

#[test]
fn dangling_ability_ids_surface_as_placeholders_in_declared_order() {
    let compendium: Compendium = serde_json::from_str(
        r#"{
            "CORE_IDENTITIES": [
                {"id": "warden", "name": "Warden",
                 "coreAbilityIDs": ["ghost", "rage", "phantom"]}
            ],
            "CORE_ABILITIES": [
                {"id": "rage", "name": "Rage", "description": "Hit things."}
            ]
        }"#,
    )
    .unwrap();

    let views = identity_views(&compendium, &ToggleSet::new(), &ToggleSet::new());
    let abilities = &views[0].abilities;

    // Unresolvable ids are kept in place, not dropped.
    assert_eq!(abilities.len(), 3);
    assert!(abilities[0].ability.is_none());
    assert!(abilities[1].ability.is_some());
    assert!(abilities[2].ability.is_none());
    assert_eq!(
        abilities.iter().map(|a| a.ability_id.as_str()).collect::<Vec<_>>(),
        ["ghost", "rage", "phantom"]
    );
}

#[test]
fn ability_expansion_is_scoped_per_identity() {
    let compendium: Compendium = serde_json::from_str(
        r#"{
            "CORE_IDENTITIES": [
                {"id": "mystic", "name": "Mystic", "coreAbilityIDs": ["spellcasting"]},
                {"id": "grovekeeper", "name": "Grovekeeper", "coreAbilityIDs": ["spellcasting"]}
            ],
            "CORE_ABILITIES": [
                {"id": "spellcasting", "name": "Spellcasting", "description": "Cast spells."}
            ]
        }"#,
    )
    .unwrap();

    let mut expanded_abilities = ToggleSet::new();
    expanded_abilities.toggle(&ability_toggle_id("mystic", "spellcasting"));

    let views = identity_views(&compendium, &ToggleSet::new(), &expanded_abilities);
    assert!(views[0].abilities[0].expanded);
    assert!(!views[1].abilities[0].expanded);

    // Toggling the same composite id again collapses it.
    expanded_abilities.toggle(&ability_toggle_id("mystic", "spellcasting"));
    let views = identity_views(&compendium, &ToggleSet::new(), &expanded_abilities);
    assert!(!views[0].abilities[0].expanded);
}
