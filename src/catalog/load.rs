//! Compendium loading.
//!
//! The compendium is a single JSON document with one array per collection,
//! keyed by collection name (`CANTRIPS`, `FIRST_LEVEL_SPELLS`, ...,
//! `CORE_IDENTITIES`, `CORE_ABILITIES`). A default compendium is embedded in
//! the binary; `--data <path>` substitutes a user-supplied file.
//!
//! Collections are read-only once loaded. Missing keys deserialize to empty
//! arrays, and unknown keys are ignored.

use super::types::{Ability, Identity, Spell};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Default compendium shipped with the binary.
const DEFAULT_COMPENDIUM: &str = include_str!("../../data/compendium.json");

/// Maximum compendium file size (16 MB). Guards against reading an
/// accidentally-pointed-at huge file into memory.
const MAX_FILE_SIZE: u64 = 16 * 1_048_576;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read compendium file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in compendium file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Compendium file too large: {0} bytes (max {MAX_FILE_SIZE})")]
    TooLarge(u64),
}

// ============================================================================
// Compendium
// ============================================================================

/// The fixed, small set of spell list tags a spell can carry.
pub const SPELL_LISTS: [&str; 3] = ["Arcane", "Divine", "Primal"];

/// All spell levels, in bucket order.
pub const ALL_LEVELS: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Bucket heading per level. Index = level.
const LEVEL_LABELS: [&str; 10] = [
    "Cantrips",
    "1st Level",
    "2nd Level",
    "3rd Level",
    "4th Level",
    "5th Level",
    "6th Level",
    "7th Level",
    "8th Level",
    "9th Level",
];

/// Heading text for a spell level.
pub fn level_label(level: u8) -> &'static str {
    LEVEL_LABELS.get(level as usize).copied().unwrap_or("")
}

/// The full static content source: every collection the site bakes in.
///
/// Field order mirrors bucket order so `spell_buckets` can iterate the
/// per-level collections positionally.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Compendium {
    #[serde(rename = "CANTRIPS")]
    pub cantrips: Vec<Spell>,
    #[serde(rename = "FIRST_LEVEL_SPELLS")]
    pub first_level_spells: Vec<Spell>,
    #[serde(rename = "SECOND_LEVEL_SPELLS")]
    pub second_level_spells: Vec<Spell>,
    #[serde(rename = "THIRD_LEVEL_SPELLS")]
    pub third_level_spells: Vec<Spell>,
    #[serde(rename = "FOURTH_LEVEL_SPELLS")]
    pub fourth_level_spells: Vec<Spell>,
    #[serde(rename = "FIFTH_LEVEL_SPELLS")]
    pub fifth_level_spells: Vec<Spell>,
    #[serde(rename = "SIXTH_LEVEL_SPELLS")]
    pub sixth_level_spells: Vec<Spell>,
    #[serde(rename = "SEVENTH_LEVEL_SPELLS")]
    pub seventh_level_spells: Vec<Spell>,
    #[serde(rename = "EIGHTH_LEVEL_SPELLS")]
    pub eighth_level_spells: Vec<Spell>,
    #[serde(rename = "NINTH_LEVEL_SPELLS")]
    pub ninth_level_spells: Vec<Spell>,
    #[serde(rename = "CORE_IDENTITIES")]
    pub core_identities: Vec<Identity>,
    #[serde(rename = "CORE_ABILITIES")]
    pub core_abilities: Vec<Ability>,
}

/// One level bucket: a heading plus the spells declared under it, in
/// source order.
#[derive(Debug, Clone, Copy)]
pub struct SpellBucket<'a> {
    pub label: &'static str,
    pub level: u8,
    pub spells: &'a [Spell],
}

impl Compendium {
    /// Load the compendium from `path`, or the embedded default when no
    /// path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let Some(path) = path else {
            // Embedded data is validated by tests; a parse failure here is a
            // packaging bug, not a runtime condition.
            let compendium = serde_json::from_str(DEFAULT_COMPENDIUM)?;
            tracing::debug!("Loaded embedded compendium");
            return Ok(compendium);
        };

        let meta = std::fs::metadata(path)?;
        if meta.len() > MAX_FILE_SIZE {
            return Err(CatalogError::TooLarge(meta.len()));
        }

        let content = std::fs::read_to_string(path)?;
        let compendium: Compendium = serde_json::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            spells = compendium.spell_count(),
            identities = compendium.core_identities.len(),
            abilities = compendium.core_abilities.len(),
            "Loaded compendium"
        );
        Ok(compendium)
    }

    /// Level buckets in fixed order (Cantrips through 9th Level), skipping
    /// levels with no spells in the source.
    pub fn spell_buckets(&self) -> Vec<SpellBucket<'_>> {
        let per_level: [&[Spell]; 10] = [
            &self.cantrips,
            &self.first_level_spells,
            &self.second_level_spells,
            &self.third_level_spells,
            &self.fourth_level_spells,
            &self.fifth_level_spells,
            &self.sixth_level_spells,
            &self.seventh_level_spells,
            &self.eighth_level_spells,
            &self.ninth_level_spells,
        ];

        per_level
            .into_iter()
            .zip(ALL_LEVELS)
            .filter(|(spells, _)| !spells.is_empty())
            .map(|(spells, level)| SpellBucket {
                label: level_label(level),
                level,
                spells,
            })
            .collect()
    }

    /// Total spell count across all level buckets.
    pub fn spell_count(&self) -> usize {
        self.spell_buckets().iter().map(|b| b.spells.len()).sum()
    }

    /// Look up an ability by id in the global ability catalog.
    pub fn find_ability(&self, id: &str) -> Option<&Ability> {
        self.core_abilities.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_compendium_parses() {
        let compendium = Compendium::load(None).unwrap();
        assert!(!compendium.cantrips.is_empty());
        assert!(!compendium.core_identities.is_empty());
        assert!(!compendium.core_abilities.is_empty());
    }

    #[test]
    fn missing_keys_deserialize_to_empty_collections() {
        let compendium: Compendium = serde_json::from_str("{}").unwrap();
        assert!(compendium.cantrips.is_empty());
        assert!(compendium.spell_buckets().is_empty());
        assert_eq!(compendium.spell_count(), 0);
    }

    #[test]
    fn buckets_keep_fixed_level_order() {
        let compendium: Compendium = serde_json::from_str(
            r#"{
                "NINTH_LEVEL_SPELLS": [{"id": "wish", "name": "Wish", "level": 9}],
                "CANTRIPS": [{"id": "light", "name": "Light", "level": 0}]
            }"#,
        )
        .unwrap();

        let buckets = compendium.spell_buckets();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].label, "Cantrips");
        assert_eq!(buckets[0].level, 0);
        assert_eq!(buckets[1].label, "9th Level");
        assert_eq!(buckets[1].level, 9);
    }

    #[test]
    fn find_ability_misses_yield_none() {
        let compendium: Compendium = serde_json::from_str(
            r#"{"CORE_ABILITIES": [{"id": "rage", "name": "Rage"}]}"#,
        )
        .unwrap();

        assert!(compendium.find_ability("rage").is_some());
        assert!(compendium.find_ability("no-such-ability").is_none());
    }

    #[test]
    fn optional_spell_fields_read_as_empty() {
        let spell: Spell = serde_json::from_str(r#"{"id": "x", "name": "X"}"#).unwrap();
        assert_eq!(spell.school(), "");
        assert_eq!(spell.description(), "");
        assert!(spell.components.is_empty());
        assert!(!spell.concentration);
    }
}
