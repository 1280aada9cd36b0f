use serde::Deserialize;

// ============================================================================
// Compendium Records
// ============================================================================

/// A single spell entry.
///
/// Every descriptive field is optional in the data file. Accessors on this
/// type are total: a missing field reads as an empty string, empty list, or
/// `false`, never as an error. The filter core and the renderer both rely on
/// that contract instead of validating the data up front.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Spell {
    pub id: String,
    pub name: String,
    /// Spell level, 0 (cantrip) through 9.
    pub level: u8,
    /// Spell list tags ("Arcane", "Divine", "Primal"). An entry with no tags
    /// never matches any list filter.
    pub tags: Vec<String>,
    pub school: Option<String>,
    pub casting_speed: Option<String>,
    pub duration: Option<String>,
    pub range: Option<String>,
    pub components: Vec<String>,
    pub concentration: bool,
    pub description: Option<String>,
    pub at_higher_levels: Option<String>,
}

impl Spell {
    pub fn school(&self) -> &str {
        self.school.as_deref().unwrap_or("")
    }

    pub fn casting_speed(&self) -> &str {
        self.casting_speed.as_deref().unwrap_or("")
    }

    pub fn duration(&self) -> &str {
        self.duration.as_deref().unwrap_or("")
    }

    pub fn range(&self) -> &str {
        self.range.as_deref().unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn at_higher_levels(&self) -> &str {
        self.at_higher_levels.as_deref().unwrap_or("")
    }
}

/// A core identity (character class / archetype).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub name: String,
    /// Ability ids in declared order; resolved against `CORE_ABILITIES` at
    /// view-build time. Ids with no catalog match stay in the list as
    /// unresolved placeholders.
    #[serde(rename = "coreAbilityIDs")]
    pub core_ability_ids: Vec<String>,
    pub health_at_first_level: Option<String>,
    pub health_beyond_first_level: Option<String>,
    pub starting_equipment: Option<String>,
    pub initial_proficiencies: Option<String>,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
}

impl Identity {
    pub fn health_at_first_level(&self) -> &str {
        self.health_at_first_level.as_deref().unwrap_or("")
    }

    pub fn health_beyond_first_level(&self) -> &str {
        self.health_beyond_first_level.as_deref().unwrap_or("")
    }

    pub fn starting_equipment(&self) -> &str {
        self.starting_equipment.as_deref().unwrap_or("")
    }

    pub fn initial_proficiencies(&self) -> &str {
        self.initial_proficiencies.as_deref().unwrap_or("")
    }
}

/// A core ability referenced by identities.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ability {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl Ability {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
