//! Static content source: the compendium of spells, identities, and
//! abilities baked into the binary or loaded from a JSON file.

mod load;
mod types;

pub use load::{level_label, CatalogError, Compendium, SpellBucket, ALL_LEVELS, SPELL_LISTS};
pub use types::{Ability, Identity, Spell};
