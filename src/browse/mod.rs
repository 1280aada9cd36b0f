//! The filter-and-expand core: toggle sets, filter state, the visibility
//! predicate, and the pure view-model builders the presentation layer
//! renders from.

mod filter;
mod identities;
mod matcher;
mod spells;
mod toggle;

pub use filter::FilterState;
pub use identities::{ability_toggle_id, identity_views, AbilityView, IdentityView, ResolvedAbility};
pub use matcher::{is_in_active_list, is_relevant, is_visible, search_haystack};
pub use spells::{spell_detail, visible_spells, BucketView, DetailField, SpellEntryView, FILTER_PANEL_ID};
pub use toggle::ToggleSet;
