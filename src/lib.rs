//! Grimoire: a terminal compendium browser for tabletop RPG reference
//! material.
//!
//! The crate is split into a pure core and a presentation shell:
//!
//! - [`catalog`] loads the static content source (spells, identities,
//!   abilities) from JSON.
//! - [`browse`] holds the interaction model: toggle sets for expansion
//!   state, the filter state controller, the visibility predicate, and the
//!   view-model builders. Everything in it is synchronous and total; no
//!   operation can fail.
//! - [`app`], [`ui`], [`theme`], [`keybindings`], and [`config`] form the
//!   ratatui shell around the core.

pub mod app;
pub mod browse;
pub mod catalog;
pub mod config;
pub mod keybindings;
pub mod theme;
pub mod ui;
pub mod util;
