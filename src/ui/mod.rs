//! Terminal presentation layer.
//!
//! Consumes the view models built by [`crate::browse`] and renders them with
//! ratatui. No filtering or toggle logic lives here — the UI only displays
//! state and forwards key presses to the [`crate::app::App`] mutations.

mod help;
mod helpers;
mod identities;
mod input;
mod loop_runner;
mod render;
mod spells;
mod status;

pub use loop_runner::run;
