//! Keyboard input handling.
//!
//! Search mode captures printable characters for live text entry; everything
//! else dispatches through the keybinding registry in the Browse context.

use super::loop_runner::Flow;
use crate::app::App;
use crate::browse::FILTER_PANEL_ID;
use crate::keybindings::{Action, Context};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub(super) fn handle_key(app: &mut App, key: KeyEvent) -> Flow {
    // Ignore key release events (Windows terminals report both).
    if key.kind != KeyEventKind::Press {
        return Flow::Continue;
    }

    if app.search_mode {
        return handle_search_key(app, key);
    }

    if app.show_help {
        return handle_help_key(app, key);
    }

    let action = app
        .keybindings
        .action_for_key(key.code, key.modifiers, Context::Browse);

    match action {
        Some(Action::Quit) => return Flow::Quit,
        Some(Action::NavDown) => app.nav_down(),
        Some(Action::NavUp) => app.nav_up(),
        Some(Action::PageDown) => app.page_down(),
        Some(Action::PageUp) => app.page_up(),
        Some(Action::Select) => app.activate_selected(),
        Some(Action::Back) => {
            // Outside search mode, Esc clears a lingering search filter.
            if !app.filter.search_text().is_empty() {
                app.clear_search();
                app.set_status("Search cleared");
            }
        }
        Some(Action::SwitchPage) => app.switch_page(),
        Some(Action::EnterSearch) => {
            // The search field lives inside the filter panel; make sure it
            // is on screen while typing.
            if !app.filter_panel_expanded() {
                app.expanded_spells.toggle(FILTER_PANEL_ID);
            }
            app.enter_search();
        }
        Some(Action::CycleTheme) => app.cycle_theme(),
        Some(Action::ShowHelp) => {
            app.show_help = true;
            app.needs_redraw = true;
        }
        Some(Action::ExitSearch) | Some(Action::CommitSearch) | None => {}
    }

    Flow::Continue
}

fn handle_search_key(app: &mut App, key: KeyEvent) -> Flow {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_push(c);
            return Flow::Continue;
        }
        KeyCode::Backspace => {
            app.search_pop();
            return Flow::Continue;
        }
        _ => {}
    }

    match app
        .keybindings
        .action_for_key(key.code, key.modifiers, Context::Search)
    {
        Some(Action::ExitSearch) => app.cancel_search(),
        Some(Action::CommitSearch) => app.commit_search(),
        Some(Action::Quit) => return Flow::Quit,
        _ => {}
    }

    Flow::Continue
}

fn handle_help_key(app: &mut App, key: KeyEvent) -> Flow {
    match app
        .keybindings
        .action_for_key(key.code, key.modifiers, Context::Browse)
    {
        Some(Action::Quit) => Flow::Quit,
        Some(Action::Back) | Some(Action::ShowHelp) => {
            app.show_help = false;
            app.needs_redraw = true;
            Flow::Continue
        }
        _ => Flow::Continue,
    }
}
