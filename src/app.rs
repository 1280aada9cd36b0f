//! Application state.
//!
//! `App` owns the compendium, the filter state, and the three expansion
//! sets, and exposes the mutations the input layer calls. All state changes
//! are synchronous; every render recomputes the visible list from scratch.

use crate::browse::{
    identity_views, visible_spells, BucketView, FilterState, IdentityView, ToggleSet,
    FILTER_PANEL_ID,
};
use crate::catalog::{Compendium, ALL_LEVELS, SPELL_LISTS};
use crate::config::Config;
use crate::keybindings::KeybindingRegistry;
use crate::theme::{StyleMap, ThemeVariant};
use ratatui::style::Style;
use std::time::{Duration, Instant};

/// How long a status message stays on screen.
const STATUS_TTL: Duration = Duration::from_secs(3);

/// Rows jumped by PageDown / PageUp.
const PAGE_JUMP: usize = 10;

// ============================================================================
// Pages and Rows
// ============================================================================

/// Which page is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Spells,
    Identities,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Self::Spells => "Spells",
            Self::Identities => "Core Identities",
        }
    }
}

/// An interactive row the cursor can land on. Headings and detail panels are
/// rendered but never selected; everything clickable on the site is a `Row`
/// here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// The collapsible "Search and Filter" header.
    FilterPanel,
    /// The search input field; activating it enters search mode.
    SearchField,
    /// The "All" button for spell lists.
    AllLists,
    ListTag(&'static str),
    /// The "All" button for levels.
    AllLevels,
    Level(u8),
    /// A spell entry header, by id.
    Spell(String),
    /// An identity header, by id.
    Identity(String),
    /// An ability row, by composite toggle id.
    Ability(String),
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    pub compendium: Compendium,
    pub page: Page,
    pub filter: FilterState,
    /// Spell entry expansion; also holds the filter panel sentinel id.
    pub expanded_spells: ToggleSet,
    pub expanded_identities: ToggleSet,
    pub expanded_abilities: ToggleSet,

    /// Cursor index into `rows()` for the current page.
    pub selected: usize,
    /// First visible line of the current page (managed by the renderer).
    pub scroll: usize,
    pub search_mode: bool,
    /// Search text snapshot taken on entering search mode, restored on
    /// cancel.
    search_before: String,
    pub show_help: bool,

    pub theme: ThemeVariant,
    styles: StyleMap,
    pub keybindings: KeybindingRegistry,

    pub status_message: Option<(String, Instant)>,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(compendium: Compendium, config: &Config) -> Self {
        let theme = ThemeVariant::from_str_name(&config.theme).unwrap_or(ThemeVariant::Dark);
        let styles = StyleMap::from_palette(&theme.palette());

        let mut keybindings = KeybindingRegistry::new();
        for warning in keybindings.apply_overrides(&config.keybindings) {
            tracing::warn!(%warning, "Keybinding override ignored");
        }

        Self {
            compendium,
            page: Page::Spells,
            filter: FilterState::default(),
            expanded_spells: ToggleSet::new(),
            expanded_identities: ToggleSet::new(),
            expanded_abilities: ToggleSet::new(),
            selected: 0,
            scroll: 0,
            search_mode: false,
            search_before: String::new(),
            show_help: false,
            theme,
            styles,
            keybindings,
            status_message: None,
            needs_redraw: true,
        }
    }

    // -- Theme and chrome --

    pub fn style(&self, role: &str) -> Style {
        self.styles.get(role)
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.styles = StyleMap::from_palette(&self.theme.palette());
        self.set_status(format!("Theme: {}", self.theme.name()));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), Instant::now()));
        self.needs_redraw = true;
    }

    /// Drop an expired status message. Returns true if one was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        match &self.status_message {
            Some((_, at)) if at.elapsed() > STATUS_TTL => {
                self.status_message = None;
                true
            }
            _ => false,
        }
    }

    // -- Derived views --

    /// The visible spell list for the current filter and expansion state.
    pub fn spell_buckets(&self) -> Vec<BucketView> {
        visible_spells(&self.compendium, &self.filter, &self.expanded_spells)
    }

    pub fn identity_views(&self) -> Vec<IdentityView> {
        identity_views(
            &self.compendium,
            &self.expanded_identities,
            &self.expanded_abilities,
        )
    }

    pub fn filter_panel_expanded(&self) -> bool {
        self.expanded_spells.is_expanded(FILTER_PANEL_ID)
    }

    /// Interactive rows for the current page, in render order.
    pub fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        match self.page {
            Page::Spells => {
                rows.push(Row::FilterPanel);
                if self.filter_panel_expanded() {
                    rows.push(Row::SearchField);
                    rows.push(Row::AllLists);
                    for tag in SPELL_LISTS {
                        rows.push(Row::ListTag(tag));
                    }
                    rows.push(Row::AllLevels);
                    for level in ALL_LEVELS {
                        rows.push(Row::Level(level));
                    }
                }
                for bucket in self.spell_buckets() {
                    for entry in bucket.entries {
                        rows.push(Row::Spell(entry.id));
                    }
                }
            }
            Page::Identities => {
                for identity in self.identity_views() {
                    rows.push(Row::Identity(identity.id.clone()));
                    if identity.expanded {
                        for ability in identity.abilities {
                            rows.push(Row::Ability(ability.toggle_id));
                        }
                    }
                }
            }
        }
        rows
    }

    pub fn selected_row(&self) -> Option<Row> {
        self.rows().into_iter().nth(self.selected)
    }

    // -- Navigation --

    fn clamp_selection(&mut self) {
        let len = self.rows().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn nav_down(&mut self) {
        let len = self.rows().len();
        if self.selected + 1 < len {
            self.selected += 1;
            self.needs_redraw = true;
        }
    }

    pub fn nav_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.needs_redraw = true;
        }
    }

    pub fn page_down(&mut self) {
        let len = self.rows().len();
        self.selected = (self.selected + PAGE_JUMP).min(len.saturating_sub(1));
        self.needs_redraw = true;
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(PAGE_JUMP);
        self.needs_redraw = true;
    }

    pub fn switch_page(&mut self) {
        self.page = match self.page {
            Page::Spells => Page::Identities,
            Page::Identities => Page::Spells,
        };
        self.selected = 0;
        self.scroll = 0;
        self.search_mode = false;
        self.needs_redraw = true;
    }

    // -- Activation --

    /// Activate the row under the cursor. Every branch is a toggle; nothing
    /// here can fail.
    pub fn activate_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };

        match row {
            Row::FilterPanel => self.expanded_spells.toggle(FILTER_PANEL_ID),
            Row::SearchField => self.enter_search(),
            Row::AllLists => self.filter.toggle_all_lists(),
            Row::ListTag(tag) => self.filter.toggle_list(tag),
            Row::AllLevels => self.filter.toggle_all_levels(),
            Row::Level(n) => self.filter.toggle_level(n),
            Row::Spell(id) => self.expanded_spells.toggle(&id),
            Row::Identity(id) => self.expanded_identities.toggle(&id),
            Row::Ability(toggle_id) => self.expanded_abilities.toggle(&toggle_id),
        }

        // Filter changes can shrink the row list out from under the cursor.
        self.clamp_selection();
        self.needs_redraw = true;
    }

    // -- Search --

    pub fn enter_search(&mut self) {
        self.search_before = self.filter.search_text().to_string();
        self.search_mode = true;
        self.needs_redraw = true;
    }

    /// Confirm the current search text and leave search mode.
    pub fn commit_search(&mut self) {
        self.search_mode = false;
        self.clamp_selection();
        self.needs_redraw = true;
    }

    /// Cancel search mode and restore the text from before it was entered.
    pub fn cancel_search(&mut self) {
        let before = std::mem::take(&mut self.search_before);
        self.filter.set_search_text(before);
        self.search_mode = false;
        self.clamp_selection();
        self.needs_redraw = true;
    }

    /// Live input: the list refilters on every keystroke.
    pub fn search_push(&mut self, c: char) {
        let mut text = self.filter.search_text().to_string();
        text.push(c);
        self.filter.set_search_text(text);
        self.clamp_selection();
        self.needs_redraw = true;
    }

    pub fn search_pop(&mut self) {
        let mut text = self.filter.search_text().to_string();
        text.pop();
        self.filter.set_search_text(text);
        self.clamp_selection();
        self.needs_redraw = true;
    }

    /// Clear an active search entirely (Back action outside search mode).
    pub fn clear_search(&mut self) {
        self.filter.set_search_text("");
        self.clamp_selection();
        self.needs_redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        let compendium: Compendium = serde_json::from_str(
            r#"{
                "CANTRIPS": [
                    {"id": "a", "name": "Light", "tags": ["Arcane"], "level": 0},
                    {"id": "b", "name": "Bless", "tags": ["Divine"], "level": 0}
                ],
                "CORE_IDENTITIES": [
                    {"id": "warden", "name": "Warden", "coreAbilityIDs": ["rage"]}
                ],
                "CORE_ABILITIES": [
                    {"id": "rage", "name": "Rage", "description": "Hit things."}
                ]
            }"#,
        )
        .unwrap();
        App::new(compendium, &Config::default())
    }

    fn select(app: &mut App, row: &Row) {
        let rows = app.rows();
        app.selected = rows.iter().position(|r| r == row).unwrap();
    }

    #[test]
    fn spells_page_rows_start_collapsed() {
        let app = app();
        assert_eq!(
            app.rows(),
            vec![
                Row::FilterPanel,
                Row::Spell("a".into()),
                Row::Spell("b".into())
            ]
        );
    }

    #[test]
    fn expanding_the_filter_panel_inserts_filter_rows() {
        let mut app = app();
        app.activate_selected(); // cursor starts on FilterPanel
        let rows = app.rows();

        assert!(rows.contains(&Row::SearchField));
        assert!(rows.contains(&Row::AllLists));
        assert!(rows.contains(&Row::ListTag("Arcane")));
        assert!(rows.contains(&Row::AllLevels));
        assert!(rows.contains(&Row::Level(9)));
        // Entries still follow the filter section.
        assert_eq!(rows.last(), Some(&Row::Spell("b".into())));
    }

    #[test]
    fn toggling_a_list_filter_hides_matching_entries() {
        let mut app = app();
        app.activate_selected(); // expand filter panel
        select(&mut app, &Row::ListTag("Divine"));
        app.activate_selected();

        let rows = app.rows();
        assert!(rows.contains(&Row::Spell("a".into())));
        assert!(!rows.contains(&Row::Spell("b".into())));
    }

    #[test]
    fn cursor_clamps_when_the_list_shrinks() {
        let mut app = app();
        app.activate_selected(); // expand filter panel
        select(&mut app, &Row::AllLevels);
        app.activate_selected(); // all levels off: both entries vanish

        assert!(app.selected < app.rows().len());
    }

    #[test]
    fn activating_a_spell_toggles_its_detail() {
        let mut app = app();
        select(&mut app, &Row::Spell("a".into()));
        app.activate_selected();
        assert!(app.expanded_spells.is_expanded("a"));

        app.activate_selected();
        assert!(!app.expanded_spells.is_expanded("a"));
    }

    #[test]
    fn identities_page_nests_ability_rows_under_expanded_identities() {
        let mut app = app();
        app.switch_page();
        assert_eq!(app.rows(), vec![Row::Identity("warden".into())]);

        app.activate_selected();
        assert_eq!(
            app.rows(),
            vec![
                Row::Identity("warden".into()),
                Row::Ability("warden--rage".into())
            ]
        );
    }

    #[test]
    fn search_cancel_restores_prior_text() {
        let mut app = app();
        app.enter_search();
        app.search_push('b');
        app.search_push('l');
        assert_eq!(app.filter.search_text(), "bl");

        app.cancel_search();
        assert_eq!(app.filter.search_text(), "");
    }

    #[test]
    fn search_commit_keeps_text() {
        let mut app = app();
        app.enter_search();
        app.search_push('x');
        app.commit_search();
        assert_eq!(app.filter.search_text(), "x");
        assert!(!app.search_mode);
    }
}
