//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- List entries --
    pub entry_name: Style,
    pub entry_selected: Style,
    pub entry_extra: Style,
    pub entry_tag: Style,
    pub entry_placeholder: Style,

    // -- Expanded detail panels --
    pub detail_label: Style,
    pub detail_value: Style,

    // -- Headings --
    pub bucket_heading: Style,
    pub section_heading: Style,

    // -- Filter panel --
    pub filter_active: Style,
    pub filter_inactive: Style,
    pub search_prompt: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            entry_name: Style::default().add_modifier(Modifier::BOLD),
            entry_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            entry_extra: Style::default().fg(Color::DarkGray),
            entry_tag: Style::default().fg(Color::Cyan),
            entry_placeholder: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::ITALIC),

            detail_label: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            detail_value: Style::default(),

            bucket_heading: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            section_heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),

            filter_active: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            filter_inactive: Style::default().fg(Color::DarkGray),
            search_prompt: Style::default().fg(Color::Yellow),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
        }
    }

    /// Light palette — adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            entry_name: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            entry_selected: Style::default().bg(Color::Blue).fg(Color::White),
            entry_extra: Style::default().fg(Color::DarkGray),
            entry_tag: Style::default().fg(Color::Blue),
            entry_placeholder: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::ITALIC),

            detail_label: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            detail_value: Style::default().fg(Color::Black),

            bucket_heading: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            section_heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),

            filter_active: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            filter_inactive: Style::default().fg(Color::DarkGray),
            search_prompt: Style::default().fg(Color::Magenta),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
        }
    }
}

// ============================================================================
// Style Map — string-keyed lookup
// ============================================================================

/// String-keyed style lookup.
///
/// Built from a `ColorPalette`, this allows resolving role names (e.g.
/// `"bucket_heading"`) to their concrete `Style` at runtime.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 15] = [
    "entry_name",
    "entry_selected",
    "entry_extra",
    "entry_tag",
    "entry_placeholder",
    "detail_label",
    "detail_value",
    "bucket_heading",
    "section_heading",
    "filter_active",
    "filter_inactive",
    "search_prompt",
    "status_bar",
    "panel_border",
    "panel_border_focused",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 15] = [
            p.entry_name,
            p.entry_selected,
            p.entry_extra,
            p.entry_tag,
            p.entry_placeholder,
            p.detail_label,
            p.detail_value,
            p.bucket_heading,
            p.section_heading,
            p.filter_active,
            p.filter_inactive,
            p.search_prompt,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
        ];

        Self {
            map: ROLE_NAMES.into_iter().zip(styles).collect(),
        }
    }

    /// Resolve a role name to its style. Unknown roles resolve to the
    /// default style rather than panicking.
    pub fn get(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}
