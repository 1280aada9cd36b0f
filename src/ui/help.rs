//! Help overlay — keybinding table grouped by context.
//!
//! Displays actual bindings including any user overrides from config.

use super::helpers::centered_rect;
use crate::app::App;
use crate::keybindings::Context;
use ratatui::{
    layout::Constraint,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Row, Table},
    Frame,
};

/// Context display order and labels for the help screen.
const CONTEXT_ORDER: [(Context, &str); 3] = [
    (Context::Global, "General"),
    (Context::Browse, "Browse"),
    (Context::Search, "Search"),
];

/// Render the help overlay on top of the current view.
pub(super) fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    let overlay = centered_rect(70, 80, area);
    if overlay.width < 20 || overlay.height < 6 {
        return;
    }

    f.render_widget(Clear, overlay);

    let bindings = app.keybindings.all_bindings();
    let bold = app.style("section_heading").add_modifier(Modifier::BOLD);

    let mut rows: Vec<Row> = Vec::new();
    for (ctx, label) in &CONTEXT_ORDER {
        let ctx_bindings: Vec<_> = bindings.iter().filter(|(c, _, _, _)| c == ctx).collect();
        if ctx_bindings.is_empty() {
            continue;
        }

        rows.push(Row::new(vec![
            Line::from(Span::styled(format!("-- {} --", label), bold)),
            Line::from(""),
        ]));

        for (_, key, _, description) in ctx_bindings {
            rows.push(Row::new(vec![
                Line::from(format!("  {}", key)),
                Line::from(description.to_string()),
            ]));
        }

        rows.push(Row::new(vec![Line::from(""), Line::from("")]));
    }

    let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(20)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.style("panel_border_focused"))
            .title("Help — press Esc to close"),
    );

    f.render_widget(table, overlay);
}
