//! Core identities page: identity cards with nested ability collapsibles.

use super::helpers::{scroll_into_view, PageLines};
use crate::app::App;
use crate::browse::IdentityView;
use crate::util::wrap_to_width;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the identities page into `area`.
pub(super) fn render(f: &mut Frame, app: &mut App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border_focused"))
        .title("Core Identities");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    let mut pl = PageLines::new(app.selected);

    for identity in app.identity_views() {
        push_identity(&mut pl, app, &identity, width);
    }

    app.scroll = scroll_into_view(app.scroll, pl.selected_line(), inner.height as usize);
    let paragraph = Paragraph::new(pl.lines).scroll((app.scroll as u16, 0));
    f.render_widget(paragraph, inner);
}

fn push_identity(pl: &mut PageLines, app: &App, identity: &IdentityView, width: usize) {
    let chevron = if identity.expanded { "v" } else { ">" };
    pl.push_row(
        Line::from(Span::styled(
            format!("{chevron} {}", identity.name),
            app.style("entry_name"),
        )),
        app.style("entry_selected"),
    );

    if !identity.expanded {
        return;
    }

    let wrap_width = width.saturating_sub(6).max(8);

    for field in &identity.stats {
        let label = field.label.unwrap_or_default();
        let mut first = true;
        for line in wrap_to_width(&field.value, wrap_width) {
            if first {
                pl.push(Line::from(vec![
                    Span::styled(format!("    {label}: "), app.style("detail_label")),
                    Span::styled(line, app.style("detail_value")),
                ]));
                first = false;
            } else {
                pl.push(Line::from(Span::styled(
                    format!("      {line}"),
                    app.style("detail_value"),
                )));
            }
        }
    }

    if !identity.abilities.is_empty() {
        pl.push(Line::from(Span::styled(
            "    Core Abilities".to_string(),
            app.style("section_heading"),
        )));

        for ability in &identity.abilities {
            let chevron = if ability.expanded { "v" } else { ">" };
            let line = match &ability.ability {
                Some(resolved) => Line::from(Span::styled(
                    format!("    {chevron} {}", resolved.name),
                    app.style("entry_name"),
                )),
                // Unresolved ids stay visible so data problems surface in
                // the list instead of shrinking it.
                None => Line::from(Span::styled(
                    format!("    {chevron} (unknown ability: {})", ability.ability_id),
                    app.style("entry_placeholder"),
                )),
            };
            pl.push_row(line, app.style("entry_selected"));

            if ability.expanded {
                if let Some(resolved) = &ability.ability {
                    for line in wrap_to_width(&resolved.description, wrap_width) {
                        pl.push(Line::from(Span::styled(
                            format!("      {line}"),
                            app.style("detail_value"),
                        )));
                    }
                }
            }
        }
    }

    pl.blank();
}
