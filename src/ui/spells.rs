//! Spells page: the collapsible filter panel followed by the level-bucketed
//! spell list.

use super::helpers::{scroll_into_view, PageLines};
use crate::app::App;
use crate::browse::{BucketView, SpellEntryView};
use crate::catalog::{level_label, ALL_LEVELS, SPELL_LISTS};
use crate::util::{truncate_to_width, wrap_to_width};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the spells page into `area`.
pub(super) fn render(f: &mut Frame, app: &mut App, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border_focused"))
        .title("Spells");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    let mut pl = PageLines::new(app.selected);

    push_filter_section(&mut pl, app);

    for bucket in app.spell_buckets() {
        push_bucket(&mut pl, app, &bucket, width);
    }

    app.scroll = scroll_into_view(app.scroll, pl.selected_line(), inner.height as usize);
    let paragraph = Paragraph::new(pl.lines).scroll((app.scroll as u16, 0));
    f.render_widget(paragraph, inner);
}

/// The collapsible "Search and Filter" section. Its header shares the spell
/// toggle set under a sentinel id, so it behaves exactly like an entry.
fn push_filter_section(pl: &mut PageLines, app: &App) {
    let chevron = if app.filter_panel_expanded() { "v" } else { ">" };
    pl.push_row(
        Line::from(Span::styled(
            format!("{chevron} Search and Filter"),
            app.style("section_heading"),
        )),
        app.style("entry_selected"),
    );

    if !app.filter_panel_expanded() {
        return;
    }

    let search_text = app.filter.search_text();
    let cursor = if app.search_mode { "_" } else { "" };
    pl.push_row(
        Line::from(Span::styled(
            format!("  Search: {search_text}{cursor}"),
            app.style("search_prompt"),
        )),
        app.style("entry_selected"),
    );

    pl.push(Line::from(Span::styled(
        "  Spell Lists".to_string(),
        app.style("section_heading"),
    )));
    pl.push_row(
        filter_button("All", app.filter.all_lists_active(), app),
        app.style("entry_selected"),
    );
    for tag in SPELL_LISTS {
        pl.push_row(
            filter_button(tag, app.filter.list_active(tag), app),
            app.style("entry_selected"),
        );
    }

    pl.push(Line::from(Span::styled(
        "  Levels".to_string(),
        app.style("section_heading"),
    )));
    pl.push_row(
        filter_button("All", app.filter.all_levels_active(), app),
        app.style("entry_selected"),
    );
    for level in ALL_LEVELS {
        pl.push_row(
            filter_button(level_label(level), app.filter.level_active(level), app),
            app.style("entry_selected"),
        );
    }

    pl.blank();
}

fn filter_button(label: &str, active: bool, app: &App) -> Line<'static> {
    let (marker, style) = if active {
        ("[x]", app.style("filter_active"))
    } else {
        ("[ ]", app.style("filter_inactive"))
    };
    Line::from(Span::styled(format!("  {marker} {label}"), style))
}

fn push_bucket(pl: &mut PageLines, app: &App, bucket: &BucketView, width: usize) {
    pl.push(Line::from(Span::styled(
        bucket.label.to_string(),
        app.style("bucket_heading"),
    )));

    for entry in &bucket.entries {
        push_entry(pl, app, entry, width);
    }

    pl.blank();
}

fn push_entry(pl: &mut PageLines, app: &App, entry: &SpellEntryView, width: usize) {
    let chevron = if entry.expanded { "v" } else { ">" };
    let mut spans = vec![Span::styled(
        format!(
            "{chevron} {}",
            truncate_to_width(&entry.name, width.saturating_sub(24))
        ),
        app.style("entry_name"),
    )];

    if !entry.tags.is_empty() {
        spans.push(Span::styled(
            format!(" [{}]", entry.tags.join(", ")),
            app.style("entry_tag"),
        ));
    }

    // Collapsed rows show the extra-info field; expanded rows show it in the
    // detail panel instead.
    if !entry.expanded && !entry.extra_info.is_empty() {
        spans.push(Span::styled(
            format!("  {}", entry.extra_info),
            app.style("entry_extra"),
        ));
    }

    pl.push_row(Line::from(spans), app.style("entry_selected"));

    if !entry.expanded {
        return;
    }

    let wrap_width = width.saturating_sub(4).max(8);
    for field in &entry.detail {
        match field.label {
            Some(label) => {
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
            None => {
                for line in wrap_to_width(&field.value, wrap_width) {
                    pl.push(Line::from(Span::styled(
                        format!("    {line}"),
                        app.style("detail_value"),
                    )));
                }
            }
        }
    }
    pl.blank();
}
