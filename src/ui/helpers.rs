//! Shared rendering helpers for the page views.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;

/// Accumulates the display lines of a page while tracking which line holds
/// the cursor.
///
/// Pages interleave non-interactive lines (headings, detail panels) with
/// interactive rows. Interactive rows are pushed through `push_row`, which
/// counts them in the same order `App::rows()` produces, so the n-th
/// `push_row` call corresponds to row index n.
pub(super) struct PageLines {
    pub lines: Vec<Line<'static>>,
    selected: usize,
    row_idx: usize,
    selected_line: Option<usize>,
}

impl PageLines {
    pub fn new(selected: usize) -> Self {
        Self {
            lines: Vec::new(),
            selected,
            row_idx: 0,
            selected_line: None,
        }
    }

    /// Push a non-interactive line.
    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    /// Push an interactive row. When it is the row under the cursor the
    /// whole line is restyled with `selected_style` and its position
    /// recorded for scrolling.
    pub fn push_row(&mut self, line: Line<'static>, selected_style: Style) {
        let line = if self.row_idx == self.selected {
            self.selected_line = Some(self.lines.len());
            line.style(selected_style)
        } else {
            line
        };
        self.row_idx += 1;
        self.lines.push(line);
    }

    /// Line index of the cursor row, if any row was pushed as selected.
    pub fn selected_line(&self) -> Option<usize> {
        self.selected_line
    }
}

/// Adjust `scroll` so `selected_line` is visible within `height` lines.
pub(super) fn scroll_into_view(scroll: usize, selected_line: Option<usize>, height: usize) -> usize {
    let Some(line) = selected_line else {
        return scroll;
    };
    if height == 0 {
        return 0;
    }
    if line < scroll {
        line
    } else if line >= scroll + height {
        line + 1 - height
    } else {
        scroll
    }
}

/// A centered sub-rectangle taking the given percentages of `area`.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_keeps_selection_visible() {
        // Above the window: jump up.
        assert_eq!(scroll_into_view(10, Some(5), 4), 5);
        // Below the window: selection becomes the last visible line.
        assert_eq!(scroll_into_view(0, Some(9), 4), 6);
        // Already visible: unchanged.
        assert_eq!(scroll_into_view(3, Some(5), 4), 3);
        // No selection on screen: unchanged.
        assert_eq!(scroll_into_view(7, None, 4), 7);
    }

    #[test]
    fn page_lines_tracks_the_selected_row() {
        let mut pl = PageLines::new(1);
        pl.push(Line::from("heading"));
        pl.push_row(Line::from("row 0"), Style::default());
        pl.push(Line::from("detail"));
        pl.push_row(Line::from("row 1"), Style::default());

        assert_eq!(pl.selected_line(), Some(3));
        assert_eq!(pl.lines.len(), 4);
    }
}
