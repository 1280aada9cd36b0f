use crate::app::{App, Page};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_str())
    } else if app.search_mode {
        Cow::Borrowed("Type to search | ESC cancel | ENTER confirm")
    } else {
        match app.page {
            Page::Spells => Cow::Borrowed(
                "[j/k]move [Enter]toggle [/]search [Tab]identities [T]heme [?]help [q]uit",
            ),
            Page::Identities => {
                Cow::Borrowed("[j/k]move [Enter]toggle [Tab]spells [T]heme [?]help [q]uit")
            }
        }
    };

    let paragraph = Paragraph::new(text).style(app.style("status_bar"));
    f.render_widget(paragraph, area);
}
