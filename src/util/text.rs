use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns, Unicode-aware.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Ellipsis string used for truncation
const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Truncates a string to fit within a maximum display width, appending "..."
/// when text was cut off.
///
/// Width calculation is Unicode-aware (CJK and emoji count as 2 columns).
/// When the string already fits the original is borrowed, no allocation.
/// For widths of 3 columns or less there is no room for "char + ellipsis",
/// so as many characters as fit are returned without the ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    // Too narrow for ellipsis: take what fits.
    if max_width <= ELLIPSIS_WIDTH {
        let mut out = String::new();
        let mut used = 0;
        for c in s.chars() {
            let w = UnicodeWidthChar::width(c).unwrap_or(0);
            if used + w > max_width {
                break;
            }
            used += w;
            out.push(c);
        }
        return Cow::Owned(out);
    }

    let target = max_width - ELLIPSIS_WIDTH;
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > target {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}

/// Greedy word wrap to a maximum display width.
///
/// Used for description bodies in expanded detail panels, where truncation
/// would hide text. Words wider than the width are split hard rather than
/// overflowing. A zero width yields no lines.
pub fn wrap_to_width(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in s.split_whitespace() {
        let word_width = display_width(word);
        let sep = usize::from(line_width > 0);

        if line_width + sep + word_width <= max_width {
            if sep == 1 {
                line.push(' ');
            }
            line.push_str(word);
            line_width += sep + word_width;
            continue;
        }

        if line_width > 0 {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        if word_width <= max_width {
            line.push_str(word);
            line_width = word_width;
        } else {
            // Hard-split an oversized word across lines.
            let mut used = 0;
            for c in word.chars() {
                let w = UnicodeWidthChar::width(c).unwrap_or(0);
                if used + w > max_width && used > 0 {
                    lines.push(std::mem::take(&mut line));
                    used = 0;
                }
                line.push(c);
                used += w;
            }
            line_width = used;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn truncate_passes_through_fitting_strings() {
        assert_eq!(truncate_to_width("Short", 10), "Short");
        assert!(matches!(truncate_to_width("Short", 10), Cow::Borrowed(_)));
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("Hello World", 8), "Hello...");
    }

    #[test]
    fn truncate_narrow_widths() {
        assert_eq!(truncate_to_width("Test", 0), "");
        assert_eq!(truncate_to_width("Test", 1), "T");
        assert_eq!(truncate_to_width("Test", 3), "Tes");
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap_to_width("the quick brown fox", 9),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn wrap_hard_splits_oversized_words() {
        assert_eq!(
            wrap_to_width("abcdefgh", 3),
            vec!["abc", "def", "gh"]
        );
    }

    #[test]
    fn wrap_of_empty_input_is_empty() {
        assert!(wrap_to_width("", 10).is_empty());
        assert!(wrap_to_width("anything", 0).is_empty());
    }
}
