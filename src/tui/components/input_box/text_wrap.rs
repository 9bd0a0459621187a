//! Pure text wrapping utilities and dimensional constants for the InputBox.
//!
//! These are stateless helpers with no dependency on InputBox itself.

use unicode_width::UnicodeWidthStr;

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Visible content lines; the box never grows past this
pub(super) const MAX_VISIBLE_LINES: u16 = 4;
/// Offset from area edge to first content column (border + padding)
pub(super) const CONTENT_OFFSET_X: u16 = 2;
/// Offset from area edge to first content row (border)
pub(super) const CONTENT_OFFSET_Y: u16 = 1;

/// Build textwrap options configured for the input box inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Calculate the inner content width after subtracting border/padding overhead.
/// Returns 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrap `text` into owned display lines.
pub(super) fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Locate the cursor in wrapped coordinates: (line, column in cells).
///
/// `before_cursor` is the buffer up to the cursor byte offset.
pub(super) fn cursor_line_col(before_cursor: &str, width: u16) -> (u16, u16) {
    if width == 0 {
        return (0, 0);
    }

    let options = wrap_options(width);
    let lines = textwrap::wrap(before_cursor, &options);
    let mut line = lines.len().saturating_sub(1) as u16;

    // Cursor right after a newline that textwrap didn't emit as an empty line
    if before_cursor.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        line += 1;
    }

    // textwrap trims trailing spaces from wrapped segments, so measure the
    // logical line instead and subtract the segments before the last one.
    let logical = before_cursor
        .rfind('\n')
        .map(|i| &before_cursor[i + 1..])
        .unwrap_or(before_cursor);
    let segments = textwrap::wrap(logical, &options);
    let consumed: usize = segments
        .iter()
        .take(segments.len().saturating_sub(1))
        .map(|seg| seg.width())
        .sum();
    let col = logical.width().saturating_sub(consumed) as u16;

    (line, col.min(width))
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_width_subtracts_overhead() {
        assert_eq!(inner_width(40), 36);
        assert_eq!(inner_width(3), 0);
    }

    #[test]
    fn wrap_lines_zero_width() {
        assert_eq!(wrap_lines("hello", 0), vec![String::new()]);
    }

    #[test]
    fn wrap_lines_breaks_long_words() {
        let lines = wrap_lines("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_lines_keeps_newlines() {
        let lines = wrap_lines("one\ntwo", 20);
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn cursor_at_start() {
        assert_eq!(cursor_line_col("", 20), (0, 0));
    }

    #[test]
    fn cursor_after_text_on_first_line() {
        assert_eq!(cursor_line_col("hello", 20), (0, 5));
    }

    #[test]
    fn cursor_preserves_trailing_space() {
        assert_eq!(cursor_line_col("hello ", 20), (0, 6));
    }

    #[test]
    fn cursor_after_newline() {
        assert_eq!(cursor_line_col("hello\n", 20), (1, 0));
        assert_eq!(cursor_line_col("hello\nab", 20), (1, 2));
    }

    #[test]
    fn cursor_on_wrapped_line() {
        assert_eq!(cursor_line_col("abcdefghij", 4), (2, 2));
    }

    #[test]
    fn cursor_counts_wide_chars_by_cell() {
        // Each CJK char is two cells wide
        assert_eq!(cursor_line_col("日本", 20), (0, 4));
    }

    #[test]
    fn char_boundaries_multibyte() {
        let text = "aé b";
        assert_eq!(next_char_boundary(text, 0), 1);
        assert_eq!(next_char_boundary(text, 1), 3);
        assert_eq!(prev_char_boundary(text, 3), 1);
        assert_eq!(prev_char_boundary(text, 0), 0);
        assert_eq!(next_char_boundary(text, text.len()), text.len());
    }
}
