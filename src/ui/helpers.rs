//! Shared rendering utilities.
//!
//! Components draw into a [`Canvas`], a string buffer of text and ANSI escape
//! sequences, rather than printing directly. The renderer prints the finished
//! frame once, and tests can inspect it.
//!
//! Text helpers operate on `char`s, not bytes, so vehicle names in any script
//! are cut on character boundaries.

use std::fmt::Write as _;

/// A frame under construction.
#[derive(Debug, Default)]
pub struct Canvas {
    buffer: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions the cursor at a 1-indexed row and column.
    pub fn move_to(&mut self, row: usize, col: usize) {
        let _ = write!(self.buffer, "\u{1b}[{row};{col}H");
    }

    /// Appends text or an escape sequence at the cursor.
    pub fn put(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Appends `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buffer.extend(std::iter::repeat(' ').take(count));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }
}

/// Display width of `text` in terminal columns, one per `char`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` columns, ending in `…` when shortened.
///
/// # Example
///
/// ```rust
/// use fleetview::ui::helpers::truncate;
///
/// assert_eq!(truncate("Yamato", 10), "Yamato");
/// assert_eq!(truncate("Yamato", 4), "Yam…");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Word-wraps `text` into at most `max_lines` lines of `width` columns.
///
/// Words longer than a line are split. When text remains after the last
/// line, that line ends in `…`.
#[must_use]
pub fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        loop {
            let used = text_width(&current);
            let gap = usize::from(used > 0);
            if used + gap + word.len() <= width {
                if gap == 1 {
                    current.push(' ');
                }
                current.extend(word.iter());
                break;
            }
            if used > 0 {
                lines.push(std::mem::take(&mut current));
                continue;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let kept: String = last.chars().take(width.saturating_sub(1)).collect();
            *last = format!("{kept}…");
        }
    }
    lines
}

/// Removes ANSI CSI escape sequences, leaving the printed text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for terminator in chars.by_ref() {
                if terminator.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Splits a frame into `(row, text)` pairs, one per cursor move.
///
/// Text is stripped of styling. Used by tests to read frames back.
#[cfg(test)]
pub(crate) fn cursor_segments(frame: &str) -> Vec<(usize, String)> {
    let mut segments: Vec<(usize, String)> = Vec::new();
    let mut rest = frame;
    while let Some(start) = rest.find("\u{1b}[") {
        if let Some((_, text)) = segments.last_mut() {
            text.push_str(&rest[..start]);
        }
        let after = &rest[start + 2..];
        let Some(end) = after.find(|c: char| c.is_ascii_alphabetic()) else {
            break;
        };
        if after[end..].starts_with('H') {
            let row = after[..end].split(';').next().and_then(|r| r.parse().ok()).unwrap_or(0);
            segments.push((row, String::new()));
        }
        rest = &after[end + 1..];
    }
    if let Some((_, text)) = segments.last_mut() {
        text.push_str(rest);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("Гремящий", 5), "Грем…");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn wrap_breaks_on_words() {
        let lines = wrap("a fast destroyer with torpedoes", 10, 5);
        assert_eq!(lines, vec!["a fast", "destroyer", "with", "torpedoes"]);
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij", 4, 5), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_marks_clipped_text() {
        let lines = wrap("one two three four five six", 9, 2);
        assert_eq!(lines, vec!["one two", "three…"]);
    }

    #[test]
    fn wrap_with_no_room_is_empty() {
        assert!(wrap("text", 0, 3).is_empty());
        assert!(wrap("text", 3, 0).is_empty());
        assert!(wrap("   ", 3, 3).is_empty());
    }

    #[test]
    fn canvas_records_moves_and_text() {
        let mut canvas = Canvas::new();
        canvas.move_to(2, 5);
        canvas.put("hi");
        canvas.pad(2);
        assert_eq!(canvas.as_str(), "\u{1b}[2;5Hhi  ");
        assert_eq!(strip_ansi(canvas.as_str()), "hi  ");
    }
}
