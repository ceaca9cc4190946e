//! Header component renderer.
//!
//! Renders the title bar with centered bold text and theme colors.

use crate::ui::helpers::{text_width, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at `row` and returns the next row.
///
/// The title is centered and the line padded to the full width so an
/// optional header background spans the pane. If the width cannot be split
/// evenly, the right padding is the larger one.
pub fn render_header(canvas: &mut Canvas, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let title_len = text_width(&title);
    let padding = cols.saturating_sub(title_len) / 2;

    canvas.move_to(row, 1);
    canvas.put(Theme::bold());
    canvas.put(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        canvas.put(&Theme::bg(bg));
    }

    canvas.pad(padding);
    canvas.put(&title);
    canvas.pad(cols.saturating_sub(padding + title_len));

    canvas.put(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    #[test]
    fn title_is_centered() {
        let mut canvas = Canvas::new();
        let header = HeaderInfo { title: "Fleet".to_string() };
        let next = render_header(&mut canvas, 2, &header, &Theme::default(), 11);
        assert_eq!(next, 3);
        assert_eq!(strip_ansi(canvas.as_str()), "   Fleet   ");
    }
}
