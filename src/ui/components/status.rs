//! Status renderers: the loading indicator, the failure message and the
//! empty-result notice.
//!
//! Loading and failure replace the whole pane. The failure screen is the
//! error message and nothing else: no header, filters or hints.

use crate::ui::helpers::{text_width, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, GridView};

/// Renders the loading indicator on the first line.
pub fn render_loading(canvas: &mut Canvas, text: &str, theme: &Theme) {
    canvas.move_to(1, 1);
    canvas.put(&Theme::fg(&theme.colors.loading_fg));
    canvas.put(text);
    canvas.put(Theme::reset());
}

/// Renders the error message verbatim on the first line.
///
/// The message is not truncated; the terminal wraps it if it is long.
pub fn render_failure(canvas: &mut Canvas, message: &str, theme: &Theme) {
    canvas.move_to(1, 1);
    canvas.put(&Theme::fg(&theme.colors.error_fg));
    canvas.put(message);
    canvas.put(Theme::reset());
}

/// Renders the empty-result notice centered in the first lines of the grid.
pub fn render_empty_state(canvas: &mut Canvas, empty: &EmptyState, grid: &GridView, theme: &Theme, cols: usize) {
    if grid.viewport_height == 0 {
        return;
    }

    let message = truncate(&empty.message, cols);
    let msg_len = text_width(&message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    let message_row = grid.viewport_top + (grid.viewport_height / 3).min(grid.viewport_height - 1);
    canvas.move_to(message_row, 1);
    canvas.put(&Theme::fg(&theme.colors.empty_state_fg));
    canvas.pad(msg_padding);
    canvas.put(&message);
    canvas.pad(cols.saturating_sub(msg_padding + msg_len));
    canvas.put(Theme::reset());

    if message_row + 1 >= grid.viewport_top + grid.viewport_height {
        return;
    }

    let subtitle = truncate(&empty.subtitle, cols);
    let sub_len = text_width(&subtitle);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    canvas.move_to(message_row + 1, 1);
    canvas.put(Theme::dim());
    canvas.put(&Theme::fg(&theme.colors.text_dim));
    canvas.pad(sub_padding);
    canvas.put(&subtitle);
    canvas.pad(cols.saturating_sub(sub_padding + sub_len));
    canvas.put(Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::{cursor_segments, strip_ansi};

    fn grid(viewport_height: usize) -> GridView {
        GridView {
            viewport_top: 5,
            viewport_height,
            cells: Vec::new(),
            first_row: 0,
            row_count: 0,
        }
    }

    #[test]
    fn failure_is_only_the_message() {
        let mut canvas = Canvas::new();
        render_failure(&mut canvas, "Failed to fetch", &Theme::default());
        assert_eq!(strip_ansi(canvas.as_str()), "Failed to fetch");
    }

    #[test]
    fn empty_state_is_centered_in_the_viewport() {
        let empty = EmptyState {
            message: "Nothing".to_string(),
            subtitle: "Press x".to_string(),
        };
        let mut canvas = Canvas::new();
        render_empty_state(&mut canvas, &empty, &grid(9), &Theme::default(), 11);
        let segments = cursor_segments(canvas.as_str());
        assert_eq!(
            segments,
            vec![(8, "  Nothing  ".to_string()), (9, "  Press x  ".to_string())]
        );
    }

    #[test]
    fn single_line_viewport_shows_only_the_message() {
        let empty = EmptyState {
            message: "Nothing".to_string(),
            subtitle: "Press x".to_string(),
        };
        let mut canvas = Canvas::new();
        render_empty_state(&mut canvas, &empty, &grid(1), &Theme::default(), 7);
        assert_eq!(cursor_segments(canvas.as_str()), vec![(5, "Nothing".to_string())]);

        let mut canvas = Canvas::new();
        render_empty_state(&mut canvas, &empty, &grid(0), &Theme::default(), 7);
        assert!(canvas.as_str().is_empty());
    }
}
