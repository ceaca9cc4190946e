//! Filter bar component renderer.
//!
//! Draws the three dropdown selectors side by side with the match count
//! right-aligned:
//!
//! ```text
//!  ◂ Level 5 ▸   ◂ All Nations ▸   ◂ All Types ▸                 4 of 12
//! ```
//!
//! The focused selector is drawn in the focus colors. Selectors that do not
//! fit the pane width are dropped from the right.

use crate::ui::helpers::{text_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CatalogView, FilterControl};

const GAP: usize = 2;

/// Renders the filter bar at `row` and returns the next row.
pub fn render_filter_bar(canvas: &mut Canvas, row: usize, catalog: &CatalogView, theme: &Theme, cols: usize) -> usize {
    canvas.move_to(row, 1);

    let mut used = 0;
    for control in &catalog.filters {
        let text = control_text(control);
        let width = text_width(&text);
        let gap = if used == 0 { 1 } else { GAP };
        if used + gap + width > cols {
            break;
        }

        canvas.pad(gap);
        if control.is_focused {
            canvas.put(Theme::bold());
            canvas.put(&Theme::fg(&theme.colors.focus_fg));
            canvas.put(&Theme::bg(&theme.colors.focus_bg));
        } else {
            canvas.put(&Theme::fg(&theme.colors.control_fg));
        }
        canvas.put(&text);
        canvas.put(Theme::reset());
        used += gap + width;
    }

    let summary_len = text_width(&catalog.summary);
    if used + GAP + summary_len + 1 <= cols {
        canvas.pad(cols - used - summary_len - 1);
        canvas.put(&Theme::fg(&theme.colors.text_dim));
        canvas.put(&catalog.summary);
        canvas.put(Theme::reset());
        canvas.pad(1);
    } else {
        canvas.pad(cols.saturating_sub(used));
    }

    row + 1
}

fn control_text(control: &FilterControl) -> String {
    format!(" ◂ {} ▸ ", control.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FilterDimension;
    use crate::ui::helpers::strip_ansi;
    use crate::ui::viewmodel::GridView;

    fn catalog() -> CatalogView {
        CatalogView {
            filters: FilterDimension::ALL
                .iter()
                .map(|&dimension| FilterControl {
                    dimension,
                    label: dimension.all_label().to_string(),
                    entry_count: 1,
                    is_focused: dimension == FilterDimension::Nation,
                })
                .collect(),
            summary: "3 of 3".to_string(),
            grid: GridView {
                viewport_top: 5,
                viewport_height: 10,
                cells: Vec::new(),
                first_row: 0,
                row_count: 0,
            },
            empty_state: None,
        }
    }

    #[test]
    fn bar_fills_the_line() {
        let mut canvas = Canvas::new();
        let next = render_filter_bar(&mut canvas, 3, &catalog(), &Theme::default(), 80);
        assert_eq!(next, 4);

        let text = strip_ansi(canvas.as_str());
        assert_eq!(text.chars().count(), 80);
        assert!(text.starts_with("  ◂ All Levels ▸    ◂ All Nations ▸"));
        assert!(text.ends_with("3 of 3 "));
    }

    #[test]
    fn focused_control_uses_focus_colors() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_filter_bar(&mut canvas, 3, &catalog(), &theme, 80);
        let focus = format!("{} ◂ All Nations ▸ ", Theme::bg(&theme.colors.focus_bg));
        assert!(canvas.as_str().contains(&focus));
    }

    #[test]
    fn narrow_panes_drop_trailing_controls() {
        let mut canvas = Canvas::new();
        render_filter_bar(&mut canvas, 3, &catalog(), &Theme::default(), 20);
        let text = strip_ansi(canvas.as_str());
        assert_eq!(text, "  ◂ All Levels ▸    ");
    }
}
