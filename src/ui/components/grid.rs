//! Card grid component renderer.
//!
//! Draws the materialized cells of a [`GridView`] inside the viewport. Cards
//! are bordered boxes; placeholders occupy their cell but draw nothing. Cards
//! straddling the viewport edge are clipped line by line, and cards wider than
//! the pane lose their right edge.
//!
//! ```text
//! ╭──────────────────────────╮
//! │ Gremyashchy              │
//! │ https://…/large.png      │
//! │ Soviet destroyer with    │
//! │ strong guns              │
//! │                          │
//! │ Level: 5                 │
//! │ Nation: USSR             │
//! │ Type: Destroyer          │
//! ╰──────────────────────────╯
//! ```

use crate::ui::helpers::{text_width, truncate, Canvas};
use crate::ui::scale::TermRect;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Card, CellView, GridView};

/// Renders every card of the grid view.
pub fn render_grid(canvas: &mut Canvas, grid: &GridView, theme: &Theme, cols: usize) {
    for cell in &grid.cells {
        if let CellView::Card { rect, card } = cell {
            render_card(canvas, grid, *rect, card, theme, cols);
        }
    }
}

#[derive(Clone, Copy)]
enum LineStyle {
    Title,
    Dim,
    Normal,
    Meta,
}

fn render_card(canvas: &mut Canvas, grid: &GridView, rect: TermRect, card: &Card, theme: &Theme, cols: usize) {
    let width = rect.width.min(cols.saturating_sub(rect.left));
    if width < 2 || rect.height < 2 {
        return;
    }
    let clipped_right = width < rect.width;
    let inner = width - 2;
    let content_height = rect.height - 2;

    let lines = card_lines(card, content_height);

    for offset in 0..rect.height {
        let Some(row) = viewport_row(grid, rect.top, offset) else {
            continue;
        };
        canvas.move_to(row, rect.left + 1);
        canvas.put(&Theme::fg(&theme.colors.card_border));

        if offset == 0 || offset == rect.height - 1 {
            let (left, right) = if offset == 0 { ("╭", "╮") } else { ("╰", "╯") };
            canvas.put(left);
            canvas.put(&"─".repeat(inner));
            if !clipped_right {
                canvas.put(right);
            }
            canvas.put(Theme::reset());
            continue;
        }

        canvas.put("│");
        canvas.put(Theme::reset());

        let (text, style) = lines
            .get(offset - 1)
            .map_or(("", LineStyle::Normal), |(text, style)| (text.as_str(), *style));
        let text = truncate(text, inner.saturating_sub(2));
        let text_len = text_width(&text);

        match style {
            LineStyle::Title => {
                canvas.put(Theme::bold());
                canvas.put(&Theme::fg(&theme.colors.card_title_fg));
            }
            LineStyle::Dim => {
                canvas.put(Theme::dim());
                canvas.put(&Theme::fg(&theme.colors.text_dim));
            }
            LineStyle::Normal => canvas.put(&Theme::fg(&theme.colors.text_normal)),
            LineStyle::Meta => canvas.put(&Theme::fg(&theme.colors.card_meta_fg)),
        }
        if inner > 0 {
            canvas.pad(1);
        }
        canvas.put(&text);
        canvas.pad(inner.saturating_sub(text_len + 1));
        canvas.put(Theme::reset());

        if !clipped_right {
            canvas.put(&Theme::fg(&theme.colors.card_border));
            canvas.put("│");
            canvas.put(Theme::reset());
        }
    }
}

/// Terminal row of line `offset` of a card whose top is at `top`, if visible.
fn viewport_row(grid: &GridView, top: i64, offset: usize) -> Option<usize> {
    let relative = top + i64::try_from(offset).ok()?;
    let relative = usize::try_from(relative).ok()?;
    (relative < grid.viewport_height).then_some(grid.viewport_top + relative)
}

/// Title and icon first, metadata last, description in between.
fn card_lines(card: &Card, content_height: usize) -> Vec<(String, LineStyle)> {
    let mut lines = vec![
        (card.title.clone(), LineStyle::Title),
        (card.icon.clone(), LineStyle::Dim),
    ];
    lines.extend(card.description.iter().map(|line| (line.clone(), LineStyle::Normal)));
    while lines.len() + 3 < content_height {
        lines.push((String::new(), LineStyle::Normal));
    }
    lines.push((card.level.clone(), LineStyle::Meta));
    lines.push((card.nation.clone(), LineStyle::Meta));
    lines.push((card.kind.clone(), LineStyle::Meta));
    lines.truncate(content_height);
    lines
}
