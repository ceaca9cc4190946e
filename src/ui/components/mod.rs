//! Composable UI component renderers.
//!
//! Each component draws one part of the pane into a [`Canvas`] and, where it
//! occupies whole lines, returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`filters`]: The three dropdown selectors and the match count
//! - [`grid`]: Windowed card grid
//! - [`status`]: Loading indicator, failure message, empty-result notice
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Filter bar]
//! [Border]
//! [Grid viewport]
//! [Border]
//! [Footer]
//! ```

mod filters;
mod footer;
mod grid;
mod header;
mod status;

pub use status::{render_failure, render_loading};

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CatalogView, UIViewModel};

use filters::render_filter_bar;
use footer::render_footer;
use grid::render_grid;
use header::render_header;
use status::render_empty_state;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(canvas: &mut Canvas, row: usize, color: &str, cols: usize) -> usize {
    canvas.move_to(row, 1);
    canvas.put(&Theme::fg(color));
    canvas.put(&"─".repeat(cols));
    canvas.put(Theme::reset());
    row + 1
}

/// Renders the full catalog layout.
///
/// The grid viewport spans rows 5 to `rows - 2`; the bottom border and the
/// footer take the last two rows.
pub fn render_catalog_mode(
    canvas: &mut Canvas,
    vm: &UIViewModel,
    catalog: &CatalogView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Row 1 stays blank

    current_row = render_header(canvas, current_row, &vm.header, theme, cols);
    current_row = render_filter_bar(canvas, current_row, catalog, theme, cols);
    let _grid_top = render_border(canvas, current_row, &theme.colors.border, cols);

    if let Some(empty) = &catalog.empty_state {
        render_empty_state(canvas, empty, &catalog.grid, theme, cols);
    } else {
        render_grid(canvas, &catalog.grid, theme, cols);
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    if border_row > current_row {
        render_border(canvas, border_row, &theme.colors.border, cols);
        render_footer(canvas, footer_row, &vm.footer, theme, cols);
    }
}
