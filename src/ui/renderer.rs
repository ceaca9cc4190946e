//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the view model from `AppState`, then draw
//! it component by component into a [`Canvas`]. The finished frame is printed
//! in one write.
//!
//! # Example
//!
//! ```rust
//! use fleetview::api::{ClientConfig, FetchState};
//! use fleetview::app::AppState;
//! use fleetview::catalog::GridGeometry;
//! use fleetview::ui::{helpers::strip_ansi, render_to_string, Theme};
//!
//! let mut state = AppState::new(
//!     ClientConfig::default(),
//!     "World of Warships".to_string(),
//!     GridGeometry::default(),
//!     Theme::default(),
//! );
//! state.load_fetch_state(FetchState::Error("Failed to fetch".to_string()));
//! assert_eq!(strip_ansi(&render_to_string(&state, 24, 80)), "Failed to fetch");
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders the plugin UI into a string of text and ANSI escapes.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

/// Draws a view model, choosing the layout from its body.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut canvas = Canvas::new();

    match &vm.body {
        BodyView::Loading(text) => components::render_loading(&mut canvas, text, theme),
        BodyView::Failure(message) => components::render_failure(&mut canvas, message, theme),
        BodyView::Catalog(catalog) => {
            components::render_catalog_mode(&mut canvas, vm, catalog, theme, cols, rows);
        }
    }

    canvas.into_string()
}
