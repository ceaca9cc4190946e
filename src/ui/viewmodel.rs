//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry
//! display-ready data only: labels are resolved, text is wrapped and truncated,
//! and cards are already positioned in terminal cells.
//!
//! # Example
//!
//! ```rust
//! use fleetview::ui::viewmodel::{BodyView, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: "World of Warships".to_string() },
//!     body: BodyView::Loading("Loading...".to_string()),
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//! };
//! assert!(!vm.body.is_catalog());
//! ```

use crate::catalog::FilterDimension;
use crate::ui::scale::TermRect;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub body: BodyView,
    pub footer: FooterInfo,
}

/// What the pane shows, one variant per fetch state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    /// The request is in flight; holds the indicator text.
    Loading(String),

    /// The request failed; holds the message exactly as it is shown.
    ///
    /// The renderer draws nothing but this message.
    Failure(String),

    /// Records arrived; filters and grid are shown.
    Catalog(CatalogView),
}

impl BodyView {
    #[must_use]
    pub const fn is_catalog(&self) -> bool {
        matches!(self, Self::Catalog(_))
    }
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// The filter bar and the windowed grid beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    /// One control per filter dimension, in bar order.
    pub filters: Vec<FilterControl>,

    /// Match count shown at the right end of the filter bar, e.g. `"4 of 12"`.
    pub summary: String,

    pub grid: GridView,

    /// Shown instead of the grid when nothing passes the filters.
    pub empty_state: Option<EmptyState>,
}

/// A dropdown selector in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub dimension: FilterDimension,

    /// Label of the selected entry, `"All ..."` when unset.
    pub label: String,

    /// Number of entries including the "All" entry.
    pub entry_count: usize,

    pub is_focused: bool,
}

/// The materialized rows of the card grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    /// Terminal row (1-indexed) where the viewport starts.
    pub viewport_top: usize,

    /// Number of terminal rows in the viewport.
    pub viewport_height: usize,

    /// Cells of the visible rows plus overscan, row-major.
    ///
    /// Rects are relative to `viewport_top`; parts outside the viewport are
    /// clipped by the renderer.
    pub cells: Vec<CellView>,

    /// Zero-based index of the first grid row in view.
    pub first_row: usize,

    pub row_count: usize,
}

/// One positioned grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellView {
    Card { rect: TermRect, card: Card },
    Placeholder { rect: TermRect },
}

impl CellView {
    #[must_use]
    pub const fn rect(&self) -> TermRect {
        match self {
            Self::Card { rect, .. } | Self::Placeholder { rect } => *rect,
        }
    }
}

/// Display-ready fields of one vehicle card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub icon: String,
    /// Wrapped and clipped to the card's content area.
    pub description: Vec<String>,
    pub level: String,
    pub nation: String,
    pub kind: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
