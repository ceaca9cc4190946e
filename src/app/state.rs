//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin session. It keeps
//! the core data (the fetch state and the user's filters) apart from what is
//! derived from it (option sets, the filtered index list, the clamped scroll
//! row), and recomputes the derived parts whenever the core data changes.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a state snapshot and the pane size into a
//! [`UIViewModel`]. Grid dimensions are derived from the pane width on every
//! call, so resizes take effect on the next frame. Only the visible grid rows
//! (plus overscan) are materialized.
//!
//! # Example
//!
//! ```rust
//! use fleetview::api::{ClientConfig, FetchState};
//! use fleetview::app::AppState;
//! use fleetview::catalog::GridGeometry;
//! use fleetview::ui::Theme;
//!
//! let mut state = AppState::new(
//!     ClientConfig::default(),
//!     "World of Warships".to_string(),
//!     GridGeometry::default(),
//!     Theme::default(),
//! );
//! state.load_fetch_state(FetchState::Success(vec![]));
//! let viewmodel = state.compute_viewmodel(24, 90);
//! assert!(viewmodel.body.is_catalog());
//! ```

use crate::api::{ClientConfig, FetchState};
use crate::catalog::{filter_vehicles, FilterDimension, FilterState, GridCell, GridGeometry, GridLayout, OptionSets};
use crate::domain::Vehicle;
use crate::ui::helpers::{truncate, wrap};
use crate::ui::scale::{columns_to_units, rows_to_units, to_term_rect, UNITS_PER_ROW};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, Card, CatalogView, CellView, EmptyState, FilterControl, FooterInfo, GridView, HeaderInfo,
    UIViewModel,
};

/// Rows taken by the blank top line, header, filter bar, two borders and footer.
pub const CHROME_ROWS: usize = 6;

/// First terminal row (1-indexed) of the grid viewport.
pub const GRID_TOP_ROW: usize = 5;

/// Grid rows materialized beyond each edge of the viewport.
pub const OVERSCAN_ROWS: usize = 1;

/// Text shown while the request is in flight.
pub const LOADING_TEXT: &str = "Loading...";

const KEYBINDINGS: &str = "Tab: filter  h/l: option  a: reset  x: reset all  j/k: scroll  PgUp/PgDn: page  q: quit";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Endpoint and language of the catalog request.
    pub client: ClientConfig,

    /// Header text.
    pub title: String,

    pub geometry: GridGeometry,

    /// Outcome of the catalog request.
    ///
    /// Replaced once by [`load_fetch_state`](Self::load_fetch_state).
    pub fetch: FetchState,

    /// Dropdown entries derived from the fetched records.
    pub options: OptionSets,

    pub filters: FilterState,

    /// Indices into the fetched records that pass the filters, in source order.
    ///
    /// Recomputed by [`apply_filters`](Self::apply_filters).
    pub filtered: Vec<usize>,

    /// Dropdown that receives option and reset keys.
    pub focus: FilterDimension,

    /// Zero-based grid row shown at the top of the viewport.
    pub scroll_row: usize,

    /// Whether the catalog request has been issued for this load.
    pub request_sent: bool,

    /// Last known pane size as `(rows, cols)`.
    pub viewport: (usize, usize),

    pub theme: Theme,
}

impl AppState {
    /// Creates a state in the loading phase with no filters set.
    #[must_use]
    pub fn new(client: ClientConfig, title: String, geometry: GridGeometry, theme: Theme) -> Self {
        Self {
            client,
            title,
            geometry,
            fetch: FetchState::Loading,
            options: OptionSets::default(),
            filters: FilterState::default(),
            filtered: Vec::new(),
            focus: FilterDimension::Level,
            scroll_row: 0,
            request_sent: false,
            viewport: (0, 0),
            theme,
        }
    }

    /// Records of a successful fetch, empty in any other state.
    #[must_use]
    pub fn vehicles(&self) -> &[Vehicle] {
        self.fetch.vehicles()
    }

    /// Stores the outcome of the catalog request.
    ///
    /// Option sets are re-derived from the new records and the current filters
    /// are applied to them.
    pub fn load_fetch_state(&mut self, fetch: FetchState) {
        let _span = tracing::debug_span!("load_fetch_state", records = fetch.vehicles().len()).entered();

        if let FetchState::Error(message) = &fetch {
            tracing::debug!(error = %message, "entering error state");
        }

        self.fetch = fetch;
        self.options = OptionSets::derive(self.fetch.vehicles());
        self.apply_filters();
    }

    /// Recomputes the filtered index list and returns to the first grid row.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!("apply_filters",
            total = self.vehicles().len(),
            level = ?self.filters.level,
            nation = ?self.filters.nation,
            kind = ?self.filters.kind
        )
        .entered();

        self.filtered = filter_vehicles(self.fetch.vehicles(), &self.filters);
        self.scroll_row = 0;

        tracing::debug!(filtered_count = self.filtered.len(), "filters applied");
    }

    /// Number of records that pass the validity predicate.
    #[must_use]
    pub fn displayable_count(&self) -> usize {
        self.vehicles().iter().filter(|vehicle| vehicle.is_displayable()).count()
    }

    /// Grid layout of the filtered records across `cols` terminal columns.
    #[must_use]
    pub fn grid_layout(&self, cols: usize) -> GridLayout {
        GridLayout::compute(columns_to_units(cols), self.filtered.len(), self.geometry)
    }

    /// Records the pane size and keeps the scroll row within the new bounds.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if self.viewport != (rows, cols) {
            tracing::trace!(rows, cols, "viewport resized");
            self.viewport = (rows, cols);
        }
        self.scroll_row = self.scroll_row.min(self.max_scroll_row());
    }

    /// Whole grid rows that fit in the viewport, at least one.
    #[must_use]
    pub fn page_rows(&self) -> usize {
        self.page_rows_for(self.viewport.0)
    }

    fn page_rows_for(&self, rows: usize) -> usize {
        let viewport_units = rows_to_units(rows.saturating_sub(CHROME_ROWS));
        let cell_height = u64::from(self.geometry.cell_height.max(UNITS_PER_ROW));
        usize::try_from(viewport_units / cell_height).unwrap_or(usize::MAX).max(1)
    }

    /// Largest scroll row for the current viewport.
    #[must_use]
    pub fn max_scroll_row(&self) -> usize {
        self.grid_layout(self.viewport.1).max_scroll_row(self.page_rows())
    }

    /// Scrolls by `delta` grid rows, clamped to the grid.
    ///
    /// Returns whether the scroll row changed.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let target = if delta.is_negative() {
            self.scroll_row.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll_row.saturating_add(delta.unsigned_abs())
        };
        self.scroll_to(target)
    }

    /// Scrolls to grid row `row`, clamped to the grid.
    ///
    /// Returns whether the scroll row changed.
    pub fn scroll_to(&mut self, row: usize) -> bool {
        let clamped = row.min(self.max_scroll_row());
        let changed = clamped != self.scroll_row;
        self.scroll_row = clamped;
        changed
    }

    /// Computes a renderable view model for a `rows` × `cols` pane.
    ///
    /// A failed fetch yields only the error message, and a pending one only
    /// the loading indicator; neither touches the filters or the grid.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match &self.fetch {
            FetchState::Loading => BodyView::Loading(LOADING_TEXT.to_string()),
            FetchState::Error(message) => BodyView::Failure(message.clone()),
            FetchState::Success(vehicles) => BodyView::Catalog(self.compute_catalog(vehicles, rows, cols)),
        };

        UIViewModel {
            header: HeaderInfo {
                title: self.title.clone(),
            },
            body,
            footer: FooterInfo {
                keybindings: KEYBINDINGS.to_string(),
            },
        }
    }

    fn compute_catalog(&self, vehicles: &[Vehicle], rows: usize, cols: usize) -> CatalogView {
        let filters = FilterDimension::ALL
            .iter()
            .map(|&dimension| self.compute_filter_control(dimension))
            .collect();

        let displayable = self.displayable_count();
        let summary = format!("{} of {}", self.filtered.len(), displayable);

        let empty_state = if self.filtered.is_empty() {
            Some(if displayable == 0 {
                EmptyState {
                    message: "No vehicles available".to_string(),
                    subtitle: "The catalog returned no displayable entries".to_string(),
                }
            } else {
                EmptyState {
                    message: "No vehicles match the current filters".to_string(),
                    subtitle: "Press x to reset all filters".to_string(),
                }
            })
        } else {
            None
        };

        CatalogView {
            filters,
            summary,
            grid: self.compute_grid(vehicles, rows, cols),
            empty_state,
        }
    }

    fn compute_filter_control(&self, dimension: FilterDimension) -> FilterControl {
        let (label, option_count) = match dimension {
            FilterDimension::Level => (
                self.filters.level.map(|level| format!("Level {level}")),
                self.options.levels().len(),
            ),
            FilterDimension::Nation => (
                self.filters.nation.as_deref().map(|key| {
                    self.options.nations().label(key).unwrap_or(key).to_string()
                }),
                self.options.nations().len(),
            ),
            FilterDimension::Kind => (
                self.filters.kind.as_deref().map(|key| {
                    self.options.kinds().label(key).unwrap_or(key).to_string()
                }),
                self.options.kinds().len(),
            ),
        };

        FilterControl {
            dimension,
            label: label.unwrap_or_else(|| dimension.all_label().to_string()),
            entry_count: option_count + 1,
            is_focused: dimension == self.focus,
        }
    }

    fn compute_grid(&self, vehicles: &[Vehicle], rows: usize, cols: usize) -> GridView {
        let layout = self.grid_layout(cols);
        let viewport_height = rows.saturating_sub(CHROME_ROWS);

        let first_row = self.scroll_row.min(layout.max_scroll_row(self.page_rows_for(rows)));
        let scroll_top = (first_row as u64).saturating_mul(u64::from(self.geometry.cell_height));
        let visible = layout.visible_rows(scroll_top, rows_to_units(viewport_height), OVERSCAN_ROWS);

        let mut cells = Vec::new();
        for row in visible {
            for col in 0..layout.column_count() {
                let rect = to_term_rect(self.geometry.inner_rect(row, col), scroll_top);
                match layout.cell(row, col) {
                    Some(GridCell::Occupied(index)) => {
                        if let Some(vehicle) = self.filtered.get(index).and_then(|&i| vehicles.get(i)) {
                            cells.push(CellView::Card {
                                rect,
                                card: Self::compute_card(vehicle, rect.width, rect.height),
                            });
                        }
                    }
                    Some(GridCell::Placeholder) => cells.push(CellView::Placeholder { rect }),
                    None => {}
                }
            }
        }

        tracing::trace!(
            columns = layout.column_count(),
            rows = layout.row_count(),
            first_row,
            materialized = cells.len(),
            "grid window computed"
        );

        GridView {
            viewport_top: GRID_TOP_ROW,
            viewport_height,
            cells,
            first_row,
            row_count: layout.row_count(),
        }
    }

    /// Card text sized for a bordered card of `width` × `height` cells.
    ///
    /// Inside the border there is one column of padding per side. The title
    /// and icon take the first two lines and the three metadata lines the
    /// last three; the description gets what remains.
    fn compute_card(vehicle: &Vehicle, width: usize, height: usize) -> Card {
        const FIXED_LINES: usize = 5;

        let content_width = width.saturating_sub(4);
        let content_height = height.saturating_sub(2);
        let description_lines = content_height.saturating_sub(FIXED_LINES);

        Card {
            title: truncate(vehicle.title.trim(), content_width),
            icon: truncate(&vehicle.icon, content_width),
            description: wrap(&vehicle.description, content_width, description_lines),
            level: truncate(&format!("Level: {}", vehicle.level), content_width),
            nation: truncate(&format!("Nation: {}", vehicle.nation.label), content_width),
            kind: truncate(&format!("Type: {}", vehicle.kind.label), content_width),
        }
    }
}
