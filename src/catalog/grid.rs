//! Fixed-size grid layout and windowing.
//!
//! Maps the filtered sequence onto a grid of equally sized cells, row-major.
//! Sizes are abstract units; the UI layer decides how units translate to
//! terminal columns and rows. Cells past the end of the sequence are
//! placeholders that keep the grid aligned.
//!
//! ```text
//! width = 900, cell_width = 300, 7 items
//!
//!   [0] [1] [2]
//!   [3] [4] [5]
//!   [6] [ ] [ ]   ← two placeholders
//! ```

use std::ops::Range;

/// Default cell width in units.
pub const CELL_WIDTH: u32 = 300;

/// Default cell height in units.
pub const CELL_HEIGHT: u32 = 700;

/// Default inset applied on every side of a card inside its cell.
pub const CELL_PADDING: u32 = 8;

/// An axis-aligned rectangle in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Size of one grid cell and the padding of the card inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub cell_width: u32,
    pub cell_height: u32,
    pub padding: u32,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            padding: CELL_PADDING,
        }
    }
}

impl GridGeometry {
    /// The full area of the cell at `(row, col)`.
    ///
    /// Placeholders and occupied cells share this geometry.
    #[must_use]
    pub fn outer_rect(&self, row: usize, col: usize) -> Rect {
        Rect {
            x: offset(col, self.cell_width),
            y: offset(row, self.cell_height),
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// The card area: the outer rect shrunk by `padding` on each side.
    #[must_use]
    pub fn inner_rect(&self, row: usize, col: usize) -> Rect {
        let outer = self.outer_rect(row, col);
        let inset = self.padding.saturating_mul(2);
        Rect {
            x: outer.x.saturating_add(self.padding),
            y: outer.y.saturating_add(self.padding),
            width: outer.width.saturating_sub(inset),
            height: outer.height.saturating_sub(inset),
        }
    }
}

/// Start of cell `index` along one axis, saturating at `u32::MAX`.
fn offset(index: usize, size: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(size)
}

/// Content of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Holds the item at this index of the filtered sequence.
    Occupied(usize),
    /// Past the end of the sequence; rendered empty.
    Placeholder,
}

/// Grid dimensions for a given width and item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    geometry: GridGeometry,
    column_count: usize,
    row_count: usize,
    item_count: usize,
}

impl GridLayout {
    /// Lays out `item_count` items across `width` units.
    ///
    /// A zero width yields zero columns and zero rows. Any positive width
    /// yields at least one column, even if narrower than a cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use fleetview::catalog::{GridCell, GridGeometry, GridLayout};
    ///
    /// let layout = GridLayout::compute(900, 7, GridGeometry::default());
    /// assert_eq!(layout.column_count(), 3);
    /// assert_eq!(layout.row_count(), 3);
    /// assert_eq!(layout.cell(2, 0), Some(GridCell::Occupied(6)));
    /// assert_eq!(layout.cell(2, 1), Some(GridCell::Placeholder));
    /// ```
    #[must_use]
    pub fn compute(width: u32, item_count: usize, geometry: GridGeometry) -> Self {
        let column_count = if width == 0 || geometry.cell_width == 0 {
            0
        } else {
            ((width / geometry.cell_width) as usize).max(1)
        };

        let row_count = if column_count == 0 {
            0
        } else {
            item_count.div_ceil(column_count)
        };

        Self {
            geometry,
            column_count,
            row_count,
            item_count,
        }
    }

    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.column_count
    }

    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the content of `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> Option<GridCell> {
        if row >= self.row_count || col >= self.column_count {
            return None;
        }
        let index = row * self.column_count + col;
        if index < self.item_count {
            Some(GridCell::Occupied(index))
        } else {
            Some(GridCell::Placeholder)
        }
    }

    /// Returns the `(row, col)` holding item `index`.
    #[must_use]
    pub const fn position_of(&self, index: usize) -> Option<(usize, usize)> {
        if self.column_count == 0 || index >= self.item_count {
            return None;
        }
        Some((index / self.column_count, index % self.column_count))
    }

    /// Rows to materialize for a viewport.
    ///
    /// Includes every row intersecting `[scroll_top, scroll_top + viewport_height)`
    /// plus `overscan` rows on each side, clamped to the grid.
    #[must_use]
    pub fn visible_rows(&self, scroll_top: u64, viewport_height: u64, overscan: usize) -> Range<usize> {
        let cell_height = u64::from(self.geometry.cell_height);
        if self.row_count == 0 || cell_height == 0 || viewport_height == 0 {
            return 0..0;
        }

        let first = usize::try_from(scroll_top / cell_height).unwrap_or(usize::MAX);
        let last_exclusive = usize::try_from(scroll_top.saturating_add(viewport_height).div_ceil(cell_height))
            .unwrap_or(usize::MAX);

        let start = first.saturating_sub(overscan).min(self.row_count);
        let end = last_exclusive.saturating_add(overscan).min(self.row_count);
        start..end.max(start)
    }

    /// Largest first-row index that still fills a viewport of `viewport_rows` rows.
    #[must_use]
    pub const fn max_scroll_row(&self, viewport_rows: usize) -> usize {
        self.row_count.saturating_sub(if viewport_rows == 0 { 1 } else { viewport_rows })
    }
}
