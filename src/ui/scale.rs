//! Conversion between grid units and terminal cells.
//!
//! The grid is laid out in abstract units (a default cell is 300 × 700). A
//! terminal column is [`UNITS_PER_COLUMN`] units wide and a terminal row is
//! [`UNITS_PER_ROW`] units tall, so the default cell spans 30 columns by 14
//! rows.

use crate::catalog::Rect;

/// Width of one terminal column in grid units.
pub const UNITS_PER_COLUMN: u32 = 10;

/// Height of one terminal row in grid units.
pub const UNITS_PER_ROW: u32 = 50;

/// A rectangle in terminal cells.
///
/// `top` is relative to the top of the grid viewport and is negative for
/// rows scrolled above it. `left` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermRect {
    pub top: i64,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

/// Width of `cols` terminal columns in grid units.
#[must_use]
pub fn columns_to_units(cols: usize) -> u32 {
    u32::try_from(cols)
        .unwrap_or(u32::MAX)
        .saturating_mul(UNITS_PER_COLUMN)
}

/// Height of `rows` terminal rows in grid units.
#[must_use]
pub fn rows_to_units(rows: usize) -> u64 {
    rows as u64 * u64::from(UNITS_PER_ROW)
}

/// Maps a grid rectangle onto the terminal cells it fully covers.
///
/// Edges snap inwards: the start rounds up and the end rounds down, so a
/// padded card never bleeds into its neighbour.
#[must_use]
pub fn to_term_rect(rect: Rect, scroll_top: u64) -> TermRect {
    let row_units = i64::from(UNITS_PER_ROW);
    let col_units = i64::from(UNITS_PER_COLUMN);

    let scroll = i64::try_from(scroll_top).unwrap_or(i64::MAX);
    let top_units = i64::from(rect.y) - scroll;
    let bottom_units = top_units + i64::from(rect.height);

    let top = ceil_div(top_units, row_units);
    let bottom = bottom_units.div_euclid(row_units);

    let left = ceil_div(i64::from(rect.x), col_units);
    let right = (i64::from(rect.x) + i64::from(rect.width)).div_euclid(col_units);

    TermRect {
        top,
        left: usize::try_from(left).unwrap_or(0),
        width: usize::try_from(right - left).unwrap_or(0),
        height: usize::try_from(bottom - top).unwrap_or(0),
    }
}

const fn ceil_div(value: i64, divisor: i64) -> i64 {
    -((-value).div_euclid(divisor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GridGeometry;

    #[test]
    fn default_cell_spans_thirty_by_fourteen() {
        let geometry = GridGeometry::default();
        let outer = to_term_rect(geometry.outer_rect(0, 0), 0);
        assert_eq!(outer, TermRect { top: 0, left: 0, width: 30, height: 14 });
    }

    #[test]
    fn padding_snaps_inwards() {
        let geometry = GridGeometry::default();
        let inner = to_term_rect(geometry.inner_rect(1, 1), 0);
        assert_eq!(inner, TermRect { top: 15, left: 31, width: 28, height: 12 });
    }

    #[test]
    fn scrolled_rows_move_above_viewport() {
        let geometry = GridGeometry::default();
        let inner = to_term_rect(geometry.inner_rect(0, 0), 700);
        assert_eq!(inner.top, -13);
        assert_eq!(inner.height, 12);
    }

    #[test]
    fn unit_conversions() {
        assert_eq!(columns_to_units(90), 900);
        assert_eq!(rows_to_units(28), 1400);
    }
}
