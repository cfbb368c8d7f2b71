//! Toroidal grid bounds and wrap arithmetic.

use std::fmt;

/// Default grid width used when a non-positive width is supplied.
pub const DEFAULT_GRID_WIDTH: u32 = 100;

/// Default grid height used when a non-positive height is supplied.
pub const DEFAULT_GRID_HEIGHT: u32 = 100;

/// A cell on the grid. Always within the bounds of the grid it came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, `0 <= x < width`.
    pub x: u32,
    /// Row, `0 <= y < height`.
    pub y: u32,
}

impl Position {
    /// Create a position. No bounds are checked here; use
    /// [`Grid::wrap`] to obtain an in-range position from raw values.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[x = {}, y = {}]", self.x, self.y)
    }
}

/// Wrap a single axis value into `[0, len)`.
///
/// Handles displacements of any magnitude, not only a single cell past
/// the edge. `len` must be non-zero.
pub(crate) fn wrap_axis(val: i64, len: u32) -> u32 {
    let n = i64::from(len);
    if (0..n).contains(&val) {
        return val as u32;
    }
    (((val % n) + n) % n) as u32
}

/// Bounds of a wrap-around (torus) grid.
///
/// Leaving through one edge re-enters through the opposite one.
///
/// # Examples
///
/// ```
/// use rover_core::{Grid, Position};
///
/// let grid = Grid::new(10, 5).unwrap();
/// assert_eq!(grid.wrap(-1, 5), Position::new(9, 0));
/// assert_eq!(grid.wrap(23, -7), Position::new(3, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    /// Largest accepted dimension; coordinates are reported as `i64`
    /// by callers, so each axis must fit comfortably.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid, returning `None` if either dimension is zero or
    /// exceeds [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let valid = |d: u32| d > 0 && d <= Self::MAX_DIM;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Whether raw coordinates lie inside the grid without wrapping.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y)
    }

    /// Map raw coordinates onto the torus.
    pub fn wrap(&self, x: i64, y: i64) -> Position {
        Position {
            x: wrap_axis(x, self.width),
            y: wrap_axis(y, self.height),
        }
    }

    /// The position reached by displacing `from` by `(dx, dy)`, wrapped.
    pub fn offset(&self, from: Position, dx: i64, dy: i64) -> Position {
        self.wrap(i64::from(from.x) + dx, i64::from(from.y) + dy)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Constructor ─────────────────────────────────────────────

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(Grid::new(0, 5).is_none());
        assert!(Grid::new(5, 0).is_none());
        assert!(Grid::new(1, 1).is_some());
    }

    #[test]
    fn new_rejects_dimension_above_max() {
        assert!(Grid::new(Grid::MAX_DIM + 1, 1).is_none());
        assert!(Grid::new(Grid::MAX_DIM, 1).is_some());
    }

    #[test]
    fn default_is_100_by_100() {
        let g = Grid::default();
        assert_eq!((g.width(), g.height()), (100, 100));
        assert_eq!(g.cell_count(), 10_000);
    }

    // ── Wrap ────────────────────────────────────────────────────

    #[test]
    fn wrap_single_step_past_each_edge() {
        let g = Grid::new(100, 100).unwrap();
        assert_eq!(g.wrap(100, 0), Position::new(0, 0));
        assert_eq!(g.wrap(-1, 0), Position::new(99, 0));
        assert_eq!(g.wrap(0, 100), Position::new(0, 0));
        assert_eq!(g.wrap(0, -1), Position::new(0, 99));
    }

    #[test]
    fn wrap_multi_cell_displacement() {
        let g = Grid::new(10, 10).unwrap();
        assert_eq!(g.wrap(-15, 0), Position::new(5, 0));
        assert_eq!(g.wrap(0, 37), Position::new(0, 7));
        assert_eq!(g.wrap(-10, -20), Position::new(0, 0));
    }

    #[test]
    fn one_by_one_grid_always_maps_to_origin() {
        let g = Grid::new(1, 1).unwrap();
        assert_eq!(g.offset(Position::new(0, 0), 1, -1), Position::new(0, 0));
    }

    #[test]
    fn contains_is_half_open() {
        let g = Grid::new(3, 4).unwrap();
        assert!(g.contains(0, 0));
        assert!(g.contains(2, 3));
        assert!(!g.contains(3, 0));
        assert!(!g.contains(0, 4));
        assert!(!g.contains(-1, 0));
    }

    #[test]
    fn position_display_matches_report_format() {
        assert_eq!(Position::new(0, 1).to_string(), "[x = 0, y = 1]");
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn wrap_always_lands_in_range(
            w in 1u32..500,
            h in 1u32..500,
            x in -100_000i64..100_000,
            y in -100_000i64..100_000,
        ) {
            let g = Grid::new(w, h).unwrap();
            let p = g.wrap(x, y);
            prop_assert!(p.x < w);
            prop_assert!(p.y < h);
            prop_assert_eq!(i64::from(p.x), x.rem_euclid(i64::from(w)));
            prop_assert_eq!(i64::from(p.y), y.rem_euclid(i64::from(h)));
        }

        #[test]
        fn offset_then_reverse_offset_is_identity(
            w in 1u32..200,
            h in 1u32..200,
            x in 0u32..200,
            y in 0u32..200,
            dx in -3i64..=3,
            dy in -3i64..=3,
        ) {
            let g = Grid::new(w, h).unwrap();
            let start = g.wrap(i64::from(x), i64::from(y));
            let there = g.offset(start, dx, dy);
            prop_assert_eq!(g.offset(there, -dx, -dy), start);
        }
    }
}
