//! Sparse program grid
//!
//! The program is a two-dimensional field of code points addressed by
//! `(column, row)`. It is stored sparsely because `p` may write arbitrarily
//! far outside the initial rectangle; a dense allocation would be unbounded.
//!
//! # Wrap bounds
//!
//! Alongside the cells the grid keeps two extent maps: the largest populated
//! column per row and the largest populated row per column. The execution
//! engine consults these when the instruction pointer crosses an edge. The
//! extents are monotonic accumulators — they only ever grow, even when every
//! cell of a row is later overwritten with 0 — so they cannot be re-derived
//! from the current cell contents and are maintained on every write.

use rustc_hash::FxHashMap;

/// Sparse code-point grid with per-row and per-column wrap extents
#[derive(Debug, Clone, Default)]
pub struct Grid {
    /// (column, row) -> code point
    cells: FxHashMap<(i64, i64), i64>,

    /// row -> largest populated column
    row_max: FxHashMap<i64, i64>,

    /// column -> largest populated row
    col_max: FxHashMap<i64, i64>,
}

impl Grid {
    pub fn new() -> Self {
        Grid::default()
    }

    /// Build the initial grid from multi-line source text
    ///
    /// Each line is a row and each character a column, with the character's
    /// code point as the cell value. Lines may have different lengths.
    pub fn parse(source: &str) -> Self {
        let mut grid = Grid::new();
        for (y, line) in source.lines().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                grid.set(x as i64, y as i64, ch as i64);
            }
        }
        grid
    }

    /// Read the cell at `(x, y)`; unpopulated coordinates read as 0
    pub fn get(&self, x: i64, y: i64) -> i64 {
        self.cells.get(&(x, y)).copied().unwrap_or(0)
    }

    /// Check whether `(x, y)` has ever been written
    pub fn is_populated(&self, x: i64, y: i64) -> bool {
        self.cells.contains_key(&(x, y))
    }

    /// Insert or overwrite the cell at `(x, y)`, growing the wrap extents
    pub fn set(&mut self, x: i64, y: i64, value: i64) {
        self.cells.insert((x, y), value);

        let row = self.row_max.entry(y).or_insert(0);
        *row = (*row).max(x);
        let col = self.col_max.entry(x).or_insert(0);
        *col = (*col).max(y);
    }

    /// Largest populated column in `row` (0 for untouched rows)
    pub fn row_extent(&self, row: i64) -> i64 {
        self.row_max.get(&row).copied().unwrap_or(0)
    }

    /// Largest populated row in `column` (0 for untouched columns)
    pub fn col_extent(&self, column: i64) -> i64 {
        self.col_max.get(&column).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cells_and_extents() {
        let grid = Grid::parse("abc\nde");

        assert_eq!(grid.get(0, 0), 'a' as i64);
        assert_eq!(grid.get(2, 0), 'c' as i64);
        assert_eq!(grid.get(1, 1), 'e' as i64);
        assert_eq!(grid.row_extent(0), 2);
        assert_eq!(grid.row_extent(1), 1);
        assert_eq!(grid.col_extent(0), 1);
        assert_eq!(grid.col_extent(2), 0);
    }

    #[test]
    fn test_unpopulated_reads_zero() {
        let grid = Grid::parse("ab");

        assert_eq!(grid.get(5, 0), 0);
        assert_eq!(grid.get(0, 3), 0);
        assert_eq!(grid.get(-1, -1), 0);
        assert!(!grid.is_populated(5, 0));
        assert!(grid.is_populated(1, 0));
    }

    #[test]
    fn test_write_grows_extents() {
        let mut grid = Grid::parse("ab");
        assert_eq!(grid.row_extent(0), 1);

        grid.set(9, 0, 'x' as i64);
        assert_eq!(grid.row_extent(0), 9);
        assert_eq!(grid.col_extent(9), 0);

        grid.set(0, 7, 'y' as i64);
        assert_eq!(grid.col_extent(0), 7);
        assert_eq!(grid.row_extent(7), 0);
    }

    #[test]
    fn test_extents_never_shrink() {
        let mut grid = Grid::parse("abcd");
        assert_eq!(grid.row_extent(0), 3);

        for x in 0..4 {
            grid.set(x, 0, 0);
        }
        assert_eq!(grid.row_extent(0), 3);
    }

    #[test]
    fn test_negative_coordinates() {
        let mut grid = Grid::new();
        grid.set(-3, -2, 42);

        assert_eq!(grid.get(-3, -2), 42);
        // extents are clamped at 0; negative coordinates never lower them
        assert_eq!(grid.row_extent(-2), 0);
        assert_eq!(grid.col_extent(-3), 0);
    }
}
