//! Mapping from bin rank to shelf grid position.
//!
//! Bins are ranked by their sorted name and placed column by column:
//! rank 0 fills row 0 of column 0, rank 1 row 1, rank 2 row 2, then rank 3
//! starts column 1. With the default of three rows this is
//! `row = rank % 3`, `column = rank / 3`.

use std::fmt;

/// Default number of rows on the shelf.
pub const DEFAULT_ROWS: usize = 3;

/// Default number of item slots per shelf position.
pub const DEFAULT_SLOTS: usize = 5;

/// A (row, column) cell on the shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.column)
    }
}

/// Shelf dimensions that do not depend on the goals file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Rows per column. Always at least 1.
    pub rows: usize,
    /// Item slots per position. Always at least 1.
    pub slots: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            slots: DEFAULT_SLOTS,
        }
    }
}

impl Layout {
    /// Grid position of the bin with the given rank.
    pub const fn position(&self, rank: usize) -> GridPosition {
        position_for_rank(rank, self.rows)
    }

    /// Number of columns needed to hold `bin_count` bins.
    pub const fn columns(&self, bin_count: usize) -> usize {
        columns_for(bin_count, self.rows)
    }
}

/// Grid position of the bin with the given rank on a shelf of `rows` rows.
///
/// `rows` must be non-zero.
pub const fn position_for_rank(rank: usize, rows: usize) -> GridPosition {
    GridPosition {
        row: rank % rows,
        column: rank / rows,
    }
}

/// Columns needed for `bin_count` bins on a shelf of `rows` rows.
pub const fn columns_for(bin_count: usize, rows: usize) -> usize {
    bin_count.div_ceil(rows)
}
