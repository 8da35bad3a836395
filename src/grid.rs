//! Shelf grid: item slots for every (row, column) position.

use crate::error::ShelfError;
use crate::goals::Goals;
use crate::layout::{GridPosition, Layout, position_for_rank};

/// Item slots of a shelf, `rows x columns x slots` in size.
///
/// Slots are stored per position in rank order and only up to the last
/// filled index, so memory follows the goals file rather than the layout.
#[derive(Debug, Clone)]
pub struct ShelfGrid {
    rows: usize,
    columns: usize,
    slots: usize,
    cells: Vec<Vec<Option<String>>>,
    /// Bin names by rank; positions past the end are unoccupied.
    bins: Vec<String>,
}

/// One slot visited by [`ShelfGrid::slots`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotEntry<'a> {
    pub bin: &'a str,
    pub position: GridPosition,
    pub index: usize,
    pub item: Option<&'a str>,
}

impl ShelfGrid {
    /// An empty grid with no bins assigned.
    pub fn new(rows: usize, columns: usize, slots: usize) -> Self {
        Self {
            rows,
            columns,
            slots,
            cells: Vec::new(),
            bins: Vec::new(),
        }
    }

    /// Populate a grid from the goals file's `bin_contents`.
    ///
    /// Bin `k` in sorted order lands at `layout.position(k)`; its `i`-th item
    /// goes in slot `i`.
    pub fn from_goals(goals: &Goals, layout: &Layout) -> Result<Self, ShelfError> {
        let columns = layout.columns(goals.bin_contents.len());
        let mut grid = Self::new(layout.rows, columns, layout.slots);

        for (rank, (bin, items)) in goals.bin_contents.iter().enumerate() {
            if items.len() > layout.slots {
                return Err(ShelfError::SlotOverflow {
                    bin: bin.clone(),
                    items: items.len(),
                    slots: layout.slots,
                });
            }
            let position = layout.position(rank);
            tracing::debug!(
                bin = %bin,
                row = position.row,
                column = position.column,
                items = items.len(),
                "placing bin"
            );
            for (index, item) in items.iter().enumerate() {
                grid.set_item(position, index, item.clone())?;
            }
            grid.bins.push(bin.clone());
        }

        Ok(grid)
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Bin names in rank order.
    pub fn bins(&self) -> &[String] {
        &self.bins
    }

    /// Store an item in a slot, replacing whatever was there.
    pub fn set_item(
        &mut self,
        position: GridPosition,
        index: usize,
        name: String,
    ) -> Result<(), ShelfError> {
        let Some(rank) = self.rank(position, index) else {
            return Err(ShelfError::OutOfBounds {
                row: position.row,
                column: position.column,
                index,
                rows: self.rows,
                columns: self.columns,
                slots: self.slots,
            });
        };
        if self.cells.len() <= rank {
            self.cells.resize_with(rank + 1, Vec::new);
        }
        let cell = &mut self.cells[rank];
        if cell.len() <= index {
            cell.resize(index + 1, None);
        }
        cell[index] = Some(name);
        Ok(())
    }

    /// The item in a slot. `None` when the slot is empty or out of bounds.
    pub fn item(&self, position: GridPosition, index: usize) -> Option<&str> {
        self.rank(position, index)
            .and_then(|rank| self.cells.get(rank))
            .and_then(|cell| cell.get(index))
            .and_then(Option::as_deref)
    }

    /// Every slot of every occupied position, in rank order then slot order.
    ///
    /// Empty slots are included.
    pub fn slots(&self) -> impl Iterator<Item = SlotEntry<'_>> {
        self.bins.iter().enumerate().flat_map(move |(rank, bin)| {
            let position = position_for_rank(rank, self.rows);
            (0..self.slots).map(move |index| SlotEntry {
                bin,
                position,
                index,
                item: self.item(position, index),
            })
        })
    }

    /// Rank of the position holding slot `index`, `None` when out of bounds.
    fn rank(&self, position: GridPosition, index: usize) -> Option<usize> {
        if position.row >= self.rows || position.column >= self.columns || index >= self.slots {
            return None;
        }
        position
            .column
            .checked_mul(self.rows)?
            .checked_add(position.row)
    }
}
