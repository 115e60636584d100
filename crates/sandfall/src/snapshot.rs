//! Read-only grid snapshot handed to renderers.

use crate::cell::Cell;
use crate::error::Result;
use crate::Grid;

#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    grid: &'a Grid,
}

impl<'a> GridView<'a> {
    #[must_use]
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    #[must_use]
    pub fn cells(&self) -> &'a [Cell] {
        self.grid.cells()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.grid.get(row, col)
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.grid.occupied_count()
    }

    /// `(row, col, cell)` for every occupied cell, in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Cell)> + 'a {
        let columns = self.grid.columns();
        self.grid
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.occupied)
            .map(move |(i, cell)| (i / columns, i % columns, *cell))
    }
}
