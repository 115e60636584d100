//! Falling sand cellular automaton core.

pub mod api;
pub mod brush;
pub mod cell;
pub mod config;
pub mod error;
pub mod host;
pub mod render;
pub mod resize;
pub mod rng;
pub mod rules;
mod sand;
pub mod simulation;
pub mod snapshot;
pub mod universe;

use cell::Cell;
use error::{Result, SimError};
use resize::{CellSize, ScreenSize};
use rng::RngService;
use rules::MotionRules;

pub use simulation::Simulation;
pub use snapshot::GridView;
pub use universe::Universe;

/// Row-major grid of cells: index `i = row * columns + col`.
/// Out-of-range access returns `SimError`, never panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) cells: Vec<Cell>,
}

impl Grid {
    /// Allocates `rows * columns` cells, each colored by an independent
    /// palette pick. `fill_all` decides the initial occupancy of every cell.
    pub fn build(rows: usize, columns: usize, fill_all: bool, rng: &mut RngService) -> Self {
        let cells = (0..rows * columns)
            .map(|_| Cell::new(fill_all, rng.palette_color()))
            .collect();
        log::info!("built {rows}x{columns} grid (fill_all: {fill_all})");
        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Grid tiling `screen` with `cell_size` squares.
    pub fn for_screen(
        screen: ScreenSize,
        cell_size: CellSize,
        fill_all: bool,
        rng: &mut RngService,
    ) -> Self {
        let (rows, columns) = screen.grid_shape(cell_size);
        Self::build(rows, columns, fill_all, rng)
    }

    /// Discards all state and rebuilds an unoccupied grid for the new cell size.
    pub fn resize(&mut self, screen: ScreenSize, cell_size: CellSize, rng: &mut RngService) {
        *self = Self::for_screen(screen, cell_size, false, rng);
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.columns
    }

    /// Linear index of a signed coordinate.
    pub fn locate(&self, row: i64, col: i64) -> Result<usize> {
        if self.in_bounds(row, col) {
            Ok(row as usize * self.columns + col as usize)
        } else {
            Err(SimError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        let index = self.locate(row as i64, col as i64)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let index = self.locate(row as i64, col as i64)?;
        self.cells[index] = cell;
        Ok(())
    }

    pub fn cell_at(&self, index: usize) -> Result<Cell> {
        self.cells
            .get(index)
            .copied()
            .ok_or(SimError::IndexOutOfRange {
                index,
                len: self.cells.len(),
            })
    }

    pub fn set_at(&mut self, index: usize, cell: Cell) -> Result<()> {
        let len = self.cells.len();
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(SimError::IndexOutOfRange { index, len })?;
        *slot = cell;
        Ok(())
    }

    /// Occupancy toggle that leaves the cell's color alone.
    pub fn set_occupied(&mut self, index: usize, occupied: bool) -> Result<()> {
        let len = self.cells.len();
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(SimError::IndexOutOfRange { index, len })?;
        slot.occupied = occupied;
        Ok(())
    }

    /// In range and unoccupied.
    #[must_use]
    pub fn is_free(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(|cell| !cell.occupied)
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.occupied).count()
    }

    /// Advance the simulation by one tick and return how many grains moved.
    ///
    /// Scans linear indices from the last down to the first, so a grain moved
    /// to a higher index this tick is never visited again. A grain is only
    /// considered while `i + columns < rows * columns - 1`; the last row and the
    /// final cell of the row above it never move. `roll` is the single random
    /// draw shared by every divergence decision in this tick.
    pub fn tick(&mut self, roll: u8, rules: MotionRules) -> usize {
        let len = self.cells.len();
        let columns = self.columns;
        let mut moved = 0;

        for i in (0..len).rev() {
            if !self.cells[i].occupied || i + columns + 1 >= len {
                continue;
            }
            let mut grain_api = api::GrainApi::new(self, i, rules);
            if sand::update_grain(&mut grain_api, roll) {
                moved += 1;
            }
        }
        moved
    }
}
