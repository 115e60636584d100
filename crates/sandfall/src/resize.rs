//! Cell-size handling: clamping, grid shape, and edge-triggered rebuilds.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

pub const MIN_CELL_SIZE: u32 = 1;
pub const MAX_CELL_SIZE: u32 = 20;

/// Side length of one cell in screen pixels, always within `[1, 20]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct CellSize(u32);

impl CellSize {
    /// Strict constructor: rejects sizes outside `[1, 20]`.
    pub fn new(size: u32) -> Result<Self> {
        if (MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(SimError::InvalidCellSize(size))
        }
    }

    #[must_use]
    pub fn clamped(size: u32) -> Self {
        Self(size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Screen dimensions in pixels, fixed for the life of a simulation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `(rows, columns)` of a grid tiling this screen with `cell_size` squares.
    /// Partial cells at the right and bottom edges are dropped.
    #[must_use]
    pub fn grid_shape(self, cell_size: CellSize) -> (usize, usize) {
        let size = cell_size.get();
        ((self.height / size) as usize, (self.width / size) as usize)
    }
}

/// Tracks the last applied cell size so a slider polled every frame only
/// triggers a rebuild when its value actually changes.
#[derive(Debug, Clone, Copy)]
pub struct ResizeController {
    current: CellSize,
}

impl ResizeController {
    #[must_use]
    pub const fn new(initial: CellSize) -> Self {
        Self { current: initial }
    }

    #[must_use]
    pub const fn current(&self) -> CellSize {
        self.current
    }

    /// Clamps `requested` and returns the new size if it differs from the
    /// current one.
    pub fn observe(&mut self, requested: u32) -> Option<CellSize> {
        let size = CellSize::clamped(requested);
        if size.get() != requested {
            log::warn!("cell size {requested} clamped to {}", size.get());
        }
        if size == self.current {
            return None;
        }
        self.current = size;
        Some(size)
    }
}
