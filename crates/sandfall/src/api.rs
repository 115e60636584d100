//! Index-relative view of one grain for the motion rule.

use crate::rules::{GrainColor, LateralEdges, MotionRules};
use crate::Grid;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

/// Lookups are relative to `index`. Targets outside the grid are never free,
/// so moves into them are rejected.
#[derive(Debug)]
pub struct GrainApi<'a> {
    pub grid: &'a mut Grid,
    pub index: usize,
    pub rules: MotionRules,
}

impl<'a> GrainApi<'a> {
    pub fn new(grid: &'a mut Grid, index: usize, rules: MotionRules) -> Self {
        Self { grid, index, rules }
    }

    /// Cell one full row down.
    #[must_use]
    pub fn below(&self) -> usize {
        self.index + self.grid.columns
    }

    /// Cell one row down and one column to `side`, if the edge policy allows it.
    #[must_use]
    pub fn diagonal(&self, side: Side) -> Option<usize> {
        let below = self.below();
        let columns = self.grid.columns;
        if columns == 0 {
            return None;
        }
        if self.rules.lateral_edges == LateralEdges::Blocked {
            let col = below % columns;
            match side {
                Side::Left if col == 0 => return None,
                Side::Right if col + 1 == columns => return None,
                _ => {}
            }
        }
        match side {
            Side::Left => below.checked_sub(1),
            Side::Right => Some(below + 1),
        }
    }

    #[must_use]
    pub fn is_free(&self, target: usize) -> bool {
        self.grid.is_free(target)
    }

    /// Moves the grain at `index` into `target`, which must be free.
    /// Returns false (and changes nothing) otherwise.
    pub fn move_to(&mut self, target: usize) -> bool {
        if target == self.index || !self.grid.is_free(target) {
            return false;
        }
        let cells = &mut self.grid.cells;
        match self.rules.grain_color {
            GrainColor::Carried => cells.swap(self.index, target),
            GrainColor::Positional => {
                cells[self.index].occupied = false;
                cells[target].occupied = true;
            }
        }
        true
    }
}
