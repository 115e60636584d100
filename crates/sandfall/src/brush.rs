//! Pointer-driven painting and erasing.
//!
//! A brush is a square of `size` pixels centred on the pointer. In `Point`
//! mode only the cell under the pointer is touched and the square is just
//! feedback for the host; `Region` mode touches every cell the square overlaps.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::resize::CellSize;
use crate::Grid;

/// Pixels added or removed per wheel notch.
pub const BRUSH_STEP: u32 = 20;
pub const MIN_BRUSH_SIZE: u32 = BRUSH_STEP;
pub const MAX_BRUSH_SIZE: u32 = 400;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrushMode {
    #[default]
    Point,
    Region,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Stroke {
    Paint,
    Erase,
}

impl Stroke {
    fn occupied(self) -> bool {
        self == Stroke::Paint
    }
}

/// Axis-aligned square in screen pixels.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BrushRegion {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl BrushRegion {
    #[must_use]
    pub fn centered(pointer_x: f32, pointer_y: f32, size: u32) -> Self {
        let size = size as f32;
        Self {
            x: pointer_x - size / 2.0,
            y: pointer_y - size / 2.0,
            size,
        }
    }
}

/// Signed `(row, col)` under a pointer. Non-finite coordinates map to `-1`.
#[must_use]
pub fn pointer_cell(pointer_x: f32, pointer_y: f32, cell_size: CellSize) -> (i64, i64) {
    let size = cell_size.get() as f32;
    let to_cell = |v: f32| if v.is_finite() { (v / size).floor() as i64 } else { -1 };
    (to_cell(pointer_y), to_cell(pointer_x))
}

/// Marks the single cell under the pointer occupied without touching its
/// color. Returns whether the cell changed.
pub fn activate(grid: &mut Grid, cell_size: CellSize, pointer_x: f32, pointer_y: f32) -> Result<bool> {
    stroke_point(grid, cell_size, pointer_x, pointer_y, Stroke::Paint)
}

fn stroke_point(
    grid: &mut Grid,
    cell_size: CellSize,
    pointer_x: f32,
    pointer_y: f32,
    stroke: Stroke,
) -> Result<bool> {
    let (row, col) = pointer_cell(pointer_x, pointer_y, cell_size);
    let index = grid.locate(row, col)?;
    let changed = grid.cells[index].occupied != stroke.occupied();
    grid.set_occupied(index, stroke.occupied())?;
    Ok(changed)
}

/// Half-open cell span `[first, last)` covered by `[start, start + len)`,
/// clipped to `0..limit`.
fn covered_span(start: f32, len: f32, cell_size: f32, limit: usize) -> std::ops::Range<usize> {
    if !start.is_finite() || !len.is_finite() {
        return 0..0;
    }
    let first = (start / cell_size).floor().max(0.0);
    let last = ((start + len) / cell_size).ceil().clamp(0.0, limit as f32);
    let first = (first as usize).min(limit);
    first..(last as usize).max(first)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Brush {
    size: u32,
    mode: BrushMode,
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(MIN_BRUSH_SIZE, BrushMode::Point)
    }
}

impl Brush {
    #[must_use]
    pub fn new(size: u32, mode: BrushMode) -> Self {
        Self {
            size: clamp_size(i64::from(size)),
            mode,
        }
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: BrushMode) {
        self.mode = mode;
    }

    /// Wheel notches: positive (scroll up) shrinks the brush, negative grows it.
    pub fn adjust(&mut self, notches: i32) {
        let wanted = i64::from(self.size) - i64::from(notches) * i64::from(BRUSH_STEP);
        self.size = clamp_size(wanted);
    }

    #[must_use]
    pub fn region(&self, pointer_x: f32, pointer_y: f32) -> BrushRegion {
        BrushRegion::centered(pointer_x, pointer_y, self.size)
    }

    /// Applies `stroke` at the pointer and returns how many cells changed.
    ///
    /// `Point` fails with `IndexOutOfBounds` when the pointer is off the grid;
    /// `Region` clips to the grid and only fails when nothing overlaps it.
    pub fn apply(
        &self,
        grid: &mut Grid,
        cell_size: CellSize,
        pointer_x: f32,
        pointer_y: f32,
        stroke: Stroke,
    ) -> Result<usize> {
        match self.mode {
            BrushMode::Point => {
                stroke_point(grid, cell_size, pointer_x, pointer_y, stroke).map(usize::from)
            }
            BrushMode::Region => self.apply_region(grid, cell_size, pointer_x, pointer_y, stroke),
        }
    }

    fn apply_region(
        &self,
        grid: &mut Grid,
        cell_size: CellSize,
        pointer_x: f32,
        pointer_y: f32,
        stroke: Stroke,
    ) -> Result<usize> {
        let region = self.region(pointer_x, pointer_y);
        let size = cell_size.get() as f32;
        let rows = covered_span(region.y, region.size, size, grid.rows);
        let cols = covered_span(region.x, region.size, size, grid.columns);
        if rows.is_empty() || cols.is_empty() {
            let (row, col) = pointer_cell(pointer_x, pointer_y, cell_size);
            return Err(SimError::IndexOutOfBounds {
                row,
                col,
                rows: grid.rows,
                columns: grid.columns,
            });
        }

        let occupied = stroke.occupied();
        let mut changed = 0;
        for row in rows {
            for col in cols.clone() {
                let cell = &mut grid.cells[row * grid.columns + col];
                if cell.occupied != occupied {
                    cell.occupied = occupied;
                    changed += 1;
                }
            }
        }
        Ok(changed)
    }
}

fn clamp_size(size: i64) -> u32 {
    let clamped = size.clamp(i64::from(MIN_BRUSH_SIZE), i64::from(MAX_BRUSH_SIZE));
    if clamped != size {
        log::warn!("brush size {size} clamped to {clamped}");
    }
    clamped as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::empty_grid;
    use proptest::prelude::*;

    fn cs(size: u32) -> CellSize {
        CellSize::clamped(size)
    }

    #[test]
    fn pointer_cell_floors() {
        assert_eq!(pointer_cell(0.0, 0.0, cs(10)), (0, 0));
        assert_eq!(pointer_cell(19.9, 10.0, cs(10)), (1, 1));
        assert_eq!(pointer_cell(-0.5, 5.0, cs(10)), (0, -1));
        assert_eq!(pointer_cell(f32::NAN, 5.0, cs(10)), (0, -1));
    }

    #[test]
    fn activate_sets_only_the_pointer_cell() {
        let mut grid = empty_grid(10, 10);
        let before = grid.clone();
        assert!(activate(&mut grid, cs(10), 35.0, 72.0).unwrap());

        let index = 7 * 10 + 3;
        assert!(grid.cells[index].occupied);
        assert_eq!(grid.cells[index].color, before.cells[index].color);
        assert_eq!(grid.occupied_count(), 1);

        // Second activation of the same cell changes nothing.
        assert!(!activate(&mut grid, cs(10), 31.0, 79.0).unwrap());
    }

    #[test]
    fn activate_off_grid_is_error_and_noop() {
        let mut grid = empty_grid(10, 10);
        let before = grid.clone();
        for (x, y) in [(-1.0, 5.0), (5.0, -1.0), (100.0, 5.0), (5.0, 100.0), (f32::INFINITY, 0.0)] {
            assert!(matches!(
                activate(&mut grid, cs(10), x, y),
                Err(SimError::IndexOutOfBounds { .. })
            ));
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn point_brush_ignores_size() {
        let mut grid = empty_grid(20, 20);
        let brush = Brush::new(200, BrushMode::Point);
        assert_eq!(brush.apply(&mut grid, cs(5), 50.0, 50.0, Stroke::Paint).unwrap(), 1);
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn erase_clears_the_pointer_cell() {
        let mut grid = empty_grid(4, 4);
        grid.cells[5].occupied = true;
        let brush = Brush::default();
        assert_eq!(brush.apply(&mut grid, cs(10), 15.0, 15.0, Stroke::Erase).unwrap(), 1);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn region_brush_fills_overlapped_cells() {
        let mut grid = empty_grid(20, 20);
        let brush = Brush::new(20, BrushMode::Region);
        // Square [40, 60) x [40, 60) covers cells 4..6 on both axes at size 10.
        assert_eq!(brush.apply(&mut grid, cs(10), 50.0, 50.0, Stroke::Paint).unwrap(), 4);
        for (row, col) in [(4, 4), (4, 5), (5, 4), (5, 5)] {
            assert!(grid.get(row, col).unwrap().occupied);
        }
        assert_eq!(grid.occupied_count(), 4);
    }

    #[test]
    fn region_brush_clips_at_the_corner() {
        let mut grid = empty_grid(5, 5);
        let brush = Brush::new(40, BrushMode::Region);
        // Square [-20, 20) on both axes: only cells 0..2 are inside the grid.
        assert_eq!(brush.apply(&mut grid, cs(10), 0.0, 0.0, Stroke::Paint).unwrap(), 4);
        assert_eq!(grid.occupied_count(), 4);
    }

    #[test]
    fn region_brush_entirely_off_grid_is_error() {
        let mut grid = empty_grid(5, 5);
        let brush = Brush::new(20, BrushMode::Region);
        assert!(brush.apply(&mut grid, cs(10), 500.0, 500.0, Stroke::Paint).is_err());
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn wheel_adjusts_in_steps_and_clamps() {
        let mut brush = Brush::new(100, BrushMode::Point);
        brush.adjust(1);
        assert_eq!(brush.size(), 80);
        brush.adjust(-2);
        assert_eq!(brush.size(), 120);
        brush.adjust(100);
        assert_eq!(brush.size(), MIN_BRUSH_SIZE);
        brush.adjust(-100);
        assert_eq!(brush.size(), MAX_BRUSH_SIZE);
    }

    #[test]
    fn region_is_centered() {
        let brush = Brush::new(40, BrushMode::Point);
        assert_eq!(
            brush.region(100.0, 60.0),
            BrushRegion {
                x: 80.0,
                y: 40.0,
                size: 40.0
            }
        );
    }

    proptest! {
        #[test]
        fn prop_activate_never_panics_and_sets_at_most_one(
            x in -500.0f32..1500.0,
            y in -500.0f32..1500.0,
            size in 1u32..=20,
        ) {
            let mut grid = empty_grid(40, 40);
            let result = activate(&mut grid, cs(size), x, y);
            let (row, col) = pointer_cell(x, y, cs(size));
            prop_assert_eq!(result.is_ok(), grid.in_bounds(row, col));
            prop_assert_eq!(grid.occupied_count(), usize::from(result.is_ok()));
        }
    }
}
