//! Rendering boundary: turns a grid snapshot into draw squares or RGBA pixels.
//!
//! Display options live in an explicit `RenderConfig` handed in by the host;
//! nothing here feeds back into the simulation.

use serde::{Deserialize, Serialize};

use crate::brush::BrushRegion;
use crate::cell::Rgba8;
use crate::snapshot::GridView;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawStyle {
    /// Solid square per grain.
    #[default]
    Filled,
    /// One pixel at the centre of each grain's square.
    Points,
    /// One-pixel outline of each grain's square.
    Hollow,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub style: DrawStyle,
    pub clear_color: Rgba8,
    /// Outline the brush square when a pointer position is supplied.
    pub show_brush: bool,
    pub brush_color: Rgba8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: DrawStyle::Filled,
            clear_color: Rgba8::BLACK,
            show_brush: false,
            brush_color: Rgba8::rgb(255, 255, 255),
        }
    }
}

/// Screen-space square for one occupied cell.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Rgba8,
}

pub fn cell_rects<'a>(view: GridView<'a>, cell_size: u32) -> impl Iterator<Item = CellRect> + 'a {
    let size = cell_size as f32;
    view.occupied().map(move |(row, col, cell)| CellRect {
        x: col as f32 * size,
        y: row as f32 * size,
        size,
        color: cell.color,
    })
}

/// Tightly packed RGBA8 pixels, row-major, top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = (y as usize * self.width as usize + x as usize) * 4;
        let &[r, g, b, a] = &self.pixels[at..at + 4] else {
            return None;
        };
        Some(Rgba8::new(r, g, b, a))
    }

    pub fn clear(&mut self, color: Rgba8) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    /// Writes one pixel; coordinates off the buffer are ignored.
    pub fn put(&mut self, x: i64, y: i64, color: Rgba8) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let at = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[at..at + 4].copy_from_slice(&color.to_bytes());
    }

    pub fn fill_rect(&mut self, x: i64, y: i64, size: i64, color: Rgba8) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + size).min(i64::from(self.width));
        let y1 = (y + size).min(i64::from(self.height));
        for py in y0..y1 {
            for px in x0..x1 {
                self.put(px, py, color);
            }
        }
    }

    pub fn outline_rect(&mut self, x: i64, y: i64, size: i64, color: Rgba8) {
        if size <= 0 {
            return;
        }
        let last = size - 1;
        for d in 0..size {
            self.put(x + d, y, color);
            self.put(x + d, y + last, color);
            self.put(x, y + d, color);
            self.put(x + last, y + d, color);
        }
    }
}

/// Clears `frame` and draws every occupied cell in `config.style`, then the
/// brush outline if enabled and `brush` is given.
pub fn rasterize(
    view: GridView<'_>,
    cell_size: u32,
    config: &RenderConfig,
    brush: Option<BrushRegion>,
    frame: &mut FrameBuffer,
) {
    frame.clear(config.clear_color);
    let size = i64::from(cell_size);
    for (row, col, cell) in view.occupied() {
        let x = col as i64 * size;
        let y = row as i64 * size;
        match config.style {
            DrawStyle::Filled => frame.fill_rect(x, y, size, cell.color),
            DrawStyle::Points => frame.put(x + size / 2, y + size / 2, cell.color),
            DrawStyle::Hollow => frame.outline_rect(x, y, size, cell.color),
        }
    }

    if let (true, Some(region)) = (config.show_brush, brush) {
        frame.outline_rect(
            region.x.floor() as i64,
            region.y.floor() as i64,
            region.size as i64,
            config.brush_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Cell, PALETTE};
    use crate::tests::empty_grid;
    use crate::Grid;

    fn one_grain() -> Grid {
        let mut grid = empty_grid(3, 3);
        grid.cells[4] = Cell::grain(PALETTE[2]);
        grid
    }

    #[test]
    fn cell_rects_cover_occupied_cells() {
        let grid = one_grain();
        let rects: Vec<CellRect> = cell_rects(GridView::new(&grid), 4).collect();
        assert_eq!(
            rects,
            vec![CellRect {
                x: 4.0,
                y: 4.0,
                size: 4.0,
                color: PALETTE[2]
            }]
        );
    }

    #[test]
    fn filled_style() {
        let grid = one_grain();
        let mut frame = FrameBuffer::new(12, 12);
        rasterize(GridView::new(&grid), 4, &RenderConfig::default(), None, &mut frame);
        assert_eq!(frame.pixel(4, 4), Some(PALETTE[2]));
        assert_eq!(frame.pixel(7, 7), Some(PALETTE[2]));
        assert_eq!(frame.pixel(8, 8), Some(Rgba8::BLACK));
        assert_eq!(frame.pixel(3, 4), Some(Rgba8::BLACK));
        assert_eq!(frame.pixel(12, 0), None);
    }

    #[test]
    fn points_style() {
        let grid = one_grain();
        let mut frame = FrameBuffer::new(12, 12);
        let config = RenderConfig {
            style: DrawStyle::Points,
            ..RenderConfig::default()
        };
        rasterize(GridView::new(&grid), 4, &config, None, &mut frame);
        assert_eq!(frame.pixel(6, 6), Some(PALETTE[2]));
        assert_eq!(frame.pixel(4, 4), Some(Rgba8::BLACK));
    }

    #[test]
    fn hollow_style() {
        let grid = one_grain();
        let mut frame = FrameBuffer::new(12, 12);
        let config = RenderConfig {
            style: DrawStyle::Hollow,
            clear_color: Rgba8::rgb(1, 2, 3),
            ..RenderConfig::default()
        };
        rasterize(GridView::new(&grid), 4, &config, None, &mut frame);
        assert_eq!(frame.pixel(4, 4), Some(PALETTE[2]));
        assert_eq!(frame.pixel(7, 5), Some(PALETTE[2]));
        assert_eq!(frame.pixel(5, 5), Some(Rgba8::rgb(1, 2, 3)));
    }

    #[test]
    fn brush_outline_is_clipped_to_frame() {
        let grid = empty_grid(3, 3);
        let mut frame = FrameBuffer::new(12, 12);
        let config = RenderConfig {
            show_brush: true,
            ..RenderConfig::default()
        };
        let region = BrushRegion::centered(0.0, 0.0, 8);
        rasterize(GridView::new(&grid), 4, &config, Some(region), &mut frame);
        assert_eq!(frame.pixel(3, 0), Some(config.brush_color));
        assert_eq!(frame.pixel(0, 3), Some(config.brush_color));
        assert_eq!(frame.pixel(1, 1), Some(Rgba8::BLACK));
    }

    #[test]
    fn render_config_from_json() {
        let config: RenderConfig = serde_json::from_str(r#"{"style":"hollow"}"#).unwrap();
        assert_eq!(config.style, DrawStyle::Hollow);
        assert_eq!(config.clear_color, Rgba8::BLACK);
    }
}
