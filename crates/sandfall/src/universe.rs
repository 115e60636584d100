//! Browser entry point. JS owns the frame loop and reads pixels straight out
//! of WASM memory via `pixels_ptr` / `pixels_len`.

use wasm_bindgen::prelude::*;

use crate::brush::BrushMode;
use crate::config::SimConfig;
use crate::render::{self, DrawStyle, FrameBuffer, RenderConfig};
use crate::Simulation;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sim: Simulation,
    frame: FrameBuffer,
    render_config: RenderConfig,
    pointer: Option<(f32, f32)>,
}

#[wasm_bindgen]
impl Universe {
    /// Empty world; `seed` makes the run reproducible.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(width: u32, height: u32, cell_size: u32, seed: u64) -> Self {
        let config = SimConfig {
            screen_width: width,
            screen_height: height,
            cell_size,
            seed: Some(seed),
            initial_fill_all: false,
            ..SimConfig::default()
        };
        Self {
            sim: Simulation::new(&config),
            frame: FrameBuffer::new(width, height),
            render_config: RenderConfig::default(),
            pointer: None,
        }
    }

    /// Returns how many grains moved.
    pub fn tick(&mut self) -> u32 {
        self.sim.tick() as u32
    }

    pub fn paint(&mut self, x: f32, y: f32) -> u32 {
        self.pointer = Some((x, y));
        self.sim.paint(x, y) as u32
    }

    pub fn erase(&mut self, x: f32, y: f32) -> u32 {
        self.pointer = Some((x, y));
        self.sim.erase(x, y) as u32
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Some((x, y));
    }

    /// Slider value; rebuilds an empty grid only when the clamped size changes.
    pub fn set_cell_size(&mut self, size: u32) -> bool {
        self.sim.set_cell_size(size)
    }

    pub fn adjust_brush(&mut self, notches: i32) {
        self.sim.adjust_brush(notches);
    }

    pub fn set_region_brush(&mut self, region: bool) {
        self.sim
            .set_brush_mode(if region { BrushMode::Region } else { BrushMode::Point });
    }

    /// 0 = filled, 1 = points, 2 = hollow. Unknown values fall back to filled.
    pub fn set_draw_style(&mut self, style: u8) {
        self.render_config.style = match style {
            1 => DrawStyle::Points,
            2 => DrawStyle::Hollow,
            _ => DrawStyle::Filled,
        };
    }

    pub fn set_show_brush(&mut self, show: bool) {
        self.render_config.show_brush = show;
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.sim.dimensions().rows as u32
    }

    #[must_use]
    pub fn columns(&self) -> u32 {
        self.sim.dimensions().columns as u32
    }

    #[must_use]
    pub fn cell_size(&self) -> u32 {
        self.sim.dimensions().cell_size
    }

    #[must_use]
    pub fn occupied_count(&self) -> u32 {
        self.sim.snapshot().occupied_count() as u32
    }

    /// Redraws the frame buffer from the current grid.
    pub fn render(&mut self) {
        let brush = self.pointer.map(|(x, y)| self.sim.brush_region(x, y));
        render::rasterize(
            self.sim.snapshot(),
            self.sim.dimensions().cell_size,
            &self.render_config,
            brush,
            &mut self.frame,
        );
    }

    #[must_use]
    pub fn pixels_ptr(&self) -> *const u8 {
        self.frame.pixels().as_ptr()
    }

    #[must_use]
    pub fn pixels_len(&self) -> u32 {
        self.frame.pixels().len() as u32
    }
}
