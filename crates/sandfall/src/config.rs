//! Simulation settings, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::brush::{BrushMode, MIN_BRUSH_SIZE};
use crate::error::Result;
use crate::resize::{CellSize, ScreenSize};
use crate::rules::MotionRules;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Requested cell size; clamped to `[1, 20]` when applied.
    pub cell_size: u32,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// First population fills every cell; rebuilds after a resize are always empty.
    pub initial_fill_all: bool,
    pub brush_size: u32,
    pub brush_mode: BrushMode,
    pub rules: MotionRules,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 1000,
            cell_size: 10,
            seed: None,
            initial_fill_all: true,
            brush_size: MIN_BRUSH_SIZE,
            brush_mode: BrushMode::Point,
            rules: MotionRules::default(),
        }
    }
}

impl SimConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    #[must_use]
    pub fn screen(&self) -> ScreenSize {
        ScreenSize::new(self.screen_width, self.screen_height)
    }

    #[must_use]
    pub fn cell_size(&self) -> CellSize {
        let size = CellSize::clamped(self.cell_size);
        if size.get() != self.cell_size {
            log::warn!("configured cell size {} clamped to {}", self.cell_size, size.get());
        }
        size
    }
}
