//! Cell and color types for the simulation grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 4-byte RGBA color: `#[repr(C)]` so frame buffers can be copied straight into a texture.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Sand tones, darkest first. Order matters: palette picks index it with `roll - 1`.
pub const PALETTE: [Rgba8; 6] = [
    Rgba8::rgb(150, 114, 22),
    Rgba8::rgb(161, 130, 50),
    Rgba8::rgb(177, 153, 87),
    Rgba8::rgb(192, 173, 121),
    Rgba8::rgb(205, 190, 144),
    Rgba8::rgb(228, 214, 172),
];

/// One grid slot. Cells have no identity beyond their position; they are
/// overwritten in place and only `occupied` toggles during a run.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub occupied: bool,
    pub color: Rgba8,
}

impl Default for Cell {
    fn default() -> Self {
        Self::vacant(PALETTE[0])
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.occupied {
            write!(f, "Sand({})", self.color)
        } else {
            write!(f, "Empty")
        }
    }
}

impl Cell {
    #[must_use]
    pub const fn new(occupied: bool, color: Rgba8) -> Self {
        Self { occupied, color }
    }

    #[must_use]
    pub const fn grain(color: Rgba8) -> Self {
        Self::new(true, color)
    }

    #[must_use]
    pub const fn vacant(color: Rgba8) -> Self {
        Self::new(false, color)
    }
}
