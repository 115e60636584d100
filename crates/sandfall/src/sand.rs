//! Sand grain: falls straight down, otherwise spills diagonally on a lucky roll.

use crate::api::{GrainApi, Side};

/// Roll that sends a blocked grain down-left.
pub const SPILL_LEFT: u8 = 1;
/// Roll that sends a blocked grain down-right.
pub const SPILL_RIGHT: u8 = 2;

/// Returns true if the grain moved.
pub fn update_grain(api: &mut GrainApi, roll: u8) -> bool {
    let below = api.below();
    if api.is_free(below) {
        return api.move_to(below);
    }

    let side = match roll {
        SPILL_LEFT => Side::Left,
        SPILL_RIGHT => Side::Right,
        _ => return false,
    };
    match api.diagonal(side) {
        Some(target) => api.move_to(target),
        None => false,
    }
}
