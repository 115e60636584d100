//! Motion policies for the fall/diverge rule.

use serde::{Deserialize, Serialize};

/// What travels with a grain when it moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrainColor {
    /// The whole cell moves, so a grain keeps its color.
    #[default]
    Carried,
    /// Only the occupied flag moves; color stays with the grid slot.
    Positional,
}

/// Whether a diagonal spill may cross the left/right grid edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LateralEdges {
    /// No lateral movement out of the first or last column.
    #[default]
    Blocked,
    /// Flat-index spill: `below - 1` at column 0 lands on the previous row's
    /// last column, `below + 1` at the last column on the next row's first.
    Wrap,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionRules {
    pub grain_color: GrainColor,
    pub lateral_edges: LateralEdges,
}

impl MotionRules {
    /// Flag-only moves with edge wrap. `Grid::tick` still scans index 0,
    /// so the top-left grain falls under these rules too.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            grain_color: GrainColor::Positional,
            lateral_edges: LateralEdges::Wrap,
        }
    }
}
