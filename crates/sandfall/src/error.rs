//! Error taxonomy for the simulation core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("cell ({row}, {col}) is outside the {rows}x{columns} grid")]
    IndexOutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        columns: usize,
    },
    #[error("index {index} is outside a grid of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cell size {0} must be between {min} and {max}", min = crate::resize::MIN_CELL_SIZE, max = crate::resize::MAX_CELL_SIZE)]
    InvalidCellSize(u32),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
