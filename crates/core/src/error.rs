//! Error types for board construction

use thiserror::Error;

use crate::types::{Cell, PieceKind};

/// Rejected board configuration
///
/// Running games never produce these; game over is reported through
/// [`MoveOutcome::GameOver`](crate::MoveOutcome::GameOver).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid board dimensions: visible height {visible_height}, width {width} (width must be at least {min_width})")]
    InvalidDimensions {
        visible_height: usize,
        width: usize,
        min_width: usize,
    },

    #[error("grid override must be {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    GridShape {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("grid cell ({row}, {col}) holds {value}, which is not a piece fill-id")]
    InvalidCell { row: usize, col: usize, value: Cell },

    #[error("grid cell ({row}, {col}) is filled but lies where a {kind} piece spawns")]
    SpawnBlocked {
        kind: PieceKind,
        row: usize,
        col: usize,
    },
}
