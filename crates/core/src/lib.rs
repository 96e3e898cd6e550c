//! Core engine module - pure, deterministic, and testable
//!
//! This crate contains the whole falling-block simulation: piece masks and
//! rotation, the cell grid, collision checks, freezing, row collapse, scoring
//! and game-over detection. It has **no dependencies** on rendering, input or
//! I/O:
//!
//! - **Deterministic**: an injected [`RandomSource`] makes every game replayable
//! - **Synchronous**: each call runs to completion in O(board area)
//! - **Single writer**: all mutation goes through `&mut Board`
//!
//! # Module Structure
//!
//! - [`pieces`]: canonical 4x4 masks, clockwise rotation, [`Tetromino`]
//! - [`grid`]: row-major cell storage with row collapse
//! - [`board`]: active piece, lookahead queue, score and the turn transition
//! - [`rng`]: [`RandomSource`] and the seeded [`SimpleRng`]
//! - [`scoring`]: `2^rows` row-clear reward
//!
//! # Game Rules
//!
//! - The grid has `PIECE_SIZE` hidden rows above the visible playfield; new
//!   pieces spawn there at row 0, column `(width - 4) / 2`
//! - A move is one unit Down, Left or Right; illegal moves are ignored
//! - After every move request the piece freezes if any of its cells rests on
//!   the floor or on a frozen cell
//! - Full rows below the hidden rows collapse; `n` rows at once score `2^n`
//! - A frozen cell left in the last hidden row ends the game, as does a next
//!   piece with no room to spawn
//!
//! # Example
//!
//! ```
//! use tetromino_engine_core::{Board, MoveOutcome, SimpleRng};
//! use tetromino_engine_core::types::Direction;
//!
//! let mut board = Board::with_rng(20, 10, SimpleRng::new(12345)).unwrap();
//! assert_eq!(board.score(), 0);
//!
//! let row = board.active_piece().row;
//! match board.move_active_piece(Direction::Down) {
//!     MoveOutcome::Continue(event) => assert!(event.shifted),
//!     MoveOutcome::GameOver(over) => panic!("{}", over),
//! }
//! assert_eq!(board.active_piece().row, row + 1);
//! ```

pub mod board;
pub mod error;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use tetromino_engine_types as types;

// Re-export commonly used types for convenience
pub use board::{
    Board, BoardBuilder, BoardObserver, BoardState, GameOver, MoveOutcome, TurnEvent,
    GAME_OVER_ROW,
};
pub use error::BoardError;
pub use grid::Grid;
pub use pieces::{rotate_cw, spawn_mask, Tetromino};
pub use rng::{random_kind, RandomSource, SimpleRng};
pub use scoring::line_clear_score;
