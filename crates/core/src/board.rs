//! Board module - the turn-by-turn simulation
//!
//! The board owns the grid of frozen cells, the active piece, the lookahead
//! queue and the score. [`Board::move_active_piece`] is the only transition
//! that advances the game: it validates and applies one unit of motion, freezes
//! the piece once it rests, collapses full rows, scores them and promotes the
//! next piece or reports game over.

use std::fmt;

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::grid::Grid;
use crate::pieces::Tetromino;
use crate::rng::{random_kind, RandomSource};
use crate::scoring::line_clear_score;
use crate::types::*;
use crate::BoardError;

/// Hidden row whose occupancy after a freeze ends the game.
///
/// It is the last spawn row, directly above the visible playfield. Every
/// spawn mask fills its bottom row, so a piece that freezes without leaving
/// the spawn rows always lands a cell here.
pub const GAME_OVER_ROW: usize = PIECE_SIZE - 1;

/// Diagnostic hooks called by the board; purely observational
pub trait BoardObserver: Send {
    /// A piece was copied into the grid
    fn on_freeze(&mut self, piece: &Tetromino) {
        let _ = piece;
    }

    /// Rows were resolved after a freeze (`lines_cleared` may be 0)
    fn on_score_update(&mut self, lines_cleared: u32, score: u32) {
        let _ = (lines_cleared, score);
    }
}

/// Lifecycle of a board; `GameOver` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardState {
    Playing,
    GameOver,
}

/// What happened during one call to [`Board::move_active_piece`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnEvent {
    /// The requested shift was legal and applied
    pub shifted: bool,
    /// The active piece froze into the grid and the next one was promoted
    pub locked: bool,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
}

/// Terminal result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOver {
    pub final_score: u32,
    /// The piece whose freeze ended the game
    pub losing_piece: Tetromino,
}

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game over from piece {}! Score: {}",
            self.losing_piece.kind, self.final_score
        )
    }
}

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue(TurnEvent),
    GameOver(GameOver),
}

impl MoveOutcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, MoveOutcome::GameOver(_))
    }

    pub fn event(&self) -> Option<&TurnEvent> {
        match self {
            MoveOutcome::Continue(event) => Some(event),
            MoveOutcome::GameOver(_) => None,
        }
    }

    pub fn game_over(&self) -> Option<&GameOver> {
        match self {
            MoveOutcome::Continue(_) => None,
            MoveOutcome::GameOver(over) => Some(over),
        }
    }
}

/// Configures and constructs a [`Board`]
pub struct BoardBuilder<R = StdRng> {
    visible_height: usize,
    width: usize,
    rng: R,
    grid: Option<Vec<Vec<Cell>>>,
    observer: Option<Box<dyn BoardObserver>>,
}

impl BoardBuilder<StdRng> {
    /// Builder with an entropy-seeded default RNG
    pub fn new(visible_height: usize, width: usize) -> Self {
        Self::with_rng(visible_height, width, StdRng::from_entropy())
    }
}

impl<R: RandomSource> BoardBuilder<R> {
    pub fn with_rng(visible_height: usize, width: usize, rng: R) -> Self {
        Self {
            visible_height,
            width,
            rng,
            grid: None,
            observer: None,
        }
    }

    /// Use `rng` to generate pieces
    pub fn rng<S: RandomSource>(self, rng: S) -> BoardBuilder<S> {
        BoardBuilder {
            visible_height: self.visible_height,
            width: self.width,
            rng,
            grid: self.grid,
            observer: self.observer,
        }
    }

    /// Start from these cells instead of an empty grid.
    ///
    /// Must be `(visible_height + PIECE_SIZE) x width`, hidden rows included,
    /// and must leave the spawn cells of every piece kind empty.
    pub fn grid(mut self, rows: Vec<Vec<Cell>>) -> Self {
        self.grid = Some(rows);
        self
    }

    pub fn observer(mut self, observer: impl BoardObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn build(self) -> Result<Board<R>, BoardError> {
        let BoardBuilder {
            visible_height,
            width,
            mut rng,
            grid,
            observer,
        } = self;

        if visible_height == 0 || width < PIECE_SIZE {
            return Err(BoardError::InvalidDimensions {
                visible_height,
                width,
                min_width: PIECE_SIZE,
            });
        }

        let height = visible_height + PIECE_SIZE;
        let grid = match grid {
            Some(rows) => Grid::from_rows(height, width, rows)?,
            None => Grid::new(height, width),
        };

        let spawn_col = spawn_col(width);
        for kind in PieceKind::ALL {
            let piece = Tetromino::new(kind, SPAWN_ROW, spawn_col);
            let blocked = piece.cells().find(|&(r, c, _)| grid.is_occupied(r, c));
            if let Some((row, col, _)) = blocked {
                return Err(BoardError::SpawnBlocked {
                    kind,
                    row: row as usize,
                    col: col as usize,
                });
            }
        }

        // The first of the LOOKAHEAD_LEN generated pieces becomes active.
        let active = Tetromino::new(random_kind(&mut rng), SPAWN_ROW, spawn_col);
        let mut upcoming = ArrayVec::new();
        for _ in 1..LOOKAHEAD_LEN {
            upcoming.push(Tetromino::new(random_kind(&mut rng), SPAWN_ROW, spawn_col));
        }

        Ok(Board {
            grid,
            visible_height,
            active,
            upcoming,
            score: 0,
            game_over: None,
            rng,
            observer,
        })
    }
}

fn spawn_col(width: usize) -> i32 {
    (width.saturating_sub(PIECE_SIZE) / 2) as i32
}

/// Falling-block board: grid, active piece, lookahead queue and score
pub struct Board<R = StdRng> {
    grid: Grid,
    visible_height: usize,
    active: Tetromino,
    /// Next pieces, head first. Refilled by one for every piece promoted.
    upcoming: ArrayVec<Tetromino, LOOKAHEAD_LEN>,
    score: u32,
    game_over: Option<GameOver>,
    rng: R,
    observer: Option<Box<dyn BoardObserver>>,
}

impl Board<StdRng> {
    /// Create a board with an entropy-seeded RNG
    pub fn new(visible_height: usize, width: usize) -> Result<Self, BoardError> {
        BoardBuilder::new(visible_height, width).build()
    }

    pub fn builder(visible_height: usize, width: usize) -> BoardBuilder<StdRng> {
        BoardBuilder::new(visible_height, width)
    }
}

impl<R: RandomSource> Board<R> {
    /// Create a board drawing pieces from `rng`
    pub fn with_rng(visible_height: usize, width: usize, rng: R) -> Result<Self, BoardError> {
        BoardBuilder::with_rng(visible_height, width, rng).build()
    }

    /// Advance one turn by trying to move the active piece one unit.
    ///
    /// Illegal moves are ignored, but the freeze check still runs, so a piece
    /// resting on the stack freezes on any call. Once the game is over the
    /// board no longer changes and every call returns the same
    /// [`MoveOutcome::GameOver`].
    pub fn move_active_piece(&mut self, direction: Direction) -> MoveOutcome {
        if let Some(over) = self.game_over {
            return MoveOutcome::GameOver(over);
        }

        let candidate = self.active.shifted(direction);
        let shifted = self.fits(&candidate);
        if shifted {
            self.active = candidate;
        }

        if !self.is_resting() {
            return MoveOutcome::Continue(TurnEvent {
                shifted,
                ..TurnEvent::default()
            });
        }

        self.freeze();

        let lines_cleared = self.grid.clear_full_rows(PIECE_SIZE);
        // A preset hidden cell can slide into the spawn area after a collapse.
        let continue_game = self.grid.is_row_empty(GAME_OVER_ROW)
            && self.upcoming.first().map_or(true, |next| self.fits(next));
        let points = line_clear_score(lines_cleared);
        self.score = self.score.saturating_add(points);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_score_update(lines_cleared, self.score);
        }

        if !continue_game {
            let over = GameOver {
                final_score: self.score,
                losing_piece: self.active,
            };
            self.game_over = Some(over);
            return MoveOutcome::GameOver(over);
        }

        self.promote_next();

        MoveOutcome::Continue(TurnEvent {
            shifted,
            locked: true,
            lines_cleared,
            line_clear_score: points,
        })
    }

    /// Rotate the active piece clockwise if the rotated mask fits where it is.
    ///
    /// No kicks are attempted and the piece never freezes here.
    pub fn rotate_active_piece(&mut self) -> bool {
        if self.game_over.is_some() {
            return false;
        }

        let candidate = self.active.rotated();
        if !self.fits(&candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Replace the active piece with the queue head and queue a fresh piece
    fn promote_next(&mut self) {
        let fresh = Tetromino::new(
            random_kind(&mut self.rng),
            SPAWN_ROW,
            spawn_col(self.grid.width()),
        );
        self.upcoming.push(fresh);
        if let Some(next) = self.upcoming.pop_at(0) {
            self.active = next;
        }
    }
}

impl<R> Board<R> {
    /// Every occupied cell of `piece` lies inside the grid on an empty cell
    fn fits(&self, piece: &Tetromino) -> bool {
        piece
            .cells()
            .all(|(row, col, _)| self.grid.is_vacant(row, col))
    }

    /// Some occupied cell of the active piece sits on the floor or on the stack
    fn is_resting(&self) -> bool {
        let last_row = self.grid.height() as i32 - 1;
        self.active
            .cells()
            .any(|(row, col, _)| row >= last_row || self.grid.is_occupied(row + 1, col))
    }

    /// Copy the active piece into the grid
    fn freeze(&mut self) {
        for (row, col, fill) in self.active.cells() {
            self.grid.set(row, col, fill);
        }
        if let Some(observer) = self.observer.as_mut() {
            observer.on_freeze(&self.active);
        }
    }

    pub fn active_piece(&self) -> &Tetromino {
        &self.active
    }

    /// Lookahead queue, next piece first
    pub fn upcoming(&self) -> &[Tetromino] {
        &self.upcoming
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of rows, hidden spawn rows included
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Number of rows below the hidden spawn rows
    pub fn visible_height(&self) -> usize {
        self.visible_height
    }

    pub fn hidden_rows(&self) -> usize {
        PIECE_SIZE
    }

    /// Pieces generated at construction (active piece included)
    pub fn starting_pieces(&self) -> usize {
        LOOKAHEAD_LEN
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> BoardState {
        match self.game_over {
            Some(_) => BoardState::GameOver,
            None => BoardState::Playing,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn game_over(&self) -> Option<&GameOver> {
        self.game_over.as_ref()
    }

    /// Human-readable dump of the board, one `[...]` line per grid row
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<R> fmt::Display for Board<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Board: active={}, score={}]", self.active.kind, self.score)?;
        for row in self.grid.rows() {
            f.write_str("[")?;
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

impl<R> fmt::Debug for Board<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("grid", &self.grid)
            .field("active", &self.active)
            .field("upcoming", &self.upcoming)
            .field("score", &self.score)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
