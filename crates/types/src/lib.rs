//! Shared types module - piece kinds, directions, masks and constants
//!
//! This crate defines the vocabulary used by the engine core and by drivers.
//! All types are plain data with no game logic, so they can be used from any
//! context (simulation, rendering, replay tooling).
//!
//! # Board geometry
//!
//! The playfield is addressed as `(row, col)` with row 0 at the top:
//!
//! - **Hidden rows**: the first [`PIECE_SIZE`] rows host freshly spawned pieces
//!   and are never scored.
//! - **Visible rows**: everything below the hidden rows.
//! - **Spawn anchor**: row [`SPAWN_ROW`], column `(width - PIECE_SIZE) / 2`.
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PIECE_SIZE` | 4 | Side length of a piece mask and number of hidden rows |
//! | `LOOKAHEAD_LEN` | 5 | Pieces generated into the queue at construction |
//! | `DEFAULT_VISIBLE_HEIGHT` | 20 | Visible rows of a standard board |
//! | `DEFAULT_WIDTH` | 10 | Columns of a standard board |
//!
//! # Examples
//!
//! ```
//! use tetromino_engine_types::{Direction, PieceKind, PIECE_SIZE};
//!
//! let kind: PieceKind = "z".parse().unwrap();
//! assert_eq!(kind, PieceKind::Z);
//! assert_eq!(kind.fill_id(), 7);
//!
//! assert_eq!(Direction::Left.delta(), (0, -1));
//! assert_eq!(PIECE_SIZE, 4);
//! ```

use thiserror::Error;

/// Side length of every piece mask; also the number of hidden spawn rows
pub const PIECE_SIZE: usize = 4;

/// Number of pieces generated into the lookahead queue at construction
pub const LOOKAHEAD_LEN: usize = 5;

/// Row at which new pieces are anchored
pub const SPAWN_ROW: i32 = 0;

/// Visible rows of a standard board
pub const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Columns of a standard board
pub const DEFAULT_WIDTH: usize = 10;

/// Seed used by the replay driver when none is configured
pub const DEFAULT_DEMO_SEED: u32 = 42;

/// A grid or mask cell
///
/// - `0`: empty
/// - `1..=7`: fill-id of the [`PieceKind`] occupying the cell
pub type Cell = u8;

/// Empty cell value
pub const EMPTY: Cell = 0;

/// Occupancy mask of a piece in its current orientation (row-major)
pub type Mask = [[Cell; PIECE_SIZE]; PIECE_SIZE];

/// Raised when a raw id does not name one of the seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown piece kind id: {0}")]
pub struct UnknownPieceKind(pub u8);

/// Raised when a string does not name one of the seven piece kinds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown piece kind name: {0:?}")]
pub struct UnknownPieceName(pub String);

/// The seven tetromino piece kinds
///
/// Declaration order is the index order used for random selection, and
/// `index + 1` is the fill-id written into the grid when the piece freezes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Square,
    Line,
    T,
    L,
    LMirrored,
    S,
    Z,
}

impl PieceKind {
    /// Number of piece kinds
    pub const COUNT: usize = 7;

    /// All kinds in index order
    pub const ALL: [PieceKind; Self::COUNT] = [
        PieceKind::Square,
        PieceKind::Line,
        PieceKind::T,
        PieceKind::L,
        PieceKind::LMirrored,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Kind at `index` in [`PieceKind::ALL`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::Square => 0,
            PieceKind::Line => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::LMirrored => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Non-zero cell value written into the grid for this kind
    ///
    /// # Examples
    ///
    /// ```
    /// use tetromino_engine_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::Square.fill_id(), 1);
    /// assert_eq!(PieceKind::Z.fill_id(), 7);
    /// ```
    pub fn fill_id(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Kind whose fill-id is `id`
    pub fn from_fill_id(id: u8) -> Option<Self> {
        match id {
            0 => None,
            n => Self::from_index(n as usize - 1),
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Square => "square",
            PieceKind::Line => "line",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::LMirrored => "l_mirrored",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

impl std::str::FromStr for PieceKind {
    type Err = UnknownPieceName;

    /// Parses a kind name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetromino_engine_types::PieceKind;
    ///
    /// assert_eq!("square".parse(), Ok(PieceKind::Square));
    /// assert_eq!("L_MIRRORED".parse(), Ok(PieceKind::LMirrored));
    /// assert!("unknown".parse::<PieceKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "square" | "o" => Ok(PieceKind::Square),
            "line" | "i" => Ok(PieceKind::Line),
            "t" => Ok(PieceKind::T),
            "l" => Ok(PieceKind::L),
            "l_mirrored" | "lmirrored" | "j" => Ok(PieceKind::LMirrored),
            "s" => Ok(PieceKind::S),
            "z" => Ok(PieceKind::Z),
            _ => Err(UnknownPieceName(s.to_string())),
        }
    }
}

impl TryFrom<u8> for PieceKind {
    type Error = UnknownPieceKind;

    /// Converts a fill-id (1..=7) back into its kind
    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_fill_id(id).ok_or(UnknownPieceKind(id))
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directions a piece can be shifted in
///
/// There is no `Up`: pieces only ever fall or slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions
    pub const ALL: [Direction; 3] = [Direction::Down, Direction::Left, Direction::Right];

    /// Unit `(row, col)` delta for this direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tetromino_engine_types::Direction;
    ///
    /// assert_eq!(Direction::Down.delta(), (1, 0));
    /// assert_eq!(Direction::Left.delta(), (0, -1));
    /// assert_eq!(Direction::Right.delta(), (0, 1));
    /// ```
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_ids_are_distinct_and_non_zero() {
        let ids: Vec<u8> = PieceKind::ALL.iter().map(|k| k.fill_id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn fill_id_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::try_from(kind.fill_id()), Ok(kind));
        }
    }

    #[test]
    fn unknown_fill_ids_are_rejected() {
        assert_eq!(PieceKind::try_from(0), Err(UnknownPieceKind(0)));
        assert_eq!(PieceKind::try_from(8), Err(UnknownPieceKind(8)));
        assert_eq!(
            UnknownPieceKind(9).to_string(),
            "unknown piece kind id: 9"
        );
    }

    #[test]
    fn index_matches_all_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_index(i), Some(*kind));
        }
        assert_eq!(PieceKind::from_index(PieceKind::COUNT), None);
    }

    #[test]
    fn directions_move_one_unit_and_never_up() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert_eq!(dr.abs() + dc.abs(), 1, "{:?}", dir);
            assert!(dr >= 0, "{:?}", dir);
        }
    }

    #[test]
    fn names_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.as_str().parse(), Ok(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
        assert_eq!(
            "x".parse::<PieceKind>(),
            Err(UnknownPieceName("x".to_string()))
        );
    }
}
