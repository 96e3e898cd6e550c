//! Pieces module - tetromino masks and clockwise rotation
//!
//! Every piece is a 4x4 occupancy mask anchored by its top-left corner.
//! Rotation is a pure geometric transform of the mask; whether the rotated
//! piece fits is decided by the board, never here.

use std::fmt;

use crate::types::{Cell, Direction, Mask, PieceKind, UnknownPieceKind, EMPTY, PIECE_SIZE};

/// Canonical spawn mask for a piece kind
pub fn spawn_mask(kind: PieceKind) -> Mask {
    match kind {
        PieceKind::Square => [
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 1, 1, 0],
            [0, 1, 1, 0],
        ],
        PieceKind::Line => [
            [0, 2, 0, 0],
            [0, 2, 0, 0],
            [0, 2, 0, 0],
            [0, 2, 0, 0],
        ],
        PieceKind::T => [
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [3, 3, 3, 0],
            [0, 3, 0, 0],
        ],
        PieceKind::L => [
            [0, 0, 0, 0],
            [0, 4, 0, 0],
            [0, 4, 0, 0],
            [0, 4, 4, 0],
        ],
        PieceKind::LMirrored => [
            [0, 0, 0, 0],
            [0, 0, 5, 0],
            [0, 0, 5, 0],
            [0, 5, 5, 0],
        ],
        PieceKind::S => [
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 6, 6, 0],
            [6, 6, 0, 0],
        ],
        PieceKind::Z => [
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [7, 7, 0, 0],
            [0, 7, 7, 0],
        ],
    }
}

/// Rotate a mask 90° clockwise (transpose, then reverse the rows)
///
/// `new[r][c] == old[PIECE_SIZE - 1 - c][r]`
pub fn rotate_cw(mask: &Mask) -> Mask {
    let mut out = [[EMPTY; PIECE_SIZE]; PIECE_SIZE];
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = mask[PIECE_SIZE - 1 - c][r];
        }
    }
    out
}

/// A piece on (or about to enter) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub mask: Mask,
    /// Board row of the mask's top edge
    pub row: i32,
    /// Board column of the mask's left edge (may be negative)
    pub col: i32,
}

impl Tetromino {
    /// Create a piece with the canonical mask for `kind` anchored at (row, col)
    pub fn new(kind: PieceKind, row: i32, col: i32) -> Self {
        Self {
            kind,
            mask: spawn_mask(kind),
            row,
            col,
        }
    }

    /// Create a piece from a raw fill-id
    pub fn from_fill_id(id: u8, row: i32, col: i32) -> Result<Self, UnknownPieceKind> {
        let kind = PieceKind::try_from(id)?;
        Ok(Self::new(kind, row, col))
    }

    /// Rotate the mask clockwise in place, keeping the anchor
    pub fn rotate(&mut self) {
        self.mask = rotate_cw(&self.mask);
    }

    /// Copy of this piece rotated clockwise
    pub fn rotated(&self) -> Self {
        Self {
            mask: rotate_cw(&self.mask),
            ..*self
        }
    }

    /// Move the anchor one unit in `direction` (unchecked)
    pub fn shift(&mut self, direction: Direction) {
        let (dr, dc) = direction.delta();
        self.row += dr;
        self.col += dc;
    }

    /// Copy of this piece moved one unit in `direction`
    pub fn shifted(&self, direction: Direction) -> Self {
        let mut next = *self;
        next.shift(direction);
        next
    }

    /// Occupied cells as `(row, col, fill)` in board coordinates, mask row-major
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.mask.iter().enumerate().flat_map(move |(r, row)| {
            row.iter().enumerate().filter_map(move |(c, &cell)| {
                (cell != EMPTY).then_some((self.row + r as i32, self.col + c as i32, cell))
            })
        })
    }
}

impl fmt::Display for Tetromino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Tetromino: kind={}]", self.kind)?;
        for row in &self.mask {
            f.write_str("[")?;
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mask_has_four_cells_of_its_fill_id() {
        for kind in PieceKind::ALL {
            let mask = spawn_mask(kind);
            let filled: Vec<Cell> = mask.iter().flatten().copied().filter(|&c| c != 0).collect();
            assert_eq!(filled.len(), 4, "{:?}", kind);
            assert!(filled.iter().all(|&c| c == kind.fill_id()), "{:?}", kind);
        }
    }

    #[test]
    fn test_every_spawn_mask_occupies_bottom_row() {
        for kind in PieceKind::ALL {
            let mask = spawn_mask(kind);
            assert!(mask[PIECE_SIZE - 1].iter().any(|&c| c != 0), "{:?}", kind);
        }
    }

    #[test]
    fn test_cells_are_offset_by_anchor() {
        let piece = Tetromino::new(PieceKind::Square, 5, 3);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(7, 4, 1), (7, 5, 1), (8, 4, 1), (8, 5, 1)]);
    }

    #[test]
    fn test_shifted_leaves_original_untouched() {
        let piece = Tetromino::new(PieceKind::T, 0, 3);
        let moved = piece.shifted(Direction::Left);
        assert_eq!((piece.row, piece.col), (0, 3));
        assert_eq!((moved.row, moved.col), (0, 2));
        assert_eq!(moved.mask, piece.mask);
    }

    #[test]
    fn test_display_lists_mask_rows() {
        let piece = Tetromino::new(PieceKind::Z, 0, 0);
        assert_eq!(
            piece.to_string(),
            "[Tetromino: kind=z]\n[0000]\n[0000]\n[7700]\n[0770]\n"
        );
    }
}
