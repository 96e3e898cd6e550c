//! Grid module - cell storage for frozen pieces
//!
//! The grid is a `height x width` matrix of cells stored as one flat row-major
//! buffer. Row 0 is the top of the board; the first `PIECE_SIZE` rows are the
//! hidden spawn rows. Coordinates are signed so that piece cells hanging off an
//! edge can be asked about directly and simply come back as out of bounds.

use crate::types::{Cell, PieceKind, EMPTY};
use crate::BoardError;

/// Frozen cells of a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Row-major cells (row * width + col)
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create an empty grid
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            cells: vec![EMPTY; width * height],
            width,
            height,
        }
    }

    /// Build a `height x width` grid from explicit rows, validating shape and
    /// cell values
    pub fn from_rows(
        height: usize,
        width: usize,
        rows: Vec<Vec<Cell>>,
    ) -> Result<Self, BoardError> {
        let bad_cols = rows.iter().map(Vec::len).find(|&len| len != width);
        if rows.len() != height || bad_cols.is_some() {
            return Err(BoardError::GridShape {
                expected_rows: height,
                expected_cols: width,
                rows: rows.len(),
                cols: bad_cols.unwrap_or(width),
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value != EMPTY && PieceKind::from_fill_id(value).is_none() {
                    return Err(BoardError::InvalidCell { row, col, value });
                }
            }
            cells.extend(values);
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, hidden rows included
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at (row, col), `None` if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col); returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_vacant(&self, row: i32, col: i32) -> bool {
        self.get(row, col) == Some(EMPTY)
    }

    /// In bounds and filled
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(c) if c != EMPTY)
    }

    /// Cells of one row; empty slice if out of bounds
    pub fn row(&self, row: usize) -> &[Cell] {
        if row >= self.height {
            return &[];
        }
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate over rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Every column of the row is filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.height && self.row(row).iter().all(|&c| c != EMPTY)
    }

    /// No column of the row is filled
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.row(row).iter().all(|&c| c == EMPTY)
    }

    /// Remove a row: every row above it moves down by one and the top row is
    /// zero-filled. Returns `false` if the row is out of bounds.
    pub fn clear_row(&mut self, row: usize) -> bool {
        if row >= self.height {
            return false;
        }

        let width = self.width;
        for r in (1..=row).rev() {
            let src_start = (r - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, r * width);
        }
        self.cells[..width].fill(EMPTY);

        true
    }

    /// Collapse every full row at or below `boundary`, bottom first.
    ///
    /// After a collapse the same row index is examined again, since the row
    /// that slid into it may be full too. Rows above `boundary` are never
    /// removed. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self, boundary: usize) -> u32 {
        let mut removed = 0;
        let mut row = self.height;
        while row > boundary {
            if self.is_row_full(row - 1) {
                self.clear_row(row - 1);
                removed += 1;
            } else {
                row -= 1;
            }
        }
        removed
    }

    /// Raw row-major cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(8, 4);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 3), Some(3));
        assert_eq!(grid.index(1, 0), Some(4));
        assert_eq!(grid.index(7, 3), Some(31));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(0, -1), None);
        assert_eq!(grid.index(8, 0), None);
        assert_eq!(grid.index(0, 4), None);
    }

    #[test]
    fn test_grid_flat_storage() {
        let mut grid = Grid::new(8, 4);
        grid.set(0, 0, 2);
        grid.set(5, 3, 3);
        assert_eq!(grid.cells[0], 2);
        assert_eq!(grid.cells[5 * 4 + 3], 3);
    }

    #[test]
    fn test_clear_full_rows_rechecks_collapsed_index() {
        let mut grid = Grid::from_rows(5, 3, vec![
            vec![0, 0, 0],
            vec![0, 0, 0],
            vec![0, 4, 0],
            vec![1, 1, 1],
            vec![2, 2, 2],
        ])
        .unwrap();

        assert_eq!(grid.clear_full_rows(1), 2);
        assert_eq!(grid.row(4), &[0, 4, 0]);
        assert!(grid.is_row_empty(3));
        assert!(grid.is_row_empty(0));
    }

    #[test]
    fn test_clear_full_rows_respects_boundary() {
        let mut grid = Grid::from_rows(3, 2, vec![vec![5, 5], vec![0, 0], vec![0, 0]]).unwrap();
        assert_eq!(grid.clear_full_rows(1), 0);
        assert!(grid.is_row_full(0));
    }
}
