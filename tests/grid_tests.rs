//! Grid tests - cell storage, bounds and row collapse

use tetromino_engine::core::{BoardError, Grid};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(24, 10);
    assert_eq!(grid.width(), 10);
    assert_eq!(grid.height(), 24);

    for row in 0..24 {
        for col in 0..10 {
            assert!(grid.is_vacant(row, col), "({}, {}) should be vacant", row, col);
            assert_eq!(grid.get(row, col), Some(0));
        }
    }
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new(24, 10);

    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(24, 0), None);
    assert_eq!(grid.get(0, 10), None);
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new(24, 10);

    assert!(grid.set(10, 5, 3));
    assert_eq!(grid.get(10, 5), Some(3));
    assert!(grid.is_occupied(10, 5));
    assert!(!grid.is_vacant(10, 5));

    assert!(grid.set(10, 5, 0));
    assert!(grid.is_vacant(10, 5));
}

#[test]
fn test_grid_set_out_of_bounds() {
    let mut grid = Grid::new(24, 10);

    assert!(!grid.set(-1, 0, 1));
    assert!(!grid.set(0, -1, 1));
    assert!(!grid.set(24, 0, 1));
    assert!(!grid.set(0, 10, 1));
}

#[test]
fn test_out_of_bounds_is_neither_vacant_nor_occupied() {
    let grid = Grid::new(8, 4);
    assert!(!grid.is_vacant(8, 0));
    assert!(!grid.is_occupied(8, 0));
    assert!(!grid.is_vacant(0, -1));
    assert!(!grid.is_occupied(0, -1));
}

#[test]
fn test_row_full_and_empty() {
    let mut grid = Grid::new(8, 4);
    assert!(grid.is_row_empty(7));
    assert!(!grid.is_row_full(7));

    for col in 0..4 {
        grid.set(7, col, 2);
    }
    assert!(grid.is_row_full(7));
    assert!(!grid.is_row_empty(7));

    assert!(!grid.is_row_full(8));
}

#[test]
fn test_clear_row_shifts_rows_above() {
    let mut grid = Grid::from_rows(4, 3, vec![
        vec![1, 0, 0],
        vec![0, 2, 0],
        vec![3, 3, 3],
        vec![0, 0, 4],
    ])
    .unwrap();

    assert!(grid.clear_row(2));

    assert_eq!(grid.row(0), &[0, 0, 0]);
    assert_eq!(grid.row(1), &[1, 0, 0]);
    assert_eq!(grid.row(2), &[0, 2, 0]);
    assert_eq!(grid.row(3), &[0, 0, 4]);
}

#[test]
fn test_clear_row_out_of_bounds() {
    let mut grid = Grid::new(4, 3);
    assert!(!grid.clear_row(4));
}

#[test]
fn test_clear_full_rows_non_adjacent() {
    let mut grid = Grid::from_rows(5, 3, vec![
        vec![0, 0, 0],
        vec![0, 0, 0],
        vec![6, 6, 6],
        vec![0, 5, 0],
        vec![7, 7, 7],
    ])
    .unwrap();

    assert_eq!(grid.clear_full_rows(0), 2);
    assert_eq!(grid.row(4), &[0, 5, 0]);
    for row in 0..4 {
        assert!(grid.is_row_empty(row));
    }
}

#[test]
fn test_clear_full_rows_none() {
    let mut grid = Grid::from_rows(2, 2, vec![vec![0, 1], vec![1, 0]]).unwrap();
    let before = grid.clone();
    assert_eq!(grid.clear_full_rows(0), 0);
    assert_eq!(grid, before);
}

#[test]
fn test_from_rows_rejects_ragged_rows() {
    let result = Grid::from_rows(2, 3, vec![vec![0, 0, 0], vec![0, 0]]);
    assert_eq!(
        result,
        Err(BoardError::GridShape {
            expected_rows: 2,
            expected_cols: 3,
            rows: 2,
            cols: 2,
        })
    );
}

#[test]
fn test_from_rows_rejects_wrong_row_count() {
    let result = Grid::from_rows(3, 2, vec![vec![0, 0], vec![0, 0]]);
    assert_eq!(
        result,
        Err(BoardError::GridShape {
            expected_rows: 3,
            expected_cols: 2,
            rows: 2,
            cols: 2,
        })
    );
}

#[test]
fn test_from_rows_rejects_unknown_fill() {
    let result = Grid::from_rows(2, 2, vec![vec![0, 0], vec![0, 8]]);
    assert_eq!(
        result,
        Err(BoardError::InvalidCell {
            row: 1,
            col: 1,
            value: 8
        })
    );
}

#[test]
fn test_rows_iterates_top_to_bottom() {
    let grid = Grid::from_rows(2, 2, vec![vec![1, 0], vec![0, 2]]).unwrap();
    let rows: Vec<&[u8]> = grid.rows().collect();
    assert_eq!(rows, vec![&[1u8, 0][..], &[0u8, 2][..]]);
}
