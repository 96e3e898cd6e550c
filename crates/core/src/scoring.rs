//! Scoring module - row-clear rewards
//!
//! Clearing `n` rows with a single freeze is worth `2^n` points, so multi-row
//! clears are rewarded super-linearly: 1 row = 2, 2 = 4, 3 = 8, 4 = 16.

/// Points for removing `rows` rows in one freeze (0 when nothing was removed)
pub fn line_clear_score(rows: u32) -> u32 {
    if rows == 0 {
        return 0;
    }
    1u32.checked_shl(rows).unwrap_or(u32::MAX)
}
