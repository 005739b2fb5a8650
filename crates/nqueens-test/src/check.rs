//! Independent board checks.
//!
//! These work on raw column slices so they never go through the `Board`
//! methods they are used to verify.

use nqueens_core::{Board, UNSET};

/// Builds a board from raw columns, panicking on invalid input.
pub fn board(columns: &[i16]) -> Board {
    Board::from_columns(columns)
        .unwrap_or_else(|e| panic!("invalid fixture board {columns:?}: {e}"))
}

/// Counts attacking pairs among placed queens with a plain pairwise scan.
pub fn attacking_pairs(columns: &[i16]) -> usize {
    let placed: Vec<(i32, i32)> = columns
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c != UNSET)
        .map(|(r, &c)| (r as i32, c as i32))
        .collect();

    let mut pairs = 0;
    for (i, &(r1, c1)) in placed.iter().enumerate() {
        for &(r2, c2) in &placed[i + 1..] {
            if c1 == c2 || (c1 - c2).abs() == (r1 - r2).abs() {
                pairs += 1;
            }
        }
    }
    pairs
}

/// Asserts that `board` is a complete, conflict-free placement.
pub fn assert_goal(board: &Board) {
    let columns = board.columns();
    let n = board.size();

    assert_eq!(columns.len(), n, "board length differs from its size");
    assert!(
        columns.iter().all(|&c| c >= 0 && (c as usize) < n),
        "board {columns:?} has unset or out-of-range rows"
    );
    assert_eq!(
        attacking_pairs(columns),
        0,
        "board {columns:?} has attacking queens"
    );
    assert!(board.is_complete());
    assert!(board.is_valid());
    assert_eq!(board.count_conflicts(), 0);
}
