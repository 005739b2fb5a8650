//! Heuristics for informed search.
//!
//! A heuristic maps a partial board to a non-negative estimate of the work
//! left before reaching a goal. Implementations are pure functions of the
//! board and keep no state between calls.

use std::fmt::Debug;

use nqueens_core::Board;

/// Estimates the distance from a board to a goal state.
pub trait Heuristic: Send + Sync + Debug {
    /// Returns the estimate for `board`. Must be zero at any goal board.
    fn evaluate(&self, board: &Board) -> usize;

    /// Returns a short name for logging.
    fn name(&self) -> &'static str;
}

/// Counts attacking pairs among placed queens.
///
/// Zero for any conflict-free board, including partial ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConflictHeuristic;

impl Heuristic for ConflictHeuristic {
    fn evaluate(&self, board: &Board) -> usize {
        board.count_conflicts()
    }

    fn name(&self) -> &'static str {
        "conflict"
    }
}

/// Remaining rows plus attacking pairs.
///
/// Penalises both unfinished work and current damage, so boards that are
/// deep and clean come first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistanceHeuristic;

impl Heuristic for DistanceHeuristic {
    fn evaluate(&self, board: &Board) -> usize {
        (board.size() - board.depth()) + board.count_conflicts()
    }

    fn name(&self) -> &'static str {
        "distance"
    }
}
