//! Outcome of a single solve call.

use std::fmt;
use std::time::Duration;

use crate::board::Board;

/// The result of running one solver on one board size.
///
/// Fields are fixed at construction. A successful result always carries a
/// complete, valid board; a failed one carries none but still reports the
/// work done.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use nqueens_core::{Board, SearchResult};
///
/// let board = Board::from_columns(&[1, 3, 0, 2]).unwrap();
/// let result = SearchResult::success(board, 9, 8, Duration::from_millis(3));
///
/// assert!(result.is_success());
/// assert_eq!(result.nodes_explored(), 9);
/// assert_eq!(result.elapsed_millis(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    solution: Option<Board>,
    nodes_explored: u64,
    nodes_generated: u64,
    elapsed: Duration,
    #[cfg_attr(feature = "serde", serde(default))]
    cut_off: bool,
}

impl SearchResult {
    /// Creates a successful result.
    ///
    /// # Panics
    ///
    /// Panics if `solution` is not a complete, conflict-free board.
    pub fn success(
        solution: Board,
        nodes_explored: u64,
        nodes_generated: u64,
        elapsed: Duration,
    ) -> Self {
        assert!(
            solution.is_complete() && solution.is_valid(),
            "search reported success with a non-goal board: {:?}",
            solution.columns()
        );
        Self {
            solution: Some(solution),
            nodes_explored,
            nodes_generated,
            elapsed,
            cut_off: false,
        }
    }

    /// Creates a failed result.
    pub fn failure(nodes_explored: u64, nodes_generated: u64, elapsed: Duration) -> Self {
        Self {
            solution: None,
            nodes_explored,
            nodes_generated,
            elapsed,
            cut_off: false,
        }
    }

    /// Marks a failed result as stopped by a node limit rather than by an
    /// exhausted search space. Has no effect on a successful result.
    pub fn with_cut_off(mut self, cut_off: bool) -> Self {
        self.cut_off = cut_off && !self.is_success();
        self
    }

    /// Returns true if a goal board was found.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.solution.is_some()
    }

    /// Returns the goal board, if one was found.
    pub fn solution(&self) -> Option<&Board> {
        self.solution.as_ref()
    }

    /// Consumes the result, returning the goal board if one was found.
    pub fn into_solution(self) -> Option<Board> {
        self.solution
    }

    /// Number of nodes (or individuals, for the genetic solver) examined.
    pub fn nodes_explored(&self) -> u64 {
        self.nodes_explored
    }

    /// Number of successors pushed to a frontier, or offspring bred.
    pub fn nodes_generated(&self) -> u64 {
        self.nodes_generated
    }

    /// Returns true if the search gave up at its node limit.
    pub fn was_cut_off(&self) -> bool {
        self.cut_off
    }

    /// Wall-clock time spent in the solve call.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Wall-clock time in whole milliseconds.
    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Solution found: {}",
            if self.is_success() { "yes" } else { "no" }
        )?;
        writeln!(f, "Nodes explored: {}", self.nodes_explored)?;
        write!(f, "Time: {} ms", self.elapsed_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_result() {
        let board = Board::from_columns(&[2, 0, 3, 1]).unwrap();
        let result = SearchResult::success(board.clone(), 12, 20, Duration::from_micros(1500));

        assert!(result.is_success());
        assert_eq!(result.solution(), Some(&board));
        assert_eq!(result.nodes_generated(), 20);
        assert_eq!(result.elapsed_millis(), 1);
        assert_eq!(result.into_solution(), Some(board));
    }

    #[test]
    fn test_failure_result() {
        let result = SearchResult::failure(6, 4, Duration::ZERO);

        assert!(!result.is_success());
        assert!(result.solution().is_none());
        assert_eq!(result.nodes_explored(), 6);
        assert!(!result.was_cut_off());
        assert!(result.with_cut_off(true).was_cut_off());
    }

    #[test]
    fn test_success_is_never_cut_off() {
        let board = Board::from_columns(&[0]).unwrap();
        let result = SearchResult::success(board, 1, 0, Duration::ZERO).with_cut_off(true);

        assert!(!result.was_cut_off());
    }

    #[test]
    #[should_panic(expected = "non-goal board")]
    fn test_success_rejects_partial_board() {
        let board = Board::from_columns(&[1, 3, -1, -1]).unwrap();
        let _ = SearchResult::success(board, 1, 1, Duration::ZERO);
    }

    #[test]
    #[should_panic(expected = "non-goal board")]
    fn test_success_rejects_conflicting_board() {
        let board = Board::from_columns(&[0, 1, 2, 3]).unwrap();
        let _ = SearchResult::success(board, 1, 1, Duration::ZERO);
    }

    #[test]
    fn test_display() {
        let result = SearchResult::failure(6, 4, Duration::from_millis(2));

        assert_eq!(
            result.to_string(),
            "Solution found: no\nNodes explored: 6\nTime: 2 ms"
        );
    }
}
