//! Level-by-level breadth-first search.

use std::collections::VecDeque;

use nqueens_core::{Board, Result};
use tracing::debug;

use super::SearchAlgorithm;
use crate::stats::SearchStats;

/// Expands boards in FIFO order, one row deeper per level.
///
/// Each successor is a fresh board, so boards waiting in the queue are never
/// mutated. No closed set is kept: every successor is strictly deeper than
/// its parent, so no board can be reached twice.
#[derive(Debug, Clone, Default)]
pub struct BreadthFirstSearch {
    node_limit: Option<u64>,
    assert_successors: bool,
    cut_off: bool,
}

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the search once `limit` nodes have been explored.
    pub fn with_node_limit(mut self, limit: Option<u64>) -> Self {
        self.node_limit = limit;
        self
    }

    /// Checks every successor for conflict preservation.
    pub fn with_assertions(mut self, enabled: bool) -> Self {
        self.assert_successors = enabled;
        self
    }
}

impl SearchAlgorithm for BreadthFirstSearch {
    fn search(&mut self, root: Board, stats: &mut SearchStats) -> Result<Option<Board>> {
        self.cut_off = false;
        let mut queue = VecDeque::from([root]);

        while let Some(board) = queue.pop_front() {
            if stats.limit_reached(self.node_limit) {
                self.cut_off = true;
                debug!(
                    event = "node_limit_reached",
                    algorithm = self.name(),
                    nodes_explored = stats.nodes_explored,
                    frontier = queue.len() + 1,
                );
                return Ok(None);
            }
            stats.record_explored();

            if board.is_complete() {
                return Ok(Some(board));
            }

            let row = board.depth();
            let conflicts = self.assert_successors.then(|| board.count_conflicts());
            for column in 0..board.size() {
                if !board.is_safe(row, column)? {
                    continue;
                }
                let child = board.with_queen(row, column)?;
                if let Some(conflicts) = conflicts {
                    assert_eq!(
                        child.count_conflicts(),
                        conflicts,
                        "safe placement at ({row}, {column}) changed the conflict count"
                    );
                }
                queue.push_back(child);
                stats.record_generated(1);
            }
        }
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "breadth_first"
    }

    fn was_cut_off(&self) -> bool {
        self.cut_off
    }
}
