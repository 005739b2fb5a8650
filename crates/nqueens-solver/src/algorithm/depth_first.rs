//! Backtracking depth-first search.

use nqueens_core::{Board, Result};
use tracing::debug;

use super::SearchAlgorithm;
use crate::stats::SearchStats;

/// Places queens row by row, scanning columns left to right, and removes
/// the last queen whenever a row has no safe column left.
///
/// A single board is mutated in place for the whole search. The first
/// solution found is the lexicographically smallest one.
#[derive(Debug, Clone, Default)]
pub struct DepthFirstSearch {
    node_limit: Option<u64>,
    cut_off: bool,
}

impl DepthFirstSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the search once `limit` nodes have been explored.
    pub fn with_node_limit(mut self, limit: Option<u64>) -> Self {
        self.node_limit = limit;
        self
    }

    fn descend(&mut self, board: &mut Board, row: usize, stats: &mut SearchStats) -> Result<bool> {
        if stats.limit_reached(self.node_limit) {
            self.cut_off = true;
            return Ok(false);
        }
        stats.record_explored();

        let size = board.size();
        if row == size {
            return Ok(board.is_complete() && board.is_valid());
        }

        for column in 0..size {
            if !board.is_safe(row, column)? {
                continue;
            }
            board.place_queen(row, column)?;
            stats.record_generated(1);

            if self.descend(board, row + 1, stats)? {
                return Ok(true);
            }
            if self.cut_off {
                return Ok(false);
            }
            board.remove_queen(row)?;
        }
        Ok(false)
    }
}

impl SearchAlgorithm for DepthFirstSearch {
    fn search(&mut self, root: Board, stats: &mut SearchStats) -> Result<Option<Board>> {
        self.cut_off = false;
        let mut board = root;
        let start_row = board.depth();

        if self.descend(&mut board, start_row, stats)? {
            return Ok(Some(board));
        }
        if self.cut_off {
            debug!(
                event = "node_limit_reached",
                algorithm = self.name(),
                nodes_explored = stats.nodes_explored,
            );
        }
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "depth_first"
    }

    fn was_cut_off(&self) -> bool {
        self.cut_off
    }
}
