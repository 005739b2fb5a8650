//! Search statistics.
//!
//! Stack-allocated counters for a single solve call.

use std::time::{Duration, Instant};

use nqueens_core::{Board, SearchResult};

/// Counters for one solve call.
///
/// The clock starts when the statistics are created, so the solver creates
/// them as its first action.
///
/// # Example
///
/// ```
/// use nqueens_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::start();
/// stats.record_explored();
/// stats.record_generated(3);
///
/// assert_eq!(stats.nodes_explored, 1);
/// assert_eq!(stats.nodes_generated, 3);
/// ```
#[derive(Debug)]
pub struct SearchStats {
    start_time: Instant,
    /// Nodes popped from a frontier, or individuals evaluated.
    pub nodes_explored: u64,
    /// Successors pushed to a frontier, or offspring bred.
    pub nodes_generated: u64,
}

impl SearchStats {
    /// Starts the clock with zeroed counters.
    pub fn start() -> Self {
        Self {
            start_time: Instant::now(),
            nodes_explored: 0,
            nodes_generated: 0,
        }
    }

    /// Returns the elapsed time since the statistics were created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Records one explored node.
    pub fn record_explored(&mut self) {
        self.nodes_explored += 1;
    }

    /// Records a batch of explored nodes.
    pub fn record_explored_batch(&mut self, count: u64) {
        self.nodes_explored += count;
    }

    /// Records generated successors.
    pub fn record_generated(&mut self, count: u64) {
        self.nodes_generated += count;
    }

    /// Returns true once `limit` nodes have been explored.
    pub fn limit_reached(&self, limit: Option<u64>) -> bool {
        limit.is_some_and(|limit| self.nodes_explored >= limit)
    }

    /// Returns the explored-nodes-per-second rate.
    pub fn nodes_per_second(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.nodes_explored as f64 / secs) as u64
        } else {
            0
        }
    }

    /// Assembles the final result, stopping the clock.
    pub fn into_result(self, solution: Option<Board>) -> SearchResult {
        let elapsed = self.elapsed();
        match solution {
            Some(board) => {
                SearchResult::success(board, self.nodes_explored, self.nodes_generated, elapsed)
            }
            None => SearchResult::failure(self.nodes_explored, self.nodes_generated, elapsed),
        }
    }
}
