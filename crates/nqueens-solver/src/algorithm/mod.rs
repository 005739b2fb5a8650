//! Search algorithms.
//!
//! Every algorithm starts from an empty board and either returns a goal
//! board or reports that none was found:
//! - [`DepthFirstSearch`]: row-by-row backtracking, mutates one board in place
//! - [`BreadthFirstSearch`]: FIFO expansion, every successor is a fresh board
//! - [`AStarSearch`]: best-first expansion ordered by `g + h` with a closed set
//! - [`GeneticSearch`]: evolutionary search over permutations

mod astar;
mod breadth_first;
mod depth_first;
pub mod genetic;

use std::fmt::Debug;

use nqueens_core::{Board, Result};

use crate::stats::SearchStats;

pub use astar::AStarSearch;
pub use breadth_first::BreadthFirstSearch;
pub use depth_first::DepthFirstSearch;
pub use genetic::GeneticSearch;

/// A strategy that looks for a goal board.
///
/// Search failure is not an error: an exhausted search space returns
/// `Ok(None)`. Errors are reserved for domain violations surfaced by
/// [`Board`] operations.
pub trait SearchAlgorithm: Send + Debug {
    /// Runs the search from `root`, recording work into `stats`.
    fn search(&mut self, root: Board, stats: &mut SearchStats) -> Result<Option<Board>>;

    /// Returns a short name for logging.
    fn name(&self) -> &'static str;

    /// Returns true if the last search stopped because of a node limit.
    fn was_cut_off(&self) -> bool {
        false
    }
}
