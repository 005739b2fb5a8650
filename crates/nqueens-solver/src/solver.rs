//! The solve entry point.

use nqueens_config::{AlgorithmType, HeuristicType, SolverConfig};
use nqueens_core::{Board, QueensError, Result, SearchResult};
use tracing::info;

use crate::algorithm::{
    AStarSearch, BreadthFirstSearch, DepthFirstSearch, GeneticSearch, SearchAlgorithm,
};
use crate::heuristic::{ConflictHeuristic, DistanceHeuristic};
use crate::stats::SearchStats;

/// Runs any of the search algorithms under one validated configuration.
///
/// A solver holds no search state between calls; every call builds its own
/// frontier, closed set or population, and its own counters.
///
/// # Example
///
/// ```
/// use nqueens_config::{AlgorithmType, SolverConfig};
/// use nqueens_solver::Solver;
///
/// let solver = Solver::new(SolverConfig::new().with_random_seed(7)).unwrap();
/// let result = solver.solve_with(6, AlgorithmType::DepthFirst).unwrap();
///
/// assert!(result.is_success());
/// assert_eq!(result.solution().unwrap().columns(), &[1, 3, 5, 0, 2, 4]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver, rejecting configurations no algorithm can run with.
    pub fn new(config: SolverConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| QueensError::Config(e.to_string()))?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves `size` queens with the configured default algorithm.
    pub fn solve(&self, size: usize) -> Result<SearchResult> {
        self.solve_with(size, self.config.algorithm)
    }

    /// Solves `size` queens with `algorithm`.
    ///
    /// # Errors
    ///
    /// Returns [`QueensError::InvalidSize`] if `size` is zero or too large.
    /// Failing to find a solution is not an error; check
    /// [`SearchResult::is_success`].
    pub fn solve_with(&self, size: usize, algorithm: AlgorithmType) -> Result<SearchResult> {
        let mut stats = SearchStats::start();
        let root = Board::new(size)?;

        info!(
            event = "solve_start",
            algorithm = %algorithm,
            board_size = size,
        );

        let node_limit = self.config.node_limit;
        let asserted = self.config.environment_mode.is_asserted();

        let (solution, cut_off) = match algorithm {
            AlgorithmType::DepthFirst => run(
                DepthFirstSearch::new().with_node_limit(node_limit),
                root,
                &mut stats,
            ),
            AlgorithmType::BreadthFirst => run(
                BreadthFirstSearch::new()
                    .with_node_limit(node_limit)
                    .with_assertions(asserted),
                root,
                &mut stats,
            ),
            AlgorithmType::AStar(HeuristicType::Conflict) => run(
                AStarSearch::new(ConflictHeuristic)
                    .with_node_limit(node_limit)
                    .with_assertions(asserted),
                root,
                &mut stats,
            ),
            AlgorithmType::AStar(HeuristicType::Distance) => run(
                AStarSearch::new(DistanceHeuristic)
                    .with_node_limit(node_limit)
                    .with_assertions(asserted),
                root,
                &mut stats,
            ),
            AlgorithmType::Genetic => run(
                GeneticSearch::new(self.config.genetic.clone(), self.config.effective_seed()),
                root,
                &mut stats,
            ),
        }?;

        let speed = stats.nodes_per_second();
        let result = stats.into_result(solution).with_cut_off(cut_off);

        info!(
            event = "solve_end",
            algorithm = %algorithm,
            success = result.is_success(),
            cut_off = result.was_cut_off(),
            nodes_explored = result.nodes_explored(),
            nodes_generated = result.nodes_generated(),
            duration_ms = result.elapsed_millis(),
            speed = speed,
        );

        Ok(result)
    }
}

/// Runs one search, returning its solution and whether it hit the node limit.
fn run<A: SearchAlgorithm>(
    mut algorithm: A,
    root: Board,
    stats: &mut SearchStats,
) -> Result<(Option<Board>, bool)> {
    let solution = algorithm.search(root, stats)?;
    Ok((solution, algorithm.was_cut_off()))
}

/// Solves `size` queens with `algorithm` under the default configuration.
///
/// The genetic solver is seeded from the OS; use [`Solver`] with a
/// [`SolverConfig::random_seed`] for repeatable genetic runs.
pub fn solve(size: usize, algorithm: AlgorithmType) -> Result<SearchResult> {
    Solver::default().solve_with(size, algorithm)
}
