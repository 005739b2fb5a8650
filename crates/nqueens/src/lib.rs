//! N-Queens search in Rust
//!
//! One entry point, five algorithms: pick an [`AlgorithmType`] and call
//! [`solve`].
//!
//! # Example
//!
//! ```rust
//! use nqueens::prelude::*;
//!
//! let result = solve(8, AlgorithmType::DepthFirst).unwrap();
//! assert!(result.is_success());
//!
//! let board = result.solution().unwrap();
//! assert_eq!(board.columns(), &[0, 4, 7, 5, 2, 6, 1, 3]);
//! assert_eq!(board.count_conflicts(), 0);
//! ```
//!
//! Reproducible genetic runs take a seed through the configuration:
//!
//! ```rust
//! use nqueens::prelude::*;
//!
//! let solver = Solver::new(SolverConfig::new().with_random_seed(7)).unwrap();
//! let result = solver.solve_with(6, AlgorithmType::Genetic).unwrap();
//! assert!(result.is_success());
//! ```

// Board and results
pub use nqueens_core::{Board, QueensError, Result, SearchResult, UNSET};

// Configuration
pub use nqueens_config::{
    AlgorithmType, ConfigError, EnvironmentMode, GeneticConfig, HeuristicType, SolverConfig,
};

// Solvers
pub use nqueens_solver::{solve, Solver};

// Building blocks for custom searches
pub use nqueens_solver::{
    algorithm, heuristic, AStarSearch, BreadthFirstSearch, ConflictHeuristic, DepthFirstSearch,
    DistanceHeuristic, GeneticSearch, Heuristic, SearchAlgorithm, SearchStats,
};

#[cfg(feature = "console")]
pub use nqueens_console as console;

pub mod prelude {
    pub use super::{
        solve, AlgorithmType, Board, EnvironmentMode, GeneticConfig, HeuristicType, QueensError,
        SearchResult, Solver, SolverConfig,
    };
}
