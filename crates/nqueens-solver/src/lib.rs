//! N-Queens search engine
//!
//! This crate provides the search algorithms and the entry point:
//! - Depth-first backtracking, breadth-first and A* tree searches
//! - A genetic solver over permutations (PMX crossover, swap mutation)
//! - Conflict and distance heuristics
//! - Search nodes in an index arena, open and closed sets
//! - Search statistics
//!
//! ```
//! use nqueens_config::{AlgorithmType, HeuristicType};
//!
//! let result = nqueens_solver::solve(8, AlgorithmType::AStar(HeuristicType::Distance)).unwrap();
//! assert!(result.is_success());
//! assert!(result.solution().unwrap().is_valid());
//! ```

pub mod algorithm;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod solver;
pub mod stats;

pub use algorithm::{
    AStarSearch, BreadthFirstSearch, DepthFirstSearch, GeneticSearch, SearchAlgorithm,
};
pub use frontier::{ClosedSet, OpenSet};
pub use heuristic::{ConflictHeuristic, DistanceHeuristic, Heuristic};
pub use node::{NodeArena, NodeId, SearchNode};
pub use solver::{solve, Solver};
pub use stats::SearchStats;
