//! Shared test fixtures for the N-Queens crates.
//!
//! This crate provides reference data and pure checking functions that do
//! not rely on the code under test.
//!
//! - [`solutions`] - known solutions, solution counts and expected search effort
//! - [`check`] - independent conflict counting and goal assertions
//! - [`permutations`] - permutation enumeration for exhaustive operator tests
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! nqueens-test = { workspace = true }
//! ```

pub mod check;
pub mod permutations;
pub mod solutions;

pub use check::{assert_goal, attacking_pairs, board};
pub use permutations::permutations;
pub use solutions::{
    first_solution, level_order_explored, solution_count, SOLVABLE_SIZES, UNSOLVABLE_SIZES,
};
