//! NQueens Core - board state and result types for the N-Queens solvers
//!
//! This crate provides the value types shared by every solver:
//! - [`Board`] for queen placements with conflict and safety queries
//! - [`SearchResult`] for the outcome of a solve call
//! - [`QueensError`] for domain errors raised at the API boundary

pub mod board;
pub mod error;
pub mod result;

pub use board::{Board, UNSET};
pub use error::{QueensError, Result};
pub use result::SearchResult;
