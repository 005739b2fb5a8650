//! Error types for the N-Queens core

use thiserror::Error;

/// Main error type for N-Queens operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueensError {
    /// Board size outside `1..=Board::MAX_SIZE`
    #[error("Invalid board size {size}: must be between 1 and {max}")]
    InvalidSize { size: usize, max: usize },

    /// Row index past the last row
    #[error("Row {row} out of range for a board of size {size}")]
    RowOutOfRange { row: usize, size: usize },

    /// Column index past the last column
    #[error("Column {column} out of range for a board of size {size}")]
    ColumnOutOfRange { column: usize, size: usize },

    /// Negative column other than the empty-row marker
    #[error("Row {row} has negative column {column}")]
    NegativeColumn { row: usize, column: i16 },

    /// A queen is already placed in the row
    #[error("Row {row} already holds a queen at column {column}")]
    RowOccupied { row: usize, column: usize },

    /// Every row already holds a queen
    #[error("Board is already complete")]
    BoardComplete,

    /// Solver configuration was rejected
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for N-Queens operations
pub type Result<T> = std::result::Result<T, QueensError>;
