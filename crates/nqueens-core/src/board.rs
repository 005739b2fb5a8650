//! Board state for the N-Queens problem.
//!
//! A board stores, for each row, the column of the queen placed in that row
//! or [`UNSET`]. Boards are plain values: cloning yields an independent copy,
//! and [`Board::with_queen`] builds a successor without touching the parent.

use std::fmt;

use smallvec::SmallVec;

use crate::error::{QueensError, Result};

/// Sentinel stored in a row that holds no queen.
pub const UNSET: i16 = -1;

/// Boards up to this many rows are stored inline.
const INLINE_ROWS: usize = 16;

/// An N×N board with at most one queen per row.
///
/// Equality and hashing cover the full row sequence, unset rows included,
/// so partial boards at different depths never compare equal.
///
/// # Example
///
/// ```
/// use nqueens_core::Board;
///
/// let mut board = Board::new(4).unwrap();
/// board.place_queen(0, 1).unwrap();
/// board.place_queen(1, 3).unwrap();
///
/// assert_eq!(board.depth(), 2);
/// assert!(board.is_safe(2, 0).unwrap());
/// assert!(!board.is_safe(2, 2).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<i16>", into = "Vec<i16>")
)]
pub struct Board {
    queens: SmallVec<[i16; INLINE_ROWS]>,
    depth: usize,
}

impl Board {
    /// Largest supported board size.
    pub const MAX_SIZE: usize = i16::MAX as usize;

    /// Creates an empty board of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`QueensError::InvalidSize`] if `size` is zero or larger
    /// than [`Board::MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > Self::MAX_SIZE {
            return Err(QueensError::InvalidSize {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self {
            queens: SmallVec::from_elem(UNSET, size),
            depth: 0,
        })
    }

    /// Builds a board from a row-indexed column list using [`UNSET`] for empty rows.
    pub fn from_columns(columns: &[i16]) -> Result<Self> {
        let mut board = Self::new(columns.len())?;
        for (row, &column) in columns.iter().enumerate() {
            if column == UNSET {
                continue;
            }
            let Ok(column) = usize::try_from(column) else {
                return Err(QueensError::NegativeColumn { row, column });
            };
            board.place_queen(row, column)?;
        }
        Ok(board)
    }

    /// Returns the board size N.
    #[inline]
    pub fn size(&self) -> usize {
        self.queens.len()
    }

    /// Returns the number of rows holding a queen.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns true if every row holds a queen.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.depth == self.size()
    }

    /// Returns the raw row-indexed columns, [`UNSET`] marking empty rows.
    pub fn columns(&self) -> &[i16] {
        &self.queens
    }

    /// Iterates over the rows, yielding the queen's column if one is placed.
    pub fn queens(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.queens.iter().map(|&c| column_of(c))
    }

    /// Returns the column of the queen in `row`, or `None` if the row is empty.
    pub fn queen_column(&self, row: usize) -> Result<Option<usize>> {
        self.check_row(row)?;
        Ok(column_of(self.queens[row]))
    }

    /// Places a queen at `(row, column)` in place.
    ///
    /// # Errors
    ///
    /// Fails if the board is complete, either index is out of range, or the
    /// row already holds a queen.
    pub fn place_queen(&mut self, row: usize, column: usize) -> Result<()> {
        if self.is_complete() {
            return Err(QueensError::BoardComplete);
        }
        self.check_row(row)?;
        self.check_column(column)?;
        if let Some(existing) = column_of(self.queens[row]) {
            return Err(QueensError::RowOccupied {
                row,
                column: existing,
            });
        }
        // check_column bounds the column by MAX_SIZE
        self.queens[row] = column as i16;
        self.depth += 1;
        Ok(())
    }

    /// Returns a copy of this board with a queen added at `(row, column)`.
    ///
    /// The receiver is left untouched, so it may stay referenced by a frontier.
    pub fn with_queen(&self, row: usize, column: usize) -> Result<Self> {
        let mut next = self.clone();
        next.place_queen(row, column)?;
        Ok(next)
    }

    /// Clears `row`, restoring the unset sentinel. Clearing an empty row is a no-op.
    pub fn remove_queen(&mut self, row: usize) -> Result<()> {
        self.check_row(row)?;
        if self.queens[row] != UNSET {
            self.queens[row] = UNSET;
            self.depth -= 1;
        }
        Ok(())
    }

    /// Returns true if a queen at `(row, column)` would not share a column or
    /// diagonal with any queen already placed in a row above it.
    pub fn is_safe(&self, row: usize, column: usize) -> Result<bool> {
        self.check_row(row)?;
        self.check_column(column)?;
        let column = column as i32;
        let row_i = row as i32;
        let safe = self.queens[..row]
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != UNSET)
            .all(|(i, &c)| {
                let c = i32::from(c);
                c != column && (c - column).abs() != row_i - i as i32
            });
        Ok(safe)
    }

    /// Counts attacking pairs among placed queens, one per pair.
    pub fn count_conflicts(&self) -> usize {
        let placed: SmallVec<[(i32, i32); INLINE_ROWS]> = self
            .queens
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != UNSET)
            .map(|(row, &c)| (row as i32, i32::from(c)))
            .collect();

        let mut conflicts = 0;
        for (i, &(row_a, col_a)) in placed.iter().enumerate() {
            for &(row_b, col_b) in &placed[i + 1..] {
                if col_a == col_b || (col_a - col_b).abs() == row_b - row_a {
                    conflicts += 1;
                }
            }
        }
        conflicts
    }

    /// Returns true if no two placed queens share a column or diagonal.
    pub fn is_valid(&self) -> bool {
        let n = self.size();
        let mut columns = vec![false; n];
        let mut diagonals = vec![false; 2 * n];
        let mut anti_diagonals = vec![false; 2 * n];

        for (row, column) in self.queens().enumerate() {
            let Some(column) = column else {
                continue;
            };
            let diagonal = row + n - column;
            let anti_diagonal = row + column;
            if columns[column] || diagonals[diagonal] || anti_diagonals[anti_diagonal] {
                return false;
            }
            columns[column] = true;
            diagonals[diagonal] = true;
            anti_diagonals[anti_diagonal] = true;
        }
        true
    }

    /// Remaining-work penalty: the number of unset rows scaled by N.
    pub fn last_queen_distance(&self) -> usize {
        (self.size() - self.depth) * self.size()
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.size() {
            return Err(QueensError::RowOutOfRange {
                row,
                size: self.size(),
            });
        }
        Ok(())
    }

    fn check_column(&self, column: usize) -> Result<()> {
        if column >= self.size() {
            return Err(QueensError::ColumnOutOfRange {
                column,
                size: self.size(),
            });
        }
        Ok(())
    }
}

#[inline]
fn column_of(raw: i16) -> Option<usize> {
    usize::try_from(raw).ok()
}

impl TryFrom<Vec<i16>> for Board {
    type Error = QueensError;

    fn try_from(columns: Vec<i16>) -> Result<Self> {
        Self::from_columns(&columns)
    }
}

impl From<Board> for Vec<i16> {
    fn from(board: Board) -> Self {
        board.queens.into_vec()
    }
}

impl fmt::Display for Board {
    /// Renders one line per row, `Q` for a queen and `.` for an empty square.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in self.queens() {
            let line: Vec<&str> = (0..self.size())
                .map(|c| if column == Some(c) { "Q" } else { "." })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
