//! Permutation chromosomes.

use nqueens_core::{Board, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// A length-N permutation of `[0, N)`: gene `i` is the column of the queen
/// in row `i`.
///
/// Rows and columns are distinct by construction, so the only possible
/// attacks are diagonal. Fitness is computed once, when the individual is
/// created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    genes: Vec<usize>,
    fitness: usize,
}

impl Individual {
    /// Wraps `genes` and evaluates their fitness.
    pub fn new(genes: Vec<usize>) -> Self {
        let fitness = diagonal_conflicts(&genes);
        Self { genes, fitness }
    }

    /// Creates a uniformly random permutation by shuffling the identity.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut genes: Vec<usize> = (0..size).collect();
        genes.shuffle(rng);
        Self::new(genes)
    }

    #[inline]
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Number of diagonally attacking pairs. Lower is better.
    #[inline]
    pub fn fitness(&self) -> usize {
        self.fitness
    }

    pub fn is_solution(&self) -> bool {
        self.fitness == 0
    }

    /// Places one queen per row according to the genes.
    pub fn to_board(&self) -> Result<Board> {
        let mut board = Board::new(self.genes.len())?;
        for (row, &column) in self.genes.iter().enumerate() {
            board.place_queen(row, column)?;
        }
        Ok(board)
    }
}

/// Counts pairs sharing a diagonal or anti-diagonal.
fn diagonal_conflicts(genes: &[usize]) -> usize {
    let n = genes.len();
    if n < 2 {
        return 0;
    }

    // row - column + (n - 1) and row + column both fall in [0, 2n - 1)
    let mut diagonals = vec![0usize; 2 * n - 1];
    let mut anti_diagonals = vec![0usize; 2 * n - 1];
    for (row, &column) in genes.iter().enumerate() {
        diagonals[row + n - 1 - column] += 1;
        anti_diagonals[row + column] += 1;
    }

    diagonals
        .iter()
        .chain(anti_diagonals.iter())
        .map(|&k| k * k.saturating_sub(1) / 2)
        .sum()
}
