//! Reference data for boards up to 12 queens.

/// Sizes with at least one solution, up to 12.
pub const SOLVABLE_SIZES: [usize; 10] = [1, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// Sizes with no solution.
pub const UNSOLVABLE_SIZES: [usize; 2] = [2, 3];

/// First solution in row-major, ascending-column order, indexed by `n - 1`.
const FIRST_SOLUTIONS: [&[i16]; 12] = [
    &[0],
    &[],
    &[],
    &[1, 3, 0, 2],
    &[0, 2, 4, 1, 3],
    &[1, 3, 5, 0, 2, 4],
    &[0, 2, 4, 6, 1, 3, 5],
    &[0, 4, 7, 5, 2, 6, 1, 3],
    &[0, 2, 5, 7, 1, 3, 8, 6, 4],
    &[0, 2, 5, 7, 9, 4, 8, 1, 3, 6],
    &[0, 2, 4, 6, 8, 10, 1, 3, 5, 7, 9],
    &[0, 2, 4, 7, 9, 11, 5, 10, 1, 6, 8, 3],
];

/// Number of distinct solutions, indexed by `n - 1`.
const SOLUTION_COUNTS: [usize; 12] = [1, 0, 0, 2, 10, 4, 40, 92, 352, 724, 2680, 14200];

/// Nodes a level-order search dequeues before reaching its first goal,
/// indexed by `n - 1`. For 2 and 3 this is the whole tree.
const LEVEL_ORDER_EXPLORED: [u64; 12] =
    [2, 3, 6, 16, 45, 150, 513, 1966, 8043, 34816, 164247, 841990];

/// Returns the lexicographically first solution for `n`, if one exists.
pub fn first_solution(n: usize) -> Option<&'static [i16]> {
    FIRST_SOLUTIONS
        .get(n.checked_sub(1)?)
        .copied()
        .filter(|s| !s.is_empty())
}

/// Returns the number of solutions for `n` (1..=12).
pub fn solution_count(n: usize) -> Option<usize> {
    SOLUTION_COUNTS.get(n.checked_sub(1)?).copied()
}

/// Returns the number of nodes breadth-first search explores for `n` (1..=12).
pub fn level_order_explored(n: usize) -> Option<u64> {
    LEVEL_ORDER_EXPLORED.get(n.checked_sub(1)?).copied()
}
