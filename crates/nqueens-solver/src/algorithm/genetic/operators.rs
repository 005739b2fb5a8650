//! Selection, crossover and mutation over permutation chromosomes.

use rand::Rng;

use super::individual::Individual;

/// Partially mapped crossover with uniformly chosen cut points.
///
/// The child keeps `parent1[p1..=p2]` in place and fills the rest from
/// `parent2`, following the mapping between the parents whenever a value
/// is already taken.
pub fn pmx_crossover<R: Rng + ?Sized>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let n = parent1.len();
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    pmx_with_cuts(parent1, parent2, a.min(b), a.max(b))
}

/// Partially mapped crossover over the segment `[start, end]`.
///
/// # Panics
///
/// Panics if the parents differ in length, if the segment is out of range,
/// or if the child is not a permutation.
pub fn pmx_with_cuts(parent1: &[usize], parent2: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents differ in length");
    assert!(
        start <= end && end < n,
        "invalid PMX segment [{start}, {end}] for length {n}"
    );

    let mut position_in_parent2 = vec![0; n];
    for (index, &value) in parent2.iter().enumerate() {
        position_in_parent2[value] = index;
    }

    let mut child = vec![0; n];
    let mut used = vec![false; n];
    for index in start..=end {
        child[index] = parent1[index];
        used[parent1[index]] = true;
    }

    for index in (0..start).chain(end + 1..n) {
        let mut value = parent2[index];
        while used[value] {
            value = parent1[position_in_parent2[value]];
        }
        child[index] = value;
        used[value] = true;
    }

    assert!(
        is_permutation(&child),
        "PMX produced a non-permutation: {child:?}"
    );
    child
}

/// Swaps two uniformly chosen genes. The positions may coincide.
pub fn swap_mutation<R: Rng + ?Sized>(genes: &mut [usize], rng: &mut R) {
    if genes.is_empty() {
        return;
    }
    let i = rng.random_range(0..genes.len());
    let j = rng.random_range(0..genes.len());
    genes.swap(i, j);
}

/// Samples `size` individuals with replacement and returns the fittest.
///
/// Ties go to the first one sampled.
pub fn tournament_select<'a, R: Rng + ?Sized>(
    population: &'a [Individual],
    size: usize,
    rng: &mut R,
) -> &'a Individual {
    assert!(
        !population.is_empty(),
        "tournament over an empty population"
    );

    let mut best = &population[rng.random_range(0..population.len())];
    for _ in 1..size {
        let candidate = &population[rng.random_range(0..population.len())];
        if candidate.fitness() < best.fitness() {
            best = candidate;
        }
    }
    best
}

/// Returns true if `genes` holds every value of `[0, len)` exactly once.
pub fn is_permutation(genes: &[usize]) -> bool {
    let mut seen = vec![false; genes.len()];
    for &gene in genes {
        match seen.get_mut(gene) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
