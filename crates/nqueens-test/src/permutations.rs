//! Permutation enumeration.

/// Returns every permutation of `[0, n)` (Heap's algorithm).
///
/// There are `n!` of them; keep `n` small.
pub fn permutations(n: usize) -> Vec<Vec<usize>> {
    fn generate(k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if k <= 1 {
            out.push(current.clone());
            return;
        }
        generate(k - 1, current, out);
        for i in 0..k - 1 {
            let swap = if k % 2 == 0 { i } else { 0 };
            current.swap(swap, k - 1);
            generate(k - 1, current, out);
        }
    }

    let mut out = Vec::new();
    generate(n, &mut (0..n).collect(), &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_uniqueness() {
        for (n, expected) in [(0, 1), (1, 1), (3, 6), (5, 120)] {
            let mut all = permutations(n);
            assert_eq!(all.len(), expected);
            all.sort();
            all.dedup();
            assert_eq!(all.len(), expected);
        }
    }
}
