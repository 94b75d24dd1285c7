//! Parent selection for the GA.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::seq::index;
use rand::Rng;

/// Tournament selection: sample `k` distinct individuals, return the index
/// of the fittest (highest score). Ties go to the first one sampled.
///
/// `k` is capped at the population size.
///
/// # Panics
/// Panics if `fitness` is empty.
pub(crate) fn tournament<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> usize {
    assert!(!fitness.is_empty(), "cannot select from empty population");

    let k = k.clamp(1, fitness.len());
    let sampled = index::sample(rng, fitness.len(), k);

    let mut best_idx = sampled.index(0);
    for idx in sampled.iter().skip(1) {
        if fitness[idx] > fitness[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tournament_full_size_picks_best() {
        let fitness = vec![3.0, 9.0, 1.0, 4.0];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(tournament(&fitness, 4, &mut rng), 1);
        }
    }

    #[test]
    fn test_tournament_oversized_k_is_capped() {
        let fitness = vec![2.0, 5.0];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(tournament(&fitness, 10, &mut rng), 1);
    }

    #[test]
    fn test_tournament_never_picks_worst_with_k3() {
        // With 3 distinct samples out of 4, the worst can never win.
        let fitness = vec![3.0, 9.0, f64::NEG_INFINITY, 4.0];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert_ne!(tournament(&fitness, 3, &mut rng), 2);
        }
    }

    #[test]
    fn test_tournament_single_individual() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(tournament(&[1.0], 3, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "empty population")]
    fn test_tournament_empty_panics() {
        let mut rng = StdRng::seed_from_u64(0);
        tournament(&[], 3, &mut rng);
    }
}
