//! Genetic operators.
//!
//! Crossover works gene by gene, so it is defined on the solution
//! encoding through [`Genome`] rather than on the problem. Any `Vec<T>`
//! encoding (bit strings, permutations, ...) gets uniform crossover for
//! free; the GA repairs children that come out infeasible.
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use rand::Rng;

/// A solution encoding that supports gene-wise recombination.
pub trait Genome: Sized {
    /// Uniform crossover: every gene of each child comes from one parent or
    /// the other with equal probability, with independent coin flips for
    /// the two children.
    fn uniform_crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> (Self, Self);
}

impl<T: Clone> Genome for Vec<T> {
    fn uniform_crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> (Self, Self) {
        let child1 = self
            .iter()
            .zip(other)
            .map(|(a, b)| (if rng.random_bool(0.5) { a } else { b }).clone())
            .collect();
        let child2 = self
            .iter()
            .zip(other)
            .map(|(a, b)| (if rng.random_bool(0.5) { b } else { a }).clone())
            .collect();
        (child1, child2)
    }
}
