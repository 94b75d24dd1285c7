//! Problem abstraction consumed by every solver.
//!
//! A problem is immutable once constructed. Solvers see it only through
//! [`Problem`]: evaluation, feasibility, random construction and a single
//! stochastic neighbor move. Branch and bound additionally needs the
//! item-level view exposed by [`ItemDecomposable`].
//!
//! # Maximization
//!
//! Every solver maximizes [`Problem::evaluate`]. Minimization problems
//! (such as TSP tour length) return the negated objective. Infeasible
//! solutions evaluate to `f64::NEG_INFINITY`, which keeps them out of any
//! "best so far" comparison without aborting the search.

mod knapsack;
mod tsp;

pub use knapsack::KnapsackProblem;
pub use tsp::{DistanceMatrix, TspProblem};

use rand::Rng;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Defines a combinatorial optimization problem.
///
/// # Examples
///
/// ```ignore
/// struct OneMax { n: usize }
///
/// impl Problem for OneMax {
///     type Solution = Vec<bool>;
///
///     fn evaluate(&self, bits: &Vec<bool>) -> f64 {
///         bits.iter().filter(|&&b| b).count() as f64
///     }
///
///     fn is_feasible(&self, bits: &Vec<bool>) -> bool {
///         bits.len() == self.n
///     }
///
///     fn random_solution<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
///         (0..self.n).map(|_| rng.random_bool(0.5)).collect()
///     }
///
///     fn neighbor<R: Rng>(&self, bits: &Vec<bool>, rng: &mut R) -> Vec<bool> {
///         let mut next = bits.clone();
///         let i = rng.random_range(0..self.n);
///         next[i] = !next[i];
///         next
///     }
/// }
/// ```
pub trait Problem: Display {
    /// The solution encoding.
    ///
    /// `Eq + Hash` lets tabu search use the solution itself as its
    /// memory key.
    type Solution: Clone + Eq + Hash + Debug;

    /// Scores a solution. Higher is better.
    ///
    /// Must be pure and return `f64::NEG_INFINITY` for infeasible input.
    fn evaluate(&self, solution: &Self::Solution) -> f64;

    /// Returns `true` if the solution satisfies every hard constraint.
    fn is_feasible(&self, solution: &Self::Solution) -> bool;

    /// Creates a random feasible solution.
    fn random_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Samples one neighbor of `solution`.
    ///
    /// Implementations return a clone of the input when the sampled move
    /// would be infeasible; this never fails.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}

/// A 0/1 item-selection problem that exposes per-item weights and values
/// under a single capacity constraint.
///
/// This is the capability branch and bound needs to compute its fractional
/// relaxation bound. Solutions are inclusion vectors indexed like
/// [`weights`](ItemDecomposable::weights).
pub trait ItemDecomposable: Problem<Solution = Vec<bool>> {
    /// Per-item weights.
    fn weights(&self) -> &[u64];

    /// Per-item values.
    fn values(&self) -> &[u64];

    /// Total weight allowed.
    fn capacity(&self) -> u64;

    /// Number of items.
    fn item_count(&self) -> usize {
        self.weights().len()
    }
}

/// Sum of `items`, or `None` if it does not fit in a `u64`.
///
/// Instances whose total weight and total value both fit can accumulate
/// any partial sum without overflow.
pub(crate) fn checked_total(items: &[u64]) -> Option<u64> {
    items.iter().try_fold(0u64, |acc, &x| acc.checked_add(x))
}
