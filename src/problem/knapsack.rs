//! 0/1 knapsack problem.
//!
//! Maximize `sum(values[i] * x[i])` subject to
//! `sum(weights[i] * x[i]) <= capacity`, `x[i] ∈ {0, 1}`.

use super::{checked_total, ItemDecomposable, Problem};
use crate::error::SolverError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// A 0/1 knapsack instance. Solutions are inclusion vectors of length `n`.
///
/// # Examples
///
/// ```
/// use u_metabench::problem::{KnapsackProblem, Problem};
///
/// let problem = KnapsackProblem::new(vec![2, 3, 4], vec![3, 4, 5], 5).unwrap();
/// assert_eq!(problem.evaluate(&vec![true, true, false]), 7.0);
/// assert_eq!(problem.evaluate(&vec![true, true, true]), f64::NEG_INFINITY);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackProblem {
    weights: Vec<u64>,
    values: Vec<u64>,
    capacity: u64,
}

impl KnapsackProblem {
    /// Creates an instance from explicit item data.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInstance`] if `weights` and `values`
    /// differ in length, or if the total weight or total value overflows
    /// `u64`.
    pub fn new(weights: Vec<u64>, values: Vec<u64>, capacity: u64) -> Result<Self, SolverError> {
        if weights.len() != values.len() {
            return Err(SolverError::InvalidInstance(format!(
                "{} weights but {} values",
                weights.len(),
                values.len()
            )));
        }
        if checked_total(&weights).is_none() {
            return Err(SolverError::InvalidInstance("total weight overflows u64".into()));
        }
        if checked_total(&values).is_none() {
            return Err(SolverError::InvalidInstance("total value overflows u64".into()));
        }
        Ok(Self {
            weights,
            values,
            capacity,
        })
    }

    /// Generates a random instance with `n` items.
    ///
    /// Weights are drawn from `[1, 50]`, values from `[1, 100]`, and the
    /// capacity is half the total weight (rounded down).
    pub fn generate_random(n: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let weights: Vec<u64> = (0..n).map(|_| rng.random_range(1..=50)).collect();
        let values: Vec<u64> = (0..n).map(|_| rng.random_range(1..=100)).collect();
        let capacity = weights.iter().sum::<u64>() / 2;
        Self {
            weights,
            values,
            capacity,
        }
    }

    /// Number of items.
    pub fn n(&self) -> usize {
        self.weights.len()
    }

    /// Total weight of the selected items.
    pub fn total_weight(&self, solution: &[bool]) -> u64 {
        self.weights
            .iter()
            .zip(solution)
            .filter(|&(_, &x)| x)
            .map(|(&w, _)| w)
            .sum()
    }

    /// Total value of the selected items, ignoring the capacity.
    pub fn total_value(&self, solution: &[bool]) -> u64 {
        self.values
            .iter()
            .zip(solution)
            .filter(|&(_, &x)| x)
            .map(|(&v, _)| v)
            .sum()
    }

    /// Every single-bit-flip neighbor of `solution` that stays feasible.
    pub fn all_neighbors(&self, solution: &[bool]) -> Vec<Vec<bool>> {
        (0..solution.len())
            .filter_map(|i| {
                let mut neighbor = solution.to_vec();
                neighbor[i] = !neighbor[i];
                self.is_feasible(&neighbor).then_some(neighbor)
            })
            .collect()
    }
}

impl Problem for KnapsackProblem {
    type Solution = Vec<bool>;

    fn evaluate(&self, solution: &Vec<bool>) -> f64 {
        if !self.is_feasible(solution) {
            return f64::NEG_INFINITY;
        }
        self.total_value(solution) as f64
    }

    fn is_feasible(&self, solution: &Vec<bool>) -> bool {
        solution.len() == self.n() && self.total_weight(solution) <= self.capacity
    }

    fn random_solution<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
        let mut order: Vec<usize> = (0..self.n()).collect();
        order.shuffle(rng);

        let mut solution = vec![false; self.n()];
        let mut weight = 0;
        for i in order {
            if weight + self.weights[i] <= self.capacity {
                solution[i] = true;
                weight += self.weights[i];
            }
        }
        solution
    }

    fn neighbor<R: Rng>(&self, solution: &Vec<bool>, rng: &mut R) -> Vec<bool> {
        if solution.is_empty() {
            return solution.clone();
        }
        let mut neighbor = solution.clone();
        let i = rng.random_range(0..neighbor.len());
        neighbor[i] = !neighbor[i];
        if self.is_feasible(&neighbor) {
            neighbor
        } else {
            solution.clone()
        }
    }
}

impl ItemDecomposable for KnapsackProblem {
    fn weights(&self) -> &[u64] {
        &self.weights
    }

    fn values(&self) -> &[u64] {
        &self.values
    }

    fn capacity(&self) -> u64 {
        self.capacity
    }
}

impl fmt::Display for KnapsackProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Knapsack(n={}, capacity={})", self.n(), self.capacity)
    }
}
