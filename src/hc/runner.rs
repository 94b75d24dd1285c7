//! Hill Climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Start from a random solution
//! 2. At each iteration, sample up to `neighbor_samples` neighbors and move
//!    to the first one that is strictly better (first improvement)
//! 3. Stop after the first iteration with no improving sample, or when
//!    `max_iterations` is spent
//!
//! A failed iteration is treated as a local optimum even though the
//! neighbor generator is stochastic and an improving neighbor may exist.

use super::config::HcConfig;
use crate::algorithm::{Algorithm, SolutionOf};
use crate::error::SolverError;
use crate::problem::Problem;
use rand::Rng;

/// First-improvement Hill Climbing bound to a problem.
#[derive(Debug)]
pub struct HillClimbing<'a, P> {
    problem: &'a P,
    config: HcConfig,
    reached_local_optimum: bool,
}

impl<'a, P: Problem> HillClimbing<'a, P> {
    /// Binds Hill Climbing to `problem`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidConfig`] if the configuration is invalid.
    pub fn new(problem: &'a P, config: HcConfig) -> Result<Self, SolverError> {
        config.validate().map_err(SolverError::InvalidConfig)?;
        Ok(Self {
            problem,
            config,
            reached_local_optimum: false,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &HcConfig {
        &self.config
    }

    /// Whether the most recent run stopped on a non-improving iteration
    /// rather than on the iteration budget.
    pub fn reached_local_optimum(&self) -> bool {
        self.reached_local_optimum
    }
}

impl<P: Problem> Algorithm for HillClimbing<'_, P> {
    type Problem = P;

    fn name(&self) -> &'static str {
        "Hill Climbing"
    }

    fn problem(&self) -> &P {
        self.problem
    }

    fn seed(&self) -> Option<u64> {
        self.config.seed
    }

    fn solve<R: Rng>(&mut self, rng: &mut R, history: &mut Vec<f64>) -> (SolutionOf<Self>, f64) {
        let mut current = self.problem.random_solution(rng);
        let mut current_value = self.problem.evaluate(&current);
        history.push(current_value);
        self.reached_local_optimum = false;

        for iteration in 0..self.config.max_iterations {
            let mut improved = false;

            for _ in 0..self.config.neighbor_samples {
                let neighbor = self.problem.neighbor(&current, rng);
                let neighbor_value = self.problem.evaluate(&neighbor);

                if neighbor_value > current_value {
                    current = neighbor;
                    current_value = neighbor_value;
                    improved = true;
                    break;
                }
            }

            history.push(current_value);

            if !improved {
                tracing::debug!(iteration, current_value, "local optimum reached");
                self.reached_local_optimum = true;
                break;
            }
        }

        (current, current_value)
    }
}
