//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Generate initial solution
//! 2. At each iteration:
//!    a. Sample `neighborhood_size` neighbors of the current solution
//!    b. Select the best candidate that is not tabu, or that beats the
//!    global best (aspiration)
//!    c. Move to it and add the resulting state to the tabu list
//!    d. Update global best if improved
//! 3. Terminate after max iterations or when no candidate is admissible
//!
//! The tabu key is the visited state itself, so the list forbids
//! returning to recently visited solutions rather than re-applying a
//! recent transformation.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing* 1(3), 190-206.

use super::config::TabuConfig;
use super::types::{select_admissible, TabuList};
use crate::algorithm::{Algorithm, SolutionOf};
use crate::error::SolverError;
use crate::problem::Problem;
use rand::Rng;

/// Statistics from the most recent run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabuStats {
    /// Iterations that completed a move.
    pub iterations: usize,
    /// Iteration at which the best solution was found (0 = initial solution).
    pub best_iteration: usize,
    /// Largest tabu list length observed.
    pub max_tabu_len: usize,
    /// Whether the run ended because no candidate was admissible.
    pub exhausted: bool,
}

/// Tabu Search bound to a problem.
#[derive(Debug)]
pub struct TabuSearch<'a, P> {
    problem: &'a P,
    config: TabuConfig,
    stats: TabuStats,
}

impl<'a, P: Problem> TabuSearch<'a, P> {
    /// Binds Tabu Search to `problem`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidConfig`] if the configuration is invalid.
    pub fn new(problem: &'a P, config: TabuConfig) -> Result<Self, SolverError> {
        config.validate().map_err(SolverError::InvalidConfig)?;
        Ok(Self {
            problem,
            config,
            stats: TabuStats::default(),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &TabuConfig {
        &self.config
    }

    /// Statistics from the most recent run.
    pub fn stats(&self) -> TabuStats {
        self.stats
    }
}

impl<P: Problem> Algorithm for TabuSearch<'_, P> {
    type Problem = P;

    fn name(&self) -> &'static str {
        "Tabu Search"
    }

    fn problem(&self) -> &P {
        self.problem
    }

    fn seed(&self) -> Option<u64> {
        self.config.seed
    }

    fn solve<R: Rng>(&mut self, rng: &mut R, history: &mut Vec<f64>) -> (SolutionOf<Self>, f64) {
        let mut stats = TabuStats::default();

        let mut current = self.problem.random_solution(rng);
        let mut best = current.clone();
        let mut best_value = self.problem.evaluate(&current);
        history.push(best_value);

        // Fresh memory for every run
        let mut tabu = TabuList::new(self.config.tabu_tenure);

        for iteration in 1..=self.config.max_iterations {
            let mut candidates: Vec<(P::Solution, f64)> = (0..self.config.neighborhood_size)
                .map(|_| {
                    let neighbor = self.problem.neighbor(&current, rng);
                    let value = self.problem.evaluate(&neighbor);
                    (neighbor, value)
                })
                .collect();

            let Some(idx) = select_admissible(&candidates, &tabu, best_value) else {
                tracing::debug!(iteration, best_value, "no admissible candidate");
                stats.exhausted = true;
                break;
            };

            let (next, value) = candidates.swap_remove(idx);
            tabu.push(next.clone());
            stats.max_tabu_len = stats.max_tabu_len.max(tabu.len());
            current = next;

            if value > best_value {
                best = current.clone();
                best_value = value;
                stats.best_iteration = iteration;
            }

            stats.iterations = iteration;
            history.push(best_value);
        }

        self.stats = stats;
        (best, best_value)
    }
}
