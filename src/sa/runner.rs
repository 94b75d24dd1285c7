//! SA execution loop.

use super::config::SaConfig;
use crate::algorithm::{Algorithm, SolutionOf};
use crate::error::SolverError;
use crate::problem::Problem;
use rand::Rng;

/// Move statistics from the most recent run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SaStats {
    /// Total neighbor evaluations.
    pub iterations: usize,

    /// Number of temperature stages completed.
    pub stages: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,
}

/// Simulated Annealing bound to a problem.
///
/// Accepts every improving neighbor and a worsening one with probability
/// `exp(delta / T)` (Metropolis criterion). The temperature is multiplied
/// by `cooling_rate` after each stage of `iterations_per_temp` samples.
/// The convergence history gets the best-ever score once per stage.
#[derive(Debug)]
pub struct SimulatedAnnealing<'a, P> {
    problem: &'a P,
    config: SaConfig,
    stats: SaStats,
}

impl<'a, P: Problem> SimulatedAnnealing<'a, P> {
    /// Binds Simulated Annealing to `problem`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidConfig`] if the configuration is invalid.
    pub fn new(problem: &'a P, config: SaConfig) -> Result<Self, SolverError> {
        config.validate().map_err(SolverError::InvalidConfig)?;
        Ok(Self {
            problem,
            config,
            stats: SaStats::default(),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Statistics from the most recent run.
    pub fn stats(&self) -> SaStats {
        self.stats
    }
}

impl<P: Problem> Algorithm for SimulatedAnnealing<'_, P> {
    type Problem = P;

    fn name(&self) -> &'static str {
        "Simulated Annealing"
    }

    fn problem(&self) -> &P {
        self.problem
    }

    fn seed(&self) -> Option<u64> {
        self.config.seed
    }

    fn solve<R: Rng>(&mut self, rng: &mut R, history: &mut Vec<f64>) -> (SolutionOf<Self>, f64) {
        let config = &self.config;
        let mut stats = SaStats::default();

        let mut current = self.problem.random_solution(rng);
        let mut current_value = self.problem.evaluate(&current);
        let mut best = current.clone();
        let mut best_value = current_value;
        history.push(best_value);

        let mut temperature = config.initial_temp;

        while temperature > config.min_temp {
            for _ in 0..config.iterations_per_temp {
                let neighbor = self.problem.neighbor(&current, rng);
                let neighbor_value = self.problem.evaluate(&neighbor);
                let delta = neighbor_value - current_value;

                // Metropolis acceptance criterion
                let accept = if delta > 0.0 {
                    stats.improving_moves += 1;
                    true
                } else {
                    rng.random::<f64>() < (delta / temperature).exp()
                };

                if accept {
                    current = neighbor;
                    current_value = neighbor_value;
                    stats.accepted_moves += 1;

                    if current_value > best_value {
                        best = current.clone();
                        best_value = current_value;
                    }
                }

                stats.iterations += 1;
            }

            temperature *= config.cooling_rate;
            stats.stages += 1;
            history.push(best_value);
            tracing::trace!(temperature, best_value, "temperature stage complete");
        }

        stats.final_temperature = temperature;
        tracing::debug!(
            stages = stats.stages,
            accepted = stats.accepted_moves,
            improving = stats.improving_moves,
            "annealing reached min_temp"
        );
        self.stats = stats;

        (best, best_value)
    }
}
