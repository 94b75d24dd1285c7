//! Algorithm abstraction and run harness.
//!
//! Every solver is bound by reference to one problem instance and
//! implements [`Algorithm::solve`]. The provided [`Algorithm::run`] and
//! [`Algorithm::run_with_rng`] methods time the solve, collect the
//! convergence history, and package everything into a [`RunResult`].

mod result;

pub use result::RunResult;

use crate::problem::Problem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// Solution type of an algorithm's problem.
pub type SolutionOf<A> = <<A as Algorithm>::Problem as Problem>::Solution;

/// A search algorithm bound to one problem instance.
///
/// Implementors provide [`solve`](Algorithm::solve); the harness methods
/// are provided.
///
/// # Examples
///
/// ```
/// use u_metabench::algorithm::Algorithm;
/// use u_metabench::problem::KnapsackProblem;
/// use u_metabench::sa::{SaConfig, SimulatedAnnealing};
///
/// let problem = KnapsackProblem::new(vec![2, 3, 4], vec![3, 4, 5], 5).unwrap();
/// let mut sa = SimulatedAnnealing::new(&problem, SaConfig::default().with_seed(7)).unwrap();
/// let result = sa.run();
/// assert_eq!(result.algorithm, "Simulated Annealing");
/// assert_eq!(result.iterations, result.convergence_history.len());
/// ```
pub trait Algorithm {
    /// The problem this algorithm is bound to.
    type Problem: Problem;

    /// Human-readable algorithm name, e.g. `"Tabu Search"`.
    fn name(&self) -> &'static str;

    /// The bound problem instance.
    fn problem(&self) -> &Self::Problem;

    /// Seed used by [`run`](Algorithm::run). `None` draws a fresh seed.
    fn seed(&self) -> Option<u64>;

    /// Runs the search to its stopping condition.
    ///
    /// Appends one entry to `history` per recorded step and returns the
    /// best solution found together with its score.
    fn solve<R: Rng>(&mut self, rng: &mut R, history: &mut Vec<f64>) -> (SolutionOf<Self>, f64);

    /// Runs the algorithm with a generator seeded from [`seed`](Algorithm::seed).
    fn run(&mut self) -> RunResult<SolutionOf<Self>> {
        let seed = self.seed().unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        self.run_with_rng(&mut rng)
    }

    /// Runs the algorithm with a caller-supplied generator.
    fn run_with_rng<R: Rng>(&mut self, rng: &mut R) -> RunResult<SolutionOf<Self>> {
        let problem = self.problem().to_string();
        tracing::debug!(algorithm = self.name(), %problem, "run started");

        let mut convergence_history = Vec::new();
        let start = Instant::now();
        let (solution, best_value) = self.solve(rng, &mut convergence_history);
        let execution_time = start.elapsed();

        tracing::debug!(
            algorithm = self.name(),
            best_value,
            steps = convergence_history.len(),
            elapsed_ms = execution_time.as_secs_f64() * 1e3,
            "run finished"
        );

        RunResult {
            algorithm: self.name().to_string(),
            problem,
            best_value,
            execution_time,
            iterations: convergence_history.len(),
            solution,
            convergence_history,
        }
    }
}
