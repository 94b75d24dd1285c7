//! Benchmark harness for metaheuristic and exact combinatorial search.
//!
//! Five solvers run against two classic problems through one interface:
//!
//! - **Hill Climbing (HC)**: Greedy first-improvement local search.
//! - **Simulated Annealing (SA)**: Metropolis acceptance under a geometric
//!   cooling schedule.
//! - **Tabu Search (TS)**: Best-admissible-neighbor moves with a
//!   fixed-tenure memory of visited states and an aspiration criterion.
//! - **Genetic Algorithm (GA)**: Generational evolution with tournament
//!   selection, uniform crossover, repair, mutation and elitism.
//! - **Branch and Bound (B&B)**: Exact depth-first search for 0/1 item
//!   selection with a fractional relaxation bound and a node budget.
//!
//! Problems implement [`problem::Problem`]. The bundled instances are the
//! 0/1 [`KnapsackProblem`](problem::KnapsackProblem) and the Euclidean
//! [`TspProblem`](problem::TspProblem). Every solver implements
//! [`algorithm::Algorithm`], whose `run` method produces a
//! [`RunResult`](algorithm::RunResult) with the best solution, its score,
//! wall-clock time and convergence history.
//!
//! # Conventions
//!
//! All solvers maximize. TSP reports the negated tour length, and
//! infeasible solutions score `f64::NEG_INFINITY`.
//!
//! # Logging
//!
//! Solvers emit [`tracing`] events: run start and finish at `debug`,
//! per-stage progress at `trace`. Install any subscriber to see them.

pub mod algorithm;
pub mod bnb;
pub mod error;
pub mod ga;
pub mod hc;
pub mod problem;
pub mod sa;
pub mod tabu;

pub use error::SolverError;
