//! Genetic Algorithm framework.
//!
//! A generational GA over any [`Problem`](crate::problem::Problem) whose
//! solution encoding implements [`Genome`]. Parents come from tournament
//! selection, children from uniform crossover followed by repair and
//! mutation, and the best `elitism` individuals survive unchanged.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, elitism)
//! - [`GeneticAlgorithm`]: Executes the evolutionary loop
//! - [`GaStats`]: Per-run statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use operators::Genome;
pub use runner::{GaStats, GeneticAlgorithm};
