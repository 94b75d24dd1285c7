//! Hill Climbing (HC).
//!
//! Greedy local improvement: move to a better neighbor while one can be
//! found, stop at the first iteration that finds none.

mod config;
mod runner;

pub use config::HcConfig;
pub use runner::HillClimbing;
