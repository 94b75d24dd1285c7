//! Branch and Bound (B&B).
//!
//! An exact, anytime solver for 0/1 item-selection problems exposing the
//! [`ItemDecomposable`](crate::problem::ItemDecomposable) capability. It
//! explores inclusion decisions depth-first on an explicit stack and
//! prunes with the fractional (continuous) relaxation bound.
//!
//! # References
//!
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete Programming Problems"
//! - Kellerer, Pferschy & Pisinger (2004), *Knapsack Problems*, ch. 2

mod config;
mod runner;

pub use config::BnbConfig;
pub use runner::{BnbTermination, BranchAndBound};
