//! Error type shared by problem constructors and solver constructors.
//!
//! Feasibility failures are never errors: infeasible solutions score
//! `f64::NEG_INFINITY` and failed neighbor moves fall back to a no-op.
//! Only malformed inputs surface here, and only at construction time.

use std::fmt::Display;

/// Errors raised while building a problem instance or binding a solver to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A solver configuration failed validation.
    InvalidConfig(String),
    /// Problem instance data is malformed (mismatched lengths, empty input, ...).
    InvalidInstance(String),
    /// A solver was bound to a problem that does not have the shape it needs.
    Contract(String),
}

impl Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            Self::InvalidInstance(msg) => write!(f, "invalid problem instance: {msg}"),
            Self::Contract(msg) => write!(f, "problem contract violated: {msg}"),
        }
    }
}

impl std::error::Error for SolverError {}
