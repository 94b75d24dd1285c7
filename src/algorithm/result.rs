//! Run result record handed to reporting code.

use std::time::Duration;

/// Outcome of one completed algorithm run.
///
/// This is the only state downstream comparison and plotting code sees.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult<S> {
    /// Algorithm name.
    pub algorithm: String,

    /// Problem description (its `Display` output).
    pub problem: String,

    /// Score of the best solution. Higher is better.
    pub best_value: f64,

    /// Wall-clock time spent in the solve loop.
    pub execution_time: Duration,

    /// Number of recorded steps (length of the convergence history).
    pub iterations: usize,

    /// Best solution found.
    pub solution: S,

    /// Best score recorded at each step.
    pub convergence_history: Vec<f64>,
}

impl<S> RunResult<S> {
    /// Returns `true` if this run found a strictly better score than `other`.
    pub fn is_better_than<T>(&self, other: &RunResult<T>) -> bool {
        self.best_value > other.best_value
    }

    /// Returns `true` if the convergence history never decreases.
    pub fn is_monotone(&self) -> bool {
        self.convergence_history.windows(2).all(|w| w[1] >= w[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(best_value: f64, history: Vec<f64>) -> RunResult<Vec<bool>> {
        RunResult {
            algorithm: "Test".into(),
            problem: "Knapsack(n=0, capacity=0)".into(),
            best_value,
            execution_time: Duration::ZERO,
            iterations: history.len(),
            solution: Vec::new(),
            convergence_history: history,
        }
    }

    #[test]
    fn test_is_better_than() {
        let a = result(10.0, vec![]);
        let b = result(7.0, vec![]);
        assert!(a.is_better_than(&b));
        assert!(!b.is_better_than(&a));
        assert!(!a.is_better_than(&a));
    }

    #[test]
    fn test_is_monotone() {
        assert!(result(3.0, vec![1.0, 1.0, 3.0]).is_monotone());
        assert!(!result(3.0, vec![1.0, 3.0, 2.0]).is_monotone());
        assert!(result(0.0, vec![]).is_monotone());
    }
}
