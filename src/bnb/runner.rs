//! Depth-first branch and bound for 0/1 item selection.
//!
//! # Algorithm
//!
//! 1. Sort items by value/weight ratio, best first
//! 2. Starting from the empty selection, decide items in that order,
//!    exploring "take" before "skip"
//! 3. Bound each child with the fractional relaxation of the undecided
//!    items; explore it only if the bound beats the incumbent
//! 4. Complete selections replace the incumbent when they improve it
//!
//! Deciding items in ratio order makes the greedy fractional fill the
//! optimum of the continuous relaxation, so the bound never underestimates
//! and pruning never discards the optimum.
//!
//! The search is anytime: once `max_nodes` nodes have been explored it
//! stops and reports the incumbent.

use super::config::BnbConfig;
use crate::algorithm::{Algorithm, SolutionOf};
use crate::error::SolverError;
use crate::problem::{checked_total, ItemDecomposable};
use rand::Rng;
use std::cmp::Ordering;

/// Why the most recent search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BnbTermination {
    /// The whole tree was explored or pruned; the incumbent is optimal.
    #[default]
    OptimalityProven,
    /// The node budget ran out; the incumbent may be suboptimal.
    NodeLimit,
}

/// Branch and bound bound to an item-selection problem.
#[derive(Debug)]
pub struct BranchAndBound<'a, P> {
    problem: &'a P,
    config: BnbConfig,
    order: Vec<usize>,
    nodes_explored: usize,
    termination: BnbTermination,
}

impl<'a, P: ItemDecomposable> BranchAndBound<'a, P> {
    /// Binds branch and bound to `problem`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contract`] if the problem's weights and
    /// values disagree in length, if either total overflows `u64`, or if
    /// the empty selection of that length is not a feasible solution.
    pub fn new(problem: &'a P, config: BnbConfig) -> Result<Self, SolverError> {
        let (weights, values) = (problem.weights(), problem.values());
        if weights.len() != values.len() {
            return Err(SolverError::Contract(format!(
                "{} weights but {} values",
                weights.len(),
                values.len()
            )));
        }
        if checked_total(weights).is_none() || checked_total(values).is_none() {
            return Err(SolverError::Contract(
                "total weight and total value must fit in u64".into(),
            ));
        }
        if !problem.is_feasible(&vec![false; weights.len()]) {
            return Err(SolverError::Contract(
                "the empty selection must be a feasible solution".into(),
            ));
        }

        Ok(Self {
            problem,
            config,
            order: ratio_order(weights, values),
            nodes_explored: 0,
            termination: BnbTermination::default(),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &BnbConfig {
        &self.config
    }

    /// Nodes explored by the most recent run.
    pub fn nodes_explored(&self) -> usize {
        self.nodes_explored
    }

    /// Why the most recent run stopped.
    pub fn termination(&self) -> BnbTermination {
        self.termination
    }
}

impl<P: ItemDecomposable> Algorithm for BranchAndBound<'_, P> {
    type Problem = P;

    fn name(&self) -> &'static str {
        "Branch & Bound"
    }

    fn problem(&self) -> &P {
        self.problem
    }

    /// The search is deterministic.
    fn seed(&self) -> Option<u64> {
        None
    }

    fn solve<R: Rng>(&mut self, _rng: &mut R, history: &mut Vec<f64>) -> (SolutionOf<Self>, f64) {
        let mut session = SearchSession::new(self.problem, &self.order, self.config.max_nodes);
        let termination = session.run(history);

        tracing::debug!(
            nodes = session.nodes,
            best_value = session.best_value,
            ?termination,
            "branch and bound finished"
        );

        self.nodes_explored = session.nodes;
        self.termination = termination;
        (session.best_selection, session.best_value as f64)
    }
}

/// Item indices sorted by value/weight ratio, best first. Zero-weight
/// items come first; ties keep index order.
fn ratio_order(weights: &[u64], values: &[u64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| compare_ratio(values[b], weights[b], values[a], weights[a]));
    order
}

/// Compares `va / wa` with `vb / wb` without division.
fn compare_ratio(va: u64, wa: u64, vb: u64, wb: u64) -> Ordering {
    match (wa, wb) {
        (0, 0) => Ordering::Equal,
        (0, _) => Ordering::Greater,
        (_, 0) => Ordering::Less,
        _ => (u128::from(va) * u128::from(wb)).cmp(&(u128::from(vb) * u128::from(wa))),
    }
}

/// A partial selection on the search stack.
#[derive(Debug)]
struct Node {
    /// Number of items decided (position in the ratio order).
    level: usize,
    weight: u64,
    value: u64,
    bound: f64,
    /// Inclusion vector in original item order.
    selection: Vec<bool>,
}

/// State of one search run: the stack, the incumbent and the node counter.
struct SearchSession<'a> {
    weights: &'a [u64],
    values: &'a [u64],
    capacity: u64,
    order: &'a [usize],
    max_nodes: usize,
    nodes: usize,
    best_value: u64,
    best_selection: Vec<bool>,
}

impl<'a> SearchSession<'a> {
    fn new<P: ItemDecomposable>(problem: &'a P, order: &'a [usize], max_nodes: usize) -> Self {
        let n = problem.weights().len();
        Self {
            weights: problem.weights(),
            values: problem.values(),
            capacity: problem.capacity(),
            order,
            max_nodes,
            nodes: 0,
            best_value: 0,
            best_selection: vec![false; n],
        }
    }

    fn run(&mut self, history: &mut Vec<f64>) -> BnbTermination {
        let n = self.order.len();

        // The root is always explored.
        let mut stack = vec![Node {
            level: 0,
            weight: 0,
            value: 0,
            bound: f64::INFINITY,
            selection: vec![false; n],
        }];

        while let Some(node) = stack.pop() {
            // The incumbent may have improved since this node was pushed.
            if node.bound <= self.best_value as f64 {
                continue;
            }

            if self.nodes >= self.max_nodes {
                return BnbTermination::NodeLimit;
            }
            self.nodes += 1;

            if node.level == n {
                if node.value > self.best_value {
                    self.best_value = node.value;
                    self.best_selection = node.selection;
                    history.push(self.best_value as f64);
                    tracing::trace!(nodes = self.nodes, best_value = self.best_value, "new incumbent");
                }
                continue;
            }

            let item = self.order[node.level];
            let next_level = node.level + 1;

            let take = (node.weight + self.weights[item] <= self.capacity).then(|| {
                let weight = node.weight + self.weights[item];
                let value = node.value + self.values[item];
                let mut selection = node.selection.clone();
                selection[item] = true;
                Node {
                    level: next_level,
                    weight,
                    value,
                    bound: self.bound(next_level, weight, value),
                    selection,
                }
            });

            let skip_bound = self.bound(next_level, node.weight, node.value);
            if skip_bound > self.best_value as f64 {
                stack.push(Node {
                    level: next_level,
                    weight: node.weight,
                    value: node.value,
                    bound: skip_bound,
                    selection: node.selection,
                });
            }

            // Pushed last so it is explored first
            if let Some(child) = take {
                if child.bound > self.best_value as f64 {
                    stack.push(child);
                }
            }
        }

        BnbTermination::OptimalityProven
    }

    /// Fractional relaxation bound for a node at `level` with the given
    /// accumulated weight and value.
    fn bound(&self, level: usize, weight: u64, value: u64) -> f64 {
        let mut bound = value as f64;
        let mut weight = weight;

        for &i in &self.order[level..] {
            if weight + self.weights[i] <= self.capacity {
                weight += self.weights[i];
                bound += self.values[i] as f64;
            } else {
                let room = (self.capacity - weight) as f64;
                bound += self.values[i] as f64 * room / self.weights[i] as f64;
                break;
            }
        }

        bound
    }
}
