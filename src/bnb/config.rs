//! Branch and bound configuration.

/// Configuration for [`BranchAndBound`](super::BranchAndBound).
///
/// # Examples
///
/// ```
/// use u_metabench::bnb::BnbConfig;
///
/// assert_eq!(BnbConfig::default().max_nodes, 100_000);
/// assert_eq!(BnbConfig::unbounded().max_nodes, usize::MAX);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbConfig {
    /// Hard cap on explored search nodes. When it is reached the search
    /// stops and returns the best complete solution found so far.
    pub max_nodes: usize,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self { max_nodes: 100_000 }
    }
}

impl BnbConfig {
    /// No node limit: the search runs until optimality is proven.
    pub fn unbounded() -> Self {
        Self {
            max_nodes: usize::MAX,
        }
    }

    /// Sets the node limit.
    pub fn with_max_nodes(mut self, n: usize) -> Self {
        self.max_nodes = n;
        self
    }
}
