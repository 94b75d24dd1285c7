//! Hill Climbing configuration.

/// Configuration parameters for Hill Climbing.
///
/// # Examples
///
/// ```
/// use u_metabench::hc::HcConfig;
///
/// let config = HcConfig::default().with_max_iterations(500);
/// assert_eq!(config.max_iterations, 500);
/// assert_eq!(config.neighbor_samples, 10);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Neighbors sampled per iteration before declaring a local optimum.
    pub neighbor_samples: usize,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            neighbor_samples: 10,
            seed: None,
        }
    }
}

impl HcConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets how many neighbors are tried per iteration.
    pub fn with_neighbor_samples(mut self, n: usize) -> Self {
        self.neighbor_samples = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.neighbor_samples == 0 {
            return Err("neighbor_samples must be at least 1".into());
        }
        Ok(())
    }
}
