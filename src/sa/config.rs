//! SA configuration.

/// Configuration for Simulated Annealing with geometric cooling.
///
/// # Examples
///
/// ```
/// use u_metabench::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temp(50.0)
///     .with_min_temp(0.001)
///     .with_cooling_rate(0.98)
///     .with_iterations_per_temp(200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Higher values accept more worsening moves early on.
    pub initial_temp: f64,

    /// Geometric cooling factor in (0, 1): `T_{k+1} = cooling_rate * T_k`.
    pub cooling_rate: f64,

    /// The search stops once the temperature is at or below this value.
    pub min_temp: f64,

    /// Neighbor samples evaluated at each temperature stage.
    pub iterations_per_temp: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temp: 100.0,
            cooling_rate: 0.95,
            min_temp: 0.01,
            iterations_per_temp: 100,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temp(mut self, t: f64) -> Self {
        self.initial_temp = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temp(mut self, t: f64) -> Self {
        self.min_temp = t;
        self
    }

    pub fn with_iterations_per_temp(mut self, n: usize) -> Self {
        self.iterations_per_temp = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temp <= 0.0 {
            return Err("initial_temp must be positive".into());
        }
        if self.min_temp <= 0.0 {
            return Err("min_temp must be positive".into());
        }
        if self.min_temp >= self.initial_temp {
            return Err("min_temp must be less than initial_temp".into());
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if self.iterations_per_temp == 0 {
            return Err("iterations_per_temp must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temp - 100.0).abs() < 1e-10);
        assert!((config.cooling_rate - 0.95).abs() < 1e-10);
        assert!((config.min_temp - 0.01).abs() < 1e-12);
        assert_eq!(config.iterations_per_temp, 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temp(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = SaConfig::default()
            .with_initial_temp(10.0)
            .with_min_temp(20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        assert!(SaConfig::default().with_cooling_rate(1.5).validate().is_err());
        assert!(SaConfig::default().with_cooling_rate(1.0).validate().is_err());
        assert!(SaConfig::default().with_cooling_rate(0.0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_inner_iterations() {
        let config = SaConfig::default().with_iterations_per_temp(0);
        assert!(config.validate().is_err());
    }
}
