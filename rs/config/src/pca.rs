use serde::{Deserialize, Serialize};

/// Config for the PCA engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PcaConfig {
    /// Number of principal components to extract. The scatter plot only uses the first two.
    /// Default: 2
    pub num_components: usize,

    /// Upper bound on power iterations per component. The loop may stop earlier, either on
    /// convergence or when the iterated vector collapses.
    /// Default: 100
    pub max_iterations: usize,

    /// Vectors whose norm falls below this value are treated as numerically zero.
    /// Default: 1e-10
    pub norm_epsilon: f64,

    /// Stop iterating once `1 - |cos(angle)|` between successive vectors is below this value.
    /// `None` always runs `max_iterations`.
    /// Default: Some(1e-10)
    pub convergence_tolerance: Option<f64>,

    /// Minimum number of samples required before PCA is attempted. Values below
    /// `MIN_SAMPLES_FLOOR` are raised to it, see `required_samples`.
    /// Default: 3
    pub min_samples: usize,

    /// Seed for the random starting vectors. Same seed and same input give the same output.
    /// Default: 42
    pub seed: u64,
}

impl Default for PcaConfig {
    fn default() -> Self {
        Self {
            num_components: 2,
            max_iterations: 100,
            norm_epsilon: 1e-10,
            convergence_tolerance: Some(1e-10),
            min_samples: 3,
            seed: 42,
        }
    }
}

impl PcaConfig {
    /// Covariance over fewer samples can't separate two components.
    pub const MIN_SAMPLES_FLOOR: usize = 3;

    /// `min_samples`, but never below `MIN_SAMPLES_FLOOR`.
    pub fn required_samples(&self) -> usize {
        self.min_samples.max(Self::MIN_SAMPLES_FLOOR)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_convergence_tolerance(mut self, tolerance: Option<f64>) -> Self {
        self.convergence_tolerance = tolerance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_samples_has_a_floor() {
        let mut config = PcaConfig::default();
        assert_eq!(config.required_samples(), 3);

        for min_samples in 0..3 {
            config.min_samples = min_samples;
            assert_eq!(config.required_samples(), PcaConfig::MIN_SAMPLES_FLOOR);
        }

        config.min_samples = 10;
        assert_eq!(config.required_samples(), 10);
    }
}
