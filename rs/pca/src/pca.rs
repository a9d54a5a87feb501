use anyhow::Result;
use config::pca::PcaConfig;
use log::{debug, warn};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::covariance::CovarianceMatrix;
use crate::error::PcaError;
use crate::power_iteration::{EigenPair, PowerIteration};
use crate::sample_matrix::SampleMatrix;

pub struct PcaResult {
    /// Principal components, largest variance first. May hold fewer than requested.
    pub components: Vec<EigenPair>,

    /// `n x components.len()`, row `i` is sample `i` projected onto the components.
    pub projections: Array2<f64>,

    /// Fraction (0..=1) of the total variance captured by each component.
    pub explained_variance: Vec<f64>,

    /// Trace of the covariance matrix before any deflation.
    pub total_variance: f64,

    pub mean: Array1<f64>,
}

impl PcaResult {
    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    pub fn num_samples(&self) -> usize {
        self.projections.nrows()
    }

    /// `(x, y)` of sample `i`, with 0 for any component that wasn't found.
    pub fn point(&self, i: usize) -> (f64, f64) {
        let row = self.projections.row(i);
        let x = row.get(0).copied().unwrap_or(0.0);
        let y = row.get(1).copied().unwrap_or(0.0);
        (x, y)
    }

    pub fn points_2d(&self) -> Vec<(f64, f64)> {
        (0..self.num_samples()).map(|i| self.point(i)).collect()
    }
}

/// Principal component analysis on dense samples: center, covariance, power iteration with
/// deflation, projection.
///
/// The engine holds no mutable state. Every call to `fit` seeds its own RNG from the config, so
/// the same input always gives the same output and concurrent calls don't interact.
pub struct PcaEngine {
    config: PcaConfig,
}

impl PcaEngine {
    pub fn new(config: PcaConfig) -> Self {
        Self { config }
    }

    pub fn fit(&self, samples: &SampleMatrix) -> Result<PcaResult> {
        let num_samples = samples.num_samples();
        let required = self.config.required_samples();
        if num_samples < required {
            return Err(PcaError::InsufficientData {
                required,
                actual: num_samples,
            }
            .into());
        }

        let mean = samples.mean();
        let centered = samples.centered();
        let covariance = CovarianceMatrix::from_centered(centered.view());
        let total_variance = covariance.trace();

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let components = PowerIteration::new(&self.config).top_k(
            &covariance,
            self.config.num_components,
            &mut rng,
        );
        if components.len() < self.config.num_components && samples.dimension() > 0 {
            warn!(
                "Only {} of {} principal components could be extracted",
                components.len(),
                self.config.num_components
            );
        }

        // p x k, one component per column
        let basis = Array2::from_shape_fn((samples.dimension(), components.len()), |(i, j)| {
            components[j].vector[i]
        });
        let projections = centered.dot(&basis);

        let explained_variance = self.explained_variance(&covariance, &components, total_variance);
        debug!(
            "PCA on {} samples of dimension {}: total variance {:.6}, explained {:?}",
            num_samples,
            samples.dimension(),
            total_variance,
            explained_variance
        );

        Ok(PcaResult {
            components,
            projections,
            explained_variance,
            total_variance,
            mean,
        })
    }

    /// `v^T C v / trace(C)` against the covariance before deflation. Zero total variance (all
    /// samples identical) yields zeros instead of NaN.
    fn explained_variance(
        &self,
        covariance: &CovarianceMatrix,
        components: &[EigenPair],
        total_variance: f64,
    ) -> Vec<f64> {
        if total_variance < self.config.norm_epsilon {
            if !components.is_empty() {
                warn!("Total variance is zero, all samples are identical");
            }
            return vec![0.0; components.len()];
        }
        components
            .iter()
            .map(|pair| {
                (covariance.quadratic_form(pair.vector.view()) / total_variance).clamp(0.0, 1.0)
            })
            .collect()
    }
}

/// Convenience wrapper over `SampleMatrix::from_rows` and `PcaEngine::fit`.
pub fn compute_pca(rows: &[Vec<f64>], config: &PcaConfig) -> Result<PcaResult> {
    let samples = SampleMatrix::from_rows(rows)?;
    PcaEngine::new(config.clone()).fit(&samples)
}
