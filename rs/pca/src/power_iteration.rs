use config::pca::PcaConfig;
use log::{debug, warn};
use ndarray::Array1;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;
use utils::linalg::normalize;

use crate::covariance::CovarianceMatrix;

/// A unit eigenvector with its eigenvalue.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenPair {
    pub vector: Array1<f64>,
    pub eigenvalue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationOutcome {
    /// Successive vectors agreed within the convergence tolerance.
    Converged { iterations: usize },
    /// `C * v` fell below the norm epsilon, `v` is left at its last value.
    Collapsed { iterations: usize },
    /// Ran the whole iteration budget.
    Exhausted { iterations: usize },
}

/// Top-k eigen decomposition of a covariance matrix by power iteration with deflation.
///
/// This is an approximation: each component gets a fixed iteration budget, optionally cut short
/// by an angle based convergence check. When two eigenvalues are (nearly) equal the directions
/// returned are orthogonal but otherwise arbitrary within their eigenspace.
pub struct PowerIteration {
    max_iterations: usize,
    norm_epsilon: f64,
    convergence_tolerance: Option<f64>,
}

impl PowerIteration {
    pub fn new(config: &PcaConfig) -> Self {
        Self {
            max_iterations: config.max_iterations,
            norm_epsilon: config.norm_epsilon,
            convergence_tolerance: config.convergence_tolerance,
        }
    }

    /// Finds up to `k` eigen pairs, in order of decreasing eigenvalue. The input matrix is left
    /// untouched, deflation happens on a copy.
    ///
    /// Fewer than `k` pairs are returned when a candidate vector vanishes after being
    /// orthogonalized against the ones already found, i.e. the data has fewer independent
    /// directions than requested.
    pub fn top_k<R: Rng>(
        &self,
        covariance: &CovarianceMatrix,
        k: usize,
        rng: &mut R,
    ) -> Vec<EigenPair> {
        let dimension = covariance.dimension();
        if dimension == 0 {
            return vec![];
        }

        let mut deflated = covariance.clone();
        let mut pairs: Vec<EigenPair> = Vec::with_capacity(k);
        for component in 0..k {
            let mut v = self.random_unit_vector(dimension, rng);
            let outcome = self.iterate(&deflated, &mut v);

            let v = match self.orthogonalize(v, &pairs) {
                Some(v) => orient(v),
                None => {
                    warn!(
                        "Component {} vanished after orthogonalization, dropping it",
                        component
                    );
                    continue;
                }
            };

            let eigenvalue = deflated.quadratic_form(v.view());
            debug!(
                "Component {}: eigenvalue {:.6}, {:?}",
                component, eigenvalue, outcome
            );
            deflated.deflate(v.view(), eigenvalue);
            pairs.push(EigenPair {
                vector: v,
                eigenvalue,
            });
        }
        pairs
    }

    /// Repeatedly applies `matrix` to `v` and renormalizes.
    pub fn iterate(&self, matrix: &CovarianceMatrix, v: &mut Array1<f64>) -> IterationOutcome {
        for iteration in 0..self.max_iterations {
            let next = match normalize(&matrix.multiply(v.view()), self.norm_epsilon) {
                Some(next) => next,
                None => {
                    return IterationOutcome::Collapsed {
                        iterations: iteration,
                    }
                }
            };

            // Sign flips between iterations are fine (negative eigenvalues after deflation).
            let converged = match self.convergence_tolerance {
                Some(tolerance) => 1.0 - next.dot(&*v).abs() < tolerance,
                None => false,
            };
            *v = next;
            if converged {
                return IterationOutcome::Converged {
                    iterations: iteration + 1,
                };
            }
        }
        IterationOutcome::Exhausted {
            iterations: self.max_iterations,
        }
    }

    /// Gram-Schmidt step against the vectors already found, then renormalize.
    fn orthogonalize(&self, mut v: Array1<f64>, found: &[EigenPair]) -> Option<Array1<f64>> {
        for pair in found {
            let projection = v.dot(&pair.vector);
            v.scaled_add(-projection, &pair.vector);
        }
        normalize(&v, self.norm_epsilon)
    }

    fn random_unit_vector<R: Rng>(&self, dimension: usize, rng: &mut R) -> Array1<f64> {
        let v = Array1::random_using(dimension, Uniform::new(-1.0, 1.0), rng);
        normalize(&v, self.norm_epsilon)
            .unwrap_or_else(|| Array1::from_elem(dimension, 1.0 / (dimension as f64).sqrt()))
    }
}

/// Flips `v` so that its largest component (first one on ties) is positive. Eigenvectors are only
/// defined up to sign, this keeps plot axes from flipping between runs.
fn orient(v: Array1<f64>) -> Array1<f64> {
    let max_abs = v.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    let pivot = v
        .iter()
        .find(|x| x.abs() >= max_abs * (1.0 - 1e-9))
        .copied()
        .unwrap_or(0.0);
    if pivot < 0.0 {
        -v
    } else {
        v
    }
}
