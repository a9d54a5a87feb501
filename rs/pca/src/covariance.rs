use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use utils::linalg::{outer_product, quadratic_form, trace};

/// Symmetric `p x p` sample covariance matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct CovarianceMatrix {
    matrix: Array2<f64>,
}

impl CovarianceMatrix {
    /// Unbiased sample covariance of already centered data (rows are samples). Only the upper
    /// triangle is computed and mirrored, so the result is exactly symmetric.
    /// With fewer than 2 samples the covariance is undefined and the zero matrix is returned.
    pub fn from_centered(centered: ArrayView2<f64>) -> Self {
        let num_samples = centered.nrows();
        let dimension = centered.ncols();
        let mut matrix = Array2::<f64>::zeros((dimension, dimension));
        if num_samples < 2 {
            return Self { matrix };
        }

        let denominator = (num_samples - 1) as f64;
        for i in 0..dimension {
            let column_i = centered.column(i);
            for j in i..dimension {
                let value = column_i.dot(&centered.column(j)) / denominator;
                matrix[[i, j]] = value;
                matrix[[j, i]] = value;
            }
        }
        Self { matrix }
    }

    pub fn dimension(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn matrix(&self) -> ArrayView2<f64> {
        self.matrix.view()
    }

    /// Sum of per-dimension variances.
    pub fn trace(&self) -> f64 {
        trace(self.matrix.view())
    }

    pub fn multiply(&self, v: ArrayView1<f64>) -> Array1<f64> {
        self.matrix.dot(&v)
    }

    /// `v^T * C * v`. For a unit eigenvector this is its eigenvalue.
    pub fn quadratic_form(&self, v: ArrayView1<f64>) -> f64 {
        quadratic_form(self.matrix.view(), v)
    }

    /// Removes the variance along unit vector `v`: `C <- C - eigenvalue * v * v^T`.
    pub fn deflate(&mut self, v: ArrayView1<f64>, eigenvalue: f64) {
        self.matrix.scaled_add(-eigenvalue, &outer_product(v, v));
    }
}
