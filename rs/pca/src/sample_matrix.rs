use anyhow::Result;
use ndarray::{Array1, Array2, ArrayView2, Axis};

use crate::error::PcaError;

/// `n` samples of dimension `p`, one sample per row.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMatrix {
    data: Array2<f64>,
}

impl SampleMatrix {
    /// Builds the matrix from rows. All rows must have the length of the first one; a short or
    /// long row is rejected rather than padded or truncated.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let dimension = rows.first().map(|row| row.len()).unwrap_or(0);
        let mut elements = Vec::with_capacity(rows.len() * dimension);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dimension {
                return Err(PcaError::InconsistentDimension {
                    row: i,
                    expected: dimension,
                    actual: row.len(),
                }
                .into());
            }
            elements.extend_from_slice(row);
        }

        Ok(Self {
            data: Array2::from_shape_vec((rows.len(), dimension), elements)?,
        })
    }

    pub fn num_samples(&self) -> usize {
        self.data.nrows()
    }

    pub fn dimension(&self) -> usize {
        self.data.ncols()
    }

    pub fn data(&self) -> ArrayView2<f64> {
        self.data.view()
    }

    /// Per-dimension mean. All zeros when there are no samples.
    pub fn mean(&self) -> Array1<f64> {
        self.data
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(self.dimension()))
    }

    /// Samples with the per-dimension mean subtracted.
    pub fn centered(&self) -> Array2<f64> {
        &self.data - &self.mean()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_from_rows() {
        let samples =
            SampleMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 9.0]]).unwrap();

        assert_eq!(samples.num_samples(), 3);
        assert_eq!(samples.dimension(), 2);
        assert_eq!(samples.data()[[2, 1]], 9.0);
    }

    #[test]
    fn test_from_rows_inconsistent_dimension() {
        let result = SampleMatrix::from_rows(&[vec![1.0, 0.0], vec![1.0], vec![0.0, 1.0]]);

        let err = result.err().expect("mismatched rows should be rejected");
        assert_eq!(
            err.downcast_ref::<PcaError>(),
            Some(&PcaError::InconsistentDimension {
                row: 1,
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let samples = SampleMatrix::from_rows(&[]).unwrap();
        assert_eq!(samples.num_samples(), 0);
        assert_eq!(samples.dimension(), 0);
        assert_eq!(samples.mean().len(), 0);
    }

    #[test]
    fn test_mean() {
        let samples =
            SampleMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 9.0]]).unwrap();
        let mean = samples.mean();
        assert_abs_diff_eq!(mean[0], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mean[1], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_centered_columns_sum_to_zero() {
        let samples = SampleMatrix::from_rows(&[
            vec![1.0, 0.0, 1.0],
            vec![0.0, 1.0, 1.0],
            vec![1.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ])
        .unwrap();
        let centered = samples.centered();

        assert_eq!(centered.shape(), &[4, 3]);
        for column in centered.columns() {
            assert_abs_diff_eq!(column.sum(), 0.0, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(centered[[0, 0]], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(centered[[3, 2]], 0.25, epsilon = 1e-12);
    }
}
