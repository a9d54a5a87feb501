use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Euclidean norm of a vector.
pub fn l2_norm(v: ArrayView1<f64>) -> f64 {
    v.dot(&v).sqrt()
}

/// Scale `v` to unit length. Returns `None` if its norm is below `epsilon`, since dividing by a
/// (near) zero norm would only amplify rounding noise.
pub fn normalize(v: &Array1<f64>, epsilon: f64) -> Option<Array1<f64>> {
    let norm = l2_norm(v.view());
    if norm < epsilon {
        return None;
    }
    Some(v / norm)
}

/// `a * b^T`
pub fn outer_product(a: ArrayView1<f64>, b: ArrayView1<f64>) -> Array2<f64> {
    Array2::from_shape_fn((a.len(), b.len()), |(i, j)| a[i] * b[j])
}

/// `v^T * m * v`
pub fn quadratic_form(m: ArrayView2<f64>, v: ArrayView1<f64>) -> f64 {
    v.dot(&m.dot(&v))
}

pub fn trace(m: ArrayView2<f64>) -> f64 {
    m.diag().sum()
}

pub fn is_symmetric(m: ArrayView2<f64>, epsilon: f64) -> bool {
    if m.nrows() != m.ncols() {
        return false;
    }
    for i in 0..m.nrows() {
        for j in (i + 1)..m.ncols() {
            if (m[[i, j]] - m[[j, i]]).abs() > epsilon {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array2};

    use super::*;
    use crate::test_utils::generate_random_vector;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_l2_norm() {
        let v = array![3.0, 4.0];
        assert_abs_diff_eq!(l2_norm(v.view()), 5.0, epsilon = EPSILON);
    }

    #[test]
    fn test_normalize_random_vector() {
        let v = Array1::from(generate_random_vector(22, 7));
        let normalized = normalize(&v, 1e-10).expect("random vector should not be zero");
        assert_abs_diff_eq!(l2_norm(normalized.view()), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let v = Array1::<f64>::zeros(4);
        assert!(normalize(&v, 1e-10).is_none());

        let tiny = Array1::from_elem(4, 1e-12);
        assert!(normalize(&tiny, 1e-10).is_none());
    }

    #[test]
    fn test_outer_product() {
        let a = array![1.0, 2.0];
        let b = array![3.0, 4.0, 5.0];
        let result = outer_product(a.view(), b.view());
        assert_eq!(result, array![[3.0, 4.0, 5.0], [6.0, 8.0, 10.0]]);
    }

    #[test]
    fn test_quadratic_form_and_trace() {
        let m = array![[2.0, 1.0], [1.0, 3.0]];
        let v = array![1.0, -1.0];
        // [1, -1] * [[2, 1], [1, 3]] * [1, -1]^T = 2 - 1 - 1 + 3
        assert_abs_diff_eq!(quadratic_form(m.view(), v.view()), 3.0, epsilon = EPSILON);
        assert_abs_diff_eq!(trace(m.view()), 5.0, epsilon = EPSILON);
    }

    #[test]
    fn test_is_symmetric() {
        let symmetric = array![[1.0, 2.0], [2.0, 1.0]];
        let asymmetric = array![[1.0, 2.0], [0.0, 1.0]];
        let non_square = Array2::<f64>::zeros((2, 3));
        assert!(is_symmetric(symmetric.view(), EPSILON));
        assert!(!is_symmetric(asymmetric.view(), EPSILON));
        assert!(!is_symmetric(non_square.view(), EPSILON));
    }
}
