pub mod covariance;
pub mod error;
pub mod pca;
pub mod power_iteration;
pub mod sample_matrix;
