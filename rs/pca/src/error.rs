use std::error::Error;
use std::fmt::Display;

/// Input conditions under which PCA cannot run. Returned wrapped in `anyhow::Error`; callers that
/// need to tell the cases apart use `downcast_ref::<PcaError>()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PcaError {
    InsufficientData { required: usize, actual: usize },
    InconsistentDimension {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl Display for PcaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PcaError::InsufficientData { required, actual } => write!(
                f,
                "PCA needs at least {} samples, got {}",
                required, actual
            ),
            PcaError::InconsistentDimension {
                row,
                expected,
                actual,
            } => write!(
                f,
                "Sample {} has dimension {}, expected {}",
                row, actual, expected
            ),
        }
    }
}

impl Error for PcaError {}
