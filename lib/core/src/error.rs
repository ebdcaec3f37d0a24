use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unsupported proximity metric: {0}")]
    UnsupportedMetric(String),

    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Number of perturbation masks ({masks}) and perturbed descriptors ({descriptors}) do not match")]
    CardinalityMismatch { descriptors: usize, masks: usize },

    #[error("Number of weights ({weights}) and masks ({masks}) do not match")]
    WeightCount { weights: usize, masks: usize },

    #[error("Invalid mask shape: expected {expected:?}, got {actual:?}")]
    MaskShape {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Singular covariance matrix: mahalanobis needs more samples than dimensions ({0})")]
    SingularCovariance(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
