//! Batch statistics for parameterized metrics
//!
//! `seuclidean` and `mahalanobis` estimate their parameters from every vector
//! taking part in one distance call: the query stacked on top of the batch.

use crate::metric::ProximityMetric;
use nalgebra::DMatrix;
use ndarray::{Array2, Axis};
use simsal_core::{Error, FeatureVector, Result};

/// Singular values smaller than this (relative to the largest) count as zero
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Parameters estimated from the compared vectors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchStats {
    /// Per-component sample variance, for `seuclidean`
    pub variance: Option<Vec<f64>>,
    /// Inverse sample covariance, for `mahalanobis`
    pub inv_covariance: Option<DMatrix<f64>>,
}

impl BatchStats {
    /// Estimate whatever `metric` needs from `[xa; xb...]`
    ///
    /// All vectors must already share the dimension of `xa`.
    pub fn for_metric(
        metric: ProximityMetric,
        xa: &FeatureVector,
        xb: &[FeatureVector],
    ) -> Result<Self> {
        if !metric.needs_batch_stats() {
            return Ok(Self::default());
        }

        let samples = stack(xa, xb);

        match metric {
            ProximityMetric::SEuclidean => Ok(Self {
                variance: Some(sample_variance(&samples)),
                inv_covariance: None,
            }),
            ProximityMetric::Mahalanobis => Ok(Self {
                variance: None,
                inv_covariance: Some(inverse_covariance(&samples)?),
            }),
            _ => Ok(Self::default()),
        }
    }
}

/// One row per vector, `xa` first
fn stack(xa: &FeatureVector, xb: &[FeatureVector]) -> Array2<f64> {
    let rows: Vec<&[f64]> = std::iter::once(xa)
        .chain(xb.iter())
        .map(FeatureVector::as_slice)
        .collect();
    Array2::from_shape_fn((rows.len(), xa.dim()), |(i, j)| rows[i][j])
}

/// Per-column variance with one delta degree of freedom
pub fn sample_variance(samples: &Array2<f64>) -> Vec<f64> {
    samples.var_axis(Axis(0), 1.0).to_vec()
}

/// Sample covariance matrix of the columns, one delta degree of freedom
pub fn sample_covariance(samples: &Array2<f64>) -> Array2<f64> {
    let (n, dim) = samples.dim();
    let Some(mean) = samples.mean_axis(Axis(0)) else {
        return Array2::from_elem((dim, dim), f64::NAN);
    };
    let centered = samples - &mean;
    centered.t().dot(&centered) / (n as f64 - 1.0)
}

/// Invert the sample covariance of `samples`
///
/// Fails with [`Error::SingularCovariance`] when the covariance is not finite
/// or is rank deficient.
pub fn inverse_covariance(samples: &Array2<f64>) -> Result<DMatrix<f64>> {
    let cov = sample_covariance(samples);
    let dim = cov.nrows();
    let singular = Error::SingularCovariance(dim);

    if cov.iter().any(|v| !v.is_finite()) {
        return Err(singular);
    }
    let cov = DMatrix::from_fn(dim, dim, |i, j| cov[[i, j]]);

    let sv = cov.singular_values();
    let largest = sv.max();
    if largest <= 0.0 || sv.min() <= SINGULAR_TOLERANCE * largest {
        return Err(singular);
    }

    cov.try_inverse().ok_or(singular)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_sample_variance() {
        let samples = array![[1.0, 2.0], [3.0, 2.0], [5.0, 2.0]];
        let var = sample_variance(&samples);
        assert!((var[0] - 4.0).abs() < 1e-12);
        assert_eq!(var[1], 0.0);
    }

    #[test]
    fn test_sample_covariance_symmetric() {
        let samples = array![[1.0, 2.0], [2.0, 4.0], [4.0, 5.0]];
        let cov = sample_covariance(&samples);
        assert_eq!(cov[[0, 1]], cov[[1, 0]]);
        assert!((cov[[0, 0]] - 7.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_covariance_identity_product() {
        let samples = array![[1.0, 2.0], [2.0, 4.0], [4.0, 5.0], [0.0, 1.0]];
        let inv = inverse_covariance(&samples).unwrap();
        let cov = sample_covariance(&samples);
        let cov = DMatrix::from_fn(2, 2, |i, j| cov[[i, j]]);

        let product = cov * inv;
        assert!((product - DMatrix::<f64>::identity(2, 2)).abs().max() < 1e-9);
    }

    #[test]
    fn test_inverse_covariance_singular() {
        // second column is twice the first
        let collinear = array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]];
        assert_eq!(
            inverse_covariance(&collinear).unwrap_err(),
            Error::SingularCovariance(2)
        );

        let constant = array![[1.0], [1.0], [1.0]];
        assert_eq!(
            inverse_covariance(&constant).unwrap_err(),
            Error::SingularCovariance(1)
        );

        let single = array![[1.0, 2.0]];
        assert_eq!(
            inverse_covariance(&single).unwrap_err(),
            Error::SingularCovariance(2)
        );
    }

    #[test]
    fn test_mahalanobis_needs_enough_samples() {
        let xa = FeatureVector::new(vec![0.0, 0.0]);
        let xb = vec![FeatureVector::new(vec![3.0, 4.0])];
        let err = BatchStats::for_metric(ProximityMetric::Mahalanobis, &xa, &xb).unwrap_err();
        assert_eq!(err, Error::SingularCovariance(2));
    }

    #[test]
    fn test_seuclidean_stats_from_stacked_vectors() {
        let xa = FeatureVector::new(vec![0.0, 1.0]);
        let xb = vec![FeatureVector::new(vec![2.0, 1.0])];
        let stats = BatchStats::for_metric(ProximityMetric::SEuclidean, &xa, &xb).unwrap();
        assert_eq!(stats.variance, Some(vec![2.0, 0.0]));
        assert!(stats.inv_covariance.is_none());
    }

    #[test]
    fn test_plain_metric_has_no_stats() {
        let xa = FeatureVector::new(vec![0.0]);
        let stats = BatchStats::for_metric(ProximityMetric::Euclidean, &xa, &[]).unwrap();
        assert_eq!(stats, BatchStats::default());
    }
}
