//! Batched distance computation
//!
//! Metric names are resolved here, so an unknown name surfaces as
//! [`Error::UnsupportedMetric`] on the first distance call rather than when a
//! scorer is built.

use crate::distance::distance as metric_distance;
use crate::metric::ProximityMetric;
use crate::stats::BatchStats;
use rayon::prelude::*;
use simsal_core::{FeatureVector, Result};

/// Batches at least this large are evaluated in parallel
pub const PARALLEL_BATCH_THRESHOLD: usize = 64;

/// Distances from `xa` to every vector of `xb` under the metric named `metric`
///
/// Fails with `UnsupportedMetric` for an unknown name and with
/// `InvalidDimension` when any vector of `xb` differs in length from `xa`.
pub fn cdist(metric: &str, xa: &FeatureVector, xb: &[FeatureVector]) -> Result<Vec<f64>> {
    let metric: ProximityMetric = metric.parse()?;
    cdist_with(metric, xa, xb)
}

/// Same as [`cdist`] for an already resolved metric
pub fn cdist_with(
    metric: ProximityMetric,
    xa: &FeatureVector,
    xb: &[FeatureVector],
) -> Result<Vec<f64>> {
    for v in xb {
        xa.check_dim(v)?;
    }

    let stats = BatchStats::for_metric(metric, xa, xb)?;
    let compute = |v: &FeatureVector| metric_distance(metric, xa.as_slice(), v.as_slice(), &stats);

    let distances = if xb.len() >= PARALLEL_BATCH_THRESHOLD {
        xb.par_iter().map(compute).collect()
    } else {
        xb.iter().map(compute).collect()
    };

    Ok(distances)
}

/// Distance between a single pair of vectors
pub fn pair_distance(metric: &str, u: &FeatureVector, v: &FeatureVector) -> Result<f64> {
    let metric: ProximityMetric = metric.parse()?;
    u.check_dim(v)?;

    let stats = BatchStats::for_metric(metric, u, std::slice::from_ref(v))?;
    Ok(metric_distance(metric, u.as_slice(), v.as_slice(), &stats))
}
