//! Similarity scoring
//!
//! Turns the change in feature-space distance caused by each perturbation into
//! a per-pixel saliency map.
//!
//! ```text
//! baseline     = d(ref_1, ref_2)
//! perturbed_i  = d(ref_1, perturbed_i)
//! divergence_i = max(perturbed_i - baseline, 0)
//! heatmap      = normalize(aggregate(divergence, masks))
//! ```

use crate::cdist::{cdist, pair_distance};
use crate::config::ScorerConfig;
use crate::metric::ProximityMetric;
use simsal_core::{
    nan_to_zero, normalize, Error, FeatureVector, PerturbationMaskSet, RegionWeightAggregator,
    Result, SaliencyMap,
};
use tracing::{debug, trace, warn};

/// Saliency generator driven by proximity in feature space
///
/// Holds nothing but the configured metric name, so one scorer can be shared
/// across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityScorer {
    proximity_metric: String,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::from_config(ScorerConfig::default())
    }
}

impl SimilarityScorer {
    /// Create a scorer for the metric named `proximity_metric`
    ///
    /// The name is not checked here; an unknown name fails the first call to
    /// [`score`](Self::score).
    pub fn new(proximity_metric: impl Into<String>) -> Self {
        Self {
            proximity_metric: proximity_metric.into(),
        }
    }

    pub fn with_metric(metric: ProximityMetric) -> Self {
        Self::new(metric.name())
    }

    pub fn from_config(config: ScorerConfig) -> Self {
        Self::new(config.proximity_metric)
    }

    pub fn proximity_metric(&self) -> &str {
        &self.proximity_metric
    }

    pub fn export_config(&self) -> ScorerConfig {
        ScorerConfig::new(self.proximity_metric.clone())
    }

    /// Compute the saliency map for one reference pair
    ///
    /// # Arguments
    /// * `ref_descr_1` - Descriptor of the first reference image
    /// * `ref_descr_2` - Descriptor of the second reference image
    /// * `perturbed_descrs` - Descriptors of perturbed variants of image 2
    /// * `perturbed_masks` - Masks that produced each variant, index-aligned
    ///
    /// # Returns
    /// A map with the masks' spatial shape and every cell in `[0, 1]`
    pub fn score(
        &self,
        ref_descr_1: &FeatureVector,
        ref_descr_2: &FeatureVector,
        perturbed_descrs: &[FeatureVector],
        perturbed_masks: &PerturbationMaskSet,
    ) -> Result<SaliencyMap> {
        let baseline = pair_distance(&self.proximity_metric, ref_descr_1, ref_descr_2)?;
        let perturbed = cdist(&self.proximity_metric, ref_descr_1, perturbed_descrs)?;

        if perturbed.len() != perturbed_masks.len() {
            return Err(Error::CardinalityMismatch {
                descriptors: perturbed.len(),
                masks: perturbed_masks.len(),
            });
        }

        debug!(
            metric = %self.proximity_metric,
            baseline,
            perturbations = perturbed.len(),
            shape = ?perturbed_masks.shape(),
            "scoring perturbations"
        );

        let divergence: Vec<f64> = perturbed.iter().map(|&d| clip_divergence(d - baseline)).collect();
        trace!(?divergence, "divergence from baseline");

        let mut raw = RegionWeightAggregator::default().aggregate(&divergence, perturbed_masks)?;

        let replaced = nan_to_zero(&mut raw);
        if replaced > 0 {
            warn!(
                metric = %self.proximity_metric,
                cells = replaced,
                "metric undefined for some inputs, zeroing NaN cells"
            );
        }

        Ok(SaliencyMap::new(normalize(raw.view())))
    }
}

/// Floor a distance increase at zero, leaving NaN in place
#[inline]
fn clip_divergence(diff: f64) -> f64 {
    if diff.is_nan() {
        diff
    } else {
        diff.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn fv(data: &[f64]) -> FeatureVector {
        FeatureVector::from_slice(data)
    }

    fn row_masks() -> PerturbationMaskSet {
        PerturbationMaskSet::from_grids(&[
            array![[1.0, 1.0], [0.0, 0.0]],
            array![[0.0, 0.0], [1.0, 1.0]],
        ])
        .unwrap()
    }

    #[test]
    fn test_top_row_salient() {
        let scorer = SimilarityScorer::default();
        let map = scorer
            .score(
                &fv(&[0.0, 0.0]),
                &fv(&[3.0, 4.0]),
                &[fv(&[4.0, 5.0]), fv(&[0.0, 0.0])],
                &row_masks(),
            )
            .unwrap();

        assert_eq!(map.values(), &array![[1.0, 1.0], [0.0, 0.0]]);
    }

    #[test]
    fn test_cardinality_mismatch() {
        let scorer = SimilarityScorer::default();
        let err = scorer
            .score(
                &fv(&[0.0, 0.0]),
                &fv(&[3.0, 4.0]),
                &[fv(&[4.0, 5.0]), fv(&[0.0, 0.0]), fv(&[1.0, 1.0])],
                &row_masks(),
            )
            .unwrap_err();

        assert_eq!(err, Error::CardinalityMismatch { descriptors: 3, masks: 2 });
    }

    #[test]
    fn test_unsupported_metric_deferred() {
        let scorer = SimilarityScorer::new("manhattan");
        assert_eq!(scorer.proximity_metric(), "manhattan");

        let err = scorer
            .score(&fv(&[0.0]), &fv(&[1.0]), &[fv(&[2.0])], &row_masks())
            .unwrap_err();
        assert_eq!(err, Error::UnsupportedMetric("manhattan".to_string()));
    }

    #[test]
    fn test_reference_dimension_mismatch() {
        let err = SimilarityScorer::default()
            .score(&fv(&[0.0, 0.0]), &fv(&[1.0]), &[], &row_masks())
            .unwrap_err();
        assert_eq!(err, Error::InvalidDimension { expected: 2, actual: 1 });
    }

    #[test]
    fn test_nan_divergence_zeroed() {
        // cosine against a zero vector is undefined
        let scorer = SimilarityScorer::with_metric(ProximityMetric::Cosine);
        let map = scorer
            .score(
                &fv(&[1.0, 0.0]),
                &fv(&[1.0, 0.1]),
                &[fv(&[0.0, 0.0]), fv(&[0.0, 1.0])],
                &row_masks(),
            )
            .unwrap();

        assert_eq!(map.values(), &array![[0.0, 0.0], [1.0, 1.0]]);
    }

    #[test]
    fn test_clip_divergence() {
        assert_eq!(clip_divergence(-2.0), 0.0);
        assert_eq!(clip_divergence(1.5), 1.5);
        assert!(clip_divergence(f64::NAN).is_nan());
    }

    #[test]
    fn test_export_config() {
        let scorer = SimilarityScorer::new("cosine");
        let config = scorer.export_config();
        assert_eq!(config.proximity_metric, "cosine");
        assert_eq!(SimilarityScorer::from_config(config), scorer);
    }
}
