//! JSON request and report formats used by the `simsal` binary

use anyhow::Context;
use serde::{Deserialize, Serialize};
use simsal_core::{FeatureVector, PerturbationMaskSet, Result, SaliencyMap};
use simsal_similarity::{ScorerConfig, SimilarityScorer};
use std::path::Path;

/// Everything one `score` call needs, as read from disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoreRequest {
    pub ref_descr_1: FeatureVector,
    pub ref_descr_2: FeatureVector,
    pub perturbed_descrs: Vec<FeatureVector>,
    /// One `H x W` grid per perturbed descriptor
    pub perturbed_masks: Vec<Vec<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ScorerConfig>,
}

impl ScoreRequest {
    pub fn from_json_str(s: &str) -> anyhow::Result<Self> {
        serde_json::from_str(s).context("Failed to parse score request")
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {:?}", path))?;
        Self::from_json_str(&text).with_context(|| format!("Invalid request file {:?}", path))
    }

    /// Configuration from the request, or the default when absent
    pub fn config(&self) -> ScorerConfig {
        self.config.clone().unwrap_or_default()
    }

    pub fn masks(&self) -> Result<PerturbationMaskSet> {
        PerturbationMaskSet::from_rows(&self.perturbed_masks)
    }

    /// Score the request with `scorer`
    pub fn run(&self, scorer: &SimilarityScorer) -> Result<SaliencyMap> {
        let masks = self.masks()?;
        scorer.score(
            &self.ref_descr_1,
            &self.ref_descr_2,
            &self.perturbed_descrs,
            &masks,
        )
    }
}

/// Serialized saliency map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaliencyReport {
    pub config: ScorerConfig,
    /// `[H, W]`
    pub shape: [usize; 2],
    pub saliency: Vec<Vec<f64>>,
}

impl SaliencyReport {
    pub fn new(config: ScorerConfig, map: &SaliencyMap) -> Self {
        let (h, w) = map.shape();
        Self {
            config,
            shape: [h, w],
            saliency: map.to_rows(),
        }
    }
}
