//! Scorer configuration
//!
//! The only knob is the proximity metric name. It is kept as a plain string so
//! that a record naming an unknown metric still loads; the name is checked on
//! the first distance computation.

use crate::metric::ProximityMetric;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use simsal_core::{Error, Result};

/// Serializable configuration of a [`crate::SimilarityScorer`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(deny_unknown_fields)]
pub struct ScorerConfig {
    /// Name of the metric used to compare feature vectors
    #[serde(default = "default_proximity_metric")]
    pub proximity_metric: String,
}

fn default_proximity_metric() -> String {
    ProximityMetric::default().name().to_string()
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            proximity_metric: default_proximity_metric(),
        }
    }
}

impl ScorerConfig {
    pub fn new(proximity_metric: impl Into<String>) -> Self {
        Self {
            proximity_metric: proximity_metric.into(),
        }
    }

    /// Resolve the configured name
    pub fn metric(&self) -> Result<ProximityMetric> {
        self.proximity_metric.parse()
    }

    /// The record as a JSON object keyed `"proximity_metric"`
    pub fn to_json(&self) -> Value {
        serde_json::json!({ "proximity_metric": self.proximity_metric })
    }

    pub fn from_json(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

impl From<ProximityMetric> for ScorerConfig {
    fn from(metric: ProximityMetric) -> Self {
        Self::new(metric.name())
    }
}
