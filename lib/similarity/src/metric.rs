//! Proximity metric names
//!
//! The set of supported metrics is closed. Each variant dispatches to a plain
//! distance function in [`crate::distance`].

use serde::{Deserialize, Serialize};
use simsal_core::Error;
use std::fmt;
use std::str::FromStr;

/// A named distance function over two feature vectors of equal dimension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProximityMetric {
    BrayCurtis,
    Canberra,
    Chebyshev,
    CityBlock,
    Correlation,
    Cosine,
    Dice,
    #[default]
    Euclidean,
    Hamming,
    Jaccard,
    JensenShannon,
    Kulsinski,
    Mahalanobis,
    Matching,
    Minkowski,
    RogersTanimoto,
    RussellRao,
    SEuclidean,
    SokalMichener,
    SokalSneath,
    SqEuclidean,
    WMinkowski,
    Yule,
}

impl ProximityMetric {
    /// Every supported metric, in alphabetical order of name
    pub const ALL: [ProximityMetric; 23] = [
        Self::BrayCurtis,
        Self::Canberra,
        Self::Chebyshev,
        Self::CityBlock,
        Self::Correlation,
        Self::Cosine,
        Self::Dice,
        Self::Euclidean,
        Self::Hamming,
        Self::Jaccard,
        Self::JensenShannon,
        Self::Kulsinski,
        Self::Mahalanobis,
        Self::Matching,
        Self::Minkowski,
        Self::RogersTanimoto,
        Self::RussellRao,
        Self::SEuclidean,
        Self::SokalMichener,
        Self::SokalSneath,
        Self::SqEuclidean,
        Self::WMinkowski,
        Self::Yule,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::BrayCurtis => "braycurtis",
            Self::Canberra => "canberra",
            Self::Chebyshev => "chebyshev",
            Self::CityBlock => "cityblock",
            Self::Correlation => "correlation",
            Self::Cosine => "cosine",
            Self::Dice => "dice",
            Self::Euclidean => "euclidean",
            Self::Hamming => "hamming",
            Self::Jaccard => "jaccard",
            Self::JensenShannon => "jensenshannon",
            Self::Kulsinski => "kulsinski",
            Self::Mahalanobis => "mahalanobis",
            Self::Matching => "matching",
            Self::Minkowski => "minkowski",
            Self::RogersTanimoto => "rogerstanimoto",
            Self::RussellRao => "russellrao",
            Self::SEuclidean => "seuclidean",
            Self::SokalMichener => "sokalmichener",
            Self::SokalSneath => "sokalsneath",
            Self::SqEuclidean => "sqeuclidean",
            Self::WMinkowski => "wminkowski",
            Self::Yule => "yule",
        }
    }

    /// Metrics whose parameters are estimated from the compared batch
    pub fn needs_batch_stats(&self) -> bool {
        matches!(self, Self::SEuclidean | Self::Mahalanobis)
    }
}

impl FromStr for ProximityMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnsupportedMetric(s.to_string()))
    }
}

impl fmt::Display for ProximityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
