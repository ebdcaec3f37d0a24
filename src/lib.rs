//! # SimSal
//!
//! Similarity-based saliency maps for image pairs.
//!
//! SimSal explains why two images look alike to a feature extractor. Given the
//! descriptors of a reference pair, descriptors of perturbed variants of the
//! second image and the masks that produced them, it scores every pixel by how
//! much perturbing it pushed the pair apart in feature space.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install simsal
//! simsal score --input request.json --output saliency.json --metric cosine
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use simsal::prelude::*;
//! use ndarray::array;
//!
//! let masks = PerturbationMaskSet::from_grids(&[
//!     array![[1.0, 1.0], [0.0, 0.0]],
//!     array![[0.0, 0.0], [1.0, 1.0]],
//! ]).unwrap();
//!
//! let scorer = SimilarityScorer::with_metric(ProximityMetric::Euclidean);
//! let map = scorer.score(
//!     &FeatureVector::new(vec![0.0, 0.0]),
//!     &FeatureVector::new(vec![3.0, 4.0]),
//!     &[FeatureVector::new(vec![4.0, 5.0]), FeatureVector::new(vec![0.0, 0.0])],
//!     &masks,
//! ).unwrap();
//!
//! assert_eq!(map.shape(), (2, 2));
//! ```
//!
//! ## Crate Structure
//!
//! SimSal is composed of several crates:
//!
//! - [`simsal-core`](https://docs.rs/simsal-core) - Feature vectors, masks, region weighting, normalization
//! - [`simsal-similarity`](https://docs.rs/simsal-similarity) - Proximity metrics and the scorer

pub mod request;

// Re-export core types
pub use simsal_core::{
    binarize, nan_to_zero, normalize, Error, FeatureVector, PerturbationMaskSet,
    RegionWeightAggregator, Result, SaliencyMap,
};

// Re-export similarity
pub use simsal_similarity::{
    cdist, pair_distance, ProximityMetric, ScorerConfig, SimilarityScorer,
};

pub use request::{SaliencyReport, ScoreRequest};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Error, FeatureVector, PerturbationMaskSet, ProximityMetric, Result, SaliencyMap,
        ScorerConfig, SimilarityScorer,
    };
}
