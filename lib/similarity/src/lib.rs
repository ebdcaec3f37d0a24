//! # SimSal Similarity
//!
//! Proximity metrics and the similarity scorer.
//!
//! This crate turns feature-space distances between a reference image pair and
//! perturbed variants of the second image into a saliency map.
//!
//! ## Features
//!
//! - **Proximity Metrics**: A closed set of 23 named distance functions
//! - **Batched Distances**: One query against many descriptors, parallel for large batches
//! - **Similarity Scoring**: Divergence from the unperturbed baseline, projected through masks
//! - **Configuration**: A serializable record that rebuilds an identical scorer
//!
//! ## Example
//!
//! ```rust
//! use simsal_similarity::{SimilarityScorer, ScorerConfig};
//! use simsal_core::{FeatureVector, PerturbationMaskSet};
//! use ndarray::array;
//!
//! let masks = PerturbationMaskSet::from_grids(&[
//!     array![[1.0, 1.0], [0.0, 0.0]],
//!     array![[0.0, 0.0], [1.0, 1.0]],
//! ]).unwrap();
//!
//! let scorer = SimilarityScorer::from_config(ScorerConfig::new("euclidean"));
//! let map = scorer.score(
//!     &FeatureVector::new(vec![0.0, 0.0]),
//!     &FeatureVector::new(vec![3.0, 4.0]),
//!     &[FeatureVector::new(vec![4.0, 5.0]), FeatureVector::new(vec![0.0, 0.0])],
//!     &masks,
//! ).unwrap();
//!
//! assert_eq!(map.get(0, 0), Some(1.0));
//! assert_eq!(map.get(1, 1), Some(0.0));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Descriptors │────>│    cdist    │────>│ Divergence  │
//! │ (ref, pert) │     │  (metric)   │     │ (clipped)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//! ┌─────────────┐     ┌─────────────┐            │
//! │   Masks     │────>│ Aggregator  │<───────────┘
//! │  (N x HxW)  │     │ (per pixel) │
//! └─────────────┘     └─────────────┘
//!                            │
//!                     ┌─────────────┐
//!                     │  Normalize  │
//!                     │   [0, 1]    │
//!                     └─────────────┘
//! ```

pub mod cdist;
pub mod config;
pub mod distance;
pub mod metric;
pub mod scorer;
pub mod stats;

pub use cdist::{cdist, cdist_with, pair_distance, PARALLEL_BATCH_THRESHOLD};
pub use config::ScorerConfig;
pub use metric::ProximityMetric;
pub use scorer::SimilarityScorer;
pub use stats::BatchStats;
