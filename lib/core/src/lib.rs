//! # SimSal Core
//!
//! Core library for the SimSal saliency engine.
//!
//! This crate provides the data structures and array routines the scorer is
//! built from:
//!
//! - [`FeatureVector`] - Image descriptor in embedding space
//! - [`PerturbationMaskSet`] - Stack of perturbation masks sharing one shape
//! - [`RegionWeightAggregator`] - Projects per-mask weights onto pixels
//! - [`normalize`] - Min-max rescaling into `[0, 1]`
//! - [`SaliencyMap`] - The final heatmap
//!
//! ## Example
//!
//! ```rust
//! use simsal_core::{PerturbationMaskSet, RegionWeightAggregator, normalize};
//! use ndarray::array;
//!
//! let masks = PerturbationMaskSet::from_grids(&[
//!     array![[1.0, 1.0], [0.0, 0.0]],
//!     array![[0.0, 0.0], [1.0, 1.0]],
//! ]).unwrap();
//!
//! let raw = RegionWeightAggregator::default().aggregate(&[2.0, 0.0], &masks).unwrap();
//! let heatmap = normalize(raw.view());
//! assert_eq!(heatmap, array![[1.0, 1.0], [0.0, 0.0]]);
//! ```

pub mod aggregate;
pub mod error;
pub mod mask;
pub mod normalize;
pub mod saliency;
pub mod vector;

pub use aggregate::RegionWeightAggregator;
pub use error::{Error, Result};
pub use mask::{binarize, PerturbationMaskSet};
pub use normalize::{nan_to_zero, normalize};
pub use saliency::SaliencyMap;
pub use vector::FeatureVector;
