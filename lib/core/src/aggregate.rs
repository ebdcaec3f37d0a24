//! Region weighting
//!
//! Projects one scalar weight per perturbation onto the pixel grid shared by the
//! perturbation masks.

use crate::mask::{binarize, PerturbationMaskSet};
use crate::{Error, Result};
use ndarray::{Array2, Zip};

/// Spreads per-mask weights over the pixels each mask covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionWeightAggregator {
    /// Treat inactive mask cells as the perturbed region
    pub invert_masks: bool,
    /// Divide each pixel by the number of masks covering it
    pub normalize: bool,
}

impl Default for RegionWeightAggregator {
    fn default() -> Self {
        Self {
            invert_masks: false,
            normalize: true,
        }
    }
}

impl RegionWeightAggregator {
    pub fn new(invert_masks: bool, normalize: bool) -> Self {
        Self {
            invert_masks,
            normalize,
        }
    }

    /// Combine `weights[i]` over the active cells of mask `i`
    ///
    /// Pixels covered by no mask get 0. A NaN weight only reaches the pixels
    /// of its own mask.
    pub fn aggregate(&self, weights: &[f64], masks: &PerturbationMaskSet) -> Result<Array2<f64>> {
        if weights.len() != masks.len() {
            return Err(Error::WeightCount {
                weights: weights.len(),
                masks: masks.len(),
            });
        }

        let shape = masks.shape();
        let mut weighted = Array2::<f64>::zeros(shape);
        let mut coverage = Array2::<f64>::zeros(shape);

        for (&weight, mask) in weights.iter().zip(masks.iter()) {
            let active = binarize(mask);
            let invert = self.invert_masks;

            Zip::from(&mut weighted)
                .and(&mut coverage)
                .and(&active)
                .for_each(|acc, count, &on| {
                    if on != invert {
                        *acc += weight;
                        *count += 1.0;
                    }
                });
        }

        if self.normalize {
            Zip::from(&mut weighted)
                .and(&coverage)
                .for_each(|acc, &count| {
                    if count > 0.0 {
                        *acc /= count;
                    }
                });
        }

        Ok(weighted)
    }
}
