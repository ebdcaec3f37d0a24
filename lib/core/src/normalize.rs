//! Range normalization for saliency grids

use ndarray::{Array2, ArrayView2};

/// Ranges below this are treated as zero, leaving values shifted but unscaled
const MIN_RANGE: f64 = 10.0 * f64::EPSILON;

/// Replace NaN with 0 and infinities with the largest finite values
pub fn nan_to_zero(values: &mut Array2<f64>) -> usize {
    let mut replaced = 0;
    values.map_inplace(|v| {
        if v.is_nan() {
            *v = 0.0;
            replaced += 1;
        } else if *v == f64::INFINITY {
            *v = f64::MAX;
        } else if *v == f64::NEG_INFINITY {
            *v = f64::MIN;
        }
    });
    replaced
}

/// Rescale a grid linearly so its minimum maps to 0 and its maximum to 1
///
/// A constant grid maps to all zeros. Input must not contain NaN.
pub fn normalize(values: ArrayView2<'_, f64>) -> Array2<f64> {
    if values.is_empty() {
        return values.to_owned();
    }

    let min = values.fold(f64::INFINITY, |acc, &v| acc.min(v));
    let max = values.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));

    let mut range = max - min;
    if range < MIN_RANGE {
        range = 1.0;
    }

    values.mapv(|v| (v - min) / range)
}
