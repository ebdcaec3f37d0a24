//! Perturbation masks
//!
//! A mask set holds one 2D grid per perturbed sample, stacked into an
//! `N x H x W` array. All masks share the spatial shape of the reference image.
//! A cell is "active" when the corresponding pixel was perturbed for that sample.

use crate::{Error, Result};
use ndarray::{Array2, Array3, ArrayView2, Axis};

/// Ordered set of perturbation masks sharing one spatial shape
#[derive(Debug, Clone, PartialEq)]
pub struct PerturbationMaskSet {
    masks: Array3<f64>,
}

impl PerturbationMaskSet {
    /// Wrap an `N x H x W` array of (possibly real-valued) masks
    pub fn new(masks: Array3<f64>) -> Self {
        Self { masks }
    }

    /// Stack individual grids into a mask set
    ///
    /// Fails with [`Error::MaskShape`] if the grids do not all share the
    /// shape of the first one.
    pub fn from_grids(grids: &[Array2<f64>]) -> Result<Self> {
        let Some(first) = grids.first() else {
            return Ok(Self::new(Array3::zeros((0, 0, 0))));
        };
        let expected = first.dim();

        let mut masks = Array3::zeros((grids.len(), expected.0, expected.1));
        for (i, grid) in grids.iter().enumerate() {
            if grid.dim() != expected {
                return Err(Error::MaskShape {
                    expected,
                    actual: grid.dim(),
                });
            }
            masks.index_axis_mut(Axis(0), i).assign(grid);
        }

        Ok(Self::new(masks))
    }

    /// Build a mask set from nested rows, as decoded from JSON
    pub fn from_rows(rows: &[Vec<Vec<f64>>]) -> Result<Self> {
        let grids = rows
            .iter()
            .map(|grid| grid_from_rows(grid))
            .collect::<Result<Vec<_>>>()?;
        Self::from_grids(&grids)
    }

    /// Number of masks (N)
    pub fn len(&self) -> usize {
        self.masks.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Spatial shape `(H, W)` shared by every mask
    pub fn shape(&self) -> (usize, usize) {
        let (_, h, w) = self.masks.dim();
        (h, w)
    }

    /// View of the `i`-th mask
    pub fn mask(&self, i: usize) -> Option<ArrayView2<'_, f64>> {
        (i < self.len()).then(|| self.masks.index_axis(Axis(0), i))
    }

    pub fn iter(&self) -> impl Iterator<Item = ArrayView2<'_, f64>> {
        self.masks.axis_iter(Axis(0))
    }
}

/// Round a raw mask to integers and binarize it
///
/// Values are rounded half to even, then a cell is active when its rounded
/// value is at least half of the mask's rounded maximum. A mask that rounds to
/// all zeros therefore has every cell active.
pub fn binarize(mask: ArrayView2<'_, f64>) -> Array2<bool> {
    let rounded = mask.mapv(f64::round_ties_even);
    let max = rounded.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));

    let threshold = max / 2.0;
    rounded.mapv(|v| v >= threshold)
}

/// Convert nested rows into a grid, rejecting ragged input
pub fn grid_from_rows(rows: &[Vec<f64>]) -> Result<Array2<f64>> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);

    let mut flat = Vec::with_capacity(height * width);
    for row in rows {
        if row.len() != width {
            return Err(Error::MaskShape {
                expected: (height, width),
                actual: (height, row.len()),
            });
        }
        flat.extend_from_slice(row);
    }

    Array2::from_shape_vec((height, width), flat).map_err(|_| Error::MaskShape {
        expected: (height, width),
        actual: (height, width),
    })
}
