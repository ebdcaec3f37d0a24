use ndarray::Array2;

/// Per-pixel saliency heatmap with every cell in `[0, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct SaliencyMap {
    values: Array2<f64>,
}

impl SaliencyMap {
    #[must_use]
    pub fn new(values: Array2<f64>) -> Self {
        Self { values }
    }

    /// Spatial shape `(H, W)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get((row, col)).copied()
    }

    #[inline]
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Copy the grid out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Highest scoring pixel, if any
    pub fn argmax(&self) -> Option<((usize, usize), f64)> {
        self.values
            .indexed_iter()
            .fold(None, |best, (idx, &v)| match best {
                Some((_, b)) if b >= v => best,
                _ => Some((idx, v)),
            })
    }
}
