//! Distance functions for feature vectors
//!
//! One plain function per proximity metric, plus [`distance`] which dispatches
//! on [`ProximityMetric`]. All functions assume equal-length inputs; length is
//! checked by the callers in the `cdist` module.
//!
//! Degenerate inputs (zero vectors under `cosine`, all-false vectors under
//! `dice`) yield NaN rather than an error.

use crate::metric::ProximityMetric;
use crate::stats::BatchStats;
use nalgebra::{DMatrix, DVector};

/// Exponent used by `minkowski` and `wminkowski`
pub const MINKOWSKI_P: f64 = 2.0;

/// Compute the distance between `u` and `v` under `metric`
///
/// # Arguments
/// * `metric` - The proximity metric
/// * `u` - First vector
/// * `v` - Second vector, same length as `u`
/// * `stats` - Batch parameters for `seuclidean` and `mahalanobis`
///
/// # Returns
/// Non-negative distance, or NaN when the metric is undefined for the inputs
pub fn distance(metric: ProximityMetric, u: &[f64], v: &[f64], stats: &BatchStats) -> f64 {
    match metric {
        ProximityMetric::BrayCurtis => braycurtis(u, v),
        ProximityMetric::Canberra => canberra(u, v),
        ProximityMetric::Chebyshev => chebyshev(u, v),
        ProximityMetric::CityBlock => cityblock(u, v),
        ProximityMetric::Correlation => correlation(u, v),
        ProximityMetric::Cosine => cosine(u, v),
        ProximityMetric::Dice => dice(u, v),
        ProximityMetric::Euclidean => euclidean(u, v),
        ProximityMetric::Hamming => hamming(u, v),
        ProximityMetric::Jaccard => jaccard(u, v),
        ProximityMetric::JensenShannon => jensenshannon(u, v),
        ProximityMetric::Kulsinski => kulsinski(u, v),
        ProximityMetric::Mahalanobis => match &stats.inv_covariance {
            Some(vi) => mahalanobis(u, v, vi),
            None => f64::NAN,
        },
        ProximityMetric::Matching => matching(u, v),
        ProximityMetric::Minkowski => minkowski(u, v, MINKOWSKI_P),
        ProximityMetric::RogersTanimoto => rogerstanimoto(u, v),
        ProximityMetric::RussellRao => russellrao(u, v),
        ProximityMetric::SEuclidean => match &stats.variance {
            Some(var) => seuclidean(u, v, var),
            None => f64::NAN,
        },
        ProximityMetric::SokalMichener => sokalmichener(u, v),
        ProximityMetric::SokalSneath => sokalsneath(u, v),
        ProximityMetric::SqEuclidean => sqeuclidean(u, v),
        ProximityMetric::WMinkowski => wminkowski(u, v, MINKOWSKI_P),
        ProximityMetric::Yule => yule(u, v),
    }
}

#[inline]
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

pub fn braycurtis(u: &[f64], v: &[f64]) -> f64 {
    let (num, den) = u
        .iter()
        .zip(v.iter())
        .fold((0.0_f64, 0.0_f64), |(num, den), (a, b)| {
            (num + (a - b).abs(), den + (a + b).abs())
        });
    num / den
}

/// Terms where both entries are zero contribute nothing
pub fn canberra(u: &[f64], v: &[f64]) -> f64 {
    u.iter()
        .zip(v.iter())
        .map(|(a, b)| {
            let den = a.abs() + b.abs();
            if den == 0.0 {
                0.0
            } else {
                (a - b).abs() / den
            }
        })
        .sum()
}

pub fn chebyshev(u: &[f64], v: &[f64]) -> f64 {
    u.iter()
        .zip(v.iter())
        .fold(0.0_f64, |acc, (a, b)| acc.max((a - b).abs()))
}

pub fn cityblock(u: &[f64], v: &[f64]) -> f64 {
    u.iter().zip(v.iter()).map(|(a, b)| (a - b).abs()).sum()
}

/// One minus the Pearson correlation of `u` and `v`
pub fn correlation(u: &[f64], v: &[f64]) -> f64 {
    let n = u.len() as f64;
    let mu = u.iter().sum::<f64>() / n;
    let mv = v.iter().sum::<f64>() / n;
    let uc: Vec<f64> = u.iter().map(|x| x - mu).collect();
    let vc: Vec<f64> = v.iter().map(|x| x - mv).collect();
    cosine(&uc, &vc)
}

/// One minus the cosine similarity, clipped to `[0, 2]`
pub fn cosine(u: &[f64], v: &[f64]) -> f64 {
    let uv = dot(u, v);
    let uu = dot(u, u);
    let vv = dot(v, v);
    (1.0 - uv / (uu * vv).sqrt()).clamp(0.0, 2.0)
}

pub fn sqeuclidean(u: &[f64], v: &[f64]) -> f64 {
    u.iter().zip(v.iter()).map(|(a, b)| (a - b) * (a - b)).sum()
}

pub fn euclidean(u: &[f64], v: &[f64]) -> f64 {
    sqeuclidean(u, v).sqrt()
}

pub fn minkowski(u: &[f64], v: &[f64], p: f64) -> f64 {
    u.iter()
        .zip(v.iter())
        .map(|(a, b)| (a - b).abs().powf(p))
        .sum::<f64>()
        .powf(1.0 / p)
}

/// Weighted Minkowski with unit weights, which reduces to [`minkowski`]
pub fn wminkowski(u: &[f64], v: &[f64], p: f64) -> f64 {
    minkowski(u, v, p)
}

/// Euclidean distance with each component scaled by its variance
pub fn seuclidean(u: &[f64], v: &[f64], variance: &[f64]) -> f64 {
    u.iter()
        .zip(v.iter())
        .zip(variance.iter())
        .map(|((a, b), var)| (a - b) * (a - b) / var)
        .sum::<f64>()
        .sqrt()
}

/// `sqrt((u - v)^T VI (u - v))` for an inverse covariance `VI`
pub fn mahalanobis(u: &[f64], v: &[f64], vi: &DMatrix<f64>) -> f64 {
    let delta = DVector::from_iterator(u.len(), u.iter().zip(v.iter()).map(|(a, b)| a - b));
    let quad = delta.dot(&(vi * &delta));
    quad.max(0.0).sqrt()
}

/// Fraction of entries that differ
pub fn hamming(u: &[f64], v: &[f64]) -> f64 {
    let differing = u.iter().zip(v.iter()).filter(|(a, b)| a != b).count();
    differing as f64 / u.len() as f64
}

/// Fraction of differing entries among those where either vector is nonzero
pub fn jaccard(u: &[f64], v: &[f64]) -> f64 {
    let (differing, nonzero) = u
        .iter()
        .zip(v.iter())
        .filter(|(a, b)| **a != 0.0 || **b != 0.0)
        .fold((0usize, 0usize), |(d, n), (a, b)| {
            (d + usize::from(a != b), n + 1)
        });
    if nonzero == 0 {
        0.0
    } else {
        differing as f64 / nonzero as f64
    }
}

/// Relative entropy term `x * ln(x / y)` with the usual conventions at zero
fn rel_entr(x: f64, y: f64) -> f64 {
    if x > 0.0 && y > 0.0 {
        x * (x / y).ln()
    } else if x == 0.0 && y >= 0.0 {
        0.0
    } else {
        f64::INFINITY
    }
}

/// Jensen-Shannon distance between `u` and `v` taken as probability vectors
pub fn jensenshannon(u: &[f64], v: &[f64]) -> f64 {
    let su: f64 = u.iter().sum();
    let sv: f64 = v.iter().sum();

    let (left, right) = u.iter().zip(v.iter()).fold((0.0_f64, 0.0_f64), |(l, r), (a, b)| {
        let p = a / su;
        let q = b / sv;
        let m = (p + q) / 2.0;
        (l + rel_entr(p, m), r + rel_entr(q, m))
    });

    ((left + right) / 2.0).sqrt()
}

/// Contingency counts of two vectors read as booleans (nonzero is true)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct BoolCounts {
    tt: f64,
    tf: f64,
    ft: f64,
    ff: f64,
}

impl BoolCounts {
    fn of(u: &[f64], v: &[f64]) -> Self {
        u.iter()
            .zip(v.iter())
            .fold(Self::default(), |mut c, (a, b)| {
                match (*a != 0.0, *b != 0.0) {
                    (true, true) => c.tt += 1.0,
                    (true, false) => c.tf += 1.0,
                    (false, true) => c.ft += 1.0,
                    (false, false) => c.ff += 1.0,
                }
                c
            })
    }

    #[inline]
    fn n(&self) -> f64 {
        self.tt + self.tf + self.ft + self.ff
    }

    #[inline]
    fn mismatched(&self) -> f64 {
        self.tf + self.ft
    }
}

pub fn dice(u: &[f64], v: &[f64]) -> f64 {
    let c = BoolCounts::of(u, v);
    c.mismatched() / (2.0 * c.tt + c.mismatched())
}

pub fn kulsinski(u: &[f64], v: &[f64]) -> f64 {
    let c = BoolCounts::of(u, v);
    let n = c.n();
    (c.mismatched() - c.tt + n) / (c.mismatched() + n)
}

/// Boolean Hamming distance
pub fn matching(u: &[f64], v: &[f64]) -> f64 {
    let c = BoolCounts::of(u, v);
    c.mismatched() / c.n()
}

pub fn rogerstanimoto(u: &[f64], v: &[f64]) -> f64 {
    let c = BoolCounts::of(u, v);
    let r = 2.0 * c.mismatched();
    r / (c.tt + c.ff + r)
}

pub fn russellrao(u: &[f64], v: &[f64]) -> f64 {
    let c = BoolCounts::of(u, v);
    let n = c.n();
    (n - c.tt) / n
}

pub fn sokalmichener(u: &[f64], v: &[f64]) -> f64 {
    let c = BoolCounts::of(u, v);
    let r = 2.0 * c.mismatched();
    let s = c.tt + c.ff;
    r / (s + r)
}

pub fn sokalsneath(u: &[f64], v: &[f64]) -> f64 {
    let c = BoolCounts::of(u, v);
    let r = 2.0 * c.mismatched();
    r / (c.tt + r)
}

pub fn yule(u: &[f64], v: &[f64]) -> f64 {
    let c = BoolCounts::of(u, v);
    let half_r = c.tf * c.ft;
    if half_r == 0.0 {
        0.0
    } else {
        2.0 * half_r / (c.tt * c.ff + half_r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_euclidean_family() {
        let u = [0.0, 0.0];
        let v = [3.0, 4.0];
        assert!(close(euclidean(&u, &v), 5.0));
        assert!(close(sqeuclidean(&u, &v), 25.0));
        assert!(close(minkowski(&u, &v, 2.0), 5.0));
        assert!(close(wminkowski(&u, &v, 2.0), 5.0));
        assert!(close(cityblock(&u, &v), 7.0));
        assert!(close(chebyshev(&u, &v), 4.0));
    }

    #[test]
    fn test_cosine() {
        assert!(close(cosine(&[1.0, 0.0], &[1.0, 0.0]), 0.0));
        assert!(close(cosine(&[1.0, 0.0], &[0.0, 1.0]), 1.0));
        assert!(close(cosine(&[1.0, 0.0], &[-1.0, 0.0]), 2.0));
        assert!(cosine(&[0.0, 0.0], &[1.0, 2.0]).is_nan());
    }

    #[test]
    fn test_correlation() {
        assert!(close(correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]), 0.0));
        assert!(close(correlation(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]), 2.0));
        assert!(correlation(&[1.0, 1.0], &[0.0, 5.0]).is_nan());
    }

    #[test]
    fn test_braycurtis_canberra() {
        let u = [1.0, 2.0, 0.0];
        let v = [3.0, 2.0, 0.0];
        assert!(close(braycurtis(&u, &v), 2.0 / 8.0));
        assert!(close(canberra(&u, &v), 0.5));
    }

    #[test]
    fn test_hamming_and_jaccard() {
        let u = [1.0, 0.0, 2.0, 0.0];
        let v = [1.0, 3.0, 0.0, 0.0];
        assert!(close(hamming(&u, &v), 0.5));
        assert!(close(jaccard(&u, &v), 2.0 / 3.0));
        assert_eq!(jaccard(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_jensenshannon() {
        assert!(close(jensenshannon(&[1.0, 0.0], &[2.0, 0.0]), 0.0));
        let d = jensenshannon(&[1.0, 0.0], &[0.0, 1.0]);
        assert!(close(d, std::f64::consts::LN_2.sqrt()));
    }

    #[test]
    fn test_boolean_metrics() {
        // tt = 1, tf = 1, ft = 1, ff = 1
        let u = [1.0, 1.0, 0.0, 0.0];
        let v = [1.0, 0.0, 1.0, 0.0];
        assert!(close(dice(&u, &v), 2.0 / 4.0));
        assert!(close(kulsinski(&u, &v), 5.0 / 6.0));
        assert!(close(matching(&u, &v), 0.5));
        assert!(close(rogerstanimoto(&u, &v), 4.0 / 6.0));
        assert!(close(russellrao(&u, &v), 0.75));
        assert!(close(sokalmichener(&u, &v), 4.0 / 6.0));
        assert!(close(sokalsneath(&u, &v), 4.0 / 5.0));
        assert!(close(yule(&u, &v), 1.0));
    }

    #[test]
    fn test_boolean_degenerate() {
        let zeros = [0.0, 0.0];
        assert!(dice(&zeros, &zeros).is_nan());
        assert!(sokalsneath(&zeros, &zeros).is_nan());
        assert_eq!(yule(&zeros, &zeros), 0.0);
    }

    #[test]
    fn test_seuclidean_and_mahalanobis() {
        let u = [0.0, 0.0];
        let v = [2.0, 3.0];
        assert!(close(seuclidean(&u, &v, &[4.0, 9.0]), 2.0_f64.sqrt()));

        let identity = DMatrix::<f64>::identity(2, 2);
        assert!(close(mahalanobis(&u, &v, &identity), 13.0_f64.sqrt()));

        let scaled = DMatrix::from_diagonal(&DVector::from_vec(vec![0.25, 1.0 / 9.0]));
        assert!(close(mahalanobis(&u, &v, &scaled), 2.0_f64.sqrt()));
    }

    #[test]
    fn test_dispatch_without_stats() {
        let stats = BatchStats::default();
        let u = [0.0, 0.0];
        let v = [3.0, 4.0];
        assert!(close(distance(ProximityMetric::Euclidean, &u, &v, &stats), 5.0));
        assert!(distance(ProximityMetric::SEuclidean, &u, &v, &stats).is_nan());
    }
}
