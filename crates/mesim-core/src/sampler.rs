//! Discrete inverse-CDF sampling.
//!
//! A [`DiscreteDistribution`] pairs an ordered list of values with weights and
//! keeps the running cumulative sum. Drawing compares one uniform number in
//! `[0, 1)` against that sum. Weights are not renormalized: callers pass
//! weights that already sum to 1, and rounding shortfalls fall through to the
//! last value.

use rand::Rng;

use crate::error::GenerationError;

/// A finite weighted set of values.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteDistribution<T> {
    values: Vec<T>,
    weights: Vec<f64>,
    cumulative: Vec<f64>,
}

impl<T: Copy> DiscreteDistribution<T> {
    /// Build a distribution from values and positional weights.
    ///
    /// Fails with [`GenerationError::InvalidDistribution`] when `values` is
    /// empty, the lengths differ, or a weight is negative or not finite.
    pub fn new(values: Vec<T>, weights: &[f64]) -> Result<Self, GenerationError> {
        if values.is_empty()
            || values.len() != weights.len()
            || weights.iter().any(|w| !w.is_finite() || *w < 0.0)
        {
            return Err(GenerationError::distribution(values.len(), weights.len()));
        }

        let cumulative = weights
            .iter()
            .scan(0.0f64, |acc, w| {
                *acc += w;
                Some(*acc)
            })
            .collect();

        Ok(Self {
            values,
            weights: weights.to_vec(),
            cumulative,
        })
    }

    /// Equal weight `1/n` on each of the `n` values.
    pub fn uniform(values: Vec<T>) -> Result<Self, GenerationError> {
        let n = values.len();
        let weights = vec![1.0 / n as f64; n];
        Self::new(values, &weights)
    }

    /// Draw one value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        let u: f64 = rng.gen();
        self.pick(u)
    }

    /// Inverse-CDF lookup: the first value with nonzero weight whose
    /// cumulative weight is `>= u`. Zero-weight values are never returned
    /// unless every weight is zero. A rounding shortfall falls back to the
    /// last value carrying weight.
    pub fn pick(&self, u: f64) -> T {
        let k = self
            .cumulative
            .iter()
            .zip(&self.weights)
            .position(|(&cdf, &w)| w > 0.0 && cdf >= u)
            .or_else(|| self.weights.iter().rposition(|&w| w > 0.0))
            .unwrap_or(self.values.len() - 1);
        self.values[k]
    }
}

/// Validate `values`/`weights` and draw one value in a single call.
pub fn sample<T: Copy, R: Rng + ?Sized>(
    values: &[T],
    weights: &[f64],
    rng: &mut R,
) -> Result<T, GenerationError> {
    let dist = DiscreteDistribution::new(values.to_vec(), weights)?;
    Ok(dist.sample(rng))
}

/// The integers `lo..=hi` with zero removed.
pub(crate) fn nonzero_range(lo: i32, hi: i32) -> Vec<i32> {
    (lo..=hi).filter(|&i| i != 0).collect()
}
