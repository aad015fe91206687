//! Geometric level generator.

use rand::prelude::*;
use thiserror::Error;

use crate::level_generator::LevelGenerator;

/// Errors that can occur when creating a [`Geometric`] level generator.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum GeometricError {
    /// The maximum number of levels must be non-zero.
    #[error("total must be non-zero.")]
    ZeroTotal,
    /// The maximum number of levels must be less than `i32::MAX`.
    #[error("total must be less than i32::MAX.")]
    TotalTooLarge,
    /// The probability `p` must be in the range `(0, 1)`.
    #[error("p must be in (0, 1).")]
    InvalidProbability,
    /// Failed to initialize the random number generator.
    #[error("Failed to initialize the random number generator.")]
    RngInitFailed,
}

/// A level generator using a geometric distribution.
///
/// This distribution assumes that if a node is present at some level `n`,
/// then the probability that it is also present at level `n + 1` is some
/// constant `p` in `(0, 1)`.  This produces a geometric distribution,
/// albeit truncated at the maximum number of levels allowed.
#[derive(Debug)]
pub struct Geometric {
    /// The total number of levels that are assumed to exist.
    total: usize,
    /// The probability that a node present on one level is promoted to the
    /// next.
    p: f64,
    /// Precomputed `p^total`, the normalization of the truncated CDF.
    p_total: f64,
    /// The random number generator.
    rng: SmallRng,
}

impl Geometric {
    /// Create a new geometric level generator with `total` number of
    /// levels, and `p` as the probability that a given node is present in
    /// the next level.
    ///
    /// # Errors
    ///
    /// `total` must be at least 1 and fit in an `i32`, and `p` must be
    /// strictly between 0 and 1.
    #[inline]
    pub fn new(total: usize, p: f64) -> Result<Self, GeometricError> {
        let rng = SmallRng::from_rng(thread_rng()).map_err(|_err| GeometricError::RngInitFailed)?;
        Self::with_rng(total, p, rng)
    }

    /// Create a new geometric level generator seeded from `seed`.
    ///
    /// Two generators built from the same seed produce the same level
    /// sequence, which makes engines independently reproducible in tests.
    ///
    /// # Errors
    ///
    /// As for [`Geometric::new`].
    #[inline]
    pub fn seeded(total: usize, p: f64, seed: u64) -> Result<Self, GeometricError> {
        Self::with_rng(total, p, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(total: usize, p: f64, rng: SmallRng) -> Result<Self, GeometricError> {
        if total == 0 {
            return Err(GeometricError::ZeroTotal);
        }
        let total_i32 = match i32::try_from(total) {
            Ok(t) => t,
            Err(_) => return Err(GeometricError::TotalTooLarge),
        };
        if !(0.0 < p && p < 1.0) {
            return Err(GeometricError::InvalidProbability);
        }
        Ok(Geometric {
            total,
            p,
            p_total: p.powi(total_i32),
            rng,
        })
    }
}

impl LevelGenerator for Geometric {
    #[inline]
    fn total(&self) -> usize {
        self.total
    }

    /// Generate a level for a new node using a geometric distribution.
    ///
    /// A uniform variate `u` in `[0, 1)` is pushed through the inverse of
    /// the cumulative distribution function of the truncated geometric
    /// distribution,
    ///
    /// ```text
    /// CDF(n) = (p^n - 1) / (p^total - 1)
    /// ```
    ///
    /// which solved for `n` gives
    ///
    /// ```text
    /// n = floor(log_p(1 + (p^total - 1) * u))
    /// ```
    #[inline]
    fn level(&mut self) -> usize {
        let u = self.rng.gen::<f64>();
        // The CDF domain is [0, total), so the cast cannot truncate.
        (1.0 + (self.p_total - 1.0) * u).log(self.p).floor() as usize
    }
}
