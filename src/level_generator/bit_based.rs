//! Bit-scan level generator.

use rand::prelude::*;
use thiserror::Error;

use crate::level_generator::LevelGenerator;

/// Errors that can occur when creating a [`BitBased`] level generator.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BitBasedError {
    /// The maximum number of levels must be non-zero.
    #[error("total must be non-zero.")]
    ZeroTotal,
    /// A single 32-bit draw cannot produce more than 33 distinct levels.
    #[error("total must be at most 33.")]
    TotalTooLarge,
    /// Failed to initialize the random number generator.
    #[error("Failed to initialize the random number generator.")]
    RngInitFailed,
}

/// A level generator that counts the trailing one-bits of a uniform 32-bit
/// draw.
///
/// Each bit of the draw is an independent coin flip, so the number of
/// trailing ones is geometrically distributed with `p = 1/2`: half of all
/// nodes stay at level 0, a quarter reach level 1, and so forth.  The count
/// is capped at `total - 1`.
#[derive(Debug)]
pub struct BitBased {
    total: usize,
    rng: SmallRng,
}

impl BitBased {
    /// Create a new bit-scan level generator with `total` number of levels.
    ///
    /// # Errors
    ///
    /// `total` must be between 1 and 33 inclusive.
    #[inline]
    pub fn new(total: usize) -> Result<Self, BitBasedError> {
        let rng = SmallRng::from_rng(thread_rng()).map_err(|_err| BitBasedError::RngInitFailed)?;
        Self::with_rng(total, rng)
    }

    /// Create a new bit-scan level generator seeded from `seed`.
    ///
    /// # Errors
    ///
    /// As for [`BitBased::new`].
    #[inline]
    pub fn seeded(total: usize, seed: u64) -> Result<Self, BitBasedError> {
        Self::with_rng(total, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(total: usize, rng: SmallRng) -> Result<Self, BitBasedError> {
        if total == 0 {
            return Err(BitBasedError::ZeroTotal);
        }
        if total > 33 {
            return Err(BitBasedError::TotalTooLarge);
        }
        Ok(BitBased { total, rng })
    }
}

impl LevelGenerator for BitBased {
    #[inline]
    fn total(&self) -> usize {
        self.total
    }

    #[inline]
    fn level(&mut self) -> usize {
        let draw = self.rng.gen::<u32>();
        (draw.trailing_ones() as usize).min(self.total - 1)
    }
}
