//! Three-way dataset partitioning
//!
//! The core selection algorithm: draw the test and validation subsets
//! without replacement from a single shrinking candidate pool, leaving the
//! remainder as the training subset. Selection is pure — no filesystem
//! access — so the assignment can be inspected or tested before anything is
//! copied.

use crate::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fractions of the candidate pool assigned to the test and validation
/// subsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitRatios {
    pub test: f64,
    pub val: f64,
}

impl SplitRatios {
    pub fn new(test: f64, val: f64) -> Self {
        Self { test, val }
    }

    /// Check both ratios before any selection or filesystem work.
    ///
    /// Each ratio must be finite and in `[0, 1)`; zero is legal. The sum
    /// must stay below 1.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("test", self.test), ("val", self.val)] {
            if !value.is_finite() || !(0.0..1.0).contains(&value) {
                return Err(Error::InvalidRatio { name, value });
            }
        }
        let sum = self.test + self.val;
        if sum >= 1.0 {
            return Err(Error::RatioSum { sum });
        }
        Ok(())
    }
}

/// The three disjoint subsets produced by one partitioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splits {
    pub test: Vec<String>,
    pub val: Vec<String>,
    pub train: Vec<String>,
}

impl Splits {
    /// Total number of images across all three subsets.
    pub fn total(&self) -> usize {
        self.test.len() + self.val.len() + self.train.len()
    }
}

/// Partition `pool` into test, validation and training subsets.
///
/// The test phase draws first, the validation phase draws from what the
/// test phase left behind, and the remainder becomes the training subset,
/// so the three subsets are disjoint by construction. Subset sizes are
/// fixed up front as `ceil(ratio * N)` against the original pool size, not
/// recomputed against the shrunk pool.
///
/// Each draw reseeds a [`StdRng`] with the phase-local loop counter, and
/// both phases restart the counter at 0: the same pool ordering and ratios
/// reproduce the same assignment on every run of the same build. No parity
/// with any other tool's generator is implied.
///
/// Fails before the first draw when the two ceilings together exceed the
/// pool (possible even for valid ratios, e.g. 3 images at 0.4/0.5).
pub fn split(mut pool: Vec<String>, ratios: &SplitRatios) -> Result<Splits> {
    ratios.validate()?;

    let total = pool.len();
    let test_count = (ratios.test * total as f64).ceil() as usize;
    let val_count = (ratios.val * total as f64).ceil() as usize;
    if test_count + val_count > total {
        return Err(Error::PoolExhausted {
            requested: test_count + val_count,
            available: total,
        });
    }

    let test = draw_phase(&mut pool, test_count);
    let val = draw_phase(&mut pool, val_count);

    Ok(Splits {
        test,
        val,
        train: pool,
    })
}

/// Draw `count` items from `pool` without replacement.
///
/// The drawn index depends only on the loop counter and the pool size at
/// that moment. Caller guarantees `count <= pool.len()`.
fn draw_phase(pool: &mut Vec<String>, count: usize) -> Vec<String> {
    let mut selected = Vec::with_capacity(count);
    for i in 0..count {
        let mut rng = StdRng::seed_from_u64(i as u64);
        let idx = rng.random_range(0..pool.len());
        selected.push(pool.remove(idx));
    }
    selected
}
