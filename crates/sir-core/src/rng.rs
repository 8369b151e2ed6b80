//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded once from `SimConfig::seed` and
//! never reseeded.  Every random decision (initial placement, work-period
//! relocation, transmission draws, recovery sampling) pulls from this single
//! stream in a fixed order, so the same seed and parameters always replay the
//! same epidemic.  Changing the order of draws changes every run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::geo::{Extent, Point, Velocity};

/// Simulation-level RNG shared by every engine component.
///
/// Single-threaded only; hand it around as `&mut SimRng`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform `f64` in `[0, 1)`; used for every transmission draw.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform point in `[0, width) × [0, height)`.  Draws x first, then y.
    pub fn point_in(&mut self, extent: Extent) -> Point {
        let x = self.unit() * extent.width;
        let y = self.unit() * extent.height;
        Point::new(x, y)
    }

    /// Velocity with each component uniform in `[-max_speed, max_speed]`.
    pub fn velocity(&mut self, max_speed: f64) -> Velocity {
        let dx = self.gen_range(-max_speed..=max_speed);
        let dy = self.gen_range(-max_speed..=max_speed);
        Velocity::new(dx, dy)
    }

    /// How many of `n` items to pick for a sampling `fraction`.
    ///
    /// Stochastic rounding: `floor(fraction × n)`, plus one more with
    /// probability equal to the fractional remainder.  The expected value is
    /// exactly `fraction × n`, and a draw is consumed only when the remainder
    /// is non-zero.
    pub fn sample_size(&mut self, n: usize, fraction: f64) -> usize {
        if n == 0 || fraction <= 0.0 {
            return 0;
        }
        let exact = fraction.min(1.0) * n as f64;
        let whole = exact.floor();
        let remainder = exact - whole;
        let extra = if remainder > 0.0 && self.unit() < remainder { 1 } else { 0 };
        (whole as usize + extra).min(n)
    }

    /// `amount` distinct indices from `0..length`, without replacement.
    ///
    /// # Panics
    /// Panics if `amount > length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, length, amount).into_vec()
    }
}
