//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  Each tick represents
//! `step_interval` simulation-time units, which is the amount added to every
//! infected agent's `infection_duration` per tick:
//!
//!   elapsed_time = tick * step_interval
//!
//! Integer ticks and integer time units keep duration arithmetic exact.

use std::fmt;

use crate::error::{SirError, SirResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// `true` if this tick falls on an `interval` boundary.  An interval of
    /// zero never matches.
    #[inline]
    pub fn is_on_interval(self, interval: u64) -> bool {
        interval > 0 && self.0 % interval == 0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts ticks to simulation-time units.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Time units one tick represents.
    pub step_interval: u32,
    /// The next tick to be processed.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(step_interval: u32) -> Self {
        Self {
            step_interval,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Elapsed simulation-time units since tick 0.
    #[inline]
    pub fn elapsed_time(&self) -> u64 {
        self.current_tick.0 * self.step_interval as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t = {})", self.current_tick, self.elapsed_time())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration: how long to run, how to seed, how often to
/// snapshot.  Disease and environment parameters live in
/// [`EpidemicParams`](crate::EpidemicParams).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Simulation-time units per tick.  Must be at least 1.
    pub step_interval: u32,

    /// Emit a per-agent snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:           300,
            seed:                  42,
            step_interval:         1,
            output_interval_ticks: 10,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.step_interval)
    }

    pub fn validate(&self) -> SirResult<()> {
        if self.step_interval == 0 {
            return Err(SirError::Config("step_interval must be at least 1".into()));
        }
        Ok(())
    }
}
