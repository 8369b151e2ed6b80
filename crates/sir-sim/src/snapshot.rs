//! Per-tick aggregate output.

use sir_agent::HealthCensus;
use sir_core::Tick;

use crate::BoundaryPhase;

/// Aggregate state after one tick, handed to observers and returned by
/// [`Sim::step`](crate::Sim::step).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SirSnapshot {
    /// The tick that was just processed (0-based).
    pub tick: Tick,
    pub susceptible: usize,
    pub infected: usize,
    pub recovered: usize,
    /// Susceptible → Infected transitions during this tick.
    pub new_infections: usize,
    /// Infected → Recovered transitions during this tick (isolation included).
    pub new_recoveries: usize,
    /// Bounds left in force for the next tick.
    pub phase: BoundaryPhase,
}

impl SirSnapshot {
    pub(crate) fn new(tick: Tick, census: HealthCensus, phase: BoundaryPhase) -> Self {
        Self {
            tick,
            susceptible: census.susceptible,
            infected: census.infected,
            recovered: census.recovered,
            new_infections: 0,
            new_recoveries: 0,
            phase,
        }
    }

    pub fn census(&self) -> HealthCensus {
        HealthCensus {
            susceptible: self.susceptible,
            infected:    self.infected,
            recovered:   self.recovered,
        }
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.susceptible + self.infected + self.recovered
    }
}
