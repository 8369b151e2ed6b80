//! Core population storage: `AgentStore` (SoA data) and `HealthCensus`.
//!
//! Every `Vec` field has exactly `count` elements and the `AgentId` value is
//! the index into all of them:
//!
//! ```ignore
//! let p = store.position[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! Lifecycle transitions go through [`AgentStore::infect`] and
//! [`AgentStore::recover`], which refuse illegal edges; positions and
//! velocities are plain data written by the motion engine.

use sir_core::{AgentId, HealthState, Point, Velocity};

// ── HealthCensus ──────────────────────────────────────────────────────────────

/// Aggregate S/I/R counts for one instant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthCensus {
    pub susceptible: usize,
    pub infected: usize,
    pub recovered: usize,
}

impl HealthCensus {
    #[inline]
    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.recovered
    }

    fn record(&mut self, state: HealthState) {
        match state {
            HealthState::Susceptible => self.susceptible += 1,
            HealthState::Infected    => self.infected += 1,
            HealthState::Recovered   => self.recovered += 1,
        }
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for the whole population.
///
/// Agents are never added or removed after construction.
#[derive(Clone, Debug)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current position.  May sit outside the active bounds for at most one
    /// tick after a wall contact.
    pub position: Vec<Point>,

    /// Per-tick displacement; components flip sign on wall contact.
    pub velocity: Vec<Velocity>,

    pub health: Vec<HealthState>,

    /// Time units spent infected.  Zero while susceptible; frozen (not
    /// reset) once recovered.
    pub infection_duration: Vec<u32>,
}

impl AgentStore {
    /// `count` susceptible agents at the origin with zero velocity.
    ///
    /// Callers overwrite positions and velocities directly; prefer
    /// [`AgentStoreBuilder`](crate::AgentStoreBuilder) for a randomly seeded
    /// population.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            position:           vec![Point::default(); count],
            velocity:           vec![Velocity::default(); count],
            health:             vec![HealthState::Susceptible; count],
            infection_duration: vec![0; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Agents currently in `state`, in ascending `AgentId` order.
    pub fn ids_in(&self, state: HealthState) -> Vec<AgentId> {
        self.health
            .iter()
            .enumerate()
            .filter(|&(_, &h)| h == state)
            .map(|(i, _)| AgentId(i as u32))
            .collect()
    }

    #[inline]
    pub fn state_of(&self, agent: AgentId) -> HealthState {
        self.health[agent.index()]
    }

    /// Count agents per compartment.
    pub fn census(&self) -> HealthCensus {
        let mut census = HealthCensus::default();
        for &state in &self.health {
            census.record(state);
        }
        census
    }

    // ── Lifecycle transitions ─────────────────────────────────────────────

    /// Susceptible → Infected with a fresh duration of zero.
    ///
    /// Returns `false` (and changes nothing) if the agent is not susceptible.
    pub fn infect(&mut self, agent: AgentId) -> bool {
        let i = agent.index();
        if !self.health[i].can_become(HealthState::Infected) {
            return false;
        }
        self.health[i] = HealthState::Infected;
        self.infection_duration[i] = 0;
        true
    }

    /// Infected → Recovered.  The infection duration is kept as-is.
    ///
    /// Returns `false` (and changes nothing) if the agent is not infected.
    pub fn recover(&mut self, agent: AgentId) -> bool {
        let i = agent.index();
        if !self.health[i].can_become(HealthState::Recovered) {
            return false;
        }
        self.health[i] = HealthState::Recovered;
        true
    }
}
