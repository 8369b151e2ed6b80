//! Plain data rows written by output backends.

use sir_agent::AgentStore;
use sir_core::{HealthState, Tick};
use sir_sim::SirSnapshot;

/// Aggregate S/I/R counts after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SirCountRow {
    pub tick:        u64,
    pub susceptible: u64,
    pub infected:    u64,
    pub recovered:   u64,
}

impl From<&SirSnapshot> for SirCountRow {
    fn from(s: &SirSnapshot) -> Self {
        Self {
            tick:        s.tick.0,
            susceptible: s.susceptible as u64,
            infected:    s.infected as u64,
            recovered:   s.recovered as u64,
        }
    }
}

/// One agent's position and health at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        f64,
    pub y:        f64,
    pub state:    HealthState,
}

impl AgentSnapshotRow {
    /// One row per agent, in `AgentId` order.
    pub fn collect(tick: Tick, agents: &AgentStore) -> Vec<Self> {
        agents
            .agent_ids()
            .map(|id| {
                let p = agents.position[id.index()];
                Self {
                    agent_id: id.0,
                    tick:     tick.0,
                    x:        p.x,
                    y:        p.y,
                    state:    agents.state_of(id),
                }
            })
            .collect()
    }
}
