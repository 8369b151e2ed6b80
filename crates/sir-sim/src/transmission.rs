//! Transmission engine: proximity test plus one Bernoulli draw per
//! infected–susceptible pair within the infection radius.
//!
//! # Determinism
//!
//! Pairs are visited infected-major in ascending `AgentId` order, and for each
//! infected agent its in-radius susceptibles are visited in ascending
//! `AgentId` order.  Exactly one draw is taken per visited pair.  A
//! susceptible infected earlier in the same pass is skipped without a draw,
//! and agents infected this tick only start transmitting next tick.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over susceptible positions narrows each infected
//! agent's candidates to a disc around it.  Candidates are re-sorted by
//! `AgentId` and re-checked with the exact strict distance test, so the draw
//! sequence is identical to a brute-force O(|I|×|S|) scan.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use sir_agent::AgentStore;
use sir_core::{AgentId, EpidemicParams, HealthState, Point, SimRng, SirResult, ZoneRegistry};

/// Relative slack on the R-tree query radius so floating-point rounding in
/// the squared distance never drops a pair the exact test would accept.
const QUERY_SLACK: f64 = 1e-9;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct SusceptibleEntry {
    point: [f64; 2],
    agent: AgentId,
}

impl RTreeObject for SusceptibleEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SusceptibleEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── TransmissionEngine ────────────────────────────────────────────────────────

/// Zone-aware stochastic infection spread.
#[derive(Clone, Debug)]
pub struct TransmissionEngine {
    radius: f64,
    /// Outside zones, after vaccination.
    baseline: f64,
    /// Inside a shared zone, capped at 1.
    elevated: f64,
    zones: ZoneRegistry,
}

impl TransmissionEngine {
    pub fn from_params(params: &EpidemicParams) -> SirResult<Self> {
        Ok(Self {
            radius: params.infection_radius,
            baseline: params.baseline_probability(),
            elevated: params.zone_probability(),
            zones: ZoneRegistry::new(params.zones.clone())?,
        })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn zones(&self) -> &ZoneRegistry {
        &self.zones
    }

    /// Transmission probability for an infected agent at `a` and a
    /// susceptible agent at `b`.
    #[inline]
    pub fn probability_for(&self, a: Point, b: Point) -> f64 {
        if self.zones.shared_by(a, b) {
            self.elevated
        } else {
            self.baseline
        }
    }

    /// `true` if the pair is close enough to transmit.
    #[inline]
    pub fn in_range(&self, a: Point, b: Point) -> bool {
        a.distance(b) < self.radius
    }

    /// Resolve one tick of transmission and return the newly infected agents
    /// in the order they were infected.
    pub fn spread(&self, store: &mut AgentStore, rng: &mut SimRng) -> Vec<AgentId> {
        let infected = store.ids_in(HealthState::Infected);
        let susceptible = store.ids_in(HealthState::Susceptible);
        // With radius <= 0 no pair satisfies `d < radius`, so no draws happen.
        if infected.is_empty() || susceptible.is_empty() || self.radius <= 0.0 {
            return Vec::new();
        }

        let index = RTree::bulk_load(
            susceptible
                .iter()
                .map(|&agent| SusceptibleEntry {
                    point: store.position[agent.index()].to_array(),
                    agent,
                })
                .collect(),
        );
        let query_r2 = self.radius * self.radius * (1.0 + QUERY_SLACK);

        let mut flipped = vec![false; store.count];
        let mut newly_infected = Vec::new();
        let mut candidates: Vec<AgentId> = Vec::new();

        for &a in &infected {
            let pa = store.position[a.index()];
            candidates.clear();
            candidates.extend(
                index
                    .locate_within_distance(pa.to_array(), query_r2)
                    .map(|e| e.agent),
            );
            candidates.sort_unstable();

            for &b in &candidates {
                if flipped[b.index()] {
                    continue;
                }
                let pb = store.position[b.index()];
                if !self.in_range(pa, pb) {
                    continue;
                }
                if rng.unit() < self.probability_for(pa, pb) {
                    flipped[b.index()] = true;
                    newly_infected.push(b);
                }
            }
        }

        for &b in &newly_infected {
            store.infect(b);
        }
        newly_infected
    }
}
