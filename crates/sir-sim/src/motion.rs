//! Motion & boundary engine: drift, wall reflection, and the work-period
//! schedule that periodically shrinks the active domain.
//!
//! # Order of operations per tick
//!
//! ```text
//! ① position += velocity                     (every agent)
//! ② flip vx / vy if outside the active bounds (velocity flip, no clamp)
//! ③ schedule: countdown <= 0 → shrink bounds, relocate outsiders, reset
//!             otherwise      → restore full bounds, countdown -= decrement
//! ```
//!
//! Step ③ sets the bounds used by ① and ② on the *next* tick.

use sir_agent::AgentStore;
use sir_core::{EpidemicParams, Extent, SimRng};
use tracing::trace;

/// Which bounds the schedule left in force at the end of a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoundaryPhase {
    /// Full domain.
    Open,
    /// Reduced work domain.
    Work,
}

/// What the motion engine did during one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MotionReport {
    pub phase: BoundaryPhase,
    /// Agents teleported into the work domain.
    pub relocated: usize,
}

// ── BoundarySchedule ──────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct WorkSchedule {
    extent: Extent,
    interval: f64,
    decrement: f64,
}

/// The active bounds and the countdown driving them.
#[derive(Clone, Debug)]
pub struct BoundarySchedule {
    full: Extent,
    work: Option<WorkSchedule>,
    active: Extent,
    phase: BoundaryPhase,
    countdown: f64,
}

impl BoundarySchedule {
    /// Bounds fixed at `full` forever.
    pub fn fixed(full: Extent) -> Self {
        Self { full, work: None, active: full, phase: BoundaryPhase::Open, countdown: 0.0 }
    }

    pub fn from_params(params: &EpidemicParams) -> Self {
        let Some(work) = &params.work_period else {
            return Self::fixed(params.domain);
        };
        Self {
            full: params.domain,
            work: Some(WorkSchedule {
                extent: params.domain.scaled(work.width_fraction, work.height_fraction),
                interval: work.interval,
                decrement: work.decrement(),
            }),
            active: params.domain,
            phase: BoundaryPhase::Open,
            countdown: work.interval,
        }
    }

    /// Bounds agents reflect against this tick.
    #[inline]
    pub fn active(&self) -> Extent {
        self.active
    }

    #[inline]
    pub fn phase(&self) -> BoundaryPhase {
        self.phase
    }

    /// Apply step ③ and return how many agents were relocated.
    fn advance(&mut self, store: &mut AgentStore, rng: &mut SimRng) -> usize {
        let Some(work) = &self.work else {
            return 0;
        };

        if self.countdown <= 0.0 {
            self.active = work.extent;
            self.phase = BoundaryPhase::Work;
            self.countdown = work.interval;
            let mut relocated = 0;
            for p in store.position.iter_mut() {
                if !work.extent.contains(*p) {
                    *p = rng.point_in(work.extent);
                    relocated += 1;
                }
            }
            trace!(relocated, bounds = %work.extent, "work period");
            relocated
        } else {
            self.active = self.full;
            self.phase = BoundaryPhase::Open;
            self.countdown -= work.decrement;
            0
        }
    }
}

// ── MotionEngine ──────────────────────────────────────────────────────────────

/// Moves every agent once per tick and owns the boundary schedule.
#[derive(Clone, Debug)]
pub struct MotionEngine {
    pub schedule: BoundarySchedule,
}

impl MotionEngine {
    pub fn new(schedule: BoundarySchedule) -> Self {
        Self { schedule }
    }

    pub fn from_params(params: &EpidemicParams) -> Self {
        Self::new(BoundarySchedule::from_params(params))
    }

    /// Run steps ①–③ for the whole population.
    pub fn step(&mut self, store: &mut AgentStore, rng: &mut SimRng) -> MotionReport {
        integrate(store, self.schedule.active());
        let relocated = self.schedule.advance(store, rng);
        MotionReport { phase: self.schedule.phase(), relocated }
    }
}

/// Steps ① and ②: drift every agent and reflect off `bounds`.
pub fn integrate(store: &mut AgentStore, bounds: Extent) {
    for (p, v) in store.position.iter_mut().zip(store.velocity.iter_mut()) {
        *p = p.advanced(*v);
        if p.x < 0.0 || p.x > bounds.width {
            v.dx = -v.dx;
        }
        if p.y < 0.0 || p.y > bounds.height {
            v.dy = -v.dy;
        }
    }
}
