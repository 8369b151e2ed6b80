//! The `Sim` struct and its tick loop.

use sir_agent::{AgentStore, HealthCensus};
use sir_core::{EpidemicParams, Extent, SimClock, SimConfig, SimRng, Tick};
use tracing::{debug, info};

use crate::{MotionEngine, ProgressionEngine, SimObserver, SirSnapshot, TransmissionEngine};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// `Sim` owns all run state (population, RNG stream, active bounds,
/// countdown, clock) and drives the fixed per-tick order:
///
/// 1. **Motion & boundary**: drift, reflect, advance the work-period schedule.
/// 2. **Transmission**: infected × susceptible proximity draws.
/// 3. **Progression**: age infections, isolation, natural recovery.
/// 4. **Count**: aggregate S/I/R into a [`SirSnapshot`].
///
/// Outside code only gets shared references to the population.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub(crate) config:       SimConfig,
    pub(crate) params:       EpidemicParams,
    pub(crate) clock:        SimClock,
    pub(crate) agents:       AgentStore,
    pub(crate) rng:          SimRng,
    pub(crate) motion:       MotionEngine,
    pub(crate) transmission: TransmissionEngine,
    pub(crate) progression:  ProgressionEngine,
}

impl Sim {
    // ── Read-only views ───────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn params(&self) -> &EpidemicParams {
        &self.params
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// The next tick to be processed.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    /// Read-only view of every agent's position, velocity, and health.
    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    /// Bounds the next tick's motion will reflect against.
    pub fn active_bounds(&self) -> Extent {
        self.motion.schedule.active()
    }

    pub fn transmission(&self) -> &TransmissionEngine {
        &self.transmission
    }

    /// Current S/I/R counts (at t = 0 before any step, this is the seeded
    /// population).
    pub fn census(&self) -> HealthCensus {
        self.agents.census()
    }

    /// `true` once no infected agents remain; further ticks only move agents.
    pub fn is_extinct(&self) -> bool {
        self.census().infected == 0
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance exactly one tick and return its aggregate snapshot.
    ///
    /// Ignores `config.total_ticks`; use [`run`](Self::run) for a bounded run.
    pub fn step(&mut self) -> SirSnapshot {
        let now = self.clock.current_tick;

        let motion = self.motion.step(&mut self.agents, &mut self.rng);
        let newly_infected = self.transmission.spread(&mut self.agents, &mut self.rng);
        let progression = self.progression.step(&mut self.agents, &mut self.rng);

        let census = self.agents.census();
        assert_eq!(
            census.total(),
            self.agents.count,
            "population drifted at {now}: {census:?}"
        );

        let mut snapshot = SirSnapshot::new(now, census, motion.phase);
        snapshot.new_infections = newly_infected.len();
        snapshot.new_recoveries = progression.removed();

        debug!(
            tick = now.0,
            s = census.susceptible,
            i = census.infected,
            r = census.recovered,
            new_infections = snapshot.new_infections,
            isolated = progression.isolated,
            recovered = progression.recovered,
            relocated = motion.relocated,
            "tick complete"
        );

        self.clock.advance();
        snapshot
    }

    /// Run from the current tick to `config.end_tick()`, or until the
    /// observer asks to stop.  Returns the tick the run stopped at.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Tick {
        let end = self.config.end_tick();
        info!(
            agents = self.agents.count,
            from = self.clock.current_tick.0,
            to = end.0,
            seed = self.config.seed,
            "run started"
        );

        while self.clock.current_tick < end {
            if !observer.keep_running() {
                info!(tick = self.clock.current_tick.0, "run stopped by observer");
                break;
            }
            self.observed_step(observer);
        }

        let final_tick = self.clock.current_tick;
        let census = self.census();
        info!(
            tick = final_tick.0,
            s = census.susceptible,
            i = census.infected,
            r = census.recovered,
            "run finished"
        );
        observer.on_sim_end(final_tick);
        final_tick
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`),
    /// still honouring [`SimObserver::keep_running`].
    ///
    /// Useful for tests and incremental stepping.  `on_sim_end` is not called.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> Tick {
        for _ in 0..n {
            if !observer.keep_running() {
                break;
            }
            self.observed_step(observer);
        }
        self.clock.current_tick
    }

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let snapshot = self.step();
        observer.on_tick_end(&snapshot);
        if now.is_on_interval(self.config.output_interval_ticks) {
            observer.on_snapshot(now, &self.agents);
        }
    }
}
