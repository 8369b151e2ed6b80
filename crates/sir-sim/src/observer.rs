//! Simulation observer trait for progress reporting and data collection.

use sir_agent::AgentStore;
use sir_core::Tick;

use crate::SirSnapshot;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default implementations so implementors only need to
/// override what they care about.  Observers only ever receive shared
/// references; they cannot alter the run.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, snap: &SirSnapshot) {
///         if snap.tick.0 % self.interval == 0 {
///             println!("{}: S={} I={} R={}", snap.tick, snap.susceptible, snap.infected, snap.recovered);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every tick with the aggregate counts.
    fn on_tick_end(&mut self, _snapshot: &SirSnapshot) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to the full population, e.g. for a
    /// renderer or a position log.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}

    /// Consulted before every tick; returning `false` stops the run cleanly
    /// between ticks.
    fn keep_running(&mut self) -> bool {
        true
    }
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Keeps every [`SirSnapshot`] in memory, in tick order.
#[derive(Default)]
pub struct SeriesRecorder {
    pub series: Vec<SirSnapshot>,
}

impl SeriesRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest infected count seen, with the tick it occurred at.
    pub fn peak_infected(&self) -> Option<(Tick, usize)> {
        self.series
            .iter()
            .max_by_key(|s| (s.infected, std::cmp::Reverse(s.tick)))
            .map(|s| (s.tick, s.infected))
    }

    /// `(S, I, R)` triples in tick order.
    pub fn counts(&self) -> Vec<(usize, usize, usize)> {
        self.series
            .iter()
            .map(|s| (s.susceptible, s.infected, s.recovered))
            .collect()
    }
}

impl SimObserver for SeriesRecorder {
    fn on_tick_end(&mut self, snapshot: &SirSnapshot) {
        self.series.push(*snapshot);
    }
}
