//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use sir_agent::AgentStore;
use sir_core::Tick;
use sir_sim::{SimObserver, SirSnapshot};
use tracing::warn;

use crate::row::{AgentSnapshotRow, SirCountRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that appends a count row every tick and an agent
/// snapshot every `output_interval_ticks` to any [`OutputWriter`].
///
/// `SimObserver` methods cannot fail, so the first writer error is kept and
/// later writes are still attempted.  Check [`take_error`][Self::take_error]
/// after `sim.run()` returns.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).  `None` if every write succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect it after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, snapshot: &SirSnapshot) {
        let result = self.writer.write_counts(&SirCountRow::from(snapshot));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        let rows = AgentSnapshotRow::collect(tick, agents);
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
