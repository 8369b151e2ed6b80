//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `sir_counts.csv` (`step,S,I,R`)
//! - `agent_snapshots.csv` (`agent_id,tick,x,y,state`)

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, SirCountRow};

/// Writes run output to two CSV files.
pub struct CsvWriter {
    counts:    Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files, and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut counts = Writer::from_path(dir.join("sir_counts.csv"))?;
        counts.write_record(["step", "S", "I", "R"])?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["agent_id", "tick", "x", "y", "state"])?;

        Ok(Self { counts, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.state.as_str().to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_counts(&mut self, row: &SirCountRow) -> OutputResult<()> {
        self.counts.write_record(&[
            row.tick.to_string(),
            row.susceptible.to_string(),
            row.infected.to_string(),
            row.recovered.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.counts.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
