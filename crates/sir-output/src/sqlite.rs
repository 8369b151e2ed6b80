//! SQLite output backend (feature `sqlite`).
//!
//! Creates `output.db` in the output directory with two tables:
//! `sir_counts` and `agent_snapshots`.

use std::fs;
use std::path::Path;

use rusqlite::{params, Connection};

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, SirCountRow};

pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS sir_counts (
                 step        INTEGER PRIMARY KEY,
                 susceptible INTEGER NOT NULL,
                 infected    INTEGER NOT NULL,
                 recovered   INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS agent_snapshots (
                 agent_id INTEGER NOT NULL,
                 tick     INTEGER NOT NULL,
                 x        REAL    NOT NULL,
                 y        REAL    NOT NULL,
                 state    TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_snapshots (agent_id, tick, x, y, state) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.agent_id,
                    row.tick as i64,
                    row.x,
                    row.y,
                    row.state.as_str(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_counts(&mut self, row: &SirCountRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO sir_counts (step, susceptible, infected, recovered) \
             VALUES (?1, ?2, ?3, ?4)",
            params![
                row.tick as i64,
                row.susceptible as i64,
                row.infected as i64,
                row.recovered as i64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
