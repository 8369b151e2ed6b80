//! Integration tests for sir-output.

#[cfg(test)]
mod csv_tests {
    use sir_core::HealthState;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, SirCountRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64, state: HealthState) -> AgentSnapshotRow {
        AgentSnapshotRow { agent_id, tick, x: 1.5, y: 2.25, state }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("sir_counts.csv").exists());
        assert!(dir.path().join("agent_snapshots.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("baseline").join("run1");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("sir_counts.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("sir_counts.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["step", "S", "I", "R"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["agent_id", "tick", "x", "y", "state"]);
    }

    #[test]
    fn csv_counts_appended_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_counts(&SirCountRow { tick: 0, susceptible: 9, infected: 1, recovered: 0 }).unwrap();
        w.write_counts(&SirCountRow { tick: 1, susceptible: 7, infected: 3, recovered: 0 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("sir_counts.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[1][1], "7"); // S
        assert_eq!(&rows[1][2], "3"); // I
    }

    #[test]
    fn csv_snapshot_fields() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[
            snap_row(0, 10, HealthState::Susceptible),
            snap_row(1, 10, HealthState::Infected),
            snap_row(2, 10, HealthState::Recovered),
        ])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][1], "10");
        assert_eq!(&rows[0][2], "1.5");
        assert_eq!(&rows[0][3], "2.25");
        assert_eq!(&rows[0][4], "S");
        assert_eq!(&rows[1][4], "I");
        assert_eq!(&rows[2][4], "R");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use sir_core::{EpidemicParams, SimConfig};
    use sir_sim::{SeriesRecorder, SimBuilder};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{AgentSnapshotRow, SirCountRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn config() -> SimConfig {
        SimConfig { total_ticks: 6, seed: 1, step_interval: 1, output_interval_ticks: 2 }
    }

    fn params() -> EpidemicParams {
        EpidemicParams { population: 3, ..EpidemicParams::default() }
    }

    /// Fails every count write; tracks whether `finish` ran.
    #[derive(Default)]
    struct FailingWriter {
        attempts: usize,
        finished: bool,
    }

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_counts(&mut self, row: &SirCountRow) -> OutputResult<()> {
            self.attempts += 1;
            Err(OutputError::Io(std::io::Error::other(format!("disk full at {}", row.tick))))
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn integration_csv() {
        let mut sim = SimBuilder::new(config(), params()).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("sir_counts.csv")).unwrap();
        let counts: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(counts.len(), 6);
        for (t, row) in counts.iter().enumerate() {
            assert_eq!(row[0].parse::<usize>().unwrap(), t);
            let total: usize = (1..4).map(|c| row[c].parse::<usize>().unwrap()).sum();
            assert_eq!(total, 3);
        }

        // output_interval = 2 → snapshots at ticks 0, 2, 4 (3 ticks × 3 agents).
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9, "expected 9 snapshot rows, got {}", rows.len());
    }

    #[test]
    fn csv_counts_match_series() {
        let dir = tmp();
        let mut sim = SimBuilder::new(
            SimConfig { total_ticks: 40, ..config() },
            EpidemicParams::default(),
        )
        .build()
        .unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let mut replay = SimBuilder::new(
            SimConfig { total_ticks: 40, ..config() },
            EpidemicParams::default(),
        )
        .build()
        .unwrap();
        let mut series = SeriesRecorder::new();
        replay.run(&mut series);

        let mut rdr = csv::Reader::from_path(dir.path().join("sir_counts.csv")).unwrap();
        let written: Vec<(usize, usize, usize)> = rdr
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[1].parse().unwrap(), r[2].parse().unwrap(), r[3].parse().unwrap())
            })
            .collect();
        assert_eq!(written, series.counts());
    }

    #[test]
    fn first_error_kept_and_writer_finished() {
        let mut sim = SimBuilder::new(config(), params()).build().unwrap();
        let mut obs = SimOutputObserver::new(FailingWriter::default());
        sim.run(&mut obs);

        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("disk full at 0"), "{err}");
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.attempts, 6);
        assert!(writer.finished);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use sir_core::{EpidemicParams, HealthState, SimConfig};
    use sir_sim::SimBuilder;
    use tempfile::TempDir;

    use crate::observer::SimOutputObserver;
    use crate::row::{AgentSnapshotRow, SirCountRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn open(dir: &TempDir) -> rusqlite::Connection {
        rusqlite::Connection::open(dir.path().join("output.db")).unwrap()
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_state_stored_as_letter() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[
            AgentSnapshotRow { agent_id: 0, tick: 0, x: 1.0, y: 2.0, state: HealthState::Infected },
            AgentSnapshotRow { agent_id: 1, tick: 0, x: 3.0, y: 4.0, state: HealthState::Recovered },
        ])
        .unwrap();
        w.finish().unwrap();

        let conn = open(&dir);
        let state: String = conn
            .query_row("SELECT state FROM agent_snapshots WHERE agent_id = 1", [], |r| r.get(0))
            .unwrap();
        assert_eq!(state, "R");
        let x: f64 = conn
            .query_row("SELECT x FROM agent_snapshots WHERE agent_id = 0", [], |r| r.get(0))
            .unwrap();
        assert_eq!(x, 1.0);
    }

    #[test]
    fn sqlite_duplicate_step_rejected() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let row = SirCountRow { tick: 4, susceptible: 1, infected: 1, recovered: 1 };
        w.write_counts(&row).unwrap();
        assert!(w.write_counts(&row).is_err());
    }

    #[test]
    fn sqlite_finish_idempotent() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn integration_sqlite() {
        let config = SimConfig { total_ticks: 6, seed: 1, step_interval: 1, output_interval_ticks: 2 };
        let params = EpidemicParams { population: 3, ..EpidemicParams::default() };
        let mut sim = SimBuilder::new(config, params).build().unwrap();

        let dir = tmp();
        let mut obs = SimOutputObserver::new(SqliteWriter::new(dir.path()).unwrap());
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let conn = open(&dir);
        let counts: i64 = conn
            .query_row("SELECT COUNT(*) FROM sir_counts", [], |r| r.get(0))
            .unwrap();
        assert_eq!(counts, 6);
        let snaps: i64 = conn
            .query_row("SELECT COUNT(*) FROM agent_snapshots", [], |r| r.get(0))
            .unwrap();
        assert_eq!(snaps, 9);
        let bad: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sir_counts WHERE susceptible + infected + recovered != 3",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(bad, 0);
    }
}
