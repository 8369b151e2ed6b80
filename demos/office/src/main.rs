//! office: two shopping zones and a daily commute into a shared office block.
//!
//! Runs the same 150-agent town twice with the same seed, once as-is and
//! once with vaccination, and compares the epidemic peaks.
//!
//! ```text
//! cargo run -p office                     # built-in parameters
//! cargo run -p office -- params.json      # EpidemicParams from JSON
//! RUST_LOG=sir_sim=debug cargo run -p office
//! ```

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sir_agent::AgentStore;
use sir_core::{EpidemicParams, SimConfig, Tick, WorkPeriod, Zone};
use sir_output::{CsvWriter, OutputWriter, SimOutputObserver};
use sir_sim::{SeriesRecorder, SimBuilder, SimObserver, SirSnapshot};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                  u64 = 42;
const TOTAL_TICKS:           u64 = 300;
const OUTPUT_INTERVAL_TICKS: u64 = 10;

// ── Scenario observer ─────────────────────────────────────────────────────────

/// Writes CSV output and keeps the series in memory for the summary.
struct ScenarioObserver<W: OutputWriter> {
    output: SimOutputObserver<W>,
    series: SeriesRecorder,
}

impl<W: OutputWriter> SimObserver for ScenarioObserver<W> {
    fn on_tick_end(&mut self, snapshot: &SirSnapshot) {
        self.output.on_tick_end(snapshot);
        self.series.on_tick_end(snapshot);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        self.output.on_snapshot(tick, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.output.on_sim_end(final_tick);
    }
}

// ── Parameters ────────────────────────────────────────────────────────────────

fn town_params() -> EpidemicParams {
    EpidemicParams {
        zones: vec![
            // Grocery store, north-west.
            Zone::new(80.0, 60.0, 120.0, 90.0),
            // Mall, south-east.
            Zone::new(560.0, 420.0, 160.0, 110.0),
        ],
        work_period: Some(WorkPeriod::default()),
        ..EpidemicParams::default()
    }
}

fn load_params(path: &str) -> Result<EpidemicParams> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

// ── Scenario ──────────────────────────────────────────────────────────────────

struct Outcome {
    peak:       Option<(Tick, usize)>,
    final_row:  Option<SirSnapshot>,
    elapsed_ms: f64,
}

fn run_scenario(name: &str, params: EpidemicParams) -> Result<Outcome> {
    let config = SimConfig {
        total_ticks:           TOTAL_TICKS,
        seed:                  SEED,
        step_interval:         1,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
    };
    let mut sim = SimBuilder::new(config, params).build()?;

    let dir = Path::new("output").join(name);
    let writer = CsvWriter::new(&dir)?;
    let mut obs = ScenarioObserver {
        output: SimOutputObserver::new(writer),
        series: SeriesRecorder::new(),
    };

    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    if let Some(e) = obs.output.take_error() {
        return Err(e).with_context(|| format!("writing {}", dir.display()));
    }
    info!(scenario = name, dir = %dir.display(), "output written");

    Ok(Outcome {
        peak: obs.series.peak_infected(),
        final_row: obs.series.series.last().copied(),
        elapsed_ms,
    })
}

fn print_outcome(name: &str, outcome: &Outcome) {
    match outcome.peak {
        Some((tick, infected)) => println!("{name:<12} peak I = {infected:>4} at {tick}"),
        None => println!("{name:<12} no ticks run"),
    }
    if let Some(last) = outcome.final_row {
        println!(
            "{:<12} final S/I/R = {}/{}/{}  ({:.1} ms)",
            "", last.susceptible, last.infected, last.recovered, outcome.elapsed_ms
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let baseline = match std::env::args().nth(1) {
        Some(path) => load_params(&path)?,
        None => town_params(),
    };

    println!("=== office: spatial SIR ===");
    println!(
        "Agents: {}  |  Domain: {}  |  Zones: {}  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}",
        baseline.population,
        baseline.domain,
        baseline.zones.len()
    );
    println!();

    let mut vaccinated = baseline.clone();
    vaccinated.vaccination.enabled = true;

    let plain = run_scenario("baseline", baseline)?;
    let vacc = run_scenario("vaccinated", vaccinated)?;

    print_outcome("baseline", &plain);
    print_outcome("vaccinated", &vacc);

    if let (Some((_, a)), Some((_, b))) = (plain.peak, vacc.peak) {
        println!();
        println!("Vaccination changed the peak by {:+}", b as i64 - a as i64);
    }

    Ok(())
}
