//! `sir-sim`: tick loop orchestrator for the spatial SIR epidemic engine.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Motion       : drift, reflect off the active bounds, then advance the
//!                    work-period schedule (shrink + relocate, or restore).
//!   ② Transmission : for each infected × in-radius susceptible pair, one
//!                    draw against the zone-aware probability.
//!   ③ Progression  : age infections, isolate a fraction of the infected,
//!                    recover a fraction of those past the threshold.
//!   ④ Count        : S/I/R snapshot to observers.
//! ```
//!
//! All randomness comes from one seeded stream consumed in a fixed order, so
//! a run is reproducible from `(SimConfig, EpidemicParams)` alone.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sir_core::{EpidemicParams, SimConfig};
//! use sir_sim::{SeriesRecorder, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), EpidemicParams::default()).build()?;
//! let mut series = SeriesRecorder::new();
//! sim.run(&mut series);
//! println!("peak: {:?}", series.peak_infected());
//! ```

pub mod builder;
pub mod error;
pub mod motion;
pub mod observer;
pub mod progression;
pub mod sim;
pub mod snapshot;
pub mod transmission;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use motion::{integrate, BoundaryPhase, BoundarySchedule, MotionEngine, MotionReport};
pub use observer::{NoopObserver, SeriesRecorder, SimObserver};
pub use progression::{ProgressionEngine, ProgressionReport};
pub use sim::Sim;
pub use snapshot::SirSnapshot;
pub use transmission::TransmissionEngine;
