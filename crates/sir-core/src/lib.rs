//! `sir-core`: foundational types for the spatial SIR epidemic engine.
//!
//! This crate is a dependency of every other `sir-*` crate.  It has no
//! `sir-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Point`, `Velocity`, `Extent`                         |
//! | [`zone`]        | `Zone`, `ZoneRegistry`                                |
//! | [`health`]      | `HealthState`                                         |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`params`]      | `EpidemicParams`, `WorkPeriod`, interventions         |
//! | [`rng`]         | `SimRng` (the single run-wide stream)                 |
//! | [`error`]       | `SirError`, `SirResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod health;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;
pub mod zone;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SirError, SirResult};
pub use geo::{Extent, Point, Velocity};
pub use health::HealthState;
pub use ids::AgentId;
pub use params::{EpidemicParams, Isolation, Vaccination, WorkPeriod};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
pub use zone::{Zone, ZoneRegistry};
