//! `sir-agent`: Structure-of-Arrays population storage for the SIR engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `AgentStore` (SoA arrays), `HealthCensus`                 |
//! | [`builder`]     | `AgentStoreBuilder` (seeded random construction)          |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on `HealthCensus`.       |

pub mod builder;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use store::{AgentStore, HealthCensus};
