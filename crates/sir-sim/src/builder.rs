//! Fluent builder for constructing a [`Sim`].

use sir_agent::{AgentStore, AgentStoreBuilder};
use sir_core::{EpidemicParams, SimConfig, SimRng};
use tracing::info;

use crate::{
    MotionEngine, ProgressionEngine, Sim, SimError, SimResult, TransmissionEngine,
};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total ticks, seed, step interval, snapshot interval
/// - [`EpidemicParams`]: population, domain, disease, zones, interventions
///
/// # Optional inputs
///
/// | Method          | Default                                              |
/// |-----------------|------------------------------------------------------|
/// | `.agents(s)`    | Random population from `AgentStoreBuilder::from_params`, drawn from the run's RNG |
///
/// Every parameter is validated in [`build`](Self::build); a run never fails
/// after it starts.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default(), EpidemicParams::default())
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config: SimConfig,
    params: EpidemicParams,
    agents: Option<AgentStore>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, params: EpidemicParams) -> Self {
        Self { config, params, agents: None }
    }

    /// Supply a pre-built population instead of a random one.  Its `count` must
    /// equal `params.population` and every column must hold `count` entries.
    /// No RNG draws are spent on placement.
    pub fn agents(mut self, agents: AgentStore) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Validate inputs, seed the RNG, build the engines, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        self.params.validate()?;

        let mut rng = SimRng::new(self.config.seed);

        let agents = match self.agents {
            Some(store) => {
                if store.count != self.params.population {
                    return Err(SimError::AgentCountMismatch {
                        expected: self.params.population,
                        got:      store.count,
                    });
                }
                check_store_lengths(&store)?;
                store
            }
            None => AgentStoreBuilder::from_params(&self.params).build(&mut rng),
        };

        let motion = MotionEngine::from_params(&self.params);
        let transmission = TransmissionEngine::from_params(&self.params)?;
        let progression = ProgressionEngine::new(self.config.step_interval, &self.params);

        let census = agents.census();
        info!(
            agents = agents.count,
            infected = census.infected,
            zones = transmission.zones().len(),
            work_period = self.params.work_period.is_some(),
            vaccination = self.params.vaccination.enabled,
            isolation = self.params.isolation.enabled,
            "simulation built"
        );

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            params: self.params,
            agents,
            rng,
            motion,
            transmission,
            progression,
        })
    }
}

/// Every SoA column must hold exactly `count` entries.
fn check_store_lengths(store: &AgentStore) -> SimResult<()> {
    let columns = [
        ("position", store.position.len()),
        ("velocity", store.velocity.len()),
        ("health", store.health.len()),
        ("infection_duration", store.infection_duration.len()),
    ];
    for (field, got) in columns {
        if got != store.count {
            return Err(SimError::StoreLengthMismatch { field, expected: store.count, got });
        }
    }
    Ok(())
}
