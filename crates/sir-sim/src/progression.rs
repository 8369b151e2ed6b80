//! Progression & intervention engine: infection ageing, isolation, and
//! natural recovery.

use sir_agent::AgentStore;
use sir_core::{AgentId, EpidemicParams, HealthState, SimRng};

/// What the progression engine did during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressionReport {
    /// Removed to `Recovered` by isolation.
    pub isolated: usize,
    /// Recovered after reaching the recovery threshold.
    pub recovered: usize,
}

impl ProgressionReport {
    #[inline]
    pub fn removed(&self) -> usize {
        self.isolated + self.recovered
    }
}

#[derive(Clone, Debug)]
pub struct ProgressionEngine {
    step_interval: u32,
    recovery_threshold: u32,
    recovery_fraction: f64,
    /// `Some(fraction)` when isolation is enabled.
    isolation: Option<f64>,
}

impl ProgressionEngine {
    pub fn new(step_interval: u32, params: &EpidemicParams) -> Self {
        Self {
            step_interval,
            recovery_threshold: params.recovery_threshold,
            recovery_fraction: params.recovery_fraction,
            isolation: params.isolation.enabled.then_some(params.isolation.fraction),
        }
    }

    /// Age infections, then isolation, then natural recovery.
    pub fn step(&self, store: &mut AgentStore, rng: &mut SimRng) -> ProgressionReport {
        for (state, duration) in store.health.iter().zip(store.infection_duration.iter_mut()) {
            if *state == HealthState::Infected {
                *duration = duration.saturating_add(self.step_interval);
            }
        }

        let isolated = match self.isolation {
            Some(fraction) => {
                let infected = store.ids_in(HealthState::Infected);
                remove_sample(store, &infected, fraction, rng)
            }
            None => 0,
        };

        let eligible: Vec<AgentId> = store
            .ids_in(HealthState::Infected)
            .into_iter()
            .filter(|a| store.infection_duration[a.index()] >= self.recovery_threshold)
            .collect();
        let recovered = remove_sample(store, &eligible, self.recovery_fraction, rng);

        ProgressionReport { isolated, recovered }
    }
}

/// Recover a random `fraction` of `pool` (without replacement).
fn remove_sample(
    store:    &mut AgentStore,
    pool:     &[AgentId],
    fraction: f64,
    rng:      &mut SimRng,
) -> usize {
    let k = rng.sample_size(pool.len(), fraction);
    if k == 0 {
        return 0;
    }
    let mut removed = 0;
    for i in rng.sample_indices(pool.len(), k) {
        if store.recover(pool[i]) {
            removed += 1;
        }
    }
    removed
}
