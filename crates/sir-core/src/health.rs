//! Disease compartment of an agent.

/// SIR compartment.  The only legal transitions are
/// `Susceptible → Infected` and `Infected → Recovered`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthState {
    #[default]
    Susceptible,
    Infected,
    Recovered,
}

impl HealthState {
    /// `true` if moving from `self` to `next` is a legal lifecycle edge.
    #[inline]
    pub fn can_become(self, next: HealthState) -> bool {
        matches!(
            (self, next),
            (HealthState::Susceptible, HealthState::Infected)
                | (HealthState::Infected, HealthState::Recovered)
        )
    }

    /// Single-letter label, used as the CSV column value.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Susceptible => "S",
            HealthState::Infected    => "I",
            HealthState::Recovered   => "R",
        }
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
