//! Disease, environment, and intervention parameters.
//!
//! Every field has a default; applications typically start from
//! `EpidemicParams::default()` and override a handful of fields, or load the
//! whole struct from JSON/TOML with the `serde` feature.  Call
//! [`EpidemicParams::validate`] before building a run; `SimBuilder` does so
//! automatically.

use crate::error::{check_non_negative, check_positive, check_probability, SirError, SirResult};
use crate::geo::Extent;
use crate::zone::{Zone, ZoneRegistry};

// ── Work period schedule ──────────────────────────────────────────────────────

/// Periodic shrink of the active domain ("everyone goes to work").
///
/// The countdown starts at `interval`.  On every tick where it is `<= 0` the
/// active bounds shrink to `domain × (width_fraction, height_fraction)` and
/// the countdown resets; on every other tick the bounds return to the full
/// domain and the countdown drops by `interval × decrement_fraction`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorkPeriod {
    pub interval: f64,
    pub decrement_fraction: f64,
    pub width_fraction: f64,
    pub height_fraction: f64,
}

impl Default for WorkPeriod {
    fn default() -> Self {
        Self {
            interval:           3.0,
            decrement_fraction: 1.0 / 3.0,
            width_fraction:     0.5,
            height_fraction:    0.5,
        }
    }
}

impl WorkPeriod {
    /// Countdown decrement applied on non-work ticks.
    #[inline]
    pub fn decrement(&self) -> f64 {
        self.interval * self.decrement_fraction
    }

    fn validate(&self) -> SirResult<()> {
        check_positive("work_period.interval", self.interval)?;
        check_positive("work_period.decrement_fraction", self.decrement_fraction)?;
        for (name, value) in [
            ("work_period.width_fraction", self.width_fraction),
            ("work_period.height_fraction", self.height_fraction),
        ] {
            check_positive(name, value)?;
            check_probability(name, value)?;
        }
        Ok(())
    }
}

// ── Interventions ─────────────────────────────────────────────────────────────

/// Whole-run reduction of the baseline transmission probability.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Vaccination {
    pub enabled: bool,
    pub multiplier: f64,
}

impl Default for Vaccination {
    fn default() -> Self {
        Self { enabled: false, multiplier: 0.595 }
    }
}

/// Per-tick removal of a fraction of the infected population to `Recovered`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Isolation {
    pub enabled: bool,
    pub fraction: f64,
}

impl Default for Isolation {
    fn default() -> Self {
        Self { enabled: false, fraction: 0.00375 }
    }
}

// ── EpidemicParams ────────────────────────────────────────────────────────────

/// Everything that shapes the epidemic dynamics of one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EpidemicParams {
    /// Number of agents.  Fixed for the run.
    pub population: usize,

    /// Full domain; agents live in `[0, width] × [0, height]`.
    pub domain: Extent,

    /// Velocity components are drawn uniformly from `[-max_speed, max_speed]`.
    pub max_speed: f64,

    /// Pairs strictly closer than this may transmit.
    pub infection_radius: f64,

    /// Per-contact, per-tick transmission probability outside zones.
    pub base_probability: f64,

    /// Infection duration (time units) after which natural recovery applies.
    pub recovery_threshold: u32,

    /// Fraction of the population infected at t = 0.
    pub initial_infected_fraction: f64,

    pub zones: Vec<Zone>,

    /// Probability multiplier when both agents share a zone.  The product is
    /// capped at 1.
    pub zone_multiplier: f64,

    /// `None` keeps the active bounds at the full domain for the whole run.
    pub work_period: Option<WorkPeriod>,

    pub vaccination: Vaccination,

    pub isolation: Isolation,

    /// Fraction of recovery-eligible agents that recover each tick.
    pub recovery_fraction: f64,
}

impl Default for EpidemicParams {
    fn default() -> Self {
        Self {
            population:                150,
            domain:                    Extent::new(800.0, 600.0),
            max_speed:                 1.2,
            infection_radius:          10.0,
            base_probability:          0.12,
            recovery_threshold:        50,
            initial_infected_fraction: 0.01,
            zones:                     Vec::new(),
            zone_multiplier:           1.32,
            work_period:               Some(WorkPeriod::default()),
            vaccination:               Vaccination::default(),
            isolation:                 Isolation::default(),
            recovery_fraction:         0.10,
        }
    }
}

impl EpidemicParams {
    /// Check every parameter; the first violation is returned.
    pub fn validate(&self) -> SirResult<()> {
        if self.population == 0 {
            return Err(SirError::Config("population must be at least 1".into()));
        }
        check_positive("domain.width", self.domain.width)?;
        check_positive("domain.height", self.domain.height)?;
        check_non_negative("max_speed", self.max_speed)?;
        check_non_negative("infection_radius", self.infection_radius)?;
        check_probability("base_probability", self.base_probability)?;
        check_probability("initial_infected_fraction", self.initial_infected_fraction)?;
        check_non_negative("zone_multiplier", self.zone_multiplier)?;
        check_probability("vaccination.multiplier", self.vaccination.multiplier)?;
        check_probability("isolation.fraction", self.isolation.fraction)?;
        check_probability("recovery_fraction", self.recovery_fraction)?;
        if let Some(work) = &self.work_period {
            work.validate()?;
        }
        ZoneRegistry::new(self.zones.clone())?;
        Ok(())
    }

    /// Baseline transmission probability after interventions.
    pub fn baseline_probability(&self) -> f64 {
        if self.vaccination.enabled {
            self.base_probability * self.vaccination.multiplier
        } else {
            self.base_probability
        }
    }

    /// Transmission probability for a pair sharing a zone.
    pub fn zone_probability(&self) -> f64 {
        (self.baseline_probability() * self.zone_multiplier).min(1.0)
    }

    /// Number of agents seeded `Infected` at t = 0.
    pub fn initial_infected_count(&self) -> usize {
        let n = (self.initial_infected_fraction * self.population as f64).round() as usize;
        n.min(self.population)
    }

    /// Active bounds during a work period, if the schedule is enabled.
    pub fn work_extent(&self) -> Option<Extent> {
        self.work_period
            .as_ref()
            .map(|w| self.domain.scaled(w.width_fraction, w.height_fraction))
    }
}
