//! Engine error type.
//!
//! Every error the engine can produce is a configuration error raised while a
//! run is being built.  Once a `Sim` exists, stepping is infallible.

use thiserror::Error;

/// The top-level error type for `sir-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SirError {
    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("zone {index} is invalid: {reason}")]
    InvalidZone { index: usize, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `sir-*` crates.
pub type SirResult<T> = Result<T, SirError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Reject anything outside `[0, 1]` (NaN included).
pub(crate) fn check_probability(name: &'static str, value: f64) -> SirResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SirError::ProbabilityOutOfRange { name, value })
    }
}

/// Reject zero, negative, NaN, and infinite values.
pub(crate) fn check_positive(name: &'static str, value: f64) -> SirResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SirError::NotPositive { name, value })
    }
}

/// Reject negative, NaN, and infinite values.  Zero is allowed.
pub(crate) fn check_non_negative(name: &'static str, value: f64) -> SirResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SirError::Negative { name, value })
    }
}
