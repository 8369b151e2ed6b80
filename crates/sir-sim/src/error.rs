use sir_core::SirError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid parameters: {0}")]
    Params(#[from] SirError),

    #[error("agent store holds {got} agents but the population is {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("agent store `{field}` has {got} entries but count is {expected}")]
    StoreLengthMismatch {
        field:    &'static str,
        expected: usize,
        got:      usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
