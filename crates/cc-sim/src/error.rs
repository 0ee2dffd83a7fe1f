use cc_core::{CcError, Tick};
use cc_queue::QueueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CcError),

    #[error("queue state corrupted: {0}")]
    Queue(#[from] QueueError),

    #[error("invariant violated at {tick}: {what}")]
    Invariant {
        tick: Tick,
        what: String,
    },
}

pub type SimResult<T> = Result<T, SimError>;
