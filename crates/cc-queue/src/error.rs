//! Internal-consistency failures.  None of these are recoverable: they mean
//! the simulation state is corrupt and the run must stop.

use cc_core::{CustomerId, Tick};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueueError {
    #[error("{customer} finalized twice (first exit at {first}, again at {again})")]
    AlreadyFinalized {
        customer: CustomerId,
        first:    Tick,
        again:    Tick,
    },

    #[error("{occupied} agents busy but capacity is {capacity}")]
    CapacityExceeded {
        occupied: usize,
        capacity: usize,
    },

    #[error("{customer} logged as completed without an exit time")]
    NotFinalized { customer: CustomerId },
}

pub type QueueResult<T> = Result<T, QueueError>;
