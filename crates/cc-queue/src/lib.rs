//! `cc-queue` — the state that one simulation tick mutates.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`customer`]  | `Customer`, `ExitKind`                                   |
//! | [`agent`]     | `AgentSlot`                                              |
//! | [`queue`]     | `CustomerQueue` (FIFO, ages every member each tick)      |
//! | [`completed`] | `CompletedLog`, `ExitSummary`                            |
//! | [`arrivals`]  | `ArrivalProcess` — abandonment, then new arrivals        |
//! | [`service`]   | `ServicePool` — free, admit FIFO, elapse one tick        |
//! | [`error`]     | `QueueError`, `QueueResult<T>`                           |
//!
//! # Ownership
//!
//! The driver owns one `CustomerQueue` and one `CompletedLog` and lends them
//! by `&mut` to [`ArrivalProcess::advance`] and then [`ServicePool::serve`].
//! Neither component stores a reference to either collection, so they never
//! alias each other's view of the queue.

pub mod agent;
pub mod arrivals;
pub mod completed;
pub mod customer;
pub mod error;
pub mod queue;
pub mod service;

#[cfg(test)]
mod tests;

pub use agent::AgentSlot;
pub use arrivals::{ArrivalProcess, MAX_ARRIVALS_PER_TICK};
pub use completed::{CompletedLog, ExitSummary};
pub use customer::{Customer, ExitKind};
pub use error::{QueueError, QueueResult};
pub use queue::CustomerQueue;
pub use service::ServicePool;
