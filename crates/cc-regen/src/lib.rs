//! `cc-regen` — steady-state estimates from one long simulation run.
//!
//! # Method
//!
//! The queue *regenerates* whenever it enters a chosen recurring state
//! (by default: nobody waiting, every agent idle, nobody leaving).  The
//! stretches between successive entries are i.i.d. cycles, so for any
//! per-tick reward `R` and per-tick count `L`
//!
//! ```text
//! long-run R per L  =  E[R per cycle] / E[L per cycle]
//! ```
//!
//! [`partition_cycles`] cuts the tick timeline into cycles;
//! [`estimate_steady_state`] forms the ratio estimator over all but the first
//! and last cycle, with a delta-method confidence interval.
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`cycle`]     | `Cycle`, `CycleField`, `RegenerationState`, partition  |
//! | [`estimator`] | `Estimate`, `estimate_steady_state`                    |
//! | [`stats`]     | mean / variance / covariance, normal quantile          |
//! | [`error`]     | `RegenError`, `RegenResult<T>`                         |

pub mod cycle;
pub mod error;
pub mod estimator;
pub mod stats;


pub use cycle::{Cycle, CycleField, RegenerationState, partition_cycles};
pub use error::{RegenError, RegenResult};
pub use estimator::{DEFAULT_CONFIDENCE, Estimate, estimate_steady_state, estimate_with_confidence};
pub use stats::{inv_norm_cdf, is_valid_confidence, z_for_confidence};
