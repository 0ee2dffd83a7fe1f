//! `cc-sweep` — find the staffing level that meets an abandonment target.
//!
//! For every agent count in `min_agents..max_agents` the sweep runs one long
//! simulation, cuts it into regeneration cycles and estimates
//!
//! - the probability of abandonment (abandonments per completion), and
//! - the average wait (total wait per completion),
//!
//! each with a confidence interval, next to the plain whole-run ratios.
//!
//! With the `parallel` feature the staffing levels run concurrently on
//! Rayon's pool.  Every level derives its own seed from the base seed and the
//! agent count, so the rows are identical with or without the feature.
//!
//! ```rust,ignore
//! let rows = cc_sweep::run_sweep(&SweepConfig::default())?;
//! let staff = cc_sweep::recommend_staffing(&rows, 0.05);
//! ```

pub mod config;
pub mod error;
pub mod sweep;

#[cfg(test)]
mod tests;

pub use cc_output::SweepRow;
pub use config::SweepConfig;
pub use error::{SweepError, SweepResult};
pub use sweep::{recommend_staffing, run_point, run_sweep, sweep_to_csv};
