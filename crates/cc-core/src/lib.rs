//! `cc-core` — foundational types for the call-center queue simulator.
//!
//! This crate is a dependency of every other `cc-*` crate.  It has no `cc-*`
//! dependencies and only a few external ones (`rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `CustomerId`                                              |
//! | [`time`]    | `Tick`                                                    |
//! | [`rng`]     | `SimRng` (one explicit stream per run)                    |
//! | [`dists`]   | `InterarrivalDist`, `PatienceDist`, `ServiceDist`         |
//! | [`config`]  | `SimConfig`                                               |
//! | [`error`]   | `CcError`, `CcResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and distributions.|

pub mod config;
pub mod dists;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use dists::{InterarrivalDist, PatienceDist, PatienceKind, ServiceDist, UNLIMITED_PATIENCE};
pub use error::{CcError, CcResult};
pub use ids::CustomerId;
pub use rng::SimRng;
pub use time::Tick;
