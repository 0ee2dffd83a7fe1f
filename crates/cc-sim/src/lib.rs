//! `cc-sim` — tick loop driver for the call-center queue simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Arrivals  — age the queue, drop customers out of patience, then add
//!                 the customers arriving this tick.
//!   ② Service   — free finished agents, admit from the front of the queue
//!                 up to free capacity, elapse one tick of service.
//!   ③ Record    — one TickRecord with counts taken after ① and ②.
//!   ④ Check     — busy ≤ capacity, arrived = completed + queued.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cc_core::PatienceKind;
//!
//! let out = cc_sim::run_simulation(86_400, 62, PatienceKind::Uniform)?;
//! println!("abandon rate: {:?}", out.full_run_abandon_rate());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod record;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use record::{SimOutput, TickRecord};
pub use sim::Sim;

use cc_core::{PatienceKind, SimConfig};

/// Run one simulation with the default arrival and service parameters.
pub fn run_simulation(
    ticks:          u64,
    agent_capacity: usize,
    patience:       PatienceKind,
) -> SimResult<SimOutput> {
    let config = SimConfig {
        total_ticks: ticks,
        agent_capacity,
        patience: patience.default_dist(),
        ..SimConfig::default()
    };
    run_with_config(&config)
}

/// Run one simulation to its horizon and return the timeline and exit log.
pub fn run_with_config(config: &SimConfig) -> SimResult<SimOutput> {
    let mut sim = SimBuilder::new(config.clone()).build()?;
    sim.run(&mut NoopObserver)?;
    Ok(sim.into_output())
}
