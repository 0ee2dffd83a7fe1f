//! Per-run simulation configuration.

use crate::{CcError, CcResult, InterarrivalDist, PatienceDist, ServiceDist, SimRng, Tick};

/// Everything needed to reproduce one simulation run.
///
/// Typically built from [`SimConfig::default`] with a few fields overridden,
/// or deserialized from JSON by the application crate (with the `serde`
/// feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total ticks to simulate.  One day at one tick per second: 86 400.
    pub total_ticks: u64,

    /// Number of agents (service capacity `C`).  Zero is allowed: nobody is
    /// ever served and every customer eventually abandons.
    pub agent_capacity: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    pub arrival:  InterarrivalDist,
    pub patience: PatienceDist,
    pub service:  ServiceDist,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:    86_400,
            agent_capacity: 60,
            seed:           42,
            arrival:        InterarrivalDist::default(),
            patience:       PatienceDist::default(),
            service:        ServiceDist::default(),
        }
    }
}

impl SimConfig {
    /// Fail fast on anything that would make the run meaningless.
    pub fn validate(&self) -> CcResult<()> {
        if self.total_ticks == 0 {
            return Err(CcError::Config("total_ticks must be positive".into()));
        }
        self.arrival.validate()?;
        self.patience.validate()?;
        self.service.validate()
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct the root random stream for this run.
    pub fn make_rng(&self) -> SimRng {
        SimRng::new(self.seed)
    }
}
