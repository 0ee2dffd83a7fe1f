//! Sweep configuration.

use cc_core::SimConfig;
use cc_regen::{DEFAULT_CONFIDENCE, RegenerationState, is_valid_confidence};

use crate::{SweepError, SweepResult};

/// Staffing levels to try and how to analyse each run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SweepConfig {
    /// Template for every run.  `agent_capacity` is overwritten per level and
    /// `seed` is the base from which per-level seeds are derived.
    pub base: SimConfig,

    /// First agent count (inclusive).
    pub min_agents: usize,

    /// Last agent count (exclusive).
    pub max_agents: usize,

    /// Two-sided confidence level of the reported intervals.
    pub confidence: f64,

    /// Regeneration point used to cut each run into cycles.  Defaults to
    /// [`RegenerationState::Saturated`]: at realistic staffing the system is
    /// almost never fully idle, so `Empty` would yield a single cycle.
    pub regeneration: RegenerationState,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            base:         SimConfig::default(),
            min_agents:   60,
            max_agents:   70,
            confidence:   DEFAULT_CONFIDENCE,
            regeneration: RegenerationState::Saturated,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> SweepResult<()> {
        if self.min_agents >= self.max_agents {
            return Err(SweepError::Config(format!(
                "empty staffing range {}..{}",
                self.min_agents, self.max_agents
            )));
        }
        if !is_valid_confidence(self.confidence) {
            return Err(SweepError::Config(format!(
                "confidence must be in (0, 1), got {}",
                self.confidence
            )));
        }
        self.base.validate()?;
        Ok(())
    }

    /// Number of staffing levels in the sweep.
    pub fn len(&self) -> usize {
        self.max_agents.saturating_sub(self.min_agents)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The run configuration for one staffing level.
    pub fn sim_config(&self, agents: usize) -> SimConfig {
        SimConfig {
            agent_capacity: agents,
            ..self.base.clone()
        }
    }
}
