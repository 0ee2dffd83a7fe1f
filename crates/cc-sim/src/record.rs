//! Per-tick summary rows and the finished run's output.

use cc_core::Tick;
use cc_queue::{Customer, ExitSummary};

/// System state after both phases of one tick.
///
/// `completions`, `total_wait` and `abandonments` count customers whose exit
/// time is this tick (served customers exit when admitted to an agent).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TickRecord {
    pub tick:             Tick,
    pub arrivals:         u64,
    pub queue_len:        u64,
    pub available_agents: u64,
    pub busy_agents:      u64,
    pub completions:      u64,
    pub total_wait:       u64,
    pub abandonments:     u64,
}

impl TickRecord {
    pub(crate) fn new(
        tick:      Tick,
        arrivals:  usize,
        queue_len: usize,
        available: usize,
        busy:      usize,
        exits:     ExitSummary,
    ) -> Self {
        Self {
            tick,
            arrivals:         arrivals as u64,
            queue_len:        queue_len as u64,
            available_agents: available as u64,
            busy_agents:      busy as u64,
            completions:      exits.completions,
            total_wait:       exits.total_wait,
            abandonments:     exits.abandonments,
        }
    }
}

/// Everything a finished run hands to its collaborators.
#[derive(Clone, Debug, Default)]
pub struct SimOutput {
    /// One record per simulated tick, in tick order.
    pub records:   Vec<TickRecord>,
    /// Every customer that left the queue, in exit order.
    pub completed: Vec<Customer>,
    /// Customers still waiting when the horizon was reached.
    pub queued:    Vec<Customer>,
}

impl SimOutput {
    pub fn total_arrivals(&self) -> u64 {
        self.records.iter().map(|r| r.arrivals).sum()
    }

    pub fn total_completions(&self) -> u64 {
        self.records.iter().map(|r| r.completions).sum()
    }

    /// Abandonments / completions over the whole run, ignoring cycle
    /// structure.  `None` if nobody left the queue.
    pub fn full_run_abandon_rate(&self) -> Option<f64> {
        let completions = self.total_completions();
        let abandons: u64 = self.records.iter().map(|r| r.abandonments).sum();
        (completions > 0).then(|| abandons as f64 / completions as f64)
    }

    /// Mean queue wait per completed customer over the whole run.
    pub fn full_run_mean_wait(&self) -> Option<f64> {
        let completions = self.total_completions();
        let wait: u64 = self.records.iter().map(|r| r.total_wait).sum();
        (completions > 0).then(|| wait as f64 / completions as f64)
    }
}
