//! Plain data row types written by output backends.

use cc_queue::Customer;
use cc_regen::{Cycle, Estimate};

/// One customer that left the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerRow {
    pub customer_id:  u32,
    pub arrival_tick: u64,
    pub exit_tick:    u64,
    pub wait:         u64,
    pub abandoned:    bool,
}

impl CustomerRow {
    /// `None` for a customer still waiting.
    pub fn from_customer(customer: &Customer) -> Option<Self> {
        let exit = customer.exit_time()?;
        Some(Self {
            customer_id:  customer.id.0,
            arrival_tick: customer.arrival_time.0,
            exit_tick:    exit.0,
            wait:         exit.since(customer.arrival_time),
            abandoned:    customer.abandoned(),
        })
    }
}

/// Aggregates of one regeneration cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleRow {
    pub cycle:        u64,
    pub start_tick:   u64,
    pub ticks:        u64,
    pub arrivals:     u64,
    pub total_wait:   u64,
    pub completions:  u64,
    pub abandonments: u64,
}

impl From<&Cycle> for CycleRow {
    fn from(c: &Cycle) -> Self {
        Self {
            cycle:        c.index as u64,
            start_tick:   c.start_tick.0,
            ticks:        c.ticks,
            arrivals:     c.arrivals,
            total_wait:   c.total_wait,
            completions:  c.completions,
            abandonments: c.abandonments,
        }
    }
}

/// Results for one staffing level.
///
/// Estimates are `None` when the run had too few regeneration cycles;
/// full-run ratios are `None` when nobody left the queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    pub agents:                usize,
    pub prob_abandon:          Option<Estimate>,
    pub avg_wait:              Option<Estimate>,
    /// Number of cycles the timeline was partitioned into.
    pub cycles:                usize,
    pub full_run_prob_abandon: Option<f64>,
    pub full_run_avg_wait:     Option<f64>,
}
