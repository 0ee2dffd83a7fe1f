//! Cutting the tick timeline into regeneration cycles.

use std::fmt;

use cc_core::Tick;
use cc_sim::TickRecord;
use tracing::debug;

/// Which recurring state marks a regeneration point.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RegenerationState {
    /// Queue empty, every agent idle, nobody left the queue this tick.
    #[default]
    Empty,
    /// Queue empty, every agent busy, nobody left the queue this tick.
    ///
    /// At heavy load the empty state is almost never visited, while this
    /// boundary recurs constantly.
    Saturated,
}

impl RegenerationState {
    /// Whether `record` is in this state.
    #[inline]
    pub fn matches(self, record: &TickRecord) -> bool {
        let agents_ok = match self {
            RegenerationState::Empty     => record.busy_agents == 0,
            RegenerationState::Saturated => record.available_agents == 0,
        };
        record.queue_len == 0 && agents_ok && record.completions == 0
    }
}

/// A per-cycle quantity that can serve as reward or as cycle length.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CycleField {
    Arrivals,
    TotalWait,
    Completions,
    Abandonments,
    /// Number of ticks in the cycle.
    Ticks,
}

impl CycleField {
    pub fn as_str(self) -> &'static str {
        match self {
            CycleField::Arrivals     => "arrivals",
            CycleField::TotalWait    => "total_wait",
            CycleField::Completions  => "completions",
            CycleField::Abandonments => "abandonments",
            CycleField::Ticks        => "ticks",
        }
    }
}

impl fmt::Display for CycleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregates over one contiguous run of ticks.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Cycle {
    /// Position of this cycle in the partition (0 = leading segment).
    pub index:        usize,
    pub start_tick:   Tick,
    pub ticks:        u64,
    pub arrivals:     u64,
    pub total_wait:   u64,
    pub completions:  u64,
    pub abandonments: u64,
}

impl Cycle {
    fn starting_at(index: usize, start_tick: Tick) -> Self {
        Self {
            index,
            start_tick,
            ticks:        0,
            arrivals:     0,
            total_wait:   0,
            completions:  0,
            abandonments: 0,
        }
    }

    fn absorb(&mut self, record: &TickRecord) {
        self.ticks += 1;
        self.arrivals += record.arrivals;
        self.total_wait += record.total_wait;
        self.completions += record.completions;
        self.abandonments += record.abandonments;
    }

    /// First tick after the cycle.
    pub fn end_tick(&self) -> Tick {
        self.start_tick + self.ticks
    }

    pub fn field(&self, field: CycleField) -> f64 {
        let v = match field {
            CycleField::Arrivals     => self.arrivals,
            CycleField::TotalWait    => self.total_wait,
            CycleField::Completions  => self.completions,
            CycleField::Abandonments => self.abandonments,
            CycleField::Ticks        => self.ticks,
        };
        v as f64
    }
}

/// Split `records` into regeneration cycles.
///
/// A cycle starts at every tick in `state` whose predecessor was not in
/// `state`, including the very first tick.  Every tick belongs to exactly
/// one cycle and cycles are returned in tick order, so concatenating them
/// reconstructs `records`.
///
/// The ticks before the first regeneration point always form cycle 0.  If
/// `records` itself begins in `state`, cycle 0 is empty (zero ticks); it is
/// still returned so that callers can drop "the first cycle" uniformly.  If
/// the state is never reached the result is that single leading cycle.
///
/// Returns the cycles and their count.
pub fn partition_cycles(records: &[TickRecord], state: RegenerationState) -> (Vec<Cycle>, usize) {
    let Some(first) = records.first() else {
        return (Vec::new(), 0);
    };

    let mut cycles = Vec::new();
    let mut current = Cycle::starting_at(0, first.tick);
    let mut prev_in_state = false;

    for record in records {
        let in_state = state.matches(record);
        if in_state && !prev_in_state {
            let next = Cycle::starting_at(current.index + 1, record.tick);
            cycles.push(std::mem::replace(&mut current, next));
        }
        current.absorb(record);
        prev_in_state = in_state;
    }
    cycles.push(current);

    debug!(ticks = records.len(), cycles = cycles.len(), ?state, "partitioned timeline");
    let count = cycles.len();
    (cycles, count)
}
