//! The `Sim` struct and its tick loop.

use cc_core::{SimConfig, Tick};
use cc_queue::{ArrivalProcess, CompletedLog, CustomerQueue, ExitSummary, ServicePool};
use tracing::{debug, trace};

use crate::{SimError, SimObserver, SimOutput, SimResult, TickRecord};

/// The main simulation runner.
///
/// `Sim` owns all simulation state.  Each tick it lends the queue and the
/// completed log to the arrival process and then to the service pool, in
/// that fixed order, and appends one [`TickRecord`].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,

    /// The next tick to be processed.
    pub now: Tick,

    /// Customers waiting for an agent, in arrival order.
    pub queue: CustomerQueue,

    /// Customers that have left the queue, in exit order.
    pub completed: CompletedLog,

    pub arrivals: ArrivalProcess,
    pub pool:     ServicePool,

    pub(crate) records: Vec<TickRecord>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        debug!(
            ticks    = self.config.total_ticks,
            capacity = self.config.agent_capacity,
            seed     = self.config.seed,
            "simulation start"
        );
        while self.now < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.now);
        debug!(
            arrived   = self.arrivals.arrived_total(),
            completed = self.completed.len(),
            abandoned = self.completed.abandoned_count(),
            queued    = self.queue.len(),
            "simulation end"
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Records of every tick processed so far.
    pub fn records(&self) -> &[TickRecord] {
        &self.records
    }

    /// Consume the simulator and hand back its timeline and exit log.
    pub fn into_output(self) -> SimOutput {
        SimOutput {
            records:   self.records,
            completed: self.completed.into_vec(),
            queued:    self.queue.iter().cloned().collect(),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.now;
        observer.on_tick_start(now);
        let record = self.process_tick(now)?;
        observer.on_tick_end(&record);
        self.records.push(record);
        self.now = now.next();
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<TickRecord> {
        let log_start = self.completed.len();

        // ── Phase 1: abandonment, then arrivals ───────────────────────────
        let arrived = self.arrivals.advance(&mut self.queue, now, &mut self.completed)?;

        // ── Phase 2: free, admit, elapse ──────────────────────────────────
        self.pool.serve(&mut self.queue, now, &mut self.completed)?;

        // ── Phase 3: record ───────────────────────────────────────────────
        let exits = ExitSummary::from_customers(self.completed.since(log_start));
        let record = TickRecord::new(
            now,
            arrived,
            self.queue.len(),
            self.pool.available(),
            self.pool.occupied(),
            exits,
        );

        // ── Phase 4: internal consistency ─────────────────────────────────
        self.check_invariants(now)?;

        trace!(
            tick      = now.0,
            arrived,
            queue     = record.queue_len,
            busy      = record.busy_agents,
            completed = record.completions,
            abandoned = record.abandonments,
            "tick"
        );
        Ok(record)
    }

    fn check_invariants(&self, now: Tick) -> SimResult<()> {
        if self.pool.occupied() > self.pool.capacity() {
            return Err(SimError::Invariant {
                tick: now,
                what: format!(
                    "{} agents busy with capacity {}",
                    self.pool.occupied(),
                    self.pool.capacity()
                ),
            });
        }

        let accounted = (self.completed.len() + self.queue.len()) as u64;
        if accounted != self.arrivals.arrived_total() {
            return Err(SimError::Invariant {
                tick: now,
                what: format!(
                    "{} customers arrived but {} completed + {} queued",
                    self.arrivals.arrived_total(),
                    self.completed.len(),
                    self.queue.len()
                ),
            });
        }
        Ok(())
    }
}
