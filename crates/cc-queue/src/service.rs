//! `ServicePool` — a fixed number of agents serving the queue FIFO.

use cc_core::{ServiceDist, SimRng, Tick};
use tracing::trace;

use crate::{AgentSlot, CompletedLog, CustomerQueue, ExitKind, QueueError, QueueResult};

/// Owns the busy agents.  Idle agents are not represented; their count is
/// `capacity - occupied()`.
pub struct ServicePool {
    capacity: usize,
    slots:    Vec<AgentSlot>,
    service:  ServiceDist,
    rng:      SimRng,
}

impl ServicePool {
    pub fn new(capacity: usize, service: ServiceDist, rng: SimRng) -> Self {
        Self {
            capacity,
            slots: Vec::with_capacity(capacity),
            service,
            rng,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Agents currently serving (including ones whose service ended during
    /// the last tick but have not been freed yet).
    #[inline]
    pub fn occupied(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn available(&self) -> usize {
        self.capacity.saturating_sub(self.slots.len())
    }

    pub fn slots(&self) -> &[AgentSlot] {
        &self.slots
    }

    /// Advance the service side of the system by one tick.
    ///
    /// 1. Free every slot whose service has run out.
    /// 2. Admit up to `available()` customers from the front of `queue`:
    ///    each is finalized as served at `now`, logged, and given a slot
    ///    with a freshly sampled service time.
    /// 3. One tick of service elapses on every slot, including new ones.
    ///
    /// Returns the number of customers admitted.
    pub fn serve(
        &mut self,
        queue: &mut CustomerQueue,
        now:   Tick,
        log:   &mut CompletedLog,
    ) -> QueueResult<usize> {
        self.slots.retain(|slot| !slot.is_finished());
        self.check_capacity()?;

        let admit = self.available().min(queue.len());
        for mut customer in queue.take_front(admit) {
            customer.finalize(now, ExitKind::Served)?;
            log.push(customer)?;
            self.slots.push(AgentSlot::new(self.service.sample(&mut self.rng)));
        }

        for slot in &mut self.slots {
            slot.elapse();
        }
        self.check_capacity()?;

        trace!(tick = now.0, admit, occupied = self.slots.len(), "serve");
        Ok(admit)
    }

    fn check_capacity(&self) -> QueueResult<()> {
        if self.slots.len() > self.capacity {
            return Err(QueueError::CapacityExceeded {
                occupied: self.slots.len(),
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}
