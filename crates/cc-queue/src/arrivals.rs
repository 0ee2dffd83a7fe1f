//! `ArrivalProcess` — abandonment and new arrivals, once per tick.

use cc_core::{CustomerId, InterarrivalDist, PatienceDist, SimRng, Tick};
use tracing::warn;

use crate::{CompletedLog, Customer, CustomerQueue, ExitKind, QueueResult};

/// Upper bound on customers created in a single tick.
///
/// Zero-length gaps chain several arrivals onto one tick.  With a sane
/// arrival rate long chains are vanishingly rare, but a rate far above one
/// arrival per tick would otherwise spin for a very long time.  Hitting the
/// cap pushes the next arrival to the following tick.
pub const MAX_ARRIVALS_PER_TICK: usize = 10_000;

/// Owns the pending-arrival schedule and the patience/gap samplers.
pub struct ArrivalProcess {
    interarrival: InterarrivalDist,
    patience:     PatienceDist,
    rng:          SimRng,
    /// Tick of the next scheduled arrival.  Never decreases.
    next_arrival: Tick,
    next_id:      CustomerId,
    arrived:      u64,
}

impl ArrivalProcess {
    /// The first customer arrives at tick 0.
    pub fn new(interarrival: InterarrivalDist, patience: PatienceDist, rng: SimRng) -> Self {
        Self {
            interarrival,
            patience,
            rng,
            next_arrival: Tick::ZERO,
            next_id:      CustomerId(0),
            arrived:      0,
        }
    }

    #[inline]
    pub fn next_arrival(&self) -> Tick {
        self.next_arrival
    }

    /// Customers created since the start of the run.
    #[inline]
    pub fn arrived_total(&self) -> u64 {
        self.arrived
    }

    /// Advance the arrival side of the system by one tick.
    ///
    /// 1. Every waiting customer loses one tick of patience; those at `<= 0`
    ///    leave as abandoned at `now` and are appended to `log`.
    /// 2. If an arrival is due at `now`, customers are created until a
    ///    non-zero gap is drawn.
    ///
    /// Expiry runs before arrivals, so a customer is never evaluated for
    /// expiry on the tick they arrive.  Returns the number of arrivals.
    ///
    /// The driver must call this for every tick in order; an arrival due at
    /// a skipped tick would never happen.
    pub fn advance(
        &mut self,
        queue: &mut CustomerQueue,
        now:   Tick,
        log:   &mut CompletedLog,
    ) -> QueueResult<usize> {
        for mut customer in queue.age_and_expire() {
            customer.finalize(now, ExitKind::Abandoned)?;
            log.push(customer)?;
        }

        if now != self.next_arrival {
            return Ok(0);
        }

        let mut count = 0;
        loop {
            let patience = self.patience.sample(&mut self.rng);
            queue.push_back(Customer::new(self.next_id, now, patience));
            self.next_id = self.next_id.next();
            count += 1;

            let gap = self.interarrival.sample(&mut self.rng);
            if gap > 0 {
                self.next_arrival += gap;
                break;
            }
            if count >= MAX_ARRIVALS_PER_TICK {
                warn!(tick = now.0, count, "arrival chain hit per-tick cap; deferring to next tick");
                self.next_arrival += 1;
                break;
            }
        }

        self.arrived += count as u64;
        Ok(count)
    }
}
