//! The `Customer` record.

use cc_core::{CustomerId, Tick};

use crate::{QueueError, QueueResult};

/// Why a customer left the queue.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ExitKind {
    /// Admitted to an agent.
    Served,
    /// Patience ran out while waiting.
    Abandoned,
}

/// One caller.
///
/// A customer is either still waiting (`exit_time() == None`) or finalized
/// exactly once with an exit time and an abandonment flag.  The exit fields
/// are private so the only way to set them is [`Customer::finalize`], which
/// refuses a second finalization.
#[derive(Clone, Debug, PartialEq)]
pub struct Customer {
    pub id:            CustomerId,
    pub arrival_time:  Tick,
    /// Remaining ticks this customer will tolerate in the queue.  Decremented
    /// once per tick while waiting; the customer abandons when it reaches 0.
    pub patience_left: i64,
    exit_time:         Option<Tick>,
    abandon:           bool,
}

impl Customer {
    pub fn new(id: CustomerId, arrival_time: Tick, patience_left: i64) -> Self {
        Self {
            id,
            arrival_time,
            patience_left,
            exit_time: None,
            abandon:   false,
        }
    }

    #[inline]
    pub fn exit_time(&self) -> Option<Tick> {
        self.exit_time
    }

    /// `true` iff the customer left because their patience expired.  Always
    /// `false` while still waiting.
    #[inline]
    pub fn abandoned(&self) -> bool {
        self.abandon
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.exit_time.is_none()
    }

    /// Ticks spent in the queue, once finalized.
    pub fn wait(&self) -> Option<u64> {
        self.exit_time.map(|exit| exit.since(self.arrival_time))
    }

    /// Record the customer's departure from the queue.
    pub fn finalize(&mut self, now: Tick, kind: ExitKind) -> QueueResult<()> {
        if let Some(first) = self.exit_time {
            return Err(QueueError::AlreadyFinalized {
                customer: self.id,
                first,
                again: now,
            });
        }
        debug_assert!(now >= self.arrival_time, "exit before arrival");
        self.exit_time = Some(now);
        self.abandon = kind == ExitKind::Abandoned;
        Ok(())
    }
}
