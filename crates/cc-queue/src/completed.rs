//! `CompletedLog` — every customer that has left the queue, in exit order.

use crate::{Customer, QueueError, QueueResult};

/// Append-only log of finalized customers.
///
/// "Completed" means *left the queue*, whether by being admitted to an agent
/// or by abandoning.  Each customer is appended exactly once, at the tick of
/// their exit, so the log is sorted by exit time.
#[derive(Clone, Debug, Default)]
pub struct CompletedLog {
    customers: Vec<Customer>,
}

impl CompletedLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized customer.
    ///
    /// Rejects a customer that is still waiting: logging one would break the
    /// arrivals = completed + queued conservation.
    pub fn push(&mut self, customer: Customer) -> QueueResult<()> {
        if customer.is_waiting() {
            return Err(QueueError::NotFinalized { customer: customer.id });
        }
        self.customers.push(customer);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    pub fn as_slice(&self) -> &[Customer] {
        &self.customers
    }

    /// Customers appended at or after position `start`.
    ///
    /// The driver records `len()` before a tick and reads the tail afterwards
    /// to aggregate that tick's exits.
    pub fn since(&self, start: usize) -> &[Customer] {
        &self.customers[start.min(self.customers.len())..]
    }

    pub fn abandoned_count(&self) -> usize {
        self.customers.iter().filter(|c| c.abandoned()).count()
    }

    pub fn served_count(&self) -> usize {
        self.customers.len() - self.abandoned_count()
    }

    pub fn into_vec(self) -> Vec<Customer> {
        self.customers
    }
}

/// Aggregate of a batch of exits (typically one tick's worth).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct ExitSummary {
    /// Customers that left the queue (served + abandoned).
    pub completions:  u64,
    /// Sum of queue waits over those customers, in ticks.
    pub total_wait:   u64,
    pub abandonments: u64,
}

impl ExitSummary {
    pub fn from_customers(customers: &[Customer]) -> Self {
        customers.iter().fold(Self::default(), |mut acc, c| {
            acc.completions += 1;
            acc.total_wait += c.wait().unwrap_or(0);
            acc.abandonments += c.abandoned() as u64;
            acc
        })
    }
}
