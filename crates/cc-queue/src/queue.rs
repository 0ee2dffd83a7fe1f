//! `CustomerQueue` — the line of waiting customers.
//!
//! Service is strictly FIFO from the front, but abandonment can remove any
//! member.  Expiry is done in two passes (age everyone, then split out every
//! expired member in one drain) so no expiring customer is ever skipped, no
//! matter how many expire in the same tick or where they sit in line.

use std::collections::VecDeque;

use crate::Customer;

#[derive(Clone, Debug, Default)]
pub struct CustomerQueue {
    inner: VecDeque<Customer>,
}

impl CustomerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a newly arrived customer at the back of the line.
    pub fn push_back(&mut self, customer: Customer) {
        self.inner.push_back(customer);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The customer next in line, if any.
    pub fn front(&self) -> Option<&Customer> {
        self.inner.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.inner.iter()
    }

    /// Decrement every member's patience by one tick, then remove and return
    /// all members whose patience is now `<= 0`.
    ///
    /// The relative order of the remaining customers is unchanged; the
    /// returned customers are in queue order.  They are *not* finalized here.
    pub fn age_and_expire(&mut self) -> Vec<Customer> {
        let mut any_expired = false;
        for customer in self.inner.iter_mut() {
            customer.patience_left = customer.patience_left.saturating_sub(1);
            any_expired |= customer.patience_left <= 0;
        }
        if !any_expired {
            return Vec::new();
        }

        let (expired, waiting): (Vec<Customer>, Vec<Customer>) =
            self.inner.drain(..).partition(|c| c.patience_left <= 0);
        self.inner = waiting.into();
        expired
    }

    /// Remove up to `n` customers from the front of the line, in order.
    pub fn take_front(&mut self, n: usize) -> std::collections::vec_deque::Drain<'_, Customer> {
        let n = n.min(self.inner.len());
        self.inner.drain(..n)
    }
}
