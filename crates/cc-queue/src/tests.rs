//! Unit tests for cc-queue.

use cc_core::{CustomerId, InterarrivalDist, PatienceDist, ServiceDist, SimRng, Tick};

use crate::{ArrivalProcess, CompletedLog, Customer, CustomerQueue, ServicePool};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn customer(id: u32, arrival: u64, patience: i64) -> Customer {
    Customer::new(CustomerId(id), Tick(arrival), patience)
}

fn queue_of(customers: impl IntoIterator<Item = Customer>) -> CustomerQueue {
    let mut q = CustomerQueue::new();
    for c in customers {
        q.push_back(c);
    }
    q
}

fn ids(q: &CustomerQueue) -> Vec<u32> {
    q.iter().map(|c| c.id.0).collect()
}

fn fixed_arrivals(gap: u64, patience: PatienceDist) -> ArrivalProcess {
    ArrivalProcess::new(InterarrivalDist::Fixed { ticks: gap }, patience, SimRng::new(0))
}

fn fixed_pool(capacity: usize, service: u64) -> ServicePool {
    ServicePool::new(capacity, ServiceDist::Fixed { ticks: service }, SimRng::new(0))
}

// ── Customer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod customer_tests {
    use super::*;
    use crate::{ExitKind, QueueError};

    #[test]
    fn new_customer_is_waiting() {
        let c = customer(0, 5, 10);
        assert!(c.is_waiting());
        assert!(!c.abandoned());
        assert_eq!(c.wait(), None);
    }

    #[test]
    fn finalize_sets_exit_and_flag() {
        let mut c = customer(0, 5, 10);
        c.finalize(Tick(9), ExitKind::Abandoned).unwrap();
        assert_eq!(c.exit_time(), Some(Tick(9)));
        assert!(c.abandoned());
        assert_eq!(c.wait(), Some(4));
    }

    #[test]
    fn finalize_twice_is_an_error() {
        let mut c = customer(3, 0, 10);
        c.finalize(Tick(1), ExitKind::Served).unwrap();
        let err = c.finalize(Tick(2), ExitKind::Abandoned).unwrap_err();
        assert_eq!(
            err,
            QueueError::AlreadyFinalized { customer: CustomerId(3), first: Tick(1), again: Tick(2) }
        );
        // First outcome is untouched.
        assert!(!c.abandoned());
    }

    #[test]
    fn log_rejects_waiting_customer() {
        let mut log = CompletedLog::new();
        assert!(log.push(customer(0, 0, 1)).is_err());
        assert!(log.is_empty());
    }
}

// ── CustomerQueue ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue_tests {
    use super::*;

    #[test]
    fn ages_every_member() {
        let mut q = queue_of([customer(0, 0, 5), customer(1, 0, 7)]);
        assert!(q.age_and_expire().is_empty());
        let left: Vec<i64> = q.iter().map(|c| c.patience_left).collect();
        assert_eq!(left, [4, 6]);
    }

    #[test]
    fn expires_adjacent_and_non_head_members() {
        // Members 1 and 2 are adjacent and expire together; an in-place
        // remove-while-iterating loop would skip one of them.
        let mut q = queue_of([
            customer(0, 0, 9),
            customer(1, 0, 1),
            customer(2, 0, 1),
            customer(3, 0, 9),
            customer(4, 0, 0),
        ]);
        let expired: Vec<u32> = q.age_and_expire().iter().map(|c| c.id.0).collect();
        assert_eq!(expired, [1, 2, 4]);
        assert_eq!(ids(&q), [0, 3]);
    }

    #[test]
    fn survivors_keep_fifo_order_after_expiry() {
        let mut q = queue_of([customer(0, 0, 5), customer(1, 0, 1), customer(2, 0, 5)]);
        assert_eq!(q.age_and_expire().len(), 1);
        q.push_back(customer(3, 1, 5));
        assert_eq!(q.front().map(|c| c.id.0), Some(0));
        let served: Vec<u32> = q.take_front(3).map(|c| c.id.0).collect();
        assert_eq!(served, [0, 2, 3]);
        assert!(q.is_empty());
    }

    #[test]
    fn take_front_is_fifo_and_bounded() {
        let mut q = queue_of((0..5).map(|i| customer(i, 0, 10)));
        let taken: Vec<u32> = q.take_front(2).map(|c| c.id.0).collect();
        assert_eq!(taken, [0, 1]);
        assert_eq!(ids(&q), [2, 3, 4]);

        let rest: Vec<u32> = q.take_front(99).map(|c| c.id.0).collect();
        assert_eq!(rest, [2, 3, 4]);
        assert!(q.is_empty());
    }
}

// ── ArrivalProcess ────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival_tests {
    use super::*;
    use crate::MAX_ARRIVALS_PER_TICK;

    #[test]
    fn first_arrival_at_tick_zero_then_every_gap() {
        let mut arrivals = fixed_arrivals(3, PatienceDist::Unlimited);
        let mut q = CustomerQueue::new();
        let mut log = CompletedLog::new();

        let mut per_tick = Vec::new();
        for t in 0..7 {
            per_tick.push(arrivals.advance(&mut q, Tick(t), &mut log).unwrap());
        }
        assert_eq!(per_tick, [1, 0, 0, 1, 0, 0, 1]);
        assert_eq!(arrivals.next_arrival(), Tick(9));
        assert_eq!(arrivals.arrived_total(), 3);
        let arrival_times: Vec<u64> = q.iter().map(|c| c.arrival_time.0).collect();
        assert_eq!(arrival_times, [0, 3, 6]);
    }

    #[test]
    fn customer_never_expires_on_arrival_tick() {
        // Patience 0: expires one tick after arrival, not on the arrival tick.
        let mut arrivals = fixed_arrivals(100, PatienceDist::Fixed { ticks: 0 });
        let mut q = CustomerQueue::new();
        let mut log = CompletedLog::new();

        arrivals.advance(&mut q, Tick(0), &mut log).unwrap();
        assert_eq!(q.len(), 1);
        assert!(log.is_empty());

        arrivals.advance(&mut q, Tick(1), &mut log).unwrap();
        assert!(q.is_empty());
        assert_eq!(log.len(), 1);
        let c = &log.as_slice()[0];
        assert!(c.abandoned());
        assert_eq!(c.exit_time(), Some(Tick(1)));
    }

    #[test]
    fn abandons_exactly_after_fixed_patience() {
        let mut arrivals = fixed_arrivals(100, PatienceDist::Fixed { ticks: 3 });
        let mut q = CustomerQueue::new();
        let mut log = CompletedLog::new();
        for t in 0..10 {
            arrivals.advance(&mut q, Tick(t), &mut log).unwrap();
        }
        assert_eq!(log.len(), 1);
        assert_eq!(log.as_slice()[0].exit_time(), Some(Tick(3)));
    }

    #[test]
    fn zero_gaps_chain_onto_same_tick() {
        // Mean gap 0.25 ticks: most gaps round to zero.
        let mut arrivals = ArrivalProcess::new(
            InterarrivalDist::Exponential { rate: 4.0 },
            PatienceDist::Unlimited,
            SimRng::new(9),
        );
        let mut q = CustomerQueue::new();
        let mut log = CompletedLog::new();
        let mut counts = Vec::new();
        for t in 0..200 {
            let before = q.len();
            let n = arrivals.advance(&mut q, Tick(t), &mut log).unwrap();
            assert!(q.iter().skip(before).all(|c| c.arrival_time == Tick(t)));
            counts.push(n);
        }
        assert!(counts.iter().any(|&n| n > 1), "expected a same-tick chain: {counts:?}");
        assert_eq!(counts.iter().sum::<usize>() as u64, arrivals.arrived_total());
        assert_eq!(q.len() as u64, arrivals.arrived_total());
    }

    #[test]
    fn zero_gap_chain_is_capped() {
        // Rate so high that a non-zero gap essentially never appears.
        let mut arrivals = ArrivalProcess::new(
            InterarrivalDist::Exponential { rate: 1.0e12 },
            PatienceDist::Unlimited,
            SimRng::new(1),
        );
        let mut q = CustomerQueue::new();
        let mut log = CompletedLog::new();
        let n = arrivals.advance(&mut q, Tick(0), &mut log).unwrap();
        assert_eq!(n, MAX_ARRIVALS_PER_TICK);
        assert_eq!(arrivals.next_arrival(), Tick(1));
    }

    #[test]
    fn ids_follow_arrival_order() {
        let mut arrivals = fixed_arrivals(1, PatienceDist::Unlimited);
        let mut q = CustomerQueue::new();
        let mut log = CompletedLog::new();
        for t in 0..4 {
            arrivals.advance(&mut q, Tick(t), &mut log).unwrap();
        }
        assert_eq!(ids(&q), [0, 1, 2, 3]);
    }
}

// ── ServicePool ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod service_tests {
    use super::*;

    #[test]
    fn admits_fifo_up_to_capacity() {
        let mut pool = fixed_pool(2, 10);
        let mut q = queue_of((0..5).map(|i| customer(i, 0, 100)));
        let mut log = CompletedLog::new();

        let admitted = pool.serve(&mut q, Tick(0), &mut log).unwrap();
        assert_eq!(admitted, 2);
        assert_eq!(pool.occupied(), 2);
        assert_eq!(pool.available(), 0);
        assert_eq!(ids(&q), [2, 3, 4]);

        let served: Vec<u32> = log.iter().map(|c| c.id.0).collect();
        assert_eq!(served, [0, 1]);
        assert!(log.iter().all(|c| !c.abandoned() && c.exit_time() == Some(Tick(0))));
    }

    #[test]
    fn new_slots_elapse_on_admission_tick() {
        let mut pool = fixed_pool(1, 3);
        let mut q = queue_of([customer(0, 0, 100)]);
        let mut log = CompletedLog::new();
        pool.serve(&mut q, Tick(0), &mut log).unwrap();
        assert_eq!(pool.slots()[0].service_time, 3);
        assert_eq!(pool.slots()[0].service_time_left, 2);
    }

    #[test]
    fn frees_finished_slots_before_admitting() {
        // Service of 1 tick: slot admitted at T0 is finished by T1 and frees
        // capacity for the next customer in the same tick.
        let mut pool = fixed_pool(1, 1);
        let mut q = queue_of([customer(0, 0, 100), customer(1, 0, 100)]);
        let mut log = CompletedLog::new();

        assert_eq!(pool.serve(&mut q, Tick(0), &mut log).unwrap(), 1);
        assert_eq!(pool.serve(&mut q, Tick(1), &mut log).unwrap(), 1);
        assert_eq!(log.as_slice()[1].exit_time(), Some(Tick(1)));
        assert!(q.is_empty());
    }

    #[test]
    fn busy_slot_blocks_admission() {
        let mut pool = fixed_pool(1, 5);
        let mut q = queue_of([customer(0, 0, 100), customer(1, 0, 100)]);
        let mut log = CompletedLog::new();
        for t in 0..5 {
            pool.serve(&mut q, Tick(t), &mut log).unwrap();
        }
        assert_eq!(log.len(), 1);
        pool.serve(&mut q, Tick(5), &mut log).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.as_slice()[1].wait(), Some(5));
    }

    #[test]
    fn zero_capacity_never_admits() {
        let mut pool = fixed_pool(0, 1);
        let mut q = queue_of([customer(0, 0, 100)]);
        let mut log = CompletedLog::new();
        assert_eq!(pool.serve(&mut q, Tick(0), &mut log).unwrap(), 0);
        assert_eq!(q.len(), 1);
        assert_eq!(pool.occupied(), 0);
    }

    #[test]
    fn zero_length_service_is_freed_next_tick() {
        let mut pool = fixed_pool(1, 0);
        let mut q = queue_of([customer(0, 0, 100)]);
        let mut log = CompletedLog::new();
        pool.serve(&mut q, Tick(0), &mut log).unwrap();
        assert_eq!(pool.occupied(), 1);
        pool.serve(&mut q, Tick(1), &mut log).unwrap();
        assert_eq!(pool.occupied(), 0);
    }
}
