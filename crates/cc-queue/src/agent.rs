//! The `AgentSlot` record.

/// One busy agent.
///
/// A slot exists only while its agent is serving someone; the pool drops it
/// at the start of the first tick in which `service_time_left <= 0`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AgentSlot {
    /// Sampled duration of this service, in ticks.
    pub service_time:      u64,
    pub service_time_left: i64,
}

impl AgentSlot {
    pub fn new(service_time: u64) -> Self {
        Self {
            service_time,
            service_time_left: service_time.min(i64::MAX as u64) as i64,
        }
    }

    /// One tick of service elapses.
    #[inline]
    pub fn elapse(&mut self) {
        self.service_time_left -= 1;
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.service_time_left <= 0
    }
}
