//! Strongly typed customer identifier.
//!
//! Ids are handed out in arrival order by the arrival process, so sorting
//! by `CustomerId` recovers global arrival order even across same-tick
//! arrivals.

use std::fmt;

/// Sequence number of a customer, assigned at arrival.  Max ~4.3 billion
/// customers per run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerId(pub u32);

impl CustomerId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: CustomerId = CustomerId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The id handed to the customer arriving after this one.
    #[inline]
    pub fn next(self) -> CustomerId {
        CustomerId(self.0 + 1)
    }
}

impl Default for CustomerId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomerId({})", self.0)
    }
}

impl From<CustomerId> for usize {
    #[inline(always)]
    fn from(id: CustomerId) -> usize {
        id.0 as usize
    }
}
