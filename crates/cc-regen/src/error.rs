use thiserror::Error;

use crate::CycleField;

/// Conditions under which no meaningful estimate exists.  These are never
/// coerced to zero or NaN.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegenError {
    #[error("insufficient data: {found} usable cycles, at least 2 required")]
    InsufficientCycles { found: usize },

    #[error("insufficient data: mean of {field} per cycle is zero")]
    ZeroCycleLength { field: CycleField },

    #[error("confidence level must be in (0, 1), got {0}")]
    InvalidConfidence(f64),
}

pub type RegenResult<T> = Result<T, RegenError>;
