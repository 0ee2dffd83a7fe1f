//! Configuration error type.
//!
//! Sub-crates define their own error enums and wrap `CcError` as one variant
//! via `#[from]`, so `?` works across crate boundaries.

use thiserror::Error;

/// Errors raised while validating a run's configuration, before any tick is
/// simulated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CcError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid {name} distribution: {reason}")]
    InvalidDistribution {
        name:   &'static str,
        reason: String,
    },
}

/// Shorthand result type for configuration checks.
pub type CcResult<T> = Result<T, CcError>;
