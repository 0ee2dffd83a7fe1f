//! Renewal-reward ratio estimator with a delta-method confidence interval.

use crate::stats::{is_valid_confidence, mean, sample_covariance, sample_variance, z_for_confidence};
use crate::{Cycle, CycleField, RegenError, RegenResult};

/// Two-sided 95 % interval (α = 0.05).
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// A steady-state point estimate with its confidence interval.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Estimate {
    pub point:       f64,
    pub ci_low:      f64,
    pub ci_high:     f64,
    pub half_width:  f64,
    /// Cycles the estimate was computed from (first and last excluded).
    pub cycles_used: usize,
}

impl Estimate {
    pub fn interval(&self) -> (f64, f64) {
        (self.ci_low, self.ci_high)
    }

    pub fn contains(&self, x: f64) -> bool {
        (self.ci_low..=self.ci_high).contains(&x)
    }
}

/// Long-run `reward` per unit of `length` at the 95 % level.
///
/// For the probability of abandonment use
/// `(CycleField::Abandonments, CycleField::Completions)`; for the average
/// wait use `(CycleField::TotalWait, CycleField::Completions)`.
pub fn estimate_steady_state(
    cycles: &[Cycle],
    reward: CycleField,
    length: CycleField,
) -> RegenResult<Estimate> {
    estimate_with_confidence(cycles, reward, length, DEFAULT_CONFIDENCE)
}

/// Like [`estimate_steady_state`] at an arbitrary confidence level.
///
/// The first cycle (which need not start from a regeneration point) and the
/// last (cut off by the horizon) are dropped.  With `n` remaining cycles,
/// rewards `Y` and lengths `L`:
///
/// ```text
/// θ  = mean(Y) / mean(L)
/// s² = var(Y) − 2θ·cov(Y, L) + θ²·var(L)
/// hw = z · s / (mean(L) · √n)
/// ```
pub fn estimate_with_confidence(
    cycles:     &[Cycle],
    reward:     CycleField,
    length:     CycleField,
    confidence: f64,
) -> RegenResult<Estimate> {
    if !is_valid_confidence(confidence) {
        return Err(RegenError::InvalidConfidence(confidence));
    }

    let retained = match cycles.len() {
        n if n >= 2 => &cycles[1..n - 1],
        _ => &[][..],
    };
    if retained.len() < 2 {
        return Err(RegenError::InsufficientCycles { found: retained.len() });
    }

    let rewards: Vec<f64> = retained.iter().map(|c| c.field(reward)).collect();
    let lengths: Vec<f64> = retained.iter().map(|c| c.field(length)).collect();

    let insufficient = || RegenError::InsufficientCycles { found: retained.len() };
    let reward_mean = mean(&rewards).ok_or_else(insufficient)?;
    let length_mean = mean(&lengths).ok_or_else(insufficient)?;
    if length_mean == 0.0 {
        return Err(RegenError::ZeroCycleLength { field: length });
    }
    let theta = reward_mean / length_mean;

    let s11 = sample_variance(&rewards).ok_or_else(insufficient)?;
    let s22 = sample_variance(&lengths).ok_or_else(insufficient)?;
    let s12 = sample_covariance(&rewards, &lengths).ok_or_else(insufficient)?;

    // Cancellation can leave a tiny negative value when the ratio is exact.
    let s2 = (s11 - 2.0 * theta * s12 + theta * theta * s22).max(0.0);

    let n = retained.len() as f64;
    let half_width = s2.sqrt() * z_for_confidence(confidence) / (length_mean * n.sqrt());

    Ok(Estimate {
        point:       theta,
        ci_low:      theta - half_width,
        ci_high:     theta + half_width,
        half_width,
        cycles_used: retained.len(),
    })
}
