//! Samplers for interarrival gaps, customer patience and service durations.
//!
//! Every sampler is stateless: all randomness comes from the `&mut SimRng`
//! passed in, and every draw is independent of the previous one.  Continuous
//! draws are rounded to the nearest whole tick, so a gap or duration of `0`
//! is a legitimate outcome (see the arrival process for how zero gaps chain
//! arrivals onto the same tick).
//!
//! Distribution selection is a closed enum, so an unsupported kind cannot be
//! constructed; parameters are checked by each type's `validate`.

use rand::Rng;
use rand_distr::Exp1;

use crate::{CcError, CcResult, SimRng};

/// Patience value meaning "never abandons".
///
/// The arrival process decrements patience once per tick; starting from
/// `i64::MAX` it cannot reach zero within any representable horizon.
pub const UNLIMITED_PATIENCE: i64 = i64::MAX;

#[inline]
fn round_ticks(x: f64) -> u64 {
    x.round().max(0.0) as u64
}

#[inline]
fn exp_with_mean(mean: f64, rng: &mut SimRng) -> f64 {
    let unit: f64 = rng.inner().sample(Exp1);
    unit * mean
}

fn check_positive(name: &'static str, what: &str, v: f64) -> CcResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(CcError::InvalidDistribution {
            name,
            reason: format!("{what} must be finite and positive, got {v}"),
        })
    }
}

// ── InterarrivalDist ──────────────────────────────────────────────────────────

/// Gap, in ticks, between consecutive customer arrivals.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum InterarrivalDist {
    /// Poisson arrivals: exponential gaps with mean `1 / rate`.
    Exponential { rate: f64 },
    /// Deterministic arrivals every `ticks` ticks.
    Fixed { ticks: u64 },
}

impl InterarrivalDist {
    pub fn sample(&self, rng: &mut SimRng) -> u64 {
        match *self {
            InterarrivalDist::Exponential { rate } => round_ticks(exp_with_mean(1.0 / rate, rng)),
            InterarrivalDist::Fixed { ticks } => ticks,
        }
    }

    /// Mean gap in ticks (before rounding).
    pub fn mean(&self) -> f64 {
        match *self {
            InterarrivalDist::Exponential { rate } => 1.0 / rate,
            InterarrivalDist::Fixed { ticks } => ticks as f64,
        }
    }

    pub fn validate(&self) -> CcResult<()> {
        match *self {
            InterarrivalDist::Exponential { rate } => check_positive("interarrival", "rate", rate),
            // A fixed zero gap would put every customer on tick 0.
            InterarrivalDist::Fixed { ticks: 0 } => Err(CcError::InvalidDistribution {
                name:   "interarrival",
                reason: "fixed gap must be at least one tick".into(),
            }),
            InterarrivalDist::Fixed { .. } => Ok(()),
        }
    }
}

impl Default for InterarrivalDist {
    /// 20 arrivals per 60 ticks.
    fn default() -> Self {
        InterarrivalDist::Exponential { rate: 20.0 / 60.0 }
    }
}

// ── PatienceKind / PatienceDist ──────────────────────────────────────────────

/// The two stochastic patience models, used to select a default
/// [`PatienceDist`] and to label output.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PatienceKind {
    Uniform,
    Hyperexponential,
}

impl PatienceKind {
    pub const ALL: [PatienceKind; 2] = [PatienceKind::Uniform, PatienceKind::Hyperexponential];

    /// The distribution with this kind's standard parameters.
    pub fn default_dist(self) -> PatienceDist {
        match self {
            PatienceKind::Uniform          => PatienceDist::uniform_default(),
            PatienceKind::Hyperexponential => PatienceDist::hyperexponential_default(),
        }
    }

    /// Lower-case label, used in output file names.
    pub fn as_str(self) -> &'static str {
        match self {
            PatienceKind::Uniform          => "uniform",
            PatienceKind::Hyperexponential => "hyperexponential",
        }
    }
}

impl std::fmt::Display for PatienceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PatienceKind {
    type Err = CcError;

    fn from_str(s: &str) -> CcResult<Self> {
        match s.trim() {
            "uniform"          => Ok(PatienceKind::Uniform),
            "hyperexponential" => Ok(PatienceKind::Hyperexponential),
            other => Err(CcError::Config(format!(
                "unsupported patience kind {other:?}: expected \"uniform\" or \"hyperexponential\""
            ))),
        }
    }
}

/// Maximum number of ticks a customer waits in queue before abandoning.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum PatienceDist {
    /// Uniform over `[0, max]` ticks, rounded.
    Uniform { max: f64 },
    /// With probability `p_short` exponential with mean `short_mean`,
    /// otherwise exponential with mean `long_mean`; rounded.
    Hyperexponential {
        p_short:    f64,
        short_mean: f64,
        long_mean:  f64,
    },
    /// Every customer tolerates exactly `ticks` ticks.
    Fixed { ticks: u64 },
    /// Customers never abandon.
    Unlimited,
}

impl PatienceDist {
    /// Uniform over 0–6 minutes at one tick per second.
    pub fn uniform_default() -> Self {
        PatienceDist::Uniform { max: 6.0 * 60.0 }
    }

    /// Even mix of 1-minute and 5-minute mean patience at one tick per second.
    pub fn hyperexponential_default() -> Self {
        PatienceDist::Hyperexponential {
            p_short:    0.5,
            short_mean: 60.0,
            long_mean:  5.0 * 60.0,
        }
    }

    /// Sample a starting `patience_left` value.
    pub fn sample(&self, rng: &mut SimRng) -> i64 {
        match *self {
            PatienceDist::Uniform { max } => rng.gen_range(0.0..=max).round() as i64,
            PatienceDist::Hyperexponential { p_short, short_mean, long_mean } => {
                let mean = if rng.gen_bool(p_short) { short_mean } else { long_mean };
                round_ticks(exp_with_mean(mean, rng)) as i64
            }
            PatienceDist::Fixed { ticks } => ticks.min(i64::MAX as u64) as i64,
            PatienceDist::Unlimited => UNLIMITED_PATIENCE,
        }
    }

    pub fn validate(&self) -> CcResult<()> {
        match *self {
            PatienceDist::Uniform { max } => {
                if max.is_finite() && max >= 0.0 {
                    Ok(())
                } else {
                    Err(CcError::InvalidDistribution {
                        name:   "patience",
                        reason: format!("uniform upper bound must be finite and >= 0, got {max}"),
                    })
                }
            }
            PatienceDist::Hyperexponential { p_short, short_mean, long_mean } => {
                if !(0.0..=1.0).contains(&p_short) {
                    return Err(CcError::InvalidDistribution {
                        name:   "patience",
                        reason: format!("mixing probability must be in [0, 1], got {p_short}"),
                    });
                }
                check_positive("patience", "short mean", short_mean)?;
                check_positive("patience", "long mean", long_mean)
            }
            PatienceDist::Fixed { .. } | PatienceDist::Unlimited => Ok(()),
        }
    }
}

impl Default for PatienceDist {
    fn default() -> Self {
        PatienceDist::uniform_default()
    }
}

// ── ServiceDist ───────────────────────────────────────────────────────────────

/// Duration, in ticks, of one service.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ServiceDist {
    Exponential { mean: f64 },
    Fixed { ticks: u64 },
}

impl ServiceDist {
    pub fn sample(&self, rng: &mut SimRng) -> u64 {
        match *self {
            ServiceDist::Exponential { mean } => round_ticks(exp_with_mean(mean, rng)),
            ServiceDist::Fixed { ticks } => ticks,
        }
    }

    pub fn validate(&self) -> CcResult<()> {
        match *self {
            ServiceDist::Exponential { mean } => check_positive("service", "mean", mean),
            ServiceDist::Fixed { .. } => Ok(()),
        }
    }
}

impl Default for ServiceDist {
    /// Three minutes at one tick per second.
    fn default() -> Self {
        ServiceDist::Exponential { mean: 3.0 * 60.0 }
    }
}
