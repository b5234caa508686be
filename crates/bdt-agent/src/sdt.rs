//! Signal-detection helpers: z-scores and sensitivity (d′) from
//! response counts.
//!
//! Rates of exactly 0 or 1 would give infinite z-scores, so they are
//! pulled in by `correction / n` before the inverse CDF is applied.

use bdt_core::errors::{AgentError, AgentResult};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

/// Default correction applied to rates of exactly 0 or 1.
pub const DEFAULT_RATE_CORRECTION: f64 = 0.5;

/// Rate assumed for a stimulus class with no trials (chance).
pub const CHANCE_RATE: f64 = 0.5;

/// Inverse standard normal CDF of `p`, with the default correction.
pub fn z_transform(p: f64, n: u64) -> AgentResult<f64> {
    z_transform_with_correction(p, n, DEFAULT_RATE_CORRECTION)
}

/// Inverse standard normal CDF of `p`. `p == 1` becomes
/// `1 − correction / n` and `p == 0` becomes `correction / n`.
pub fn z_transform_with_correction(p: f64, n: u64, correction: f64) -> AgentResult<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(AgentError::invalid_parameter(
            "rate",
            format!("must be in [0, 1], got {p}"),
        ));
    }
    let p = if p == 1.0 || p == 0.0 {
        if n == 0 {
            return Err(AgentError::invalid_parameter(
                "trials",
                "cannot correct an extreme rate over zero trials",
            ));
        }
        let shift = correction / n as f64;
        if p == 1.0 {
            1.0 - shift
        } else {
            shift
        }
    } else {
        p
    };
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AgentError::invalid_parameter("normal", e.to_string()))?;
    Ok(normal.inverse_cdf(p))
}

/// Yes/no response counts for one observer (or one session).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCounts {
    /// Signal trials answered "signal".
    pub hits: u64,
    /// Total signal trials.
    pub signal_trials: u64,
    /// Noise trials answered "signal".
    pub false_alarms: u64,
    /// Total noise trials.
    pub noise_trials: u64,
}

impl ResponseCounts {
    pub fn hit_rate(&self) -> f64 {
        rate(self.hits, self.signal_trials)
    }

    pub fn false_alarm_rate(&self) -> f64 {
        rate(self.false_alarms, self.noise_trials)
    }
}

fn rate(count: u64, trials: u64) -> f64 {
    if trials == 0 {
        CHANCE_RATE
    } else {
        count as f64 / trials as f64
    }
}

/// Sensitivity `z(hit rate) − z(false-alarm rate)`.
pub fn d_prime(counts: &ResponseCounts) -> AgentResult<f64> {
    if counts.hits > counts.signal_trials {
        return Err(AgentError::invalid_parameter(
            "hits",
            format!("{} hits exceed {} signal trials", counts.hits, counts.signal_trials),
        ));
    }
    if counts.false_alarms > counts.noise_trials {
        return Err(AgentError::invalid_parameter(
            "false_alarms",
            format!(
                "{} false alarms exceed {} noise trials",
                counts.false_alarms, counts.noise_trials
            ),
        ));
    }
    let z_hit = z_transform(counts.hit_rate(), counts.signal_trials)?;
    let z_fa = z_transform(counts.false_alarm_rate(), counts.noise_trials)?;
    Ok(z_hit - z_fa)
}
