//! Alpha mapping: LID values to bounded pruning coefficients.
//!
//! Robust pruning discards a candidate edge when an already-kept neighbor
//! covers it within a factor `alpha`; a larger alpha admits more and longer
//! edges. Instead of one fixed coefficient for the whole index, each node
//! gets an alpha derived from its LID: locally complex neighborhoods (high
//! LID) earn a relaxed alpha near the upper bound, simple ones a strict
//! alpha near the lower bound.
//!
//! Two monotonic mappings are supported:
//!
//! - [`AlphaStrategy::Sigmoid`]: z-score through a logistic squash.
//!   Transitions concentrate near the population mean LID and saturate
//!   smoothly at the extremes, so average points land near the midpoint
//!   and outliers approach the bounds asymptotically.
//! - [`AlphaStrategy::Linear`]: exact min-max rescale. Simpler, but a
//!   single extreme outlier stretches the whole range.
//!
//! Both produce values in `[alpha_min, alpha_max]` for every finite input.

use crate::stats::{normal_stats, range_stats, NormalStats, RangeStats};
use serde::{Deserialize, Serialize};

/// Logistic gain (`k`) for the sigmoid mapping. Fixed.
pub const SIGMOID_GAIN: f32 = 1.0;

/// Mapping strategy from LID to alpha, selected by build configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlphaStrategy {
    /// Z-score + logistic squash (statistics: mean / std)
    #[default]
    Sigmoid,
    /// Min-max rescale (statistics: min / max)
    Linear,
}

/// Map one LID value via z-score + sigmoid.
#[inline]
pub fn sigmoid_alpha(lid: f32, stats: NormalStats, alpha_min: f32, alpha_max: f32) -> f32 {
    let z = (lid - stats.mean) / stats.std_dev;
    let s = 1.0 / (1.0 + (-SIGMOID_GAIN * z).exp());
    (alpha_min + s * (alpha_max - alpha_min)).clamp(alpha_min, alpha_max)
}

/// Map one LID value via linear min-max rescale.
///
/// Saturates at the bounds for values outside `[min, max]`.
#[inline]
pub fn linear_alpha(lid: f32, stats: RangeStats, alpha_min: f32, alpha_max: f32) -> f32 {
    let normalized = (lid - stats.min) / (stats.max - stats.min);
    (alpha_min + normalized * (alpha_max - alpha_min)).clamp(alpha_min, alpha_max)
}

/// Build the per-node alpha table: one coefficient per LID value, in input
/// (ascending node-id) order.
///
/// Assumes a validated `alpha_min <= alpha_max`; the range is rejected
/// upstream at configuration time.
pub fn build_alpha_table(
    lids: &[f32],
    strategy: AlphaStrategy,
    alpha_min: f32,
    alpha_max: f32,
) -> Vec<f32> {
    match strategy {
        AlphaStrategy::Sigmoid => {
            let stats = normal_stats(lids);
            lids.iter()
                .map(|&lid| sigmoid_alpha(lid, stats, alpha_min, alpha_max))
                .collect()
        }
        AlphaStrategy::Linear => {
            let stats = range_stats(lids);
            lids.iter()
                .map(|&lid| linear_alpha(lid, stats, alpha_min, alpha_max))
                .collect()
        }
    }
}
