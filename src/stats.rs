//! Normalization statistics over a loaded LID sequence.
//!
//! Two interchangeable strategies feed the alpha mapper: z-score
//! normalization (mean / population standard deviation) and min-max
//! rescaling. Both are pure functions over the loaded values, computed once
//! per build before the table is installed.

/// Spread below which the input is treated as degenerate (near-constant).
pub const SPREAD_FLOOR: f32 = 1e-6;

/// Mean and population standard deviation of a LID sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalStats {
    pub mean: f32,
    pub std_dev: f32,
}

/// Minimum and maximum of a LID sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeStats {
    pub min: f32,
    pub max: f32,
}

/// Compute mean and population standard deviation.
///
/// Accumulates in f64: at large point counts an f32 running sum loses
/// enough precision to visibly shift the z-scores. A standard deviation
/// below [`SPREAD_FLOOR`] clamps to 1.0, so constant inputs normalize
/// through a unit spread instead of dividing by ~0. Degenerate-input
/// policy, not an error.
pub fn normal_stats(values: &[f32]) -> NormalStats {
    if values.is_empty() {
        return NormalStats {
            mean: 0.0,
            std_dev: 1.0,
        };
    }

    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt() as f32;

    NormalStats {
        mean: mean as f32,
        std_dev: if std_dev < SPREAD_FLOOR { 1.0 } else { std_dev },
    }
}

/// Compute minimum and maximum.
///
/// A range below [`SPREAD_FLOOR`] nudges the maximum to `min + 1.0` to keep
/// the rescale width nonzero.
pub fn range_stats(values: &[f32]) -> RangeStats {
    if values.is_empty() {
        return RangeStats { min: 0.0, max: 1.0 };
    }

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    if max - min < SPREAD_FLOOR {
        max = min + 1.0;
    }

    RangeStats { min, max }
}
