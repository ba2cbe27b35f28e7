//! Synthetic LID data for tests, benches, and operator tooling.
//!
//! Real LID estimates over natural datasets look roughly normal with a long
//! right tail. This generator mimics that shape without an estimation
//! pipeline: Normal(mean, std) samples floored at 1.0, since a local
//! dimensionality below one is meaningless.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `count` synthetic LID values from Normal(`mean`, `std_dev`),
/// floored at 1.0. Deterministic for a given seed.
pub fn synthetic_lid_values(count: usize, mean: f32, std_dev: f32, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            // Box-Muller for Gaussian; u1 floored away from 0 to keep ln finite
            let u1: f32 = rng.random::<f32>().max(1e-7);
            let u2: f32 = rng.random();
            let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos();
            (mean + z * std_dev).max(1.0)
        })
        .collect()
}
