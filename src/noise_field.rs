//! Noise field sampling with border falloff
//!
//! Samples a deterministic Perlin value per cell at a seeded offset, then
//! attenuates values approaching the map edge so the border band reliably
//! classifies as the lowest level. The literal outer ring is forced to
//! negative infinity: it is water no matter what the noise says.

use noise::{NoiseFn, Perlin, Seedable};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::params::GenerationParams;

/// Range of the per-run noise offset draw.
const OFFSET_RANGE: f32 = 10000.0;

/// Sample the raw noise field for every cell, row-major.
///
/// Draws the two plane offsets from `rng` (the only randomness used here),
/// so a pinned seed reproduces the field bit for bit.
pub fn sample_noise_field(params: &GenerationParams, seed: u64, rng: &mut ChaCha8Rng) -> Vec<f32> {
    let perlin = Perlin::new(1).set_seed(seed as u32);
    let offset_x: f32 = rng.gen_range(0.0..OFFSET_RANGE);
    let offset_z: f32 = rng.gen_range(0.0..OFFSET_RANGE);

    let width = params.width;
    let height = params.height;
    let mut values = Vec::with_capacity(width * height);

    for z in 0..height {
        for x in 0..width {
            let mut n = raw_noise(&perlin, x, z, params.noise_scale, offset_x, offset_z);
            n -= border_falloff(x, z, params) * params.border_intensity;

            if x == 0 || x == width - 1 || z == 0 || z == height - 1 {
                n = f32::NEG_INFINITY;
            }
            values.push(n);
        }
    }

    values
}

/// Perlin sample remapped from [-1, 1] to [0, 1].
fn raw_noise(perlin: &Perlin, x: usize, z: usize, noise_scale: f32, offset_x: f32, offset_z: f32) -> f32 {
    let nx = (x as f64 + offset_x as f64) * noise_scale as f64;
    let nz = (z as f64 + offset_z as f64) * noise_scale as f64;
    let sample = perlin.get([nx, nz]) as f32;
    (sample * 0.5 + 0.5).clamp(0.0, 1.0)
}

/// Euclidean distance the cell sits outside the safe interior band.
///
/// Zero inside the band; grows toward the edges, so subtracting it pushes
/// border cells into the lowest quantile.
fn border_falloff(x: usize, z: usize, params: &GenerationParams) -> f32 {
    let border = params.border_size;
    let bx = (x as f32 - border)
        .min(params.width as f32 - 1.0 - border - x as f32)
        .min(0.0);
    let bz = (z as f32 - border)
        .min(params.height as f32 - 1.0 - border - z as f32)
        .min(0.0);
    (bx * bx + bz * bz).sqrt()
}
