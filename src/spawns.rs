//! Player start placement and safe-zone carving
//!
//! Picks one start cell per player, spread around the map center in equal
//! angular sectors with jitter, biased toward mid-radius. The start cell
//! and its immediate neighbor ring are then carved to the highest level so
//! they always classify as land.

use std::f32::consts::TAU;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::grid::{NeighborTable, NO_NEIGHBOR};
use crate::params::GenerationParams;

/// Fraction of the sector width used for angular jitter.
const SECTOR_JITTER: f32 = 0.15;

/// Radius fraction range of the half-extent where spawns land.
const RADIUS_MIN: f32 = 0.5;
const RADIUS_MAX: f32 = 0.8;

/// Choose one start cell id per player.
///
/// One random base angle splits the circle into `player_count` equal
/// sectors; each player draws a jitter within ±15% of the sector width and
/// a radius fraction, then rounds to the nearest cell. Coordinates are
/// clamped into the interior so a spawn can never sit on the forced-water
/// outer ring.
pub fn place_start_positions(params: &GenerationParams, rng: &mut ChaCha8Rng) -> Vec<usize> {
    let base_angle: f32 = rng.gen_range(0.0..TAU);
    let sector = TAU / params.player_count as f32;
    let (center_x, center_z) = params.map_center();

    let mut starts = Vec::with_capacity(params.player_count);
    for i in 0..params.player_count {
        let jitter = rng.gen_range(-sector * SECTOR_JITTER..sector * SECTOR_JITTER);
        let angle = base_angle + sector * i as f32 + jitter;
        let radius = rng.gen_range(RADIUS_MIN..RADIUS_MAX);

        let px = center_x + angle.cos() * radius * center_x;
        let pz = center_z + angle.sin() * radius * center_z;

        let x = (px.round() as i64).clamp(1, params.width as i64 - 2) as usize;
        let z = (pz.round() as i64).clamp(1, params.height as i64 - 2) as usize;
        starts.push(z * params.width + x);
    }

    starts
}

/// Force each start cell and its existing neighbors to the maximum level
/// value, guaranteeing they classify as land. Runs on the quantiled level
/// array, before the binary water/land cut.
pub fn carve_safe_zones(levels: &mut [f32], starts: &[usize], neighbors: &NeighborTable) {
    for &start in starts {
        levels[start] = 1.0;
        for &n in neighbors.neighbors(start) {
            if n == NO_NEIGHBOR {
                continue;
            }
            levels[n as usize] = 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn params(width: usize, height: usize, players: usize) -> GenerationParams {
        GenerationParams {
            width,
            height,
            player_count: players,
            ..Default::default()
        }
    }

    #[test]
    fn test_one_start_per_player_inside_interior() {
        let params = params(20, 20, 4);
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let starts = place_start_positions(&params, &mut rng);
        assert_eq!(starts.len(), 4);
        for &s in &starts {
            let x = s % params.width;
            let z = s / params.width;
            assert!(x >= 1 && x <= params.width - 2, "spawn x {} on ring", x);
            assert!(z >= 1 && z <= params.height - 2, "spawn z {} on ring", z);
        }
    }

    #[test]
    fn test_deterministic_for_pinned_seed() {
        let params = params(32, 32, 3);
        let mut rng_a = ChaCha8Rng::seed_from_u64(5);
        let mut rng_b = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(
            place_start_positions(&params, &mut rng_a),
            place_start_positions(&params, &mut rng_b)
        );
    }

    #[test]
    fn test_four_players_quarter_circle_apart() {
        // On a large grid, cell rounding barely moves the angle, so the
        // sorted angular gaps should stay near 90 degrees (±15% jitter on
        // both sides of a gap, plus rounding slack).
        let params = params(128, 128, 4);
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let starts = place_start_positions(&params, &mut rng);
        let (cx, cz) = params.map_center();

        let mut angles: Vec<f32> = starts
            .iter()
            .map(|&s| {
                let x = (s % params.width) as f32 - cx;
                let z = (s / params.width) as f32 - cz;
                z.atan2(x).rem_euclid(TAU)
            })
            .collect();
        angles.sort_by(f32::total_cmp);

        for i in 0..4 {
            let next = angles[(i + 1) % 4] + if i == 3 { TAU } else { 0.0 };
            let gap = (next - angles[i]).to_degrees();
            assert!(
                (50.0..=130.0).contains(&gap),
                "angular gap {} out of range",
                gap
            );
        }
    }

    #[test]
    fn test_carving_lifts_start_and_neighbors() {
        let params = params(10, 10, 1);
        let table = NeighborTable::build(params.width, params.height);
        let mut levels = vec![0.0f32; params.cell_count()];
        let start = 5 * params.width + 5;
        carve_safe_zones(&mut levels, &[start], &table);

        assert_eq!(levels[start], 1.0);
        for &n in table.neighbors(start) {
            assert_eq!(levels[n as usize], 1.0);
        }
        // Cells outside the carved ring untouched.
        assert_eq!(levels[0], 0.0);
    }
}
