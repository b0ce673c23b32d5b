//! Zone growth over land cells
//!
//! Partitions land into contiguous ownership regions of 3-5 cells using
//! nearest-centroid growth: each expansion step claims the candidate
//! closest to the zone's current geometric center, which keeps zones
//! compact instead of stringy. Zones seeded on a start position always
//! target 5 cells. Zones that starve below 3 cells are merged into an
//! adjacent zone by a repair pass.

use std::collections::VecDeque;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::grid::{tile_position_of, NeighborTable, NO_NEIGHBOR};
use crate::tile::{TileRecord, TileType};

/// Minimum cells a zone must keep to retain its id.
pub const MIN_ZONE_SIZE: usize = 3;

/// Largest zone target; also the fixed target for start-seeded zones.
pub const MAX_ZONE_SIZE: usize = 5;

/// Grow zones over every unzoned land cell, in row-major scan order.
///
/// Returns the number of zone ids handed out. Target sizes and nothing
/// else are drawn from `rng`, one roll per non-start seed cell.
pub fn grow_zones(
    tiles: &mut [TileRecord],
    neighbors: &NeighborTable,
    hex_size: f32,
    rng: &mut ChaCha8Rng,
) -> u32 {
    let width = neighbors.width;
    let mut next_zone: u32 = 1;

    for seed_idx in 0..tiles.len() {
        if tiles[seed_idx].tile_type == TileType::Water || tiles[seed_idx].zone != 0 {
            continue;
        }

        let mut target = if tiles[seed_idx].is_start_position {
            MAX_ZONE_SIZE
        } else {
            rng.gen_range(MIN_ZONE_SIZE..MAX_ZONE_SIZE + 1)
        };

        let mut members: Vec<usize> = vec![seed_idx];
        let mut frontier: VecDeque<usize> = VecDeque::new();
        tiles[seed_idx].zone = next_zone;
        frontier.push_back(seed_idx);

        while members.len() < target {
            let Some(current) = frontier.pop_front() else {
                break;
            };

            // Centroid of the zone so far, in world coordinates.
            let mut center_x = 0.0f32;
            let mut center_z = 0.0f32;
            for &m in &members {
                let (px, pz) = tile_position_of(m, width, hex_size);
                center_x += px;
                center_z += pz;
            }
            center_x /= members.len() as f32;
            center_z /= members.len() as f32;

            let mut candidates: Vec<usize> = neighbors
                .neighbors(current)
                .iter()
                .filter(|&&n| n != NO_NEIGHBOR)
                .map(|&n| n as usize)
                .filter(|&n| tiles[n].tile_type != TileType::Water && tiles[n].zone == 0)
                .collect();
            candidates.sort_by(|&a, &b| {
                centroid_distance(a, width, hex_size, center_x, center_z)
                    .total_cmp(&centroid_distance(b, width, hex_size, center_x, center_z))
            });

            for n in candidates {
                tiles[n].zone = next_zone;
                if tiles[n].is_start_position {
                    target = MAX_ZONE_SIZE;
                }
                frontier.push_back(n);
                members.push(n);
                if members.len() >= target {
                    break;
                }
            }
        }

        if members.len() < MIN_ZONE_SIZE {
            merge_undersized_zone(tiles, neighbors, &members, next_zone);
            // A merged-away zone does not consume a fresh id.
        } else {
            next_zone += 1;
        }
    }

    next_zone - 1
}

fn centroid_distance(idx: usize, width: usize, hex_size: f32, cx: f32, cz: f32) -> f32 {
    let (px, pz) = tile_position_of(idx, width, hex_size);
    let dx = px - cx;
    let dz = pz - cz;
    (dx * dx + dz * dz).sqrt()
}

/// Hand every cell of a starved zone to the first differently-zoned
/// neighbor found in scan order. Cells with no zoned neighbor anywhere
/// keep the undersized id (isolated land fragments, documented edge case).
fn merge_undersized_zone(
    tiles: &mut [TileRecord],
    neighbors: &NeighborTable,
    members: &[usize],
    zone: u32,
) {
    for &m in members {
        let adopted = neighbors
            .neighbors(m)
            .iter()
            .filter(|&&n| n != NO_NEIGHBOR)
            .map(|&n| tiles[n as usize].zone)
            .find(|&z| z != 0 && z != zone);
        if let Some(z) = adopted {
            tiles[m].zone = z;
        }
    }
}
