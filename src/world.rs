//! World model assembly
//!
//! Runs the full generation pipeline in strict stage order: grid topology,
//! noise sampling, quantile levelling, spawn placement and safe-zone
//! carving, zone growth, then the read-only border projection. All
//! randomness flows from a single ChaCha8 generator created at the start
//! of the run, so a pinned seed reproduces the whole world bit for bit.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::grid::{NeighborTable, DIR_COUNT, NO_NEIGHBOR};
use crate::levels::assign_levels;
use crate::noise_field::sample_noise_field;
use crate::params::{ConfigError, GenerationParams};
use crate::spawns::{carve_safe_zones, place_start_positions};
use crate::tile::{TileRecord, TileType};
use crate::zones::grow_zones;

/// Complete output of one generation run.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WorldModel {
    pub width: usize,
    pub height: usize,
    /// Seed the run actually used (freshly drawn unless pinned).
    pub seed: u64,
    /// Number of zone ids handed out by zone growth.
    pub zone_count: u32,
    pub neighbors: NeighborTable,
    pub tiles: Vec<TileRecord>,
    /// Per-cell border flags aligned with the neighbor direction order:
    /// true where the neighbor is water or belongs to another zone.
    /// Always all-false for water cells.
    pub borders: Vec<[bool; DIR_COUNT]>,
}

impl WorldModel {
    pub fn tile(&self, x: usize, z: usize) -> &TileRecord {
        &self.tiles[z * self.width + x]
    }

    pub fn land_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_land()).count()
    }

    pub fn water_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_water()).count()
    }

    pub fn start_positions(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .filter(|t| t.is_start_position)
            .map(|t| t.id)
            .collect()
    }
}

/// Owns the parameters and the model of the most recent run.
///
/// Regeneration is idempotent: `generate` validates first, then discards
/// the previous model before producing the new one, so repeated calls
/// never accumulate stale cells. A validation failure leaves the previous
/// model exactly as it was.
pub struct WorldGenerator {
    params: GenerationParams,
    model: Option<WorldModel>,
}

impl WorldGenerator {
    pub fn new(params: GenerationParams) -> Self {
        Self {
            params,
            model: None,
        }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Replace the parameters for the next run. The current model stays
    /// untouched until `generate` succeeds past validation.
    pub fn set_params(&mut self, params: GenerationParams) {
        self.params = params;
    }

    pub fn model(&self) -> Option<&WorldModel> {
        self.model.as_ref()
    }

    /// Discard all artifacts of the previous run.
    pub fn clear(&mut self) {
        self.model = None;
    }

    /// Validate, clear, then run the pipeline. Clearing only happens once
    /// validation has passed, so a failed call leaves the old model alone.
    pub fn generate(&mut self) -> Result<&WorldModel, ConfigError> {
        self.params.validate()?;
        self.clear();
        let model = generate_world(&self.params)?;
        Ok(self.model.insert(model))
    }
}

/// Generate a world, drawing a fresh seed unless the params pin one.
///
/// The fresh draw is the only non-deterministic entry point in the system;
/// everything downstream of the chosen seed is bit-reproducible.
pub fn generate_world(params: &GenerationParams) -> Result<WorldModel, ConfigError> {
    params.validate()?;
    let seed = if params.fix_seed {
        params.seed
    } else {
        rand::random()
    };
    Ok(generate_world_seeded(params, seed))
}

/// Generate a world from an explicit seed. Callers must have validated
/// `params`; the public entry points do.
pub fn generate_world_seeded(params: &GenerationParams, seed: u64) -> WorldModel {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let neighbors = NeighborTable::build(params.width, params.height);

    let noise = sample_noise_field(params, seed, &mut rng);
    let starts = place_start_positions(params, &mut rng);

    let mut levels = assign_levels(&noise, &params.level_weights);
    carve_safe_zones(&mut levels, &starts, &neighbors);

    let mut tiles: Vec<TileRecord> = levels
        .iter()
        .enumerate()
        .map(|(id, &level_value)| {
            let height_value = level_value * params.height_scale;
            TileRecord {
                id,
                // Only the lowest quantile level carries a zero height
                // value, so the water line is independent of height_scale.
                tile_type: if height_value == 0.0 {
                    TileType::Water
                } else {
                    TileType::Land
                },
                zone: 0,
                is_start_position: false,
            }
        })
        .collect();
    for &start in &starts {
        tiles[start].is_start_position = true;
    }

    let zone_count = grow_zones(&mut tiles, &neighbors, params.hex_size, &mut rng);
    let borders = compute_borders(&tiles, &neighbors);

    WorldModel {
        width: params.width,
        height: params.height,
        seed,
        zone_count,
        neighbors,
        tiles,
        borders,
    }
}

/// Read-only projection of water/zone boundaries onto direction flags.
///
/// Off-grid slots of a land cell are flagged as borders; in practice land
/// never touches the grid edge because the outer ring is forced to water.
fn compute_borders(tiles: &[TileRecord], neighbors: &NeighborTable) -> Vec<[bool; DIR_COUNT]> {
    tiles
        .iter()
        .map(|tile| {
            let mut flags = [false; DIR_COUNT];
            if tile.tile_type != TileType::Land {
                return flags;
            }
            for (dir, &n) in neighbors.neighbors(tile.id).iter().enumerate() {
                if n == NO_NEIGHBOR {
                    flags[dir] = true;
                    continue;
                }
                let other = &tiles[n as usize];
                flags[dir] = other.tile_type == TileType::Water || other.zone != tile.zone;
            }
            flags
        })
        .collect()
}
