//! Generation parameters and configuration validation
//!
//! Malformed configuration is a precondition violation: `validate` fails
//! fast before the pipeline touches any previous output.

use thiserror::Error;

/// Smallest grid extent that leaves room for the forced water ring plus
/// at least one interior cell.
pub const MIN_MAP_EXTENT: usize = 4;

/// Immutable input for one generation run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenerationParams {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Hex cell size in world units (affects zone centroid distances)
    pub hex_size: f32,
    /// Noise frequency (lower = larger features)
    pub noise_scale: f32,
    /// Multiplier applied to level values before the water/land cut
    pub height_scale: f32,
    /// Seed for the run RNG; only honored when `fix_seed` is set
    pub seed: u64,
    /// When false, a fresh seed is drawn for every run
    pub fix_seed: bool,
    /// Ordered weights controlling how many cells land in each height level
    pub level_weights: Vec<f32>,
    /// Width of the low-noise band along the map edge
    pub border_size: f32,
    /// Strength of the border falloff
    pub border_intensity: f32,
    /// Number of player start positions to place
    pub player_count: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            hex_size: 1.0,
            noise_scale: 0.1,
            height_scale: 5.0,
            seed: 0,
            fix_seed: false,
            level_weights: vec![1.0; 5],
            border_size: 3.0,
            border_intensity: 1.0,
            player_count: 2,
        }
    }
}

/// Configuration errors reported by [`GenerationParams::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("player count must be at least 1")]
    NoPlayers,

    #[error("level weights must be a non-empty sequence of non-negative values with a positive sum")]
    InvalidLevelWeights,

    #[error("map {width}x{height} is too small for border size {border_size}: the border band leaves no interior cells")]
    MapTooSmall {
        width: usize,
        height: usize,
        border_size: f32,
    },
}

impl GenerationParams {
    /// Check all preconditions of the generation pipeline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count < 1 {
            return Err(ConfigError::NoPlayers);
        }

        let weight_sum: f32 = self.level_weights.iter().sum();
        if self.level_weights.is_empty()
            || self.level_weights.iter().any(|w| *w < 0.0)
            || weight_sum <= 0.0
        {
            return Err(ConfigError::InvalidLevelWeights);
        }

        if self.width < MIN_MAP_EXTENT
            || self.height < MIN_MAP_EXTENT
            || self.band_consumes_extent(self.width)
            || self.band_consumes_extent(self.height)
        {
            return Err(ConfigError::MapTooSmall {
                width: self.width,
                height: self.height,
                border_size: self.border_size,
            });
        }

        Ok(())
    }

    /// True when the border band on both sides swallows the whole axis,
    /// leaving no cell with zero falloff.
    fn band_consumes_extent(&self, extent: usize) -> bool {
        (extent as f32 - 1.0) - 2.0 * self.border_size < 1.0
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Map center in cell coordinates (spawn placement reference point).
    pub fn map_center(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        assert_eq!(GenerationParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_players() {
        let params = GenerationParams {
            player_count: 0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::NoPlayers));
    }

    #[test]
    fn test_rejects_bad_level_weights() {
        let empty = GenerationParams {
            level_weights: vec![],
            ..Default::default()
        };
        assert_eq!(empty.validate(), Err(ConfigError::InvalidLevelWeights));

        let zero_sum = GenerationParams {
            level_weights: vec![0.0, 0.0],
            ..Default::default()
        };
        assert_eq!(zero_sum.validate(), Err(ConfigError::InvalidLevelWeights));

        let negative = GenerationParams {
            level_weights: vec![1.0, -1.0, 1.0],
            ..Default::default()
        };
        assert_eq!(negative.validate(), Err(ConfigError::InvalidLevelWeights));
    }

    #[test]
    fn test_rejects_border_band_swallowing_map() {
        let params = GenerationParams {
            width: 8,
            height: 8,
            border_size: 4.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::MapTooSmall { .. })
        ));
    }

    #[test]
    fn test_accepts_narrow_border() {
        let params = GenerationParams {
            width: 10,
            height: 10,
            border_size: 1.0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Ok(()));
    }
}
