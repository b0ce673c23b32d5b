//! Hex tile map generation library
//!
//! Procedurally generates a hexagonal tile map as a pure data model:
//! water/land classification from border-attenuated noise, player start
//! placement with guaranteed safe land, and contiguous ownership zones of
//! bounded size. Rendering is left to consumers of [`world::WorldModel`].

pub mod ascii;
pub mod export;
pub mod grid;
pub mod levels;
pub mod noise_field;
pub mod params;
pub mod spawns;
pub mod tile;
pub mod world;
pub mod zones;

pub use params::{ConfigError, GenerationParams};
pub use tile::{TileRecord, TileType};
pub use world::{generate_world, WorldGenerator, WorldModel};
