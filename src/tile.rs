//! Per-cell tile records produced by the generation pipeline.

/// Classification of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum TileType {
    #[default]
    Water,
    /// Declared for water/land transition tiles; the current classifier
    /// never produces it.
    Coast,
    Land,
}

impl TileType {
    pub fn display_name(&self) -> &'static str {
        match self {
            TileType::Water => "Water",
            TileType::Coast => "Coast",
            TileType::Land => "Land",
        }
    }
}

/// One record per cell, id equal to the row-major index `z * width + x`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TileRecord {
    pub id: usize,
    pub tile_type: TileType,
    /// Ownership region id; 0 means unassigned (permanently 0 for water).
    pub zone: u32,
    pub is_start_position: bool,
}

impl TileRecord {
    pub fn is_land(&self) -> bool {
        self.tile_type == TileType::Land
    }

    pub fn is_water(&self) -> bool {
        self.tile_type == TileType::Water
    }
}
