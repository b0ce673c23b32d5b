//! ASCII rendering of generated maps
//!
//! Renders a world model as text for the terminal. Odd rows are indented
//! one space to hint at the hex offset layout.

use crate::tile::{TileRecord, TileType};
use crate::world::WorldModel;

/// ASCII rendering modes
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AsciiMode {
    /// Water/land/start characters
    Terrain,
    /// Zone ids modulo 10 (water stays `~`)
    Zones,
    /// Border edge counts per land cell
    Borders,
}

impl AsciiMode {
    pub fn name(&self) -> &'static str {
        match self {
            AsciiMode::Terrain => "Terrain",
            AsciiMode::Zones => "Zones",
            AsciiMode::Borders => "Borders",
        }
    }
}

/// Get the terrain character for a tile.
pub fn terrain_char(tile: &TileRecord) -> char {
    if tile.is_start_position {
        return '@';
    }
    match tile.tile_type {
        TileType::Water => '~',
        TileType::Coast => ',',
        TileType::Land => '.',
    }
}

fn zone_char(tile: &TileRecord) -> char {
    if tile.zone == 0 {
        return '~';
    }
    char::from_digit(tile.zone % 10, 10).unwrap_or('?')
}

fn border_char(model: &WorldModel, tile: &TileRecord) -> char {
    if !tile.is_land() {
        return '~';
    }
    let edges = model.borders[tile.id].iter().filter(|&&b| b).count() as u32;
    char::from_digit(edges, 10).unwrap_or('?')
}

/// Render the whole map as a multi-line string, north row first.
pub fn render_map(model: &WorldModel, mode: AsciiMode) -> String {
    let mut out = String::with_capacity((model.width + 3) * model.height);
    for z in (0..model.height).rev() {
        if z % 2 == 1 {
            out.push(' ');
        }
        for x in 0..model.width {
            let tile = model.tile(x, z);
            let c = match mode {
                AsciiMode::Terrain => terrain_char(tile),
                AsciiMode::Zones => zone_char(tile),
                AsciiMode::Borders => border_char(model, tile),
            };
            out.push(c);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::GenerationParams;
    use crate::world::generate_world_seeded;

    #[test]
    fn test_render_covers_every_cell() {
        let params = GenerationParams {
            width: 10,
            height: 8,
            fix_seed: true,
            seed: 1,
            border_size: 1.0,
            ..Default::default()
        };
        let model = generate_world_seeded(&params, 1);
        let text = render_map(&model, AsciiMode::Terrain);
        assert_eq!(text.lines().count(), 8);
        for line in text.lines() {
            let cells = line.chars().filter(|c| !c.is_whitespace()).count();
            assert_eq!(cells, 10);
        }
    }

    #[test]
    fn test_start_cells_render_as_at() {
        let params = GenerationParams {
            width: 12,
            height: 12,
            fix_seed: true,
            seed: 9,
            player_count: 2,
            ..Default::default()
        };
        let model = generate_world_seeded(&params, 9);
        let text = render_map(&model, AsciiMode::Terrain);
        assert_eq!(
            text.chars().filter(|&c| c == '@').count(),
            model.start_positions().len()
        );
    }
}
