//! Hex grid topology
//!
//! Builds the neighbor table for an offset hex grid (row-parity layout:
//! odd rows are shifted half a cell to the right) and converts cell
//! indices to world-space positions for distance computations.

/// Sentinel for a missing neighbor (cell sits on the grid boundary).
pub const NO_NEIGHBOR: i32 = -1;

/// Direction slot indices, clockwise from "upper-right"
pub const DIR_UP_RIGHT: usize = 0;
pub const DIR_RIGHT: usize = 1;
pub const DIR_DOWN_RIGHT: usize = 2;
pub const DIR_DOWN_LEFT: usize = 3;
pub const DIR_LEFT: usize = 4;
pub const DIR_UP_LEFT: usize = 5;

/// Number of direction slots per cell.
pub const DIR_COUNT: usize = 6;

/// Slot index of the inverse direction (up-right <-> down-left, etc.).
pub fn opposite_direction(dir: usize) -> usize {
    (dir + 3) % DIR_COUNT
}

/// Flat per-cell neighbor table for a W x H offset hex grid.
///
/// Entry `idx * 6 + dir` holds the neighbor cell id in that direction,
/// or [`NO_NEIGHBOR`] where the grid ends. Built once per generation run
/// and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NeighborTable {
    pub width: usize,
    pub height: usize,
    data: Vec<i32>,
}

impl NeighborTable {
    /// Build the full table for a `width` x `height` grid.
    pub fn build(width: usize, height: usize) -> Self {
        let total = width * height;
        let mut data = Vec::with_capacity(total * DIR_COUNT);
        for idx in 0..total {
            data.extend_from_slice(&cell_neighbors(idx, width, height));
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// The six neighbor slots of a cell, in fixed direction order.
    pub fn neighbors(&self, idx: usize) -> &[i32] {
        &self.data[idx * DIR_COUNT..(idx + 1) * DIR_COUNT]
    }

    /// Single neighbor lookup.
    pub fn get(&self, idx: usize, dir: usize) -> i32 {
        self.data[idx * DIR_COUNT + dir]
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// Compute the six neighbor ids of `idx` on a row-parity offset hex grid.
///
/// Even and odd rows shift the diagonal neighbors by one column; left and
/// right grid edges suppress the corresponding slots.
fn cell_neighbors(idx: usize, width: usize, height: usize) -> [i32; DIR_COUNT] {
    let mut res = [NO_NEIGHBOR; DIR_COUNT];
    let max = (width * height) as i32;
    let w = width as i32;
    let idx = idx as i32;

    let even_row = (idx / w) % 2 == 0;
    let left_edge = idx % w == 0;
    let right_edge = (idx + 1) % w == 0;

    let top = idx + w;
    if top < max {
        if even_row {
            res[DIR_UP_RIGHT] = top;
            if !left_edge {
                res[DIR_UP_LEFT] = top - 1;
            }
        } else {
            res[DIR_UP_LEFT] = top;
            if !right_edge {
                res[DIR_UP_RIGHT] = top + 1;
            }
        }
    }

    let bottom = idx - w;
    if bottom >= 0 {
        if even_row {
            res[DIR_DOWN_RIGHT] = bottom;
            if !left_edge {
                res[DIR_DOWN_LEFT] = bottom - 1;
            }
        } else {
            res[DIR_DOWN_LEFT] = bottom;
            if !right_edge {
                res[DIR_DOWN_RIGHT] = bottom + 1;
            }
        }
    }

    if !left_edge {
        res[DIR_LEFT] = idx - 1;
    }
    if !right_edge {
        res[DIR_RIGHT] = idx + 1;
    }

    res
}

/// World-space position of a cell in the hex layout.
///
/// Odd rows are shifted half a cell to the right; row pitch is
/// `0.5 * hex_size * sqrt(3)`.
pub fn tile_position(x: usize, z: usize, hex_size: f32) -> (f32, f32) {
    let row_shift = if z % 2 == 0 { 0.0 } else { hex_size * 0.5 };
    (
        x as f32 * hex_size + row_shift,
        z as f32 * 0.5 * hex_size * 3.0f32.sqrt(),
    )
}

/// World-space position by flat cell index.
pub fn tile_position_of(idx: usize, width: usize, hex_size: f32) -> (f32, f32) {
    tile_position(idx % width, idx / width, hex_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_symmetry() {
        let table = NeighborTable::build(7, 6);
        for idx in 0..table.cell_count() {
            for dir in 0..DIR_COUNT {
                let n = table.get(idx, dir);
                if n == NO_NEIGHBOR {
                    continue;
                }
                let back = table.get(n as usize, opposite_direction(dir));
                assert_eq!(
                    back, idx as i32,
                    "cell {} dir {} -> {} has no inverse relation",
                    idx, dir, n
                );
            }
        }
    }

    #[test]
    fn test_boundary_sentinels() {
        let width = 5;
        let height = 4;
        let table = NeighborTable::build(width, height);
        for idx in 0..table.cell_count() {
            for dir in 0..DIR_COUNT {
                let n = table.get(idx, dir);
                if n == NO_NEIGHBOR {
                    continue;
                }
                assert!((n as usize) < width * height);
            }
        }
        // Bottom-left corner: nothing below, nothing to the left.
        let corner = table.neighbors(0);
        assert_eq!(corner[DIR_DOWN_RIGHT], NO_NEIGHBOR);
        assert_eq!(corner[DIR_DOWN_LEFT], NO_NEIGHBOR);
        assert_eq!(corner[DIR_LEFT], NO_NEIGHBOR);
        assert_eq!(corner[DIR_UP_LEFT], NO_NEIGHBOR);
        assert_eq!(corner[DIR_RIGHT], 1);
        assert_eq!(corner[DIR_UP_RIGHT], width as i32);
    }

    #[test]
    fn test_interior_cells_have_six_neighbors() {
        let table = NeighborTable::build(6, 6);
        // Interior cells away from any edge keep all six slots.
        for z in 1..5 {
            for x in 1..5 {
                let idx = z * 6 + x;
                let filled = table.neighbors(idx).iter().filter(|&&n| n != NO_NEIGHBOR).count();
                assert_eq!(filled, 6, "interior cell {} lost a neighbor", idx);
            }
        }
    }

    #[test]
    fn test_row_parity_offset() {
        let table = NeighborTable::build(5, 5);
        // Even row cell (1,0): up-right is straight above, up-left is above-left.
        let even = table.neighbors(1);
        assert_eq!(even[DIR_UP_RIGHT], 6);
        assert_eq!(even[DIR_UP_LEFT], 5);
        // Odd row cell (1,1): up-left is straight above, up-right is above-right.
        let odd = table.neighbors(6);
        assert_eq!(odd[DIR_UP_LEFT], 11);
        assert_eq!(odd[DIR_UP_RIGHT], 12);
    }

    #[test]
    fn test_tile_position_row_shift() {
        let (x0, z0) = tile_position(2, 0, 1.0);
        let (x1, z1) = tile_position(2, 1, 1.0);
        assert_eq!(x0, 2.0);
        assert_eq!(z0, 0.0);
        assert_eq!(x1, 2.5);
        assert!((z1 - 0.5 * 3.0f32.sqrt()).abs() < 1e-6);
    }
}
