//! Auto-tiling: derive the visual tile layer from the block grid.
//!
//! Every filled block shows soil. An exposed top (the cell above is empty)
//! grows a grass cap in that empty cell. The rule only looks at a block and
//! its upper neighbour, and the layer is always rebuilt from the whole grid
//! after a mutation.

#[cfg(test)]
#[path = "tiles_test.rs"]
mod tiles_test;

use std::collections::BTreeMap;

use crate::consts::{GRASS_TILE_INDEX, SOIL_TILE_INDEX};
use crate::grid::{Block, WorldGrid};

/// Tile variant drawn in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Solid ground; drawn on every filled block.
    Soil,
    /// Grass cap; drawn on the empty cell above an exposed block.
    Grass,
}

impl Tile {
    /// Index of this tile in the editor tileset.
    #[must_use]
    pub fn index(self) -> u32 {
        match self {
            Self::Soil => SOIL_TILE_INDEX,
            Self::Grass => GRASS_TILE_INDEX,
        }
    }
}

/// Resolved tile assignment for every cell that shows something.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileLayer {
    tiles: BTreeMap<Block, Tile>,
}

impl TileLayer {
    /// Build the layer for the current grid contents.
    #[must_use]
    pub fn resolve(grid: &WorldGrid) -> Self {
        let mut tiles = BTreeMap::new();
        for block in grid.iter() {
            tiles.insert(block, Tile::Soil);
            let above = block.above();
            if grid.in_bounds(above.x, above.y) && !grid.is_filled(above.x, above.y) {
                tiles.insert(above, Tile::Grass);
            }
        }
        Self { tiles }
    }

    /// Tile shown at a cell, if any.
    #[must_use]
    pub fn tile_at(&self, x: i32, y: i32) -> Option<Tile> {
        self.tiles.get(&Block::new(x, y)).copied()
    }

    /// All assigned tiles in `(x, y)` order.
    pub fn iter(&self) -> impl Iterator<Item = (Block, Tile)> + '_ {
        self.tiles.iter().map(|(block, tile)| (*block, *tile))
    }

    /// Number of cells with a tile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of cells showing the given tile.
    #[must_use]
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.values().filter(|t| **t == tile).count()
    }
}
