//! Screen ⇄ world block coordinate mapping.
//!
//! Screen space is CSS pixels with y growing downward. The camera offset is
//! the scroll position of the viewport in the same orientation. World space
//! is measured in blocks with y growing upward from the bottom row, so the
//! mapper is the only place the Y axis flips.

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

use crate::consts::COORD_EPSILON;
use crate::grid::Block;

/// Cell indices derived from pixels are clamped to `±i32::MAX / 2` so row
/// arithmetic on them cannot overflow, however far the pointer strays.
const CELL_LIMIT: f64 = 1_073_741_823.0;

/// A point in screen or camera pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Inclusive range of world blocks, as returned by [`CoordMapper::visible_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl BlockRange {
    #[must_use]
    pub fn contains(&self, block: Block) -> bool {
        (self.min_x..=self.max_x).contains(&block.x) && (self.min_y..=self.max_y).contains(&block.y)
    }
}

/// Pure conversions between screen pixels and world blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordMapper {
    /// Edge length of one block in pixels.
    pub block_size: f64,
    /// Width of the world in blocks.
    pub world_width_blocks: u32,
    /// Height of the world in blocks; anchors world y = 0 to the bottom row.
    pub world_height_blocks: u32,
    /// Screen y of the top edge of the tile layer.
    pub layer_origin_y: f64,
}

impl CoordMapper {
    #[must_use]
    pub fn new(block_size: f64, world_width_blocks: u32, world_height_blocks: u32, layer_origin_y: f64) -> Self {
        Self { block_size, world_width_blocks, world_height_blocks, layer_origin_y }
    }

    /// Size of the whole world in pixels.
    #[must_use]
    pub fn world_size_px(&self) -> Point {
        Point {
            x: f64::from(self.world_width_blocks) * self.block_size,
            y: f64::from(self.world_height_blocks) * self.block_size,
        }
    }

    /// Pixel extent the camera scrolls over: the world shifted down by the
    /// layer origin, so the bottom row is always reachable.
    #[must_use]
    pub fn scroll_extent_px(&self) -> Point {
        let world = self.world_size_px();
        Point { x: world.x, y: (world.y + self.layer_origin_y).max(0.0) }
    }

    /// The world block under a screen point. May lie outside the world.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point, offset: Point) -> Block {
        let col = self.px_to_cells(screen.x + offset.x);
        let row = self.px_to_cells(screen.y + offset.y - self.layer_origin_y);
        Block { x: col, y: self.top_row().saturating_sub(row) }
    }

    /// Screen position of the top-left corner of a block.
    #[must_use]
    pub fn world_to_screen(&self, block: Block, offset: Point) -> Point {
        let row = self.top_row().saturating_sub(block.y);
        Point {
            x: f64::from(block.x) * self.block_size - offset.x,
            y: f64::from(row) * self.block_size + self.layer_origin_y - offset.y,
        }
    }

    /// Blocks at least partially visible in a viewport, clipped to the world.
    ///
    /// Returns `None` when the viewport shows no world cell at all.
    #[must_use]
    pub fn visible_range(&self, offset: Point, viewport: Point) -> Option<BlockRange> {
        let first_col = self.px_to_cells(offset.x);
        let last_col = self.px_to_last_cell(offset.x + viewport.x);
        let first_row = self.px_to_cells(offset.y - self.layer_origin_y);
        let last_row = self.px_to_last_cell(offset.y + viewport.y - self.layer_origin_y);
        let max_col = i32::try_from(self.world_width_blocks).unwrap_or(i32::MAX) - 1;

        let range = BlockRange {
            min_x: first_col.max(0),
            max_x: last_col.min(max_col),
            min_y: self.top_row().saturating_sub(last_row).max(0),
            max_y: self.top_row().saturating_sub(first_row).min(self.top_row()),
        };
        (range.min_x <= range.max_x && range.min_y <= range.max_y).then_some(range)
    }

    fn top_row(&self) -> i32 {
        i32::try_from(self.world_height_blocks).unwrap_or(i32::MAX) - 1
    }

    #[allow(clippy::cast_possible_truncation)]
    fn px_to_cells(&self, px: f64) -> i32 {
        (px / self.block_size + COORD_EPSILON).floor().clamp(-CELL_LIMIT, CELL_LIMIT) as i32
    }

    /// Index of the last cell touched by a span ending at `px` (exclusive).
    #[allow(clippy::cast_possible_truncation)]
    fn px_to_last_cell(&self, px: f64) -> i32 {
        (px / self.block_size - COORD_EPSILON).ceil().clamp(-CELL_LIMIT, CELL_LIMIT) as i32 - 1
    }
}
