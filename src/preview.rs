//! Level preview: project a block list onto a small fixed-size rectangle,
//! as shown next to the level list when creating a game.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use crate::consts::{DEFAULT_PREVIEW_HEIGHT_PX, DEFAULT_PREVIEW_WIDTH_PX, DEFAULT_WORLD_HEIGHT_BLOCKS, DEFAULT_WORLD_WIDTH_BLOCKS};
use crate::grid::Block;
use crate::hit::Rect;

/// Preview and map dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewLayout {
    /// Preview width in pixels.
    pub width: f64,
    /// Preview height in pixels.
    pub height: f64,
    /// Map width in blocks.
    pub map_width: u32,
    /// Map height in blocks.
    pub map_height: u32,
}

impl Default for PreviewLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_PREVIEW_WIDTH_PX,
            height: DEFAULT_PREVIEW_HEIGHT_PX,
            map_width: DEFAULT_WORLD_WIDTH_BLOCKS,
            map_height: DEFAULT_WORLD_HEIGHT_BLOCKS,
        }
    }
}

impl PreviewLayout {
    /// Size of one block cell in preview pixels.
    #[must_use]
    pub fn cell_size(&self) -> (f64, f64) {
        (self.width / f64::from(self.map_width.max(1)), self.height / f64::from(self.map_height.max(1)))
    }

    /// Preview rectangle for one block. Y flips: world row 0 is the bottom.
    #[must_use]
    pub fn cell_rect(&self, block: Block) -> Rect {
        let (cw, ch) = self.cell_size();
        let row = f64::from(self.map_height) - f64::from(block.y) - 1.0;
        Rect::new(f64::from(block.x) * cw, row * ch, cw, ch)
    }

    /// Rectangles for every block that lies on the map.
    #[must_use]
    pub fn rects(&self, blocks: &[Block]) -> Vec<Rect> {
        blocks
            .iter()
            .filter(|b| {
                u32::try_from(b.x).is_ok_and(|x| x < self.map_width) && u32::try_from(b.y).is_ok_and(|y| y < self.map_height)
            })
            .map(|b| self.cell_rect(*b))
            .collect()
    }
}
