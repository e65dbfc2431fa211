//! Rendering boundary: turns the tile layer into screen-space draw commands.
//!
//! This module draws nothing itself. It culls the tile layer to the cells
//! the viewport can show and hands the result to a [`RenderSink`] the host
//! implements (tilemap, sprite batch, terminal, test recorder). It reads
//! editor state and never mutates it.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::Camera;
use crate::coords::{CoordMapper, Point};
use crate::grid::Block;
use crate::tiles::{Tile, TileLayer};

/// One tile to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileDraw {
    /// World cell.
    pub block: Block,
    /// Tile variant.
    pub tile: Tile,
    /// Screen position of the cell's top-left corner.
    pub screen: Point,
}

/// Everything a sink needs to repaint the level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderFrame {
    /// Camera offset the frame was built for.
    pub offset: Point,
    /// Viewport size in pixels.
    pub viewport: Point,
    /// Edge length of one tile in pixels.
    pub block_size: f64,
    /// Visible tiles in `(x, y)` order.
    pub tiles: Vec<TileDraw>,
}

/// Host-side drawing surface.
pub trait RenderSink {
    /// Replace whatever was drawn with `frame`.
    fn redraw(&mut self, frame: &RenderFrame);
}

/// Build the frame for the current tile layer and camera.
#[must_use]
pub fn build_frame(layer: &TileLayer, mapper: &CoordMapper, camera: &Camera) -> RenderFrame {
    let offset = camera.offset();
    let viewport = camera.viewport();
    let tiles = match mapper.visible_range(offset, viewport) {
        Some(range) => layer
            .iter()
            .filter(|(block, _)| range.contains(*block))
            .map(|(block, tile)| TileDraw { block, tile, screen: mapper.world_to_screen(block, offset) })
            .collect(),
        None => Vec::new(),
    };
    RenderFrame { offset, viewport, block_size: mapper.block_size, tiles }
}
