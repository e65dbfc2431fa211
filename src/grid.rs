//! World grid: the set of filled blocks that makes up a level.
//!
//! World space has its origin at the bottom-left cell and y grows upward.
//! The grid is bounded at construction; writes outside the bounds are
//! dropped rather than reported, so input from a viewport larger than the
//! world can never corrupt the level.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// One world cell. Ordered by `(x, y)`.
///
/// Coordinates are signed so that foreign data can be represented and then
/// rejected by [`WorldGrid`] instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Block {
    pub x: i32,
    pub y: i32,
}

impl Block {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell directly above this one.
    #[must_use]
    pub fn above(self) -> Self {
        Self { x: self.x, y: self.y.saturating_add(1) }
    }
}

/// Bounded set of filled blocks.
#[derive(Debug, Clone)]
pub struct WorldGrid {
    width: u32,
    height: u32,
    filled: BTreeSet<Block>,
}

impl WorldGrid {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, filled: BTreeSet::new() }
    }

    /// Width in blocks.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in blocks.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `(x, y)` lies inside the world.
    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        u32::try_from(x).is_ok_and(|x| x < self.width) && u32::try_from(y).is_ok_and(|y| y < self.height)
    }

    /// Set or clear a cell. Returns whether membership changed.
    ///
    /// Out-of-bounds cells are ignored.
    pub fn set_filled(&mut self, x: i32, y: i32, filled: bool) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let block = Block::new(x, y);
        if filled { self.filled.insert(block) } else { self.filled.remove(&block) }
    }

    /// Whether a cell is filled. False for out-of-bounds cells.
    #[must_use]
    pub fn is_filled(&self, x: i32, y: i32) -> bool {
        self.filled.contains(&Block::new(x, y))
    }

    /// All filled blocks, sorted by `(x, y)`.
    #[must_use]
    pub fn to_list(&self) -> Vec<Block> {
        self.filled.iter().copied().collect()
    }

    /// Replace the grid contents. Out-of-bounds entries are dropped.
    ///
    /// Returns the number of entries dropped.
    pub fn load_from<I>(&mut self, blocks: I) -> usize
    where
        I: IntoIterator<Item = Block>,
    {
        self.filled.clear();
        let mut dropped = 0;
        for block in blocks {
            if self.in_bounds(block.x, block.y) {
                self.filled.insert(block);
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            warn!(dropped, width = self.width, height = self.height, "dropped out-of-bounds blocks on load");
        }
        dropped
    }

    /// Remove every block.
    pub fn clear(&mut self) {
        self.filled.clear();
    }

    /// Number of filled blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filled.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled.is_empty()
    }

    /// Iterate filled blocks in `(x, y)` order.
    pub fn iter(&self) -> impl Iterator<Item = Block> + '_ {
        self.filled.iter().copied()
    }
}
