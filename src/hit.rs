//! Hit-testing against reserved UI chrome (buttons drawn over the level).
//!
//! The host registers a screen rectangle for each widget that sits on top of
//! the tile layer. Pointer presses that land in one of them belong to the
//! widget and never start a paint stroke.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::coords::Point;

/// Axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Whether `p` lies inside, left/top edges inclusive.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

/// Which viewport corner a region is positioned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// `rect.x` is the distance from the left edge to the region's left edge.
    #[default]
    TopLeft,
    /// `rect.x` is the distance from the right edge to the region's right edge.
    TopRight,
}

/// A named chrome widget area.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeRegion {
    pub name: String,
    pub anchor: Anchor,
    pub rect: Rect,
}

impl ChromeRegion {
    /// Absolute screen rectangle for a viewport width.
    #[must_use]
    pub fn resolve(&self, viewport_width: f64) -> Rect {
        match self.anchor {
            Anchor::TopLeft => self.rect,
            Anchor::TopRight => Rect { x: viewport_width - self.rect.x - self.rect.width, ..self.rect },
        }
    }
}

/// The set of chrome regions currently on screen.
#[derive(Debug, Clone, Default)]
pub struct ChromeRegions {
    regions: Vec<ChromeRegion>,
    viewport_width: f64,
}

impl ChromeRegions {
    #[must_use]
    pub fn new(viewport_width: f64) -> Self {
        Self { regions: Vec::new(), viewport_width }
    }

    /// Register a region, replacing any region with the same name.
    pub fn insert(&mut self, name: &str, anchor: Anchor, rect: Rect) {
        self.remove(name);
        self.regions.push(ChromeRegion { name: name.to_owned(), anchor, rect });
    }

    /// Remove a region. Returns whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.regions.len();
        self.regions.retain(|r| r.name != name);
        self.regions.len() != before
    }

    /// Update the width right-anchored regions are resolved against.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Name of the topmost region under `p`, if any. Later registrations are on top.
    #[must_use]
    pub fn hit(&self, p: Point) -> Option<&str> {
        self.regions
            .iter()
            .rev()
            .find(|r| r.resolve(self.viewport_width).contains(p))
            .map(|r| r.name.as_str())
    }

    /// Whether `p` is on any chrome region.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.hit(p).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
