//! Scroll camera bounded to the world extents.
//!
//! The offset is the viewport's scroll position in world pixels, screen
//! oriented (y grows downward). Each axis is clamped to
//! `[0, max(0, world_px - viewport_px)]` at all times, including every frame
//! of an eased pan.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use crate::coords::Point;

/// Sine ease-out over `t` in `[0, 1]`.
#[must_use]
pub fn ease_out_sine(t: f64) -> f64 {
    (t.clamp(0.0, 1.0) * FRAC_PI_2).sin()
}

/// An eased pan in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanTween {
    /// Offset when the pan started.
    pub from: Point,
    /// Clamped destination offset.
    pub to: Point,
    /// Time advanced so far.
    pub elapsed_ms: f64,
    /// Total pan duration.
    pub duration_ms: f64,
}

impl PanTween {
    /// Progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    fn position(&self) -> Point {
        let e = ease_out_sine(self.progress());
        Point {
            x: self.from.x + (self.to.x - self.from.x) * e,
            y: self.from.y + (self.to.y - self.from.y) * e,
        }
    }
}

/// Camera state for scrolling the level.
#[derive(Debug, Clone)]
pub struct Camera {
    offset: Point,
    world_px: Point,
    viewport: Point,
    tween: Option<PanTween>,
}

impl Camera {
    /// Camera at offset zero for a world and viewport size in pixels.
    #[must_use]
    pub fn new(world_px: Point, viewport: Point) -> Self {
        Self { offset: Point::default(), world_px, viewport, tween: None }
    }

    /// Current scroll offset.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Current viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> Point {
        self.viewport
    }

    /// Scrollable extent in pixels (see [`CoordMapper::scroll_extent_px`]).
    ///
    /// [`CoordMapper::scroll_extent_px`]: crate::coords::CoordMapper::scroll_extent_px
    #[must_use]
    pub fn world_px(&self) -> Point {
        self.world_px
    }

    /// Largest valid offset on each axis; zero when the world fits the viewport.
    #[must_use]
    pub fn max_offset(&self) -> Point {
        Point {
            x: (self.world_px.x - self.viewport.x).max(0.0),
            y: (self.world_px.y - self.viewport.y).max(0.0),
        }
    }

    /// Clamp a candidate offset into the valid range.
    #[must_use]
    pub fn clamp(&self, p: Point) -> Point {
        let max = self.max_offset();
        Point { x: p.x.clamp(0.0, max.x), y: p.y.clamp(0.0, max.y) }
    }

    /// The running pan, if any.
    #[must_use]
    pub fn tween(&self) -> Option<PanTween> {
        self.tween
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Set the offset directly (clamped), cancelling any running pan.
    /// A NaN target is ignored.
    pub fn scroll_to(&mut self, p: Point) -> Point {
        if p.x.is_nan() || p.y.is_nan() {
            return self.offset;
        }
        self.tween = None;
        self.offset = self.clamp(p);
        self.offset
    }

    /// Pan immediately by a pixel delta. Used for wheel and drag input.
    /// Non-finite deltas are ignored.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> Point {
        if !(dx.is_finite() && dy.is_finite()) {
            return self.offset;
        }
        self.scroll_to(Point::new(self.offset.x + dx, self.offset.y + dy))
    }

    /// Start an eased pan by a pixel delta from the current offset.
    ///
    /// Replaces any running pan. A non-positive duration pans immediately.
    /// Requests with a non-finite delta or duration are ignored.
    pub fn pan_by_animated(&mut self, dx: f64, dy: f64, duration_ms: f64) -> Point {
        if !(dx.is_finite() && dy.is_finite() && duration_ms.is_finite()) {
            return self.offset;
        }
        let to = self.clamp(Point::new(self.offset.x + dx, self.offset.y + dy));
        if duration_ms <= 0.0 || to == self.offset {
            return self.scroll_to(to);
        }
        debug!(from_x = self.offset.x, from_y = self.offset.y, to_x = to.x, to_y = to.y, duration_ms, "camera pan started");
        self.tween = Some(PanTween { from: self.offset, to, elapsed_ms: 0.0, duration_ms });
        to
    }

    /// Advance the running pan. Returns the new offset when the camera moved.
    pub fn tick(&mut self, dt_ms: f64) -> Option<Point> {
        let mut tween = self.tween?;
        tween.elapsed_ms += dt_ms.max(0.0);
        let next = if tween.progress() >= 1.0 {
            self.tween = None;
            tween.to
        } else {
            self.tween = Some(tween);
            tween.position()
        };
        self.offset = self.clamp(next);
        Some(self.offset)
    }

    /// Resize the viewport and re-clamp the offset and any pan target.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Point {
        self.viewport = Point::new(width.max(0.0), height.max(0.0));
        if let Some(mut tween) = self.tween {
            tween.from = self.clamp(tween.from);
            tween.to = self.clamp(tween.to);
            self.tween = Some(tween);
        }
        self.offset = self.clamp(self.offset);
        self.offset
    }
}
