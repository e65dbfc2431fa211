//! Paint controller: the pointer gesture state machine.
//!
//! `Idle → press → Drawing → release → Idle`. While drawing, every pointer
//! move paints (or erases) under the pointer. Whether a stroke adds or
//! removes blocks is sampled per event, so holding Shift mid-stroke switches
//! to erasing. Middle/secondary drags pan the camera instead.
//!
//! The first press after the editor is entered is swallowed once: it is the
//! tail of the menu click that opened the editor.
//!
//! A gesture belongs to the button that started it. Releasing another button
//! leaves it running; the pointer leaving the canvas cancels it outright.

#[cfg(test)]
#[path = "paint_test.rs"]
mod paint_test;

use tracing::debug;

use crate::coords::Point;
use crate::grid::{Block, WorldGrid};
use crate::input::{Button, InputState, Modifiers};

/// What a paint action does to the cells it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOp {
    Fill,
    Erase,
}

impl PaintOp {
    /// Erase when Shift is held or the sticky erase toggle is on.
    #[must_use]
    pub fn sample(modifiers: Modifiers, erase_toggle: bool) -> Self {
        if modifiers.shift || erase_toggle { Self::Erase } else { Self::Fill }
    }

    fn fills(self) -> bool {
        self == Self::Fill
    }
}

/// Result of a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    /// Swallowed by the one-shot suppression after entering the editor.
    Suppressed,
    /// Landed on UI chrome; no gesture started.
    OnChrome,
    /// A paint stroke started.
    Drawing,
    /// A camera drag started.
    Panning,
}

/// Pointer gesture state plus the one-shot press suppression flag.
#[derive(Debug, Clone, Default)]
pub struct PaintController {
    state: InputState,
    /// Button that started the current gesture.
    button: Option<Button>,
    suppress_next_press: bool,
}

impl PaintController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to idle and swallow the next press.
    pub fn arm(&mut self) {
        self.state = InputState::Idle;
        self.button = None;
        self.suppress_next_press = true;
    }

    /// Current gesture.
    #[must_use]
    pub fn state(&self) -> InputState {
        self.state
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    /// Whether the next press will be swallowed.
    #[must_use]
    pub fn suppression_pending(&self) -> bool {
        self.suppress_next_press
    }

    /// Handle a pointer press. `on_chrome` is the host hit-test result.
    pub fn press(&mut self, screen: Point, button: Button, on_chrome: bool) -> Press {
        if self.suppress_next_press {
            self.suppress_next_press = false;
            debug!(x = screen.x, y = screen.y, "suppressed first press after enter");
            return Press::Suppressed;
        }
        let press = match button {
            Button::Primary if on_chrome => return Press::OnChrome,
            Button::Primary => {
                self.state = InputState::Drawing { last_block: None };
                debug!("paint stroke started");
                Press::Drawing
            }
            Button::Middle | Button::Secondary => {
                self.state = InputState::Panning { last_screen: screen };
                debug!("camera drag started");
                Press::Panning
            }
        };
        self.button = Some(button);
        press
    }

    /// Apply a stroke step at `block`. Returns whether the grid changed.
    ///
    /// Cells between the previous and current block are painted too, so fast
    /// pointer moves leave no gaps. The previous block belongs to the previous
    /// step and is not touched again, unless the pointer is still on it.
    /// Does nothing unless drawing.
    pub fn stroke(&mut self, grid: &mut WorldGrid, block: Block, op: PaintOp) -> bool {
        let InputState::Drawing { last_block } = self.state else {
            return false;
        };
        let mut changed = false;
        match last_block {
            Some(from) if from != block => {
                // `from` is in bounds and the line is monotone, so once it
                // leaves the grid it never comes back.
                for cell in line_cells(from, block).skip(1) {
                    if !grid.in_bounds(cell.x, cell.y) {
                        break;
                    }
                    changed |= grid.set_filled(cell.x, cell.y, op.fills());
                }
            }
            _ => changed = grid.set_filled(block.x, block.y, op.fills()),
        }
        let inside = grid.in_bounds(block.x, block.y);
        self.state = InputState::Drawing { last_block: inside.then_some(block) };
        changed
    }

    /// Break the stroke's gap filling, e.g. when the pointer crosses chrome.
    pub fn lift(&mut self) {
        if self.state.is_drawing() {
            self.state = InputState::Drawing { last_block: None };
        }
    }

    /// Advance a camera drag. Returns the camera offset delta to apply.
    pub fn drag(&mut self, screen: Point) -> Option<(f64, f64)> {
        let InputState::Panning { last_screen } = self.state else {
            return None;
        };
        self.state = InputState::Panning { last_screen: screen };
        Some((last_screen.x - screen.x, last_screen.y - screen.y))
    }

    /// Release `button`. Ends the gesture only if that button started it.
    /// Returns whether a gesture ended.
    pub fn release(&mut self, button: Button) -> bool {
        if self.button != Some(button) {
            return false;
        }
        self.cancel()
    }

    /// End any gesture regardless of button. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.state != InputState::Idle;
        if was_active {
            debug!(state = ?self.state, "gesture ended");
        }
        self.state = InputState::Idle;
        self.button = None;
        was_active
    }
}

/// Cells on the line from `a` to `b`, both ends included (Bresenham).
///
/// Lazy, so callers can stop early on very long lines.
#[must_use]
pub fn line_cells(a: Block, b: Block) -> LineCells {
    let dx = (i64::from(b.x) - i64::from(a.x)).abs();
    let dy = -(i64::from(b.y) - i64::from(a.y)).abs();
    LineCells {
        cur: Some(a),
        end: b,
        dx,
        dy,
        sx: if a.x < b.x { 1 } else { -1 },
        sy: if a.y < b.y { 1 } else { -1 },
        err: dx + dy,
    }
}

/// Iterator returned by [`line_cells`].
#[derive(Debug, Clone)]
pub struct LineCells {
    cur: Option<Block>,
    end: Block,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
}

impl Iterator for LineCells {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let cell = self.cur?;
        if cell == self.end {
            self.cur = None;
            return Some(cell);
        }
        let mut next = cell;
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            next.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            next.y += self.sy;
        }
        self.cur = Some(next);
        Some(cell)
    }
}
