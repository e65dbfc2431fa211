use tracing::{debug, info};

use crate::camera::Camera;
use crate::config::{ConfigError, EditorConfig};
use crate::consts::BACK_REGION;
use crate::coords::{CoordMapper, Point};
use crate::grid::{Block, WorldGrid};
use crate::hit::ChromeRegions;
use crate::input::{Button, InputState, Key, Modifiers, WheelDelta};
use crate::level::{LevelError, LevelId, LevelStore};
use crate::paint::{PaintController, PaintOp, Press};
use crate::render::{RenderFrame, RenderSink, build_frame};
use crate::tiles::TileLayer;

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The tile layer or camera changed; redraw.
    RenderNeeded,
    /// The camera offset changed.
    CameraMoved(Point),
    /// The block set changed; `filled` is the new block count.
    BlocksChanged { filled: usize },
    /// The user asked to leave the editor (Back button or Escape).
    Exit,
}

/// Core editor state: everything except the drawing surface.
///
/// Separated from [`Editor`] so it can be driven and tested without a sink.
#[derive(Debug, Clone)]
pub struct EditorCore {
    config: EditorConfig,
    grid: WorldGrid,
    tiles: TileLayer,
    mapper: CoordMapper,
    camera: Camera,
    paint: PaintController,
    chrome: ChromeRegions,
    erase_mode: bool,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::build(EditorConfig::default())
    }
}

impl EditorCore {
    /// Create an editor for a validated configuration.
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EditorConfig) -> Self {
        let grid = WorldGrid::new(config.world_width_blocks, config.world_height_blocks);
        let mapper = CoordMapper::new(
            config.block_size,
            config.world_width_blocks,
            config.world_height_blocks,
            config.layer_origin_y,
        );
        let viewport = Point::new(config.viewport_width, config.viewport_height);
        Self {
            tiles: TileLayer::resolve(&grid),
            camera: Camera::new(mapper.scroll_extent_px(), viewport),
            chrome: ChromeRegions::new(config.viewport_width),
            paint: PaintController::new(),
            erase_mode: false,
            grid,
            mapper,
            config,
        }
    }

    // --- Lifecycle ---

    /// Enter the editor: reset gestures, swallow the opening click, and
    /// scroll to the ground (world row 0 sits at the bottom of the world).
    pub fn enter(&mut self) -> Vec<Action> {
        self.paint.arm();
        let bottom = Point::new(0.0, self.camera.max_offset().y);
        let offset = self.camera.scroll_to(bottom);
        debug!(offset_y = offset.y, "editor entered");
        vec![Action::CameraMoved(offset), Action::RenderNeeded]
    }

    // --- Data ---

    /// Replace the level contents. Out-of-bounds blocks are dropped.
    pub fn load_blocks(&mut self, blocks: &[Block]) -> Vec<Action> {
        let dropped = self.grid.load_from(blocks.iter().copied());
        info!(loaded = self.grid.len(), dropped, "level blocks loaded");
        self.blocks_changed()
    }

    /// Remove every block.
    pub fn clear(&mut self) -> Vec<Action> {
        self.grid.clear();
        self.blocks_changed()
    }

    /// The level's blocks in persistence order.
    #[must_use]
    pub fn blocks(&self) -> Vec<Block> {
        self.grid.to_list()
    }

    /// Save the current level through a store.
    pub fn save_to(&self, store: &mut dyn LevelStore, name: &str) -> Result<LevelId, LevelError> {
        let blocks = self.grid.to_list();
        let id = store.save(name, &blocks)?;
        info!(id, name, blocks = blocks.len(), "level saved");
        Ok(id)
    }

    /// Load a stored level into the editor.
    pub fn load_from_store(&mut self, store: &dyn LevelStore, id: LevelId) -> Result<Vec<Action>, LevelError> {
        let blocks = store.load(id)?;
        Ok(self.load_blocks(&blocks))
    }

    // --- Modes / layout ---

    /// Sticky erase toggle; Shift still erases while it is off.
    pub fn set_erase_mode(&mut self, erase: bool) {
        self.erase_mode = erase;
    }

    /// Reserved UI regions; presses there never paint.
    pub fn chrome_mut(&mut self) -> &mut ChromeRegions {
        &mut self.chrome
    }

    /// Update viewport dimensions. Re-clamps the camera.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        let offset = self.camera.set_viewport(width, height);
        self.chrome.set_viewport_width(self.camera.viewport().x);
        vec![Action::CameraMoved(offset), Action::RenderNeeded]
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        let chrome_hit = self.chrome.hit(screen).map(str::to_owned);
        match self.paint.press(screen, button, chrome_hit.is_some()) {
            Press::OnChrome if chrome_hit.as_deref() == Some(BACK_REGION) => {
                debug!("back pressed");
                vec![Action::Exit]
            }
            Press::Drawing => self.paint_at(screen, modifiers),
            Press::Suppressed | Press::OnChrome | Press::Panning => Vec::new(),
        }
    }

    pub fn on_pointer_move(&mut self, screen: Point, modifiers: Modifiers) -> Vec<Action> {
        match self.paint.state() {
            InputState::Drawing { .. } if self.chrome.contains(screen) => {
                self.paint.lift();
                Vec::new()
            }
            InputState::Drawing { .. } => self.paint_at(screen, modifiers),
            InputState::Panning { .. } => match self.paint.drag(screen) {
                Some((dx, dy)) => self.pan_now(dx, dy),
                None => Vec::new(),
            },
            InputState::Idle => Vec::new(),
        }
    }

    /// Ends the gesture if `button` started it. Releases of other buttons
    /// are ignored. Position and modifiers play no part: the last move
    /// already painted under the pointer.
    pub fn on_pointer_up(&mut self, _screen: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        self.paint.release(button);
        Vec::new()
    }

    /// The pointer left the canvas; ends any gesture.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.paint.cancel();
        Vec::new()
    }

    pub fn on_wheel(&mut self, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        self.pan_now(delta.dx, delta.dy)
    }

    pub fn on_key_down(&mut self, key: &Key, _modifiers: Modifiers) -> Vec<Action> {
        if key.is_exit() {
            return vec![Action::Exit];
        }
        let Some((ux, uy)) = key.pan_direction() else {
            return Vec::new();
        };
        let step = self.config.key_pan_step_px();
        let before = self.camera.offset();
        self.camera.pan_by_animated(ux * step, uy * step, self.config.key_pan_duration_ms);
        self.camera_moved(before)
    }

    /// Advance time-based state (the eased camera pan) by `dt_ms`.
    pub fn tick(&mut self, dt_ms: f64) -> Vec<Action> {
        match self.camera.tick(dt_ms) {
            Some(offset) => vec![Action::CameraMoved(offset), Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    #[must_use]
    pub fn tiles(&self) -> &TileLayer {
        &self.tiles
    }

    #[must_use]
    pub fn mapper(&self) -> &CoordMapper {
        &self.mapper
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[must_use]
    pub fn input_state(&self) -> InputState {
        self.paint.state()
    }

    #[must_use]
    pub fn erase_mode(&self) -> bool {
        self.erase_mode
    }

    /// World block under a screen point, if it lies inside the world.
    #[must_use]
    pub fn block_at(&self, screen: Point) -> Option<Block> {
        let block = self.mapper.screen_to_world(screen, self.camera.offset());
        self.grid.in_bounds(block.x, block.y).then_some(block)
    }

    /// Draw commands for the current state.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        build_frame(&self.tiles, &self.mapper, &self.camera)
    }

    // --- Internals ---

    fn paint_at(&mut self, screen: Point, modifiers: Modifiers) -> Vec<Action> {
        let block = self.mapper.screen_to_world(screen, self.camera.offset());
        let op = PaintOp::sample(modifiers, self.erase_mode);
        if self.paint.stroke(&mut self.grid, block, op) {
            self.blocks_changed()
        } else {
            Vec::new()
        }
    }

    fn blocks_changed(&mut self) -> Vec<Action> {
        self.tiles = TileLayer::resolve(&self.grid);
        vec![Action::BlocksChanged { filled: self.grid.len() }, Action::RenderNeeded]
    }

    fn pan_now(&mut self, dx: f64, dy: f64) -> Vec<Action> {
        let before = self.camera.offset();
        self.camera.pan_by(dx, dy);
        self.camera_moved(before)
    }

    fn camera_moved(&self, before: Point) -> Vec<Action> {
        let after = self.camera.offset();
        if after == before { Vec::new() } else { vec![Action::CameraMoved(after), Action::RenderNeeded] }
    }
}

/// The full editor: wraps [`EditorCore`] and repaints a [`RenderSink`]
/// whenever a handler reports [`Action::RenderNeeded`].
pub struct Editor<S: RenderSink> {
    pub core: EditorCore,
    sink: S,
}

impl<S: RenderSink> Editor<S> {
    pub fn new(config: EditorConfig, sink: S) -> Result<Self, ConfigError> {
        Ok(Self { core: EditorCore::new(config)?, sink })
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    // --- Delegated handlers ---

    pub fn enter(&mut self) -> Vec<Action> {
        let actions = self.core.enter();
        self.present(actions)
    }

    pub fn load_blocks(&mut self, blocks: &[Block]) -> Vec<Action> {
        let actions = self.core.load_blocks(blocks);
        self.present(actions)
    }

    pub fn load_from_store(&mut self, store: &dyn LevelStore, id: LevelId) -> Result<Vec<Action>, LevelError> {
        let actions = self.core.load_from_store(store, id)?;
        Ok(self.present(actions))
    }

    pub fn save_to(&self, store: &mut dyn LevelStore, name: &str) -> Result<LevelId, LevelError> {
        self.core.save_to(store, name)
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        let actions = self.core.set_viewport(width, height);
        self.present(actions)
    }

    pub fn on_pointer_down(&mut self, screen: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        let actions = self.core.on_pointer_down(screen, button, modifiers);
        self.present(actions)
    }

    pub fn on_pointer_move(&mut self, screen: Point, modifiers: Modifiers) -> Vec<Action> {
        let actions = self.core.on_pointer_move(screen, modifiers);
        self.present(actions)
    }

    pub fn on_pointer_up(&mut self, screen: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        let actions = self.core.on_pointer_up(screen, button, modifiers);
        self.present(actions)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let actions = self.core.on_pointer_leave();
        self.present(actions)
    }

    pub fn on_wheel(&mut self, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        let actions = self.core.on_wheel(delta, modifiers);
        self.present(actions)
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        let actions = self.core.on_key_down(key, modifiers);
        self.present(actions)
    }

    pub fn tick(&mut self, dt_ms: f64) -> Vec<Action> {
        let actions = self.core.tick(dt_ms);
        self.present(actions)
    }

    fn present(&mut self, actions: Vec<Action>) -> Vec<Action> {
        if actions.contains(&Action::RenderNeeded) {
            self.sink.redraw(&self.core.frame());
        }
        actions
    }
}
