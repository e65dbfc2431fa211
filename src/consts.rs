//! Shared numeric constants for the editor crate.

// ── World ───────────────────────────────────────────────────────

/// Default world width in blocks.
pub const DEFAULT_WORLD_WIDTH_BLOCKS: u32 = 200;

/// Default world height in blocks.
pub const DEFAULT_WORLD_HEIGHT_BLOCKS: u32 = 100;

/// Default edge length of one block in screen pixels.
pub const DEFAULT_BLOCK_SIZE_PX: f64 = 16.0;

/// Largest world dimension the level contract can address (`uint8` coordinates).
pub const MAX_WORLD_DIM_BLOCKS: u32 = 256;

/// Largest block coordinate accepted by the level contract.
pub const MAX_BLOCK_COORD: i32 = 255;

// ── Viewport / camera ───────────────────────────────────────────

/// Default viewport width in CSS pixels.
pub const DEFAULT_VIEWPORT_WIDTH_PX: f64 = 1280.0;

/// Default viewport height in CSS pixels.
pub const DEFAULT_VIEWPORT_HEIGHT_PX: f64 = 720.0;

/// Camera distance covered by one arrow-key press, in blocks.
pub const DEFAULT_KEY_PAN_STEP_BLOCKS: u32 = 8;

/// Duration of the eased arrow-key pan.
pub const DEFAULT_KEY_PAN_DURATION_MS: f64 = 120.0;

/// Added before flooring pixel/block ratios so exact block edges never round down.
pub const COORD_EPSILON: f64 = 1e-9;

// ── Chrome ──────────────────────────────────────────────────────

/// Name of the chrome region that leaves the editor when pressed.
pub const BACK_REGION: &str = "back";

// ── Tiles ───────────────────────────────────────────────────────

/// Tileset index of the soil tile.
pub const SOIL_TILE_INDEX: u32 = 0;

/// Tileset index of the grass cap tile.
pub const GRASS_TILE_INDEX: u32 = 1;

// ── Preview ─────────────────────────────────────────────────────

/// Default level preview width in pixels.
pub const DEFAULT_PREVIEW_WIDTH_PX: f64 = 200.0;

/// Default level preview height in pixels.
pub const DEFAULT_PREVIEW_HEIGHT_PX: f64 = 100.0;
