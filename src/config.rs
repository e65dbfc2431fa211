//! Editor configuration.
//!
//! Defaults come from [`crate::consts`]. A config can be deserialized from
//! JSON (missing fields take defaults) or read from `HAVOC_*` environment
//! variables, where unparsable values fall back to the default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BLOCK_SIZE_PX, DEFAULT_KEY_PAN_DURATION_MS, DEFAULT_KEY_PAN_STEP_BLOCKS, DEFAULT_VIEWPORT_HEIGHT_PX,
    DEFAULT_VIEWPORT_WIDTH_PX, DEFAULT_WORLD_HEIGHT_BLOCKS, DEFAULT_WORLD_WIDTH_BLOCKS, MAX_WORLD_DIM_BLOCKS,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("block size must be a positive finite number, got {0}")]
    InvalidBlockSize(f64),
    #[error("world must be 1..={max} blocks on each axis, got {width}x{height}")]
    InvalidWorldSize { width: u32, height: u32, max: u32 },
    #[error("viewport must be non-negative and finite, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error("layer origin must be finite, got {0}")]
    InvalidLayerOrigin(f64),
    #[error("key pan duration must be non-negative, got {0}")]
    InvalidPanDuration(f64),
    #[error("invalid config JSON: {0}")]
    Json(String),
}

/// Tunable editor parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// World width in blocks.
    pub world_width_blocks: u32,
    /// World height in blocks.
    pub world_height_blocks: u32,
    /// Block edge length in pixels.
    pub block_size: f64,
    /// Initial viewport width in pixels.
    pub viewport_width: f64,
    /// Initial viewport height in pixels.
    pub viewport_height: f64,
    /// Screen y of the tile layer's top edge.
    pub layer_origin_y: f64,
    /// Blocks scrolled per arrow-key press.
    pub key_pan_step_blocks: u32,
    /// Duration of the eased arrow-key pan.
    pub key_pan_duration_ms: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            world_width_blocks: DEFAULT_WORLD_WIDTH_BLOCKS,
            world_height_blocks: DEFAULT_WORLD_HEIGHT_BLOCKS,
            block_size: DEFAULT_BLOCK_SIZE_PX,
            viewport_width: DEFAULT_VIEWPORT_WIDTH_PX,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT_PX,
            layer_origin_y: 0.0,
            key_pan_step_blocks: DEFAULT_KEY_PAN_STEP_BLOCKS,
            key_pan_duration_ms: DEFAULT_KEY_PAN_DURATION_MS,
        }
    }
}

impl EditorConfig {
    /// Load from environment variables, validating the result.
    pub fn from_env() -> Result<Self, ConfigError> {
        let d = Self::default();
        let config = Self {
            world_width_blocks: env_parse("HAVOC_WORLD_WIDTH_BLOCKS", d.world_width_blocks),
            world_height_blocks: env_parse("HAVOC_WORLD_HEIGHT_BLOCKS", d.world_height_blocks),
            block_size: env_parse("HAVOC_BLOCK_SIZE", d.block_size),
            viewport_width: env_parse("HAVOC_VIEWPORT_WIDTH", d.viewport_width),
            viewport_height: env_parse("HAVOC_VIEWPORT_HEIGHT", d.viewport_height),
            layer_origin_y: env_parse("HAVOC_LAYER_ORIGIN_Y", d.layer_origin_y),
            key_pan_step_blocks: env_parse("HAVOC_KEY_PAN_STEP_BLOCKS", d.key_pan_step_blocks),
            key_pan_duration_ms: env_parse("HAVOC_KEY_PAN_DURATION_MS", d.key_pan_duration_ms),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse from JSON, validating the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.block_size.is_finite() && self.block_size > 0.0) {
            return Err(ConfigError::InvalidBlockSize(self.block_size));
        }
        let dims = 1..=MAX_WORLD_DIM_BLOCKS;
        if !dims.contains(&self.world_width_blocks) || !dims.contains(&self.world_height_blocks) {
            return Err(ConfigError::InvalidWorldSize {
                width: self.world_width_blocks,
                height: self.world_height_blocks,
                max: MAX_WORLD_DIM_BLOCKS,
            });
        }
        let viewport_ok = |v: f64| v.is_finite() && v >= 0.0;
        if !viewport_ok(self.viewport_width) || !viewport_ok(self.viewport_height) {
            return Err(ConfigError::InvalidViewport { width: self.viewport_width, height: self.viewport_height });
        }
        if !self.layer_origin_y.is_finite() {
            return Err(ConfigError::InvalidLayerOrigin(self.layer_origin_y));
        }
        if !(self.key_pan_duration_ms.is_finite() && self.key_pan_duration_ms >= 0.0) {
            return Err(ConfigError::InvalidPanDuration(self.key_pan_duration_ms));
        }
        Ok(())
    }

    /// Arrow-key pan distance in pixels.
    #[must_use]
    pub fn key_pan_step_px(&self) -> f64 {
        f64::from(self.key_pan_step_blocks) * self.block_size
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
