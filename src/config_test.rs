#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_config_is_valid() {
    let config = EditorConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.world_width_blocks, 200);
    assert_eq!(config.world_height_blocks, 100);
    assert_eq!(config.block_size, 16.0);
}

#[test]
fn key_pan_step_is_blocks_times_size() {
    let config = EditorConfig { key_pan_step_blocks: 4, block_size: 16.0, ..EditorConfig::default() };
    assert_eq!(config.key_pan_step_px(), 64.0);
}

#[test]
fn zero_block_size_rejected() {
    let config = EditorConfig { block_size: 0.0, ..EditorConfig::default() };
    assert_eq!(config.validate(), Err(ConfigError::InvalidBlockSize(0.0)));
}

#[test]
fn nan_block_size_rejected() {
    let config = EditorConfig { block_size: f64::NAN, ..EditorConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidBlockSize(_))));
}

#[test]
fn world_wider_than_contract_range_rejected() {
    let config = EditorConfig { world_width_blocks: 257, ..EditorConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidWorldSize { width: 257, .. })));
}

#[test]
fn world_of_256_accepted() {
    let config = EditorConfig { world_width_blocks: 256, world_height_blocks: 256, ..EditorConfig::default() };
    assert!(config.validate().is_ok());
}

#[test]
fn empty_world_rejected() {
    let config = EditorConfig { world_height_blocks: 0, ..EditorConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidWorldSize { .. })));
}

#[test]
fn negative_viewport_rejected() {
    let config = EditorConfig { viewport_width: -1.0, ..EditorConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidViewport { .. })));
}

#[test]
fn negative_pan_duration_rejected() {
    let config = EditorConfig { key_pan_duration_ms: -5.0, ..EditorConfig::default() };
    assert_eq!(config.validate(), Err(ConfigError::InvalidPanDuration(-5.0)));
}

#[test]
fn non_finite_layer_origin_rejected() {
    let config = EditorConfig { layer_origin_y: f64::INFINITY, ..EditorConfig::default() };
    assert_eq!(config.validate(), Err(ConfigError::InvalidLayerOrigin(f64::INFINITY)));
    let config = EditorConfig { layer_origin_y: f64::NAN, ..EditorConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidLayerOrigin(_))));
}

#[test]
fn json_missing_fields_take_defaults() {
    let config = EditorConfig::from_json(r#"{ "world_width_blocks": 10, "world_height_blocks": 10 }"#).unwrap();
    assert_eq!(config.world_width_blocks, 10);
    assert_eq!(config.block_size, 16.0);
    assert_eq!(config.key_pan_duration_ms, 120.0);
}

#[test]
fn json_invalid_values_rejected() {
    let err = EditorConfig::from_json(r#"{ "block_size": -2.0 }"#).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBlockSize(-2.0));
}

#[test]
fn malformed_json_rejected() {
    assert!(matches!(EditorConfig::from_json("{ nope"), Err(ConfigError::Json(_))));
}

#[test]
fn env_parse_falls_back_when_unset() {
    assert_eq!(env_parse("HAVOC_TEST_SURELY_UNSET_VARIABLE", 7u32), 7);
}

#[test]
fn error_messages_are_readable() {
    let err = ConfigError::InvalidWorldSize { width: 300, height: 10, max: 256 };
    assert_eq!(err.to_string(), "world must be 1..=256 blocks on each axis, got 300x10");
}
