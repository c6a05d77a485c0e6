//! Config Module
//!
//! Startup configuration for the sprite layer.

pub mod sprite_config;

pub use sprite_config::{ConfigError, MAX_TILE_SIZE, SpriteConfig};
