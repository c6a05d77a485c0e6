//! Sprite Configuration
//!
//! Where sprite art lives and how the sprite manager starts up. Stored as JSON
//! so players can pick a theme (and modders can point at their own art)
//! without touching code.

use std::path::{Path, PathBuf};

use glam::UVec2;
use serde::{Deserialize, Serialize};

use crate::sprites::Theme;

/// Largest accepted tile edge in pixels.
pub const MAX_TILE_SIZE: u32 = 1024;

/// Startup settings for [`SpriteManager`](crate::sprites::SpriteManager).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    /// Directory containing `base/` and `themes/<slug>/`
    pub asset_root: PathBuf,
    /// Theme active when the manager is created
    pub default_theme: Theme,
    /// Load every theme at startup instead of on first use
    pub preload_all: bool,
    /// Size of one map tile in pixels; also the placeholder size
    pub tile_size: UVec2,
    /// Milliseconds each bomb fuse frame stays on screen
    pub bomb_frame_ms: u32,
}

impl Default for SpriteConfig {
    /// Defaults for a normal install:
    /// - Assets under `assets/sprites`
    /// - Bomberman theme, loaded lazily
    /// - 32x32 tiles, 200 ms bomb frames
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets/sprites"),
            default_theme: Theme::Bomberman,
            preload_all: false,
            tile_size: UVec2::splat(32),
            bomb_frame_ms: 200,
        }
    }
}

impl SpriteConfig {
    /// Default settings reading art from `root`.
    pub fn with_asset_root(root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: root.into(),
            ..Self::default()
        }
    }

    /// Read settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read(path)?;
        let config: Self = serde_json::from_slice(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tile sizes that are zero or larger than [`MAX_TILE_SIZE`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.tile_size;
        if size.min_element() == 0 || size.max_element() > MAX_TILE_SIZE {
            return Err(ConfigError::InvalidTileSize(size));
        }
        Ok(())
    }

    /// `tile_size` forced into `1..=MAX_TILE_SIZE` on each axis.
    pub fn clamped_tile_size(&self) -> UVec2 {
        self.tile_size.clamp(UVec2::ONE, UVec2::splat(MAX_TILE_SIZE))
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Errors reading or writing a sprite config file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// Tile size outside `1..=MAX_TILE_SIZE` on some axis.
    InvalidTileSize(UVec2),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::InvalidTileSize(size) => write!(
                f,
                "tile size {}x{} must be between 1 and {MAX_TILE_SIZE} per axis",
                size.x, size.y
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SpriteConfig::default();
        assert_eq!(config.default_theme, Theme::Bomberman);
        assert!(!config.preload_all);
        assert_eq!(config.tile_size, UVec2::new(32, 32));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SpriteConfig =
            serde_json::from_str(r#"{ "default_theme": "dark", "preload_all": true }"#).unwrap();
        assert_eq!(config.default_theme, Theme::Dark);
        assert!(config.preload_all);
        assert_eq!(config.asset_root, PathBuf::from("assets/sprites"));
        assert_eq!(config.bomb_frame_ms, 200);
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let result: Result<SpriteConfig, _> =
            serde_json::from_str(r#"{ "default_theme": "neon" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_oversized_tile_size_rejected_on_load() {
        let dir = std::env::temp_dir().join("bomber_sprite_config_huge_tile");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("sprites.json");
        std::fs::write(&path, r#"{ "tile_size": [4294967295, 4294967295] }"#).unwrap();

        match SpriteConfig::load(&path) {
            Err(ConfigError::InvalidTileSize(size)) => assert_eq!(size, UVec2::splat(u32::MAX)),
            other => panic!("expected InvalidTileSize, got {other:?}"),
        }

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_tile_size_bounds() {
        let mut config = SpriteConfig::default();
        assert!(config.validate().is_ok());

        config.tile_size = UVec2::new(0, 32);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTileSize(_))));
        assert_eq!(config.clamped_tile_size(), UVec2::new(1, 32));

        config.tile_size = UVec2::new(MAX_TILE_SIZE, MAX_TILE_SIZE + 1);
        assert!(config.validate().is_err());
        assert_eq!(config.clamped_tile_size(), UVec2::splat(MAX_TILE_SIZE));
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join("bomber_sprite_config_test");
        let path = dir.join("nested/sprites.json");

        let mut config = SpriteConfig::with_asset_root("/srv/art");
        config.default_theme = Theme::Pokemon;
        config.save(&path).unwrap();

        let loaded = SpriteConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("bomber_sprite_config_missing/none.json");
        assert!(matches!(SpriteConfig::load(&path), Err(ConfigError::Io(_))));
    }
}
