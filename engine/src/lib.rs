//! Bomber Engine Library
//!
//! Asset layer for a Bomberman-style game: themed sprite bundles with shared
//! base art, served to the renderer by a single [`SpriteManager`].
//!
//! # Modules
//!
//! - [`sprites`] - Themes, sprite bundles, image loaders and the sprite manager
//! - [`config`] - Sprite startup configuration (JSON)
//!
//! # Example
//!
//! ```ignore
//! use bomber_engine::{SpriteConfig, SpriteManager, Theme, TileKind};
//!
//! let config = SpriteConfig::with_asset_root("assets/sprites");
//! let mut sprites = SpriteManager::new(config)?;
//!
//! // Settings menu picks a theme
//! sprites.set_theme(Theme::Pokemon);
//!
//! // Renderer draws with whatever is active
//! let bundle = sprites.current_sprites();
//! let wall = bundle.tile(TileKind::Wall);
//! ```

pub mod config;
pub mod sprites;

// Re-export commonly used types at crate level
pub use config::{ConfigError, SpriteConfig};
pub use sprites::{
    AssetLoadError, Direction, ImageLoader, SpriteHandle, SpriteManager, Theme, ThemeSprites,
    TileKind,
};
