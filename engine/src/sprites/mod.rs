//! Sprites Module
//!
//! Themed sprite loading for the game renderer.
//!
//! - [`theme`] - The closed set of visual themes
//! - [`sprite`] - Shared, immutable sprite images
//! - [`loader`] - "Load image by path" sources (filesystem, memory)
//! - [`bundle`] - Per-theme sprite bundles and their slot table
//! - [`manager`] - The cache that serves the active theme's bundle

pub mod bundle;
pub mod error;
pub mod loader;
pub mod manager;
pub mod sprite;
pub mod theme;

pub use bundle::{
    BOMB_FRAMES, Direction, PlayerSprites, SlotKind, SpriteSlot, ThemeSprites, TileKind,
};
pub use error::AssetLoadError;
pub use loader::{FsImageLoader, ImageLoader, MemoryImageLoader};
pub use manager::SpriteManager;
pub use sprite::{Sprite, SpriteHandle};
pub use theme::{Theme, ThemeParseError};
