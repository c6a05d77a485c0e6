//! Sprite Manager
//!
//! Owns the per-theme sprite bundles and the "current theme" pointer. Created
//! once by the application and passed by reference to the renderer (which
//! reads [`SpriteManager::current_sprites`]) and the settings menu (which calls
//! [`SpriteManager::set_theme`]).
//!
//! Base art is read once at construction and shared by reference into every
//! bundle. Theme bundles load on first use and stay cached; switching back to
//! a cached theme is a pointer swap.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut sprites = SpriteManager::new(SpriteConfig::with_asset_root("assets/sprites"))?;
//!
//! // Settings menu
//! sprites.set_theme(Theme::Dark);
//!
//! // Each frame
//! let bundle = sprites.current_sprites();
//! draw(bundle.tile(TileKind::Wall));
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use glam::UVec2;

use super::bundle::{SlotKind, SpriteSlot, ThemeSprites, slots};
use super::error::AssetLoadError;
use super::loader::{FsImageLoader, ImageLoader};
use super::sprite::{Sprite, SpriteHandle};
use super::theme::Theme;
use crate::config::SpriteConfig;

// ============================================================================
// CACHE
// ============================================================================

/// Loaded images and bundles. Split from [`SpriteManager`] so the active
/// bundle can be resolved before the manager exists.
struct SpriteCache {
    loader: Box<dyn ImageLoader>,
    tile_size: UVec2,
    /// Shared art for `Base` and `Overridable` slots, keyed by slot name
    base: HashMap<&'static str, SpriteHandle>,
    placeholder: SpriteHandle,
    /// One entry per theme, indexed by `Theme::index()`
    bundles: [Option<Arc<ThemeSprites>>; Theme::COUNT],
    /// Image reads attempted so far
    reads: usize,
}

impl SpriteCache {
    fn new(loader: Box<dyn ImageLoader>, tile_size: UVec2) -> Self {
        Self {
            loader,
            tile_size,
            base: HashMap::new(),
            placeholder: Arc::new(Sprite::placeholder(tile_size)),
            bundles: Default::default(),
            reads: 0,
        }
    }

    /// Read all shared art. Any failure is fatal: nothing can be drawn
    /// without it.
    fn load_base(&mut self) -> Result<(), AssetLoadError> {
        for slot in slots::ALL.iter().filter(|s| s.kind != SlotKind::ThemeOnly) {
            let path = slot.base_path();
            self.reads += 1;
            let sprite = read_sprite(self.loader.as_ref(), slot, &path)?;
            check_tile_size(slot, &sprite, self.tile_size);
            self.base.insert(slot.name, sprite);
        }
        log::info!(
            "[SpriteManager] Loaded {} base sprites from {}",
            self.base.len(),
            self.loader.describe()
        );
        Ok(())
    }

    fn cached(&self, theme: Theme) -> Option<&Arc<ThemeSprites>> {
        self.bundles[theme.index()].as_ref()
    }

    /// Cached bundle for `theme`, loading it first if needed.
    fn bundle(&mut self, theme: Theme) -> Arc<ThemeSprites> {
        if let Some(bundle) = self.cached(theme) {
            log::debug!("[SpriteManager] Cache hit for theme {theme}");
            return bundle.clone();
        }
        let bundle = Arc::new(self.load_theme(theme));
        self.bundles[theme.index()] = Some(bundle.clone());
        bundle
    }

    /// Resolve every slot for `theme`. Never fails: missing or broken theme
    /// art falls back to base art or the placeholder.
    fn load_theme(&mut self, theme: Theme) -> ThemeSprites {
        let loader = self.loader.as_ref();
        let base = &self.base;
        let placeholder = &self.placeholder;
        let tile_size = self.tile_size;
        let mut reads = 0;

        let shared = |slot: &SpriteSlot| -> SpriteHandle {
            base.get(slot.name)
                .cloned()
                .unwrap_or_else(|| placeholder.clone())
        };

        let bundle = ThemeSprites::assemble(theme, |slot| match slot.kind {
            SlotKind::Base => shared(slot),
            SlotKind::Overridable => {
                reads += 1;
                match read_sprite(loader, slot, &slot.theme_path(theme)) {
                    Ok(sprite) => {
                        check_tile_size(slot, &sprite, tile_size);
                        sprite
                    }
                    Err(AssetLoadError::NotFound(_)) => shared(slot),
                    Err(e) => {
                        log::warn!("[SpriteManager] {e}; using base {}", slot.name);
                        shared(slot)
                    }
                }
            }
            SlotKind::ThemeOnly => {
                reads += 1;
                match read_sprite(loader, slot, &slot.theme_path(theme)) {
                    Ok(sprite) => {
                        check_tile_size(slot, &sprite, tile_size);
                        sprite
                    }
                    Err(e) => {
                        log::warn!("[SpriteManager] {e}; using placeholder for {}", slot.name);
                        placeholder.clone()
                    }
                }
            }
        });

        self.reads += reads;
        let fallbacks = bundle.placeholder_slots();
        log::info!(
            "[SpriteManager] Loaded theme {theme} ({} placeholder slots)",
            fallbacks.len()
        );
        bundle
    }
}

fn read_sprite(
    loader: &dyn ImageLoader,
    slot: &SpriteSlot,
    path: &Path,
) -> Result<SpriteHandle, AssetLoadError> {
    let image = loader.load(path)?;
    Ok(Arc::new(Sprite::from_file(slot.name, path, image)))
}

/// Tiles are drawn on a fixed grid; odd sizes still render but get stretched.
fn check_tile_size(slot: &SpriteSlot, sprite: &Sprite, tile_size: UVec2) {
    if slot.kind != SlotKind::Base && sprite.size() != tile_size {
        log::warn!(
            "[SpriteManager] {} is {}x{}, expected {}x{}",
            slot.name,
            sprite.size().x,
            sprite.size().y,
            tile_size.x,
            tile_size.y
        );
    }
}

// ============================================================================
// MANAGER
// ============================================================================

/// Theme-aware sprite registry.
pub struct SpriteManager {
    config: SpriteConfig,
    cache: SpriteCache,
    active: Arc<ThemeSprites>,
}

impl SpriteManager {
    /// Create a manager reading art from `config.asset_root` on disk.
    ///
    /// Fails only if base art is missing or unreadable.
    pub fn new(config: SpriteConfig) -> Result<Self, AssetLoadError> {
        let loader = FsImageLoader::new(config.asset_root.clone());
        Self::with_loader(config, Box::new(loader))
    }

    /// Create a manager over any image source.
    pub fn with_loader(
        config: SpriteConfig,
        loader: Box<dyn ImageLoader>,
    ) -> Result<Self, AssetLoadError> {
        let tile_size = config.clamped_tile_size();
        if tile_size != config.tile_size {
            log::warn!(
                "[SpriteManager] Tile size {}x{} out of range, using {}x{}",
                config.tile_size.x,
                config.tile_size.y,
                tile_size.x,
                tile_size.y
            );
        }
        let mut cache = SpriteCache::new(loader, tile_size);
        cache.load_base()?;

        if config.preload_all {
            for theme in Theme::ALL {
                cache.bundle(theme);
            }
        }
        let active = cache.bundle(config.default_theme);

        Ok(Self {
            config,
            cache,
            active,
        })
    }

    /// Make `theme` the active theme, loading its bundle on first use.
    /// Selecting the already-active theme changes nothing.
    pub fn set_theme(&mut self, theme: Theme) {
        if theme == self.current_theme() {
            log::debug!("[SpriteManager] Theme {theme} already active");
            return;
        }
        log::debug!("[SpriteManager] Switching theme {} -> {theme}", self.current_theme());
        self.active = self.cache.bundle(theme);
    }

    /// Advance to the next theme in menu order and return it.
    pub fn cycle_theme(&mut self) -> Theme {
        let next = self.current_theme().next();
        self.set_theme(next);
        next
    }

    pub fn current_theme(&self) -> Theme {
        self.active.theme()
    }

    /// Fully-populated bundle for the active theme.
    pub fn current_sprites(&self) -> &Arc<ThemeSprites> {
        &self.active
    }

    /// Bundle for `theme` without changing the active theme.
    pub fn sprites_for(&mut self, theme: Theme) -> Arc<ThemeSprites> {
        self.cache.bundle(theme)
    }

    /// Bomb frame for the active theme using the configured frame time.
    pub fn bomb_frame(&self, elapsed_ms: u64) -> &SpriteHandle {
        self.active.bomb_frame(elapsed_ms, self.config.bomb_frame_ms)
    }

    /// Load every theme now. Useful for validating an install at startup.
    pub fn preload_all(&mut self) {
        for theme in Theme::ALL {
            self.cache.bundle(theme);
        }
    }

    pub fn is_loaded(&self, theme: Theme) -> bool {
        self.cache.cached(theme).is_some()
    }

    /// Themes with a cached bundle, in menu order.
    pub fn loaded_themes(&self) -> Vec<Theme> {
        Theme::ALL
            .into_iter()
            .filter(|t| self.is_loaded(*t))
            .collect()
    }

    /// Shared stand-in for missing theme art.
    pub fn placeholder(&self) -> &SpriteHandle {
        &self.cache.placeholder
    }

    /// Number of image reads attempted since construction.
    pub fn load_count(&self) -> usize {
        self.cache.reads
    }

    pub fn config(&self) -> &SpriteConfig {
        &self.config
    }
}

impl std::fmt::Debug for SpriteManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpriteManager")
            .field("current_theme", &self.current_theme())
            .field("loaded_themes", &self.loaded_themes())
            .field("load_count", &self.load_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_TILE_SIZE;
    use crate::sprites::loader::MemoryImageLoader;
    use image::RgbaImage;

    fn base_only() -> MemoryImageLoader {
        let mut loader = MemoryImageLoader::new();
        for slot in slots::ALL.iter().filter(|s| s.kind != SlotKind::ThemeOnly) {
            loader.insert(slot.base_path(), RgbaImage::new(32, 32));
        }
        loader
    }

    fn manager(loader: MemoryImageLoader) -> SpriteManager {
        SpriteManager::with_loader(SpriteConfig::default(), Box::new(loader)).unwrap()
    }

    #[test]
    fn test_starts_on_default_theme() {
        let sprites = manager(base_only());
        assert_eq!(sprites.current_theme(), Theme::Bomberman);
        assert_eq!(sprites.current_theme().display_name(), "Bomberman");
        assert_eq!(sprites.loaded_themes(), vec![Theme::Bomberman]);
    }

    #[test]
    fn test_missing_base_is_fatal() {
        let mut partial = MemoryImageLoader::new();
        for slot in slots::ALL
            .iter()
            .filter(|s| s.name != "explosion" && s.kind != SlotKind::ThemeOnly)
        {
            partial.insert(slot.base_path(), RgbaImage::new(32, 32));
        }
        match SpriteManager::with_loader(SpriteConfig::default(), Box::new(partial)) {
            Err(AssetLoadError::NotFound(path)) => {
                assert_eq!(path, slots::EXPLOSION.base_path())
            }
            other => panic!("expected NotFound for explosion, got {other:?}"),
        }
    }

    #[test]
    fn test_lazy_loading_counts_reads() {
        let mut sprites = manager(base_only());
        // 11 base slots + 4 theme lookups for the default theme
        assert_eq!(sprites.load_count(), 15);

        sprites.set_theme(Theme::Dark);
        assert_eq!(sprites.load_count(), 19);

        sprites.set_theme(Theme::Bomberman);
        sprites.set_theme(Theme::Dark);
        assert_eq!(sprites.load_count(), 19);
    }

    #[test]
    fn test_huge_tile_size_is_clamped() {
        let config: SpriteConfig =
            serde_json::from_str(r#"{ "tile_size": [4294967295, 4294967295] }"#).unwrap();
        let sprites = SpriteManager::with_loader(config, Box::new(base_only())).unwrap();
        assert_eq!(sprites.placeholder().size(), UVec2::splat(MAX_TILE_SIZE));
        assert!(sprites.current_sprites().border.is_placeholder());
    }

    #[test]
    fn test_preload_config() {
        let config = SpriteConfig {
            preload_all: true,
            default_theme: Theme::Classic,
            ..SpriteConfig::default()
        };
        let sprites = SpriteManager::with_loader(config, Box::new(base_only())).unwrap();
        assert_eq!(sprites.loaded_themes(), Theme::ALL.to_vec());
        assert_eq!(sprites.current_theme(), Theme::Classic);
    }

    #[test]
    fn test_cycle_theme_visits_all() {
        let mut sprites = manager(base_only());
        let visited: Vec<Theme> = (0..Theme::COUNT).map(|_| sprites.cycle_theme()).collect();
        assert_eq!(
            visited,
            vec![Theme::Classic, Theme::Dark, Theme::Pokemon, Theme::Bomberman]
        );
    }

    #[test]
    fn test_sprites_for_does_not_switch() {
        let mut sprites = manager(base_only());
        let dark = sprites.sprites_for(Theme::Dark);
        assert_eq!(dark.theme(), Theme::Dark);
        assert_eq!(sprites.current_theme(), Theme::Bomberman);
        assert!(sprites.is_loaded(Theme::Dark));
    }

    #[test]
    fn test_bomb_frame_uses_config() {
        let sprites = manager(base_only());
        let frame_ms = u64::from(sprites.config().bomb_frame_ms);
        assert!(Arc::ptr_eq(
            sprites.bomb_frame(frame_ms),
            &sprites.current_sprites().bomb[1]
        ));
    }

    #[test]
    fn test_corrupt_override_uses_base() {
        // A theme override is present but cannot be decoded. The memory loader
        // cannot produce decode errors, so exercise this through the filesystem.
        let dir = std::env::temp_dir().join("bomber_manager_corrupt_override");
        let _ = std::fs::create_dir_all(dir.join("base"));
        let _ = std::fs::create_dir_all(dir.join("themes/dark"));
        for slot in slots::ALL.iter().filter(|s| s.kind != SlotKind::ThemeOnly) {
            RgbaImage::new(32, 32).save(dir.join(slot.base_path())).unwrap();
        }
        std::fs::write(dir.join("themes/dark/wall.png"), b"garbage").unwrap();

        let mut sprites = SpriteManager::new(SpriteConfig::with_asset_root(&dir)).unwrap();
        let bomberman = sprites.current_sprites().clone();
        sprites.set_theme(Theme::Dark);
        assert!(Arc::ptr_eq(&sprites.current_sprites().wall, &bomberman.wall));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
