//! Image Loading
//!
//! The only capability the sprite manager needs from the platform is "load an
//! image by path". Paths handed to a loader are relative to its asset root,
//! e.g. `base/bomb_0.png` or `themes/dark/border.png`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use super::error::AssetLoadError;

/// Source of decoded sprite images.
pub trait ImageLoader {
    /// Read and decode the image at `path` (relative to the asset root).
    fn load(&self, path: &Path) -> Result<RgbaImage, AssetLoadError>;

    /// Human-readable location of the store, for logs.
    fn describe(&self) -> String;
}

/// Loads PNG/JPEG files from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsImageLoader {
    root: PathBuf,
}

impl FsImageLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &Path) -> Result<RgbaImage, AssetLoadError> {
        let full = self.root.join(path);
        let img = image::open(&full).map_err(|e| AssetLoadError::from_image_error(&full, e))?;
        Ok(img.to_rgba8())
    }

    fn describe(&self) -> String {
        self.root().display().to_string()
    }
}

/// Images held in memory, keyed by relative path.
///
/// Used for headless tools and tests where no asset folder exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryImageLoader {
    images: HashMap<PathBuf, RgbaImage>,
}

impl MemoryImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image under `path`, replacing any previous one.
    pub fn insert(&mut self, path: impl Into<PathBuf>, image: RgbaImage) {
        self.images.insert(path.into(), image);
    }

    /// Builder form of [`MemoryImageLoader::insert`].
    pub fn with(mut self, path: impl Into<PathBuf>, image: RgbaImage) -> Self {
        self.insert(path, image);
        self
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageLoader for MemoryImageLoader {
    fn load(&self, path: &Path) -> Result<RgbaImage, AssetLoadError> {
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| AssetLoadError::NotFound(path.to_path_buf()))
    }

    fn describe(&self) -> String {
        format!("memory ({} images)", self.images.len())
    }
}
