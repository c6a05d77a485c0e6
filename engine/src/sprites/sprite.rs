//! Sprite Images
//!
//! A decoded RGBA image plus where it came from. Sprites are immutable after
//! load and handed out as [`SpriteHandle`]s, so several theme bundles can point
//! at the same underlying image without copying pixels.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use glam::UVec2;
use image::{Rgba, RgbaImage};

/// Shared, immutable sprite.
pub type SpriteHandle = Arc<Sprite>;

/// Magenta used for missing art so it stands out on screen.
const PLACEHOLDER_MAGENTA: Rgba<u8> = Rgba([255, 0, 255, 255]);
const PLACEHOLDER_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
/// Checker cell size in pixels.
const PLACEHOLDER_CELL: u32 = 4;

/// A loaded sprite image.
pub struct Sprite {
    name: String,
    /// File the pixels were read from. `None` for generated images.
    source: Option<PathBuf>,
    image: RgbaImage,
}

impl Sprite {
    /// Wrap an image read from `source`.
    pub fn from_file(name: impl Into<String>, source: &Path, image: RgbaImage) -> Self {
        Self {
            name: name.into(),
            source: Some(source.to_path_buf()),
            image,
        }
    }

    /// Generate the magenta/black checker shown in place of missing art.
    pub fn placeholder(size: UVec2) -> Self {
        let size = size.max(UVec2::ONE);
        let image = RgbaImage::from_fn(size.x, size.y, |x, y| {
            if (x / PLACEHOLDER_CELL + y / PLACEHOLDER_CELL) % 2 == 0 {
                PLACEHOLDER_MAGENTA
            } else {
                PLACEHOLDER_BLACK
            }
        });
        Self {
            name: "placeholder".to_string(),
            source: None,
            image,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Width and height in pixels.
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.image.width(), self.image.height())
    }

    /// True for generated stand-ins, false for art read from disk.
    pub fn is_placeholder(&self) -> bool {
        self.source.is_none()
    }
}

impl std::fmt::Debug for Sprite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sprite")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("size", &self.size())
            .finish()
    }
}
