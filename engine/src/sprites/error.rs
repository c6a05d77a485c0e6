//! Asset loading errors.

use std::path::{Path, PathBuf};

/// Failure to read or decode a sprite image.
///
/// Inside a theme bundle load this is caught and replaced by the placeholder
/// sprite. Only base art failures reach the caller.
#[derive(Debug)]
pub enum AssetLoadError {
    /// No file at the expected path.
    NotFound(PathBuf),
    /// The file exists but is not a decodable image.
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Any other I/O failure while reading the file.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl AssetLoadError {
    /// Path of the asset that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            AssetLoadError::NotFound(path) => path,
            AssetLoadError::Decode { path, .. } => path,
            AssetLoadError::Io { path, .. } => path,
        }
    }

    /// Classify an `image` crate error, separating missing files from bad data.
    pub fn from_image_error(path: &Path, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
                AssetLoadError::NotFound(path.to_path_buf())
            }
            image::ImageError::IoError(io) => AssetLoadError::Io {
                path: path.to_path_buf(),
                source: io,
            },
            other => AssetLoadError::Decode {
                path: path.to_path_buf(),
                source: other,
            },
        }
    }
}

impl std::fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetLoadError::NotFound(path) => write!(f, "sprite not found: {}", path.display()),
            AssetLoadError::Decode { path, source } => {
                write!(f, "failed to decode sprite {}: {source}", path.display())
            }
            AssetLoadError::Io { path, source } => {
                write!(f, "failed to read sprite {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for AssetLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetLoadError::NotFound(_) => None,
            AssetLoadError::Decode { source, .. } => Some(source),
            AssetLoadError::Io { source, .. } => Some(source),
        }
    }
}
