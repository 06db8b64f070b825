//! Errors produced while drawing and writing icons

use std::io;
use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

/// Errors that can occur while generating icons
#[derive(Debug, Error)]
pub enum IconError {
    #[error("PNG support is unavailable: {0}")]
    MissingCapability(String),

    #[error("Invalid icon size: {0}")]
    InvalidSize(u32),

    #[error("Failed to encode PNG: {0}")]
    Encoding(ImageError),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IconError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        IconError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_missing_capability(&self) -> bool {
        matches!(self, IconError::MissingCapability(_))
    }

    /// Hint for the operator, if the error has a known fix
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            IconError::MissingCapability(_) => Some(
                "Rebuild with the `png` feature of the `image` crate enabled",
            ),
            _ => None,
        }
    }
}

impl From<ImageError> for IconError {
    fn from(e: ImageError) -> Self {
        match e {
            // The encoder for the format was not compiled in
            ImageError::Unsupported(u) => IconError::MissingCapability(u.to_string()),
            other => IconError::Encoding(other),
        }
    }
}
