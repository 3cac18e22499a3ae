//! Photo gallery input: the items a host lays out.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a gallery.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Failed to read the gallery file.
    #[error("Failed to read gallery at {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Gallery contents are not a valid JSON photo list.
    #[error("Invalid gallery JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Intrinsic pixel dimensions of a photo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Intrinsic width.
    pub width: f64,
    /// Intrinsic height.
    pub height: f64,
}

impl Photo {
    /// Create a new photo.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Height per unit of width.
    ///
    /// Non-finite when `width` is zero.
    pub fn aspect_ratio(&self) -> f64 {
        self.height / self.width
    }
}

/// Ordered list of photos. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallery {
    /// Photos in display order.
    pub photos: Vec<Photo>,
}

impl Gallery {
    /// Create a gallery from photos.
    pub fn new(photos: Vec<Photo>) -> Self {
        Self { photos }
    }

    /// Built-in demo gallery: a five-photo pattern repeated four times.
    pub fn demo() -> Self {
        const PATTERN: [(f64, f64); 5] = [
            (200.0, 300.0),
            (400.0, 200.0),
            (300.0, 300.0),
            (150.0, 200.0),
            (200.0, 150.0),
        ];

        let photos = PATTERN
            .iter()
            .cycle()
            .take(PATTERN.len() * 4)
            .map(|&(width, height)| Photo::new(width, height))
            .collect();
        Self { photos }
    }

    /// Parse a gallery from a JSON array of `{"width": .., "height": ..}`.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Parse`] if the JSON is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, GalleryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a gallery JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Read`] if the file cannot be read, or
    /// [`GalleryError::Parse`] if its contents are malformed.
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let contents = std::fs::read_to_string(path).map_err(|source| GalleryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Number of photos.
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Check if the gallery has no photos.
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}
