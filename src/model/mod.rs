//! Domain model types (pure).

pub mod error;
pub mod gallery;

// Re-export for convenience
pub use error::{AppError, LayoutError};
pub use gallery::{Gallery, GalleryError, Photo};
