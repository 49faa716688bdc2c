//! Keyword reading from image files
//!
//! The [`TagReader`] trait is the seam between the per-file action and the
//! code that actually opens image files. [`ImageTagReader`] is the default
//! implementation; tests substitute their own readers.

pub mod error;
pub mod image;
pub mod xmp;

use std::path::Path;

pub use error::TagError;
pub use image::{ImageFormat, ImageTagReader};

/// Reads the keyword list of an image's combined tag
pub trait TagReader {
    /// Open `path` and return its keywords.
    ///
    /// # Errors
    /// Returns `TagError` if the file cannot be opened or its metadata is corrupt.
    fn read_keywords(&self, path: &Path) -> Result<Vec<String>, TagError>;
}

impl<T: TagReader + ?Sized> TagReader for &T {
    fn read_keywords(&self, path: &Path) -> Result<Vec<String>, TagError> {
        (**self).read_keywords(path)
    }
}
