use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::image::ImageFormat;

/// Errors raised while reading keywords from an image
#[derive(Debug, Error)]
pub enum TagError {
    /// File could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Content does not start with the signature of its declared format
    #[error("{} is not a valid {format} file", path.display())]
    Corrupt { path: PathBuf, format: ImageFormat },

    /// Extension is not an image format the reader understands
    #[error("Unsupported image format: '{0}'")]
    UnsupportedFormat(String),

    /// EXIF block present but unreadable
    #[error("Invalid EXIF data in {}: {source}", path.display())]
    Exif {
        path: PathBuf,
        #[source]
        source: exif::Error,
    },
}
