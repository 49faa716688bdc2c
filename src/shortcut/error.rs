use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while creating a shortcut file
#[derive(Debug, Error)]
pub enum ShortcutError {
    /// The link target could not be inspected
    #[error("Cannot create a shortcut to {}: {source}", path.display())]
    Target {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The link target path cannot be stored in a shell link
    #[error("Cannot create a shortcut to {}: path is not valid Unicode", path.display())]
    InvalidName { path: PathBuf },

    /// The shell link could not be built or serialized
    #[cfg(windows)]
    #[error("Failed to build shortcut {}: {source}", path.display())]
    Link {
        path: PathBuf,
        #[source]
        source: mslnk::MSLinkError,
    },

    /// The `.lnk` file could not be written or moved into place
    #[error("Failed to write shortcut {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Destination has no directory component
    #[error("Shortcut destination {} has no parent directory", path.display())]
    NoParent { path: PathBuf },

    /// Shell links can only be written on Windows
    #[error("Cannot create {}: shortcuts are only supported on Windows", path.display())]
    Unsupported { path: PathBuf },
}
