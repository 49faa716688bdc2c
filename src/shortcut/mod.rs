//! Shell shortcut (`.lnk`) creation
//!
//! [`ShortcutWriter`] isolates the one platform-specific dependency of the
//! crate. On Windows `LnkWriter` builds the link with `mslnk`, writes it to
//! a temporary file next to the destination and renames it into place, so a
//! destination is either absent or complete. Elsewhere [`PlatformWriter`] is
//! [`UnsupportedWriter`], which reports every file as failed.

pub mod error;
#[cfg(windows)]
mod lnk;

use std::path::{Path, PathBuf};

pub use error::ShortcutError;
#[cfg(windows)]
pub use lnk::LnkWriter;

/// Handle to a shortcut file that was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutHandle {
    path: PathBuf,
}

impl ShortcutHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Writes shortcut files
pub trait ShortcutWriter {
    /// Create a shortcut at `destination` pointing at `target`.
    ///
    /// # Errors
    /// Returns `ShortcutError` if the target cannot be inspected or the file
    /// cannot be written.
    fn create_shortcut(
        &self,
        target: &Path,
        description: &str,
        destination: &Path,
    ) -> Result<ShortcutHandle, ShortcutError>;
}

impl<T: ShortcutWriter + ?Sized> ShortcutWriter for &T {
    fn create_shortcut(
        &self,
        target: &Path,
        description: &str,
        destination: &Path,
    ) -> Result<ShortcutHandle, ShortcutError> {
        (**self).create_shortcut(target, description, destination)
    }
}

/// Directory a destination lives in
fn staging_dir(destination: &Path) -> Result<&Path, ShortcutError> {
    destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| ShortcutError::NoParent {
            path: destination.to_path_buf(),
        })
}

/// [`ShortcutWriter`] for platforms without shell links
///
/// Every call fails with [`ShortcutError::Unsupported`] and nothing is written.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedWriter;

impl ShortcutWriter for UnsupportedWriter {
    fn create_shortcut(
        &self,
        _target: &Path,
        _description: &str,
        destination: &Path,
    ) -> Result<ShortcutHandle, ShortcutError> {
        staging_dir(destination)?;
        Err(ShortcutError::Unsupported {
            path: destination.to_path_buf(),
        })
    }
}

/// Writer used by the command line on this platform
#[cfg(windows)]
pub type PlatformWriter = LnkWriter;

/// Writer used by the command line on this platform
#[cfg(not(windows))]
pub type PlatformWriter = UnsupportedWriter;

/// Create a shortcut with the [`PlatformWriter`].
///
/// # Errors
/// See [`ShortcutWriter::create_shortcut`].
pub fn create_shortcut(
    target: &Path,
    description: &str,
    destination: &Path,
) -> Result<ShortcutHandle, ShortcutError> {
    PlatformWriter::default().create_shortcut(target, description, destination)
}
