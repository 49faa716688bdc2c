//! Windows shell link writer backed by `mslnk`

use std::fs;
use std::path::Path;

use super::{ShortcutError, ShortcutHandle, ShortcutWriter, staging_dir};

/// [`ShortcutWriter`] producing Windows shell link files
#[derive(Debug, Default, Clone, Copy)]
pub struct LnkWriter;

/// `mslnk` panics on targets it cannot turn into strings; refuse them first
fn validate_target(target: &Path) -> Result<(), ShortcutError> {
    let printable = target.to_str().is_some()
        && target.parent().is_some_and(|p| p.to_str().is_some())
        && target.file_name().is_some_and(|n| n.to_str().is_some());
    if !printable {
        return Err(ShortcutError::InvalidName {
            path: target.to_path_buf(),
        });
    }

    fs::metadata(target).map_err(|source| ShortcutError::Target {
        path: target.to_path_buf(),
        source,
    })?;
    Ok(())
}

impl ShortcutWriter for LnkWriter {
    fn create_shortcut(
        &self,
        target: &Path,
        description: &str,
        destination: &Path,
    ) -> Result<ShortcutHandle, ShortcutError> {
        let dir = staging_dir(destination)?;
        validate_target(target)?;

        let mut link = mslnk::ShellLink::new(target).map_err(|source| ShortcutError::Link {
            path: destination.to_path_buf(),
            source,
        })?;
        link.set_name(Some(description.to_string()));

        let write_err = |source| ShortcutError::Write {
            path: destination.to_path_buf(),
            source,
        };
        let staging = tempfile::Builder::new()
            .prefix(".tagmeta-")
            .suffix(".lnk.partial")
            .tempfile_in(dir)
            .map_err(write_err)?
            .into_temp_path();
        link.create_lnk(&staging).map_err(|source| ShortcutError::Link {
            path: destination.to_path_buf(),
            source,
        })?;
        staging.persist(destination).map_err(|e| write_err(e.error))?;

        Ok(ShortcutHandle::new(destination))
    }
}
