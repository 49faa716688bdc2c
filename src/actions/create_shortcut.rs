use std::path::{Path, PathBuf};

use super::{Action, ActionError, ResultObject, ShortcutRecord};
use crate::pipeline::AcceptedFile;
use crate::shortcut::ShortcutWriter;
use crate::ui::ShouldProcess;
use crate::{Result, TagmetaError};

/// Operation name shown by the confirmation surface
pub const CREATE_SHORTCUT_OPERATION: &str = "Create shortcut to file.";

/// Writes `<output_dir>/<name>.lnk` for every confirmed file
pub struct CreateShortcutAction<W, C> {
    output_dir: PathBuf,
    writer: W,
    confirm: C,
}

impl<W: ShortcutWriter, C: ShouldProcess> CreateShortcutAction<W, C> {
    /// Bind the action to an existing output directory.
    ///
    /// # Errors
    /// Returns `TagmetaError::DirectoryNotFound` if `output_dir` is not an
    /// existing directory. Nothing is written in that case.
    pub fn new(output_dir: impl Into<PathBuf>, writer: W, confirm: C) -> Result<Self> {
        let output_dir = output_dir.into();
        if !output_dir.is_dir() {
            return Err(TagmetaError::DirectoryNotFound(output_dir));
        }
        Ok(Self {
            output_dir,
            writer,
            confirm,
        })
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Where the shortcut for `file` is written
    #[must_use]
    pub fn destination_for(&self, file: &AcceptedFile) -> PathBuf {
        self.output_dir.join(format!("{}.lnk", file.name()))
    }
}

impl<W: ShortcutWriter, C: ShouldProcess> Action for CreateShortcutAction<W, C> {
    fn run(&mut self, file: &AcceptedFile) -> std::result::Result<Option<ResultObject>, ActionError> {
        tracing::debug!("Processing {}", file.full_name().display());

        if !self
            .confirm
            .should_process(file.full_name(), CREATE_SHORTCUT_OPERATION)?
        {
            tracing::debug!("Skipped {}", file.full_name().display());
            return Ok(None);
        }

        let destination = self.destination_for(file);
        let handle = self
            .writer
            .create_shortcut(file.full_name(), file.name(), &destination)?;
        tracing::debug!("Created {}", handle.path().display());

        Ok(Some(ResultObject::Shortcut(ShortcutRecord {
            file: AcceptedFile::new(handle.into_path()),
            target: file.full_name().to_path_buf(),
        })))
    }
}
