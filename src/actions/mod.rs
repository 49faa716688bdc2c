//! Per-file actions run by the item processor
//!
//! An action returns `Ok(Some(result))` to emit, `Ok(None)` to emit nothing
//! (skipped or declined), and `Err` when the delegated operation failed; the
//! processor reports that error against the file and carries on.

mod create_shortcut;
mod read_tags;
mod record;

use thiserror::Error;

pub use create_shortcut::{CREATE_SHORTCUT_OPERATION, CreateShortcutAction};
pub use read_tags::{ReadTagAction, SUPPORTED_FORMATS, is_supported_format};
pub use record::{ResultObject, ShortcutRecord, TagMetadata};

use crate::pipeline::AcceptedFile;
use crate::shortcut::ShortcutError;
use crate::tags::TagError;
use crate::ui::input::InputError;

/// Failure of a single action run
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Tag(#[from] TagError),

    #[error(transparent)]
    Shortcut(#[from] ShortcutError),

    #[error("Confirmation failed: {0}")]
    Confirm(#[from] InputError),
}

/// Work performed on each accepted file
pub trait Action {
    /// Run against one file.
    ///
    /// # Errors
    /// Returns `ActionError` when the delegated operation fails.
    fn run(&mut self, file: &AcceptedFile) -> Result<Option<ResultObject>, ActionError>;
}
