//! `set-shortcut`: create shortcuts in an output directory

use std::path::Path;

use crate::Result;
use crate::actions::CreateShortcutAction;
use crate::paths::{PathMode, SessionPaths};
use crate::pipeline::{ItemProcessor, ProcessSummary, Sink};
use crate::shortcut::ShortcutWriter;
use crate::ui::ShouldProcess;

/// Create `<output>/<name>.lnk` for every file the arguments resolve to.
///
/// `output` is resolved against the session working directory and defaults
/// to it.
///
/// # Errors
/// Returns `TagmetaError::DirectoryNotFound` before any argument is looked
/// at when the output directory does not exist, or an I/O error when
/// writing to the sink fails.
pub fn execute<I, S, W, C, K>(
    session: &SessionPaths,
    arguments: I,
    mode: PathMode,
    output: Option<&Path>,
    writer: W,
    confirm: C,
    sink: &mut K,
) -> Result<ProcessSummary>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: ShortcutWriter,
    C: ShouldProcess,
    K: Sink + ?Sized,
{
    let output_dir = output.map_or_else(|| session.cwd().to_path_buf(), |p| session.absolute(p));
    let mut action = CreateShortcutAction::new(output_dir, writer, confirm)?;
    tracing::debug!("Writing shortcuts to {}", action.output_dir().display());

    let summary = ItemProcessor::new(session, mode).process(arguments, &mut action, sink)?;
    Ok(summary)
}
