//! Per-invocation orchestration of path arguments
//!
//! For every argument of a batch the [`ItemProcessor`]:
//!
//! 1. expands it with the batch's [`PathMode`];
//! 2. checks once that the expansion lives on the filesystem provider;
//! 3. runs the [`Action`] on each resolved path, in order.
//!
//! Failures at any step are reported through the [`Sink`] as they happen and
//! processing moves on; only a failing sink (the output itself) stops the
//! batch.

mod file;
mod sink;

use std::io;

pub use file::AcceptedFile;
pub use sink::{CollectingSink, Sink};

use crate::actions::Action;
use crate::paths::{PathMode, SessionPaths, ensure_filesystem, expand};
use crate::report::{ErrorKind, ErrorTarget, ReportedError};

/// Counters for one processed batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSummary {
    pub arguments: usize,
    pub emitted: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl ProcessSummary {
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// Drives expansion, filtering and the action over a batch of arguments
#[derive(Debug, Clone, Copy)]
pub struct ItemProcessor<'a> {
    session: &'a SessionPaths,
    mode: PathMode,
}

impl<'a> ItemProcessor<'a> {
    /// Processor for one batch. `mode` is fixed for every argument.
    #[must_use]
    pub const fn new(session: &'a SessionPaths, mode: PathMode) -> Self {
        Self { session, mode }
    }

    /// Process every argument, streaming results and errors into `sink`.
    ///
    /// # Errors
    /// Returns an I/O error only when the sink fails to write.
    pub fn process<I, S, A, K>(
        &self,
        arguments: I,
        action: &mut A,
        sink: &mut K,
    ) -> io::Result<ProcessSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        A: Action + ?Sized,
        K: Sink + ?Sized,
    {
        let mut summary = ProcessSummary::default();
        for argument in arguments {
            self.process_argument(argument.as_ref(), action, sink, &mut summary)?;
        }
        tracing::debug!(
            "Processed {} argument(s): {} emitted, {} skipped, {} error(s)",
            summary.arguments,
            summary.emitted,
            summary.skipped,
            summary.errors
        );
        Ok(summary)
    }

    fn process_argument<A, K>(
        &self,
        argument: &str,
        action: &mut A,
        sink: &mut K,
        summary: &mut ProcessSummary,
    ) -> io::Result<()>
    where
        A: Action + ?Sized,
        K: Sink + ?Sized,
    {
        summary.arguments += 1;

        let expansion = match expand(self.session, argument, self.mode) {
            Ok(expansion) => expansion,
            Err(e) => {
                summary.errors += 1;
                let target = ErrorTarget::Argument(argument.to_string());
                return sink.report(ReportedError::new(e.kind(), target, e));
            }
        };

        if let Err(rejected) = ensure_filesystem(expansion.provider(), argument) {
            summary.errors += 1;
            return sink.report(rejected);
        }

        for resolved in expansion.into_paths() {
            let file = AcceptedFile::new(resolved.into_path());
            match action.run(&file) {
                Ok(Some(result)) => {
                    summary.emitted += 1;
                    sink.emit(result)?;
                }
                Ok(None) => summary.skipped += 1,
                Err(e) => {
                    summary.errors += 1;
                    let target = ErrorTarget::File(file.full_name().to_path_buf());
                    sink.report(ReportedError::new(ErrorKind::OperationFailed, target, e))?;
                }
            }
        }
        Ok(())
    }
}
