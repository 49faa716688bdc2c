//! `get-tag-metadata`: read image keywords

use crate::Result;
use crate::actions::ReadTagAction;
use crate::paths::{PathMode, SessionPaths};
use crate::pipeline::{ItemProcessor, ProcessSummary, Sink};
use crate::tags::TagReader;

/// Read the keywords of every image the arguments resolve to.
///
/// Files with unsupported extensions are skipped; per-file problems are
/// reported through `sink` and do not stop the batch.
///
/// # Errors
/// Returns an error only when writing to the sink fails.
pub fn execute<I, S, R, K>(
    session: &SessionPaths,
    arguments: I,
    mode: PathMode,
    reader: R,
    sink: &mut K,
) -> Result<ProcessSummary>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: TagReader,
    K: Sink + ?Sized,
{
    let mut action = ReadTagAction::new(reader);
    let summary = ItemProcessor::new(session, mode).process(arguments, &mut action, sink)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::CollectingSink;
    use crate::report::ErrorKind;
    use crate::testing::{StaticTagReader, TempTree};

    #[test]
    fn test_reads_only_images() {
        let tree = TempTree::new(&["a.txt", "a.png", "b.jpg"]);
        let reader = StaticTagReader::default()
            .with_keywords(tree.path("a.png"), &["x"])
            .with_keywords(tree.path("b.jpg"), &["y", "z"]);
        let mut sink = CollectingSink::new();

        let summary = execute(&tree.session(), ["a.*", "b.jpg"], PathMode::Wildcard, &reader, &mut sink)
            .unwrap();

        assert_eq!(reader.calls(), vec![tree.path("a.png"), tree.path("b.jpg")]);
        assert_eq!(summary.emitted, 2);
        assert_eq!(summary.skipped, 1);
        assert!(!summary.has_errors());
    }

    #[test]
    fn test_unknown_drive_is_reported() {
        let tree = TempTree::new(&["a.png"]);
        let reader = StaticTagReader::default();
        let mut sink = CollectingSink::new();

        let summary =
            execute(&tree.session(), ["Nope:a.png"], PathMode::Wildcard, &reader, &mut sink).unwrap();

        assert!(summary.has_errors());
        assert_eq!(sink.error_kinds(), vec![ErrorKind::DriveNotFound]);
    }
}
