use super::{Action, ActionError, ResultObject, TagMetadata};
use crate::pipeline::AcceptedFile;
use crate::tags::TagReader;

/// Extensions the metadata reader is attempted on
pub const SUPPORTED_FORMATS: [&str; 13] = [
    "bmp", "gif", "jpeg", "pbm", "pgm", "ppm", "pnm", "pcx", "png", "tiff", "dng", "svg", "jpg",
];

/// Whether a lower-case, dot-less extension is in [`SUPPORTED_FORMATS`]
#[must_use]
pub fn is_supported_format(format: &str) -> bool {
    SUPPORTED_FORMATS.contains(&format)
}

/// Reads the keyword list of each supported image.
///
/// Files with other extensions are skipped without an error, so a wildcard
/// over a mixed directory only yields results for images.
#[derive(Debug, Clone)]
pub struct ReadTagAction<R> {
    reader: R,
}

impl<R: TagReader> ReadTagAction<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: TagReader> Action for ReadTagAction<R> {
    fn run(&mut self, file: &AcceptedFile) -> Result<Option<ResultObject>, ActionError> {
        tracing::debug!("Processing {}", file.full_name().display());
        let format = file.format_key();
        tracing::debug!("Extension: {}", file.extension().to_lowercase());

        if !is_supported_format(&format) {
            tracing::debug!("File format is not supported");
            tracing::debug!("Supported formats: {}", SUPPORTED_FORMATS.join(", "));
            return Ok(None);
        }
        tracing::debug!("File format is supported");

        let keywords = self.reader.read_keywords(file.full_name())?;
        tracing::debug!("Keywords: {}", keywords.join("; "));

        Ok(Some(ResultObject::TagMetadata(TagMetadata {
            file: file.clone(),
            keywords,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticTagReader;
    use std::path::PathBuf;

    #[test]
    fn test_txt_is_never_read() {
        let reader = StaticTagReader::default();
        let mut action = ReadTagAction::new(&reader);
        let out = action.run(&AcceptedFile::new("/photos/a.txt")).unwrap();
        assert!(out.is_none());
        assert!(reader.calls().is_empty());
    }

    #[test]
    fn test_png_is_always_attempted() {
        let reader = StaticTagReader::default();
        let mut action = ReadTagAction::new(&reader);
        let err = action.run(&AcceptedFile::new("/photos/a.png")).unwrap_err();
        assert!(matches!(err, ActionError::Tag(_)));
        assert_eq!(reader.calls(), vec![PathBuf::from("/photos/a.png")]);
    }

    #[test]
    fn test_extension_match_ignores_case() {
        let reader = StaticTagReader::default().with_keywords("/photos/B.JPEG".into(), &["x", "y"]);
        let mut action = ReadTagAction::new(&reader);
        let out = action.run(&AcceptedFile::new("/photos/B.JPEG")).unwrap().unwrap();
        match out {
            ResultObject::TagMetadata(meta) => {
                assert_eq!(meta.keywords, vec!["x", "y"]);
                assert_eq!(meta.file.name(), "B.JPEG");
            }
            ResultObject::Shortcut(_) => panic!("expected metadata"),
        }
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let reader = StaticTagReader::default().with_keywords("/p/c.gif".into(), &["one"]);
        let mut action = ReadTagAction::new(&reader);
        let file = AcceptedFile::new("/p/c.gif");
        let first = action.run(&file).unwrap();
        let second = action.run(&file).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_supported_formats_list() {
        for ext in ["bmp", "jpg", "jpeg", "svg", "dng", "pcx"] {
            assert!(is_supported_format(ext), "{ext} should be supported");
        }
        for ext in ["txt", "webp", "JPG", ""] {
            assert!(!is_supported_format(ext), "{ext} should not be supported");
        }
    }
}
