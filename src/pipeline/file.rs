use std::path::{Path, PathBuf};

use serde::Serialize;

/// A resolved path accepted as a filesystem target
///
/// Mirrors what a file-info handle exposes: full path, name, extension
/// (with its leading dot, empty when absent) and whether it exists as a
/// regular file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptedFile {
    full_name: PathBuf,
    name: String,
    extension: String,
    exists: bool,
}

impl AcceptedFile {
    /// Build a handle for `path`, querying the filesystem for existence
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let full_name = path.into();
        let name = full_name.file_name().map_or_else(
            || full_name.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        let extension = full_name
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let exists = full_name.is_file();
        Self {
            full_name,
            name,
            extension,
            exists,
        }
    }

    #[must_use]
    pub fn full_name(&self) -> &Path {
        &self.full_name
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    #[must_use]
    pub const fn exists(&self) -> bool {
        self.exists
    }

    /// Lower-cased extension without the leading dot
    #[must_use]
    pub fn format_key(&self) -> String {
        self.extension.trim_start_matches('.').to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_file_metadata() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Photo.JPG");
        std::fs::write(&path, b"x").unwrap();
        let file = AcceptedFile::new(&path);
        assert_eq!(file.full_name(), path);
        assert_eq!(file.name(), "Photo.JPG");
        assert_eq!(file.extension(), ".JPG");
        assert_eq!(file.format_key(), "jpg");
        assert!(file.exists());
    }

    #[test]
    fn test_missing_file_and_directory_do_not_exist() {
        let dir = TempDir::new().unwrap();
        assert!(!AcceptedFile::new(dir.path().join("nope.png")).exists());
        let as_dir = AcceptedFile::new(dir.path());
        assert!(!as_dir.exists());
        assert_eq!(as_dir.extension(), "");
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        let file = AcceptedFile::new("/home/user/.profile");
        assert_eq!(file.name(), ".profile");
        assert_eq!(file.format_key(), "");
    }
}
