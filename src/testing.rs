//! Testing utilities for tagmeta
//!
//! Fixture directories plus stand-ins for the collaborators the actions
//! delegate to, so tests can observe exactly which files reached them.
//!
//! Only available when compiled with `cfg(test)`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::paths::SessionPaths;
use crate::shortcut::{ShortcutError, ShortcutHandle, ShortcutWriter};
use crate::tags::{TagError, TagReader};
use crate::ui::{InputError, ShouldProcess};

/// Temporary directory populated with empty files
///
/// Entries ending in `/` are created as directories. The directory is
/// removed when the tree goes out of scope.
pub struct TempTree {
    dir: TempDir,
}

impl TempTree {
    /// # Panics
    /// Panics if the fixture cannot be created.
    pub fn new(entries: &[&str]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for entry in entries {
            let path = dir.path().join(entry.trim_end_matches('/'));
            if entry.ends_with('/') {
                fs::create_dir_all(&path).expect("Failed to create fixture dir");
            } else {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).expect("Failed to create fixture dir");
                }
                fs::write(&path, b"").expect("Failed to create fixture file");
            }
        }
        Self { dir }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `relative` inside the tree
    #[must_use]
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Session whose working directory is the tree root
    #[must_use]
    pub fn session(&self) -> SessionPaths {
        SessionPaths::new(self.dir.path())
    }
}

/// [`TagReader`] with canned answers per path
///
/// Paths without an answer fail as if the file did not exist.
#[derive(Debug, Default)]
pub struct StaticTagReader {
    answers: HashMap<PathBuf, Option<Vec<String>>>,
    calls: RefCell<Vec<PathBuf>>,
}

impl StaticTagReader {
    #[must_use]
    pub fn with_keywords(mut self, path: PathBuf, keywords: &[&str]) -> Self {
        let keywords = keywords.iter().map(ToString::to_string).collect();
        self.answers.insert(path, Some(keywords));
        self
    }

    /// Make `path` fail as corrupt metadata
    #[must_use]
    pub fn with_failure(mut self, path: PathBuf) -> Self {
        self.answers.insert(path, None);
        self
    }

    /// Paths the reader was asked about, in order
    #[must_use]
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl TagReader for StaticTagReader {
    fn read_keywords(&self, path: &Path) -> Result<Vec<String>, TagError> {
        self.calls.borrow_mut().push(path.to_path_buf());
        match self.answers.get(path) {
            Some(Some(keywords)) => Ok(keywords.clone()),
            Some(None) => Err(TagError::Corrupt {
                path: path.to_path_buf(),
                format: crate::tags::ImageFormat::Png,
            }),
            None => Err(TagError::Io {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            }),
        }
    }
}

/// [`ShortcutWriter`] that writes a placeholder file and records each call
#[derive(Debug, Default)]
pub struct RecordingWriter {
    fail: bool,
    calls: RefCell<Vec<(PathBuf, String, PathBuf)>>,
}

impl RecordingWriter {
    /// Writer whose every call fails without touching the disk
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// `(target, description, destination)` of each successful call
    #[must_use]
    pub fn calls(&self) -> Vec<(PathBuf, String, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl ShortcutWriter for RecordingWriter {
    fn create_shortcut(
        &self,
        target: &Path,
        description: &str,
        destination: &Path,
    ) -> Result<ShortcutHandle, ShortcutError> {
        let write_err = |source| ShortcutError::Write {
            path: destination.to_path_buf(),
            source,
        };
        if self.fail {
            return Err(write_err(io::Error::from(io::ErrorKind::PermissionDenied)));
        }
        fs::write(destination, target.as_os_str().as_encoded_bytes()).map_err(write_err)?;
        self.calls.borrow_mut().push((
            target.to_path_buf(),
            description.to_string(),
            destination.to_path_buf(),
        ));
        Ok(ShortcutHandle::new(destination))
    }
}

/// Confirmation surface that always gives the same answer
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl ShouldProcess for FixedAnswer {
    fn should_process(&mut self, _target: &Path, _operation: &str) -> Result<bool, InputError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_tree_layout() {
        let tree = TempTree::new(&["a.png", "nested/b.png", "empty/"]);
        assert!(tree.path("a.png").is_file());
        assert!(tree.path("nested/b.png").is_file());
        assert!(tree.path("empty").is_dir());
        assert_eq!(tree.session().cwd(), tree.root());
    }

    #[test]
    fn test_temp_tree_cleanup() {
        let root = {
            let tree = TempTree::new(&["a.png"]);
            tree.root().to_path_buf()
        };
        assert!(!root.exists());
    }

    #[test]
    fn test_static_reader_unknown_path_fails() {
        let reader = StaticTagReader::default();
        assert!(reader.read_keywords(Path::new("x.png")).is_err());
        assert_eq!(reader.calls(), vec![PathBuf::from("x.png")]);
    }
}
