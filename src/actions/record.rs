use std::path::PathBuf;

use serde::Serialize;

use crate::pipeline::AcceptedFile;

/// Keywords read from one image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagMetadata {
    pub file: AcceptedFile,
    pub keywords: Vec<String>,
}

/// A shortcut that was written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortcutRecord {
    /// The new `.lnk` file
    pub file: AcceptedFile,
    /// What it points at
    pub target: PathBuf,
}

/// Per-file output of an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResultObject {
    TagMetadata(TagMetadata),
    Shortcut(ShortcutRecord),
}

impl ResultObject {
    /// The file the result is about
    #[must_use]
    pub const fn file(&self) -> &AcceptedFile {
        match self {
            Self::TagMetadata(meta) => &meta.file,
            Self::Shortcut(link) => &link.file,
        }
    }
}
