//! Non-fatal, per-item error records
//!
//! Every failure that should not stop a batch is turned into a
//! [`ReportedError`] and handed to the sink the moment it happens. Errors
//! are never aggregated; each one names the argument or file it came from.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Error identifier attached to a reported error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// The argument matched nothing
    ItemNotFound,
    /// The argument resolved into a namespace other than the filesystem,
    /// or named a provider that does not exist here
    InvalidProvider,
    /// The argument named a drive that does not exist
    DriveNotFound,
    /// A wildcard pattern could not be parsed
    InvalidArgument,
    /// The delegated read/write for a single file failed
    OperationFailed,
}

impl ErrorKind {
    /// Stable identifier, printed in front of the message
    #[must_use]
    pub const fn error_id(self) -> &'static str {
        match self {
            Self::ItemNotFound => "ItemNotFound",
            Self::InvalidProvider => "InvalidProvider",
            Self::DriveNotFound => "DriveNotFound",
            Self::InvalidArgument => "InvalidArgument",
            Self::OperationFailed => "OperationFailed",
        }
    }

    /// Broad category used when displaying the error
    #[must_use]
    pub const fn category(self) -> ErrorCategory {
        match self {
            Self::ItemNotFound | Self::DriveNotFound => ErrorCategory::ObjectNotFound,
            Self::InvalidProvider | Self::InvalidArgument => ErrorCategory::InvalidArgument,
            Self::OperationFailed => ErrorCategory::InvalidOperation,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error_id())
    }
}

/// Category shown next to the target in error output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCategory {
    ObjectNotFound,
    InvalidArgument,
    InvalidOperation,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ObjectNotFound => "ObjectNotFound",
            Self::InvalidArgument => "InvalidArgument",
            Self::InvalidOperation => "InvalidOperation",
        };
        f.write_str(name)
    }
}

/// The thing an error is attributed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorTarget {
    /// A raw path argument as the caller typed it
    Argument(String),
    /// A concrete file that was being acted upon
    File(PathBuf),
}

impl fmt::Display for ErrorTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument(arg) => f.write_str(arg),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A non-fatal error attributed to one argument or file
#[derive(Debug, Error)]
#[error("{source}")]
pub struct ReportedError {
    kind: ErrorKind,
    target: ErrorTarget,
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl ReportedError {
    pub fn new<E>(kind: ErrorKind, target: ErrorTarget, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self {
            kind,
            target,
            source: source.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    #[must_use]
    pub const fn target(&self) -> &ErrorTarget {
        &self.target
    }

    /// Human readable message of the underlying cause
    #[must_use]
    pub fn message(&self) -> String {
        self.source.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_follow_kind() {
        assert_eq!(ErrorKind::ItemNotFound.category(), ErrorCategory::ObjectNotFound);
        assert_eq!(ErrorKind::DriveNotFound.category(), ErrorCategory::ObjectNotFound);
        assert_eq!(ErrorKind::InvalidProvider.category(), ErrorCategory::InvalidArgument);
        assert_eq!(ErrorKind::OperationFailed.category(), ErrorCategory::InvalidOperation);
    }

    #[test]
    fn test_reported_error_keeps_cause_and_target() {
        let err = ReportedError::new(
            ErrorKind::OperationFailed,
            ErrorTarget::File(PathBuf::from("/tmp/a.png")),
            "corrupt header",
        );
        assert_eq!(err.kind(), ErrorKind::OperationFailed);
        assert_eq!(err.message(), "corrupt header");
        assert_eq!(err.to_string(), "corrupt header");
        assert_eq!(err.target().to_string(), "/tmp/a.png");
    }
}
