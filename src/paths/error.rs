use thiserror::Error;

use crate::report::ErrorKind;

/// Errors produced while resolving a path argument
#[derive(Debug, Error)]
pub enum PathError {
    /// Nothing matched the argument
    #[error("Cannot find path '{path}' because it does not exist.")]
    ItemNotFound { path: String },

    /// Provider-qualified argument names an unknown provider
    #[error("Cannot find a provider with the name '{name}'.")]
    ProviderNotFound { name: String },

    /// Drive-qualified argument names an unknown drive
    #[error("Cannot find drive. A drive with the name '{name}' does not exist.")]
    DriveNotFound { name: String },

    /// `~` was used but no home directory is known
    #[error("Home location for this provider is not set.")]
    HomeNotSet,

    /// Wildcard pattern failed to parse
    #[error("The specified wildcard character pattern is not valid: {pattern} ({reason})")]
    InvalidPattern { pattern: String, reason: String },

    /// Empty argument
    #[error("Path cannot be an empty string.")]
    Empty,

    /// Argument resolved, but outside the filesystem namespace
    #[error("{path} does not resolve to a path on the FileSystem provider.")]
    NotFileSystem { path: String },
}

impl PathError {
    /// Error identifier this failure is reported under
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ItemNotFound { .. } | Self::HomeNotSet => ErrorKind::ItemNotFound,
            Self::ProviderNotFound { .. } | Self::NotFileSystem { .. } => {
                ErrorKind::InvalidProvider
            }
            Self::DriveNotFound { .. } => ErrorKind::DriveNotFound,
            Self::InvalidPattern { .. } | Self::Empty => ErrorKind::InvalidArgument,
        }
    }

    pub(crate) fn not_found(path: impl Into<String>) -> Self {
        Self::ItemNotFound { path: path.into() }
    }
}
