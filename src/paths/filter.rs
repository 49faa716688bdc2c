//! Filesystem membership check for an expansion

use super::error::PathError;
use super::provider::ProviderInfo;
use crate::report::{ErrorTarget, ReportedError};

/// Accept an expansion only if it lives on the filesystem provider.
///
/// Runs once per argument: an expansion never spans providers, so the
/// provider of the whole expansion decides for every path in it.
///
/// # Errors
/// Returns an `InvalidProvider` report naming `argument` when the provider
/// is anything other than the filesystem.
pub fn ensure_filesystem(provider: ProviderInfo, argument: &str) -> Result<(), ReportedError> {
    if provider.is_filesystem() {
        return Ok(());
    }
    let cause = PathError::NotFileSystem {
        path: argument.to_string(),
    };
    Err(ReportedError::new(
        cause.kind(),
        ErrorTarget::Argument(argument.to_string()),
        cause,
    ))
}
