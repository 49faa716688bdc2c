//! Expansion of a single path argument into resolved paths

use std::path::{Path, PathBuf};

use glob::MatchOptions;

use super::error::PathError;
use super::provider::ProviderInfo;
use super::session::{Location, PathSpec, SessionPaths, is_glob_token};

/// How the arguments of a batch are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMode {
    /// Glob metacharacters are expanded; the result must exist
    Wildcard,
    /// Arguments are taken as typed; the result need not exist
    Literal,
}

/// One concrete path inside a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    path: PathBuf,
}

impl ResolvedPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Provider-native path (filesystem path, or item name)
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Everything one argument expanded to. All paths share one provider.
#[derive(Debug, Clone)]
pub struct Expansion {
    provider: ProviderInfo,
    paths: Vec<ResolvedPath>,
}

impl Expansion {
    #[must_use]
    pub const fn provider(&self) -> ProviderInfo {
        self.provider
    }

    #[must_use]
    pub fn paths(&self) -> &[ResolvedPath] {
        &self.paths
    }

    #[must_use]
    pub fn into_paths(self) -> Vec<ResolvedPath> {
        self.paths
    }
}

fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: !cfg!(windows),
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

/// Expand one argument.
///
/// In [`PathMode::Wildcard`] the argument is globbed against its provider
/// and must match at least one existing item. In [`PathMode::Literal`] a
/// single path is constructed without interpreting metacharacters and
/// without checking that it exists.
///
/// # Errors
/// * `PathError::ItemNotFound` when a wildcard argument matches nothing.
/// * `PathError::DriveNotFound` / `PathError::ProviderNotFound` for unknown qualifiers.
/// * `PathError::InvalidPattern` when the glob cannot be parsed.
pub fn expand(
    session: &SessionPaths,
    argument: &str,
    mode: PathMode,
) -> Result<Expansion, PathError> {
    let location = session.qualify(argument)?;
    let provider = location.provider();

    let paths = match (location, mode) {
        (Location::FileSystem(spec), PathMode::Literal) => vec![ResolvedPath::new(spec.to_path())],
        (Location::FileSystem(spec), PathMode::Wildcard) => expand_filesystem(&spec, argument)?,
        (Location::Environment(name), PathMode::Literal) => vec![ResolvedPath::new(name)],
        (Location::Environment(name), PathMode::Wildcard) => {
            expand_environment(session, &name, argument)?
        }
    };

    tracing::debug!(
        "Resolved '{argument}' to {} path(s) on the {provider} provider",
        paths.len()
    );

    Ok(Expansion { provider, paths })
}

fn invalid_pattern(argument: &str, e: &glob::PatternError) -> PathError {
    PathError::InvalidPattern {
        pattern: argument.to_string(),
        reason: e.msg.to_string(),
    }
}

fn expand_filesystem(spec: &PathSpec, argument: &str) -> Result<Vec<ResolvedPath>, PathError> {
    if !spec.has_wildcards() {
        let path = spec.to_path();
        return if path.symlink_metadata().is_ok() {
            Ok(vec![ResolvedPath::new(path)])
        } else {
            Err(PathError::not_found(path.display().to_string()))
        };
    }

    // Compile every wildcard segment first so a bad pattern is reported
    // even when an earlier segment matches nothing.
    let patterns = spec
        .segments()
        .iter()
        .map(|segment| {
            segment
                .wildcard()
                .map(glob::Pattern::new)
                .transpose()
                .map_err(|e| invalid_pattern(argument, &e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let options = match_options();
    let mut candidates = vec![spec.root().to_path_buf()];
    for (segment, pattern) in spec.segments().iter().zip(&patterns) {
        candidates = match pattern {
            None => candidates
                .into_iter()
                .map(|dir| dir.join(segment.text()))
                .collect(),
            Some(pattern) => candidates
                .iter()
                .flat_map(|dir| matching_children(dir, pattern, options))
                .collect(),
        };
    }

    let paths: Vec<ResolvedPath> = candidates
        .into_iter()
        .filter(|path| path.symlink_metadata().is_ok())
        .map(ResolvedPath::new)
        .collect();

    if paths.is_empty() {
        return Err(PathError::not_found(argument));
    }
    Ok(paths)
}

/// Sorted entries of `dir` whose names match `pattern`.
///
/// Names are matched as text, so entries whose names are not valid Unicode
/// never match a wildcard; they can still be reached by typing them.
fn matching_children(dir: &Path, pattern: &glob::Pattern, options: MatchOptions) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            if dir.is_dir() {
                tracing::warn!("Skipping {}: {e}", dir.display());
            }
            return Vec::new();
        }
    };

    let mut names: Vec<_> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.file_name()),
            Err(e) => {
                tracing::warn!("Skipping entry of {}: {e}", dir.display());
                None
            }
        })
        .filter(|name| name.to_str().is_some_and(|n| pattern.matches_with(n, options)))
        .collect();
    names.sort();
    names.into_iter().map(|name| dir.join(name)).collect()
}

fn expand_environment(
    session: &SessionPaths,
    name: &str,
    argument: &str,
) -> Result<Vec<ResolvedPath>, PathError> {
    if name.is_empty() {
        return Ok(vec![ResolvedPath::new(PathBuf::new())]);
    }

    if !is_glob_token(name) {
        return session
            .variable_name(name)
            .map(|n| vec![ResolvedPath::new(n)])
            .ok_or_else(|| PathError::not_found(argument));
    }

    let pattern = glob::Pattern::new(name).map_err(|e| invalid_pattern(argument, &e))?;
    let options = match_options();
    let paths: Vec<ResolvedPath> = session
        .environment_names()
        .filter(|n| pattern.matches_with(n, options))
        .map(ResolvedPath::new)
        .collect();

    if paths.is_empty() {
        return Err(PathError::not_found(argument));
    }
    Ok(paths)
}
