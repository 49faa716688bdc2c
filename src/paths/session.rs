//! Session path state: working directory, home, drives and environment
//!
//! `SessionPaths` plays the part of the host's path-resolution provider. It
//! turns a raw argument into a provider plus a location inside that
//! provider. Expansion of the location happens in [`super::expand`].

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::error::PathError;
use super::provider::{DriveInfo, DriveRoot, ProviderInfo, ProviderKind};

/// `Provider::rest`, optionally module-qualified (`Module\Provider::rest`)
static PROVIDER_QUALIFIED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:[A-Za-z][\w.]*\\)?[A-Za-z]\w*)::(.*)$").expect("provider regex is valid")
});

/// `Drive:rest`
static DRIVE_QUALIFIED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z][\w-]*):(.*)$").expect("drive regex is valid"));

/// True if the token carries glob metacharacters
pub(crate) fn is_glob_token(token: &str) -> bool {
    token.contains('*') || token.contains('?') || token.contains('[')
}

#[derive(Debug, Clone)]
pub(crate) struct Segment {
    text: OsString,
    /// Came from a base directory rather than from the argument
    literal: bool,
}

impl Segment {
    pub(crate) fn text(&self) -> &OsStr {
        &self.text
    }

    /// Argument text carrying glob metacharacters
    pub(crate) fn wildcard(&self) -> Option<&str> {
        if self.literal {
            return None;
        }
        self.text.to_str().filter(|t| is_glob_token(t))
    }
}

/// Absolute, lexically normalized filesystem location.
///
/// Segments taken from a base directory (working directory, drive root,
/// home) are literal; segments taken from the argument may hold wildcards.
#[derive(Debug, Clone, Default)]
pub(crate) struct PathSpec {
    root: PathBuf,
    segments: Vec<Segment>,
}

impl PathSpec {
    fn from_base(base: &Path) -> Self {
        let mut spec = Self::default();
        spec.extend(base, true);
        spec
    }

    fn extend(&mut self, path: &Path, literal: bool) {
        for component in path.components() {
            match component {
                Component::Prefix(prefix) => {
                    self.root = PathBuf::from(prefix.as_os_str());
                    self.segments.clear();
                }
                Component::RootDir => {
                    let mut root: PathBuf = self
                        .root
                        .components()
                        .take_while(|c| matches!(c, Component::Prefix(_)))
                        .collect();
                    root.push(Component::RootDir.as_os_str());
                    self.root = root;
                    self.segments.clear();
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    self.segments.pop();
                }
                Component::Normal(name) => self.segments.push(Segment {
                    text: name.to_os_string(),
                    literal,
                }),
            }
        }
    }

    /// Append argument text; both `/` and `\` separate components.
    fn push_argument(&mut self, text: &str) {
        if cfg!(windows) {
            self.extend(Path::new(text), false);
        } else {
            self.extend(Path::new(&text.replace('\\', "/")), false);
        }
    }

    pub(crate) fn to_path(&self) -> PathBuf {
        let mut path = self.root.clone();
        for segment in &self.segments {
            path.push(&segment.text);
        }
        path
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub(crate) fn has_wildcards(&self) -> bool {
        self.segments.iter().any(|s| s.wildcard().is_some())
    }
}

/// Where an argument points once drive and provider qualifiers are resolved
#[derive(Debug, Clone)]
pub(crate) enum Location {
    FileSystem(PathSpec),
    /// Variable name (possibly a pattern); empty for the `Env:` root
    Environment(String),
}

impl Location {
    pub(crate) const fn provider(&self) -> ProviderInfo {
        match self {
            Location::FileSystem(_) => ProviderInfo::FILE_SYSTEM,
            Location::Environment(_) => ProviderInfo::ENVIRONMENT,
        }
    }
}

fn trim_separators(text: &str) -> &str {
    text.trim_start_matches(['/', '\\'])
}

/// Path-resolution state for one invocation
#[derive(Debug, Clone)]
pub struct SessionPaths {
    cwd: PathBuf,
    home: Option<PathBuf>,
    drives: Vec<DriveInfo>,
    environment: BTreeMap<String, String>,
}

impl SessionPaths {
    /// Session rooted at `cwd` with the built-in `Env:` and `Temp:` drives,
    /// no home directory and an empty environment.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            home: None,
            drives: vec![
                DriveInfo::environment(),
                DriveInfo::filesystem("Temp", std::env::temp_dir()),
            ],
            environment: BTreeMap::new(),
        }
    }

    /// Session describing the running process: current directory, home,
    /// environment variables and (on Windows) the mounted drive letters.
    ///
    /// # Errors
    /// Returns an I/O error if the current directory cannot be determined.
    pub fn from_process() -> io::Result<Self> {
        let mut session = Self::new(std::env::current_dir()?)
            .with_environment(std::env::vars_os().map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            }));
        session.home = dirs::home_dir();

        #[cfg(windows)]
        for letter in 'A'..='Z' {
            let root = format!("{letter}:\\");
            if Path::new(&root).exists() {
                session = session.with_drive(DriveInfo::filesystem(letter.to_string(), root));
            }
        }

        Ok(session)
    }

    #[must_use]
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Add a drive, replacing any drive with the same name
    #[must_use]
    pub fn with_drive(mut self, drive: DriveInfo) -> Self {
        self.drives.retain(|d| !d.name().eq_ignore_ascii_case(drive.name()));
        self.drives.push(drive);
        self
    }

    #[must_use]
    pub fn with_environment<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.environment.extend(vars);
        self
    }

    #[must_use]
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Look up a drive by name, ignoring case
    #[must_use]
    pub fn drive(&self, name: &str) -> Option<&DriveInfo> {
        self.drives.iter().find(|d| d.name().eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn drives(&self) -> &[DriveInfo] {
        &self.drives
    }

    pub(crate) fn environment_names(&self) -> impl Iterator<Item = &str> {
        self.environment.keys().map(String::as_str)
    }

    /// Stored spelling of a variable name, matching case-insensitively on Windows
    pub(crate) fn variable_name(&self, name: &str) -> Option<&str> {
        if cfg!(windows) {
            self.environment_names()
                .find(|k| k.eq_ignore_ascii_case(name))
        } else {
            self.environment.get_key_value(name).map(|(k, _)| k.as_str())
        }
    }

    /// Absolute, normalized form of a plain directory path, relative to the
    /// session working directory. Used for option values that never go
    /// through wildcard expansion.
    #[must_use]
    pub fn absolute(&self, path: &Path) -> PathBuf {
        let mut spec = PathSpec::from_base(&self.cwd);
        spec.extend(path, true);
        spec.to_path()
    }

    /// Resolve drive and provider qualifiers of an argument.
    pub(crate) fn qualify(&self, argument: &str) -> Result<Location, PathError> {
        if argument.is_empty() {
            return Err(PathError::Empty);
        }

        if let Some(caps) = PROVIDER_QUALIFIED.captures(argument) {
            let name = caps.get(1).map_or("", |m| m.as_str());
            let rest = caps.get(2).map_or("", |m| m.as_str());
            let provider = ProviderInfo::by_name(name).ok_or_else(|| PathError::ProviderNotFound {
                name: name.to_string(),
            })?;
            return match provider.kind() {
                ProviderKind::FileSystem => self.qualify_unprefixed(rest, Some(provider)),
                ProviderKind::Environment => {
                    Ok(Location::Environment(trim_separators(rest).to_string()))
                }
            };
        }

        self.qualify_unprefixed(argument, None)
    }

    fn qualify_unprefixed(
        &self,
        argument: &str,
        required: Option<ProviderInfo>,
    ) -> Result<Location, PathError> {
        if let Some(caps) = DRIVE_QUALIFIED.captures(argument) {
            let name = caps.get(1).map_or("", |m| m.as_str());
            let rest = trim_separators(caps.get(2).map_or("", |m| m.as_str()));
            let drive = self
                .drive(name)
                .filter(|d| required.is_none_or(|p| p == d.provider()))
                .ok_or_else(|| PathError::DriveNotFound {
                    name: name.to_string(),
                })?;

            let location = match drive.root() {
                DriveRoot::Directory(root) => {
                    let mut spec = PathSpec::from_base(&self.absolute(root));
                    spec.push_argument(rest);
                    Location::FileSystem(spec)
                }
                DriveRoot::Container => Location::Environment(rest.to_string()),
            };
            return Ok(location);
        }

        if let Some(rest) = argument.strip_prefix('~')
            && (rest.is_empty() || rest.starts_with(['/', '\\']))
        {
            let home = self.home.as_ref().ok_or(PathError::HomeNotSet)?;
            let mut spec = PathSpec::from_base(home);
            spec.push_argument(trim_separators(rest));
            return Ok(Location::FileSystem(spec));
        }

        let mut spec = PathSpec::from_base(&self.cwd);
        spec.push_argument(argument);
        Ok(Location::FileSystem(spec))
    }
}
