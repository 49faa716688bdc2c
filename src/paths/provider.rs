//! Providers and drives
//!
//! A provider is the namespace a resolved path lives in. Only the
//! filesystem provider yields files the commands can act upon; the
//! environment provider exists so that `Env:` paths resolve into a real,
//! non-filesystem namespace instead of failing as unknown drives.

use std::fmt;
use std::path::PathBuf;

/// Kind of namespace a provider implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    FileSystem,
    Environment,
}

/// Handle identifying the provider an expansion came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProviderInfo {
    kind: ProviderKind,
}

impl ProviderInfo {
    pub const FILE_SYSTEM: Self = Self {
        kind: ProviderKind::FileSystem,
    };
    pub const ENVIRONMENT: Self = Self {
        kind: ProviderKind::Environment,
    };

    /// Look a provider up by name, ignoring case and an optional
    /// module qualifier (`Microsoft.PowerShell.Core\FileSystem`).
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        let bare = name.rsplit('\\').next().unwrap_or(name);
        [Self::FILE_SYSTEM, Self::ENVIRONMENT]
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(bare))
    }

    #[must_use]
    pub const fn kind(self) -> ProviderKind {
        self.kind
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.kind {
            ProviderKind::FileSystem => "FileSystem",
            ProviderKind::Environment => "Environment",
        }
    }

    #[must_use]
    pub const fn is_filesystem(self) -> bool {
        matches!(self.kind, ProviderKind::FileSystem)
    }
}

impl fmt::Display for ProviderInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a drive is rooted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriveRoot {
    /// Filesystem directory
    Directory(PathBuf),
    /// Root container of a non-filesystem provider
    Container,
}

/// Named entry point into a provider (`Temp:`, `Env:`, `C:`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveInfo {
    name: String,
    provider: ProviderInfo,
    root: DriveRoot,
}

impl DriveInfo {
    /// Filesystem drive rooted at `root`
    pub fn filesystem(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            provider: ProviderInfo::FILE_SYSTEM,
            root: DriveRoot::Directory(root.into()),
        }
    }

    /// The `Env:` drive
    #[must_use]
    pub fn environment() -> Self {
        Self {
            name: "Env".to_string(),
            provider: ProviderInfo::ENVIRONMENT,
            root: DriveRoot::Container,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn provider(&self) -> ProviderInfo {
        self.provider
    }

    #[must_use]
    pub const fn root(&self) -> &DriveRoot {
        &self.root
    }
}
