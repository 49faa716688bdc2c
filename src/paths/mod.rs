//! Path resolution: turning raw arguments into concrete filesystem paths
//!
//! - `session`: working directory, drives, providers and qualifier parsing
//! - `expand`: wildcard and literal expansion of one argument
//! - `filter`: the filesystem-provider check applied to each expansion
//! - `provider`: provider and drive handles
//! - `error`: resolution errors and their reporting kinds

pub mod error;
pub mod expand;
pub mod filter;
pub mod provider;
pub mod session;

pub use error::PathError;
pub use expand::{Expansion, PathMode, ResolvedPath, expand};
pub use filter::ensure_filesystem;
pub use provider::{DriveInfo, DriveRoot, ProviderInfo, ProviderKind};
pub use session::SessionPaths;
