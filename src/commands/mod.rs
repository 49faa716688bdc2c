//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args plus the collaborators it needs, so tests can substitute them.

pub mod config;
pub mod get_tag_metadata;
pub mod set_shortcut;

// Re-export execute functions for convenience
pub use self::config::execute as config;
pub use get_tag_metadata::execute as get_tag_metadata;
pub use set_shortcut::execute as set_shortcut;
