//! Tagmeta - image keywords and file shortcuts over shell-style paths
//!
//! Both commands share one pipeline: every path argument is expanded (or
//! taken literally), checked to live on the filesystem, and handed file by
//! file to an action. Results and per-item errors stream out as they
//! happen; only a missing shortcut output directory stops an invocation.

use std::path::PathBuf;

use thiserror::Error;

pub mod actions;
pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod logging;
pub mod output;
pub mod paths;
pub mod pipeline;
pub mod report;
pub mod shortcut;
pub mod tags;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all fatal failure states of the program
#[derive(Debug, Error)]
pub enum TagmetaError {
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The shortcut output directory is missing
    #[error("Directory {} does not exist.", .0.display())]
    DirectoryNotFound(PathBuf),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TagmetaError>;
