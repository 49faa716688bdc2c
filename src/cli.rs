//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **get-tag-metadata** (`get`): read image keywords
//! - **set-shortcut** (`shortcut`): create `.lnk` shortcuts in a directory
//! - **config**: read and change stored settings
//! - **completions**: print a shell completion script
//!
//! Both file commands take wildcard paths positionally (or one per line on
//! stdin) or verbatim paths through `--literal-path`; the two forms cannot be
//! mixed in one invocation.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use tagmeta::cli::{Cli, Commands};
//! use tagmeta::paths::PathMode;
//!
//! let cli = Cli::parse_from(["tagmeta", "get", "-l", "[draft].png"]);
//! if let Commands::GetTagMetadata { paths } = cli.command {
//!     assert_eq!(paths.mode(), PathMode::Literal);
//! }
//! ```

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::{OutputFormat, PathFormat};
use crate::paths::PathMode;
use crate::ui::ConfirmMode;
use crate::{Result, TagmetaError};

/// Path arguments shared by the file commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PathArgs {
    /// Paths to process; `*`, `?` and `[...]` are expanded
    #[arg(value_name = "PATH", conflicts_with = "literal_path")]
    pub path: Vec<String>,

    /// Paths used exactly as typed, without wildcard expansion
    #[arg(
        short = 'l',
        long = "literal-path",
        visible_alias = "pspath",
        value_name = "PATH",
        num_args = 1..
    )]
    pub literal_path: Vec<String>,
}

impl PathArgs {
    /// Interpretation of every argument of this invocation
    #[must_use]
    pub fn mode(&self) -> PathMode {
        if self.literal_path.is_empty() {
            PathMode::Wildcard
        } else {
            PathMode::Literal
        }
    }

    /// Arguments given on the command line, in order
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        match self.mode() {
            PathMode::Wildcard => &self.path,
            PathMode::Literal => &self.literal_path,
        }
    }

    /// Whether no path was given at all (stdin may supply them)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.literal_path.is_empty()
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., output_format=json, drive.Photos=/srv/photos)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the location of the configuration file
    Path,
}

/// Top-level subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Read the keywords stored in image files
    #[command(visible_alias = "get")]
    GetTagMetadata {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Create a Windows shortcut (.lnk) for each file
    #[command(visible_alias = "shortcut")]
    SetShortcut {
        #[command(flatten)]
        paths: PathArgs,

        /// Directory the shortcuts are written to (must exist)
        #[arg(short = 'o', long = "output-path", value_name = "DIR")]
        output_path: Option<PathBuf>,

        /// Show what would be created without writing anything
        #[arg(long = "what-if")]
        what_if: bool,

        /// Ask before creating each shortcut
        #[arg(long = "confirm")]
        confirm: bool,

        /// Never ask; overrides --confirm and --what-if
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Confirmation behaviour requested for `set-shortcut`
    #[must_use]
    pub const fn confirm_mode(&self) -> ConfirmMode {
        match self {
            Self::SetShortcut {
                what_if,
                confirm,
                yes,
                ..
            } => ConfirmMode::from_flags(*what_if, *confirm, *yes),
            _ => ConfirmMode::Auto,
        }
    }
}

/// Read image keywords and create file shortcuts
#[derive(Parser, Debug)]
#[command(name = "tagmeta", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Only print result paths
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Print per-file traces to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Display absolute paths (overrides config)
    #[arg(long = "absolute", global = true, conflicts_with = "relative")]
    pub absolute: bool,

    /// Display relative paths (overrides config)
    #[arg(long = "relative", global = true, conflicts_with = "absolute")]
    pub relative: bool,

    /// Output format for results (overrides config)
    #[arg(long = "format", global = true, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Path format override from global flags
    #[must_use]
    pub const fn get_path_format(&self) -> Option<PathFormat> {
        if self.absolute {
            Some(PathFormat::Absolute)
        } else if self.relative {
            Some(PathFormat::Relative)
        } else {
            None
        }
    }
}

/// Path arguments piped on stdin, one per line
///
/// Lines are yielded as they arrive; blank lines are skipped and a trailing
/// `\r` is dropped. Iteration stops at the first line that cannot be read or
/// is not valid UTF-8, and [`PathLines::finish`] returns that error.
#[derive(Debug)]
pub struct PathLines<R> {
    lines: io::Split<R>,
    line: usize,
    error: Option<TagmetaError>,
}

impl<R: BufRead> PathLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.split(b'\n'),
            line: 0,
            error: None,
        }
    }

    /// Consume the reader state once iteration is done
    ///
    /// # Errors
    ///
    /// Returns `TagmetaError::Io` when reading failed and
    /// `TagmetaError::InvalidInput` naming the first undecodable line.
    pub fn finish(self) -> Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<R: BufRead> Iterator for PathLines<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.error.is_some() {
            return None;
        }
        loop {
            let mut bytes = match self.lines.next()? {
                Ok(bytes) => bytes,
                Err(e) => {
                    self.error = Some(e.into());
                    return None;
                }
            };
            self.line += 1;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            match String::from_utf8(bytes) {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => return Some(line),
                Err(_) => {
                    self.error = Some(TagmetaError::InvalidInput(format!(
                        "Line {} of standard input is not valid UTF-8",
                        self.line
                    )));
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_piped_lines_skip_blanks_and_crlf() {
        let mut lines = PathLines::new(Cursor::new(b"a.png\r\n\n  \nb c.jpg\nlast.png".to_vec()));
        let read: Vec<String> = lines.by_ref().collect();
        assert_eq!(read, vec!["a.png", "b c.jpg", "last.png"]);
        assert!(lines.finish().is_ok());
    }

    #[test]
    fn test_piped_lines_stop_at_invalid_utf8() {
        let mut lines = PathLines::new(Cursor::new(b"a.png\n\xff.png\nb.png\n".to_vec()));
        let read: Vec<String> = lines.by_ref().collect();
        assert_eq!(read, vec!["a.png"]);
        assert_eq!(lines.next(), None);

        let err = lines.finish().unwrap_err();
        assert!(matches!(err, TagmetaError::InvalidInput(_)));
        assert!(err.to_string().contains("Line 2"));
    }

    #[test]
    fn test_positional_paths_are_wildcards() {
        let cli = Cli::parse_from(["tagmeta", "get-tag-metadata", "*.png", "b.jpg"]);
        let Commands::GetTagMetadata { paths } = cli.command else {
            panic!("Expected GetTagMetadata command");
        };
        assert_eq!(paths.mode(), PathMode::Wildcard);
        assert_eq!(paths.arguments(), ["*.png", "b.jpg"]);
    }

    #[test]
    fn test_literal_path_and_alias() {
        for flag in ["-l", "--literal-path", "--pspath"] {
            let cli = Cli::parse_from(["tagmeta", "get", flag, "a[1].png"]);
            let Commands::GetTagMetadata { paths } = cli.command else {
                panic!("Expected GetTagMetadata command");
            };
            assert_eq!(paths.mode(), PathMode::Literal);
            assert_eq!(paths.arguments(), ["a[1].png"]);
        }
    }

    #[test]
    fn test_path_groups_are_exclusive() {
        let result = Cli::try_parse_from(["tagmeta", "get", "a.png", "-l", "b.png"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_paths_is_allowed() {
        let cli = Cli::parse_from(["tagmeta", "get"]);
        let Commands::GetTagMetadata { paths } = cli.command else {
            panic!("Expected GetTagMetadata command");
        };
        assert!(paths.is_empty());
    }

    #[test]
    fn test_set_shortcut_flags() {
        let cli = Cli::parse_from([
            "tagmeta", "shortcut", "-o", "/links", "--what-if", "*.txt",
        ]);
        assert_eq!(cli.command.confirm_mode(), ConfirmMode::WhatIf);
        let Commands::SetShortcut {
            paths, output_path, ..
        } = cli.command
        else {
            panic!("Expected SetShortcut command");
        };
        assert_eq!(output_path, Some(PathBuf::from("/links")));
        assert_eq!(paths.arguments(), ["*.txt"]);
    }

    #[test]
    fn test_yes_overrides_confirm() {
        let cli = Cli::parse_from(["tagmeta", "set-shortcut", "--confirm", "--yes", "a"]);
        assert_eq!(cli.command.confirm_mode(), ConfirmMode::Auto);
        let cli = Cli::parse_from(["tagmeta", "set-shortcut", "--confirm", "a"]);
        assert_eq!(cli.command.confirm_mode(), ConfirmMode::Prompt);
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["tagmeta", "get", "--relative", "--format", "csv", "-q", "x"]);
        assert_eq!(cli.get_path_format(), Some(PathFormat::Relative));
        assert_eq!(cli.format, Some(OutputFormat::Csv));
        assert!(cli.quiet);
        assert!(Cli::try_parse_from(["tagmeta", "get", "--absolute", "--relative"]).is_err());
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::parse_from(["tagmeta", "config", "set", "quiet=true"]);
        assert!(matches!(
            cli.command,
            Commands::Config { command: ConfigCommands::Set { ref setting } } if setting == "quiet=true"
        ));
        let cli = Cli::parse_from(["tagmeta", "config", "path"]);
        assert!(matches!(cli.command, Commands::Config { command: ConfigCommands::Path }));
    }
}
