//! `config`: read and change stored settings

use std::io::Write;
use std::path::Path;

use crate::cli::ConfigCommands;
use crate::config::TagmetaConfig;
use crate::{Result, TagmetaError};

/// Execute a config subcommand against the file at `path`
///
/// # Errors
///
/// Returns `TagmetaError` if the setting is malformed, the key or value is
/// invalid, or the configuration cannot be saved.
pub fn execute<W: Write>(
    mut config: TagmetaConfig,
    command: &ConfigCommands,
    path: &Path,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let Some((key, value)) = setting.split_once('=') else {
                return Err(TagmetaError::InvalidInput(
                    "Invalid format. Use: tagmeta config set key=value".into(),
                ));
            };
            let key = key.trim();
            let value = value.trim();

            config.set_value(key, value)?;
            config.save_to(path)?;
            if !quiet {
                writeln!(out, "Set {key} = {}", config.get_value(key).unwrap_or_default())?;
            }
        }
        ConfigCommands::Get { key } => {
            writeln!(out, "{}", config.get_value(key.trim())?)?;
        }
        ConfigCommands::Path => {
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}
