//! Shell completion support for tagmeta
//!
//! Static scripts only: subcommands, flags and value hints. Path arguments
//! fall back to the shell's own file completion.

use std::io::Write;

use clap::{Command, CommandFactory};
use clap_complete::Shell;

use crate::cli::Cli;

/// Write the completion script for `shell` and the given command to `buf`
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, buf);
}

/// Write the completion script for the `tagmeta` command line to `buf`
pub fn generate<W: Write>(shell: Shell, buf: &mut W) {
    generate_static(shell, &mut Cli::command(), buf);
}
