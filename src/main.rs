//! Tagmeta CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Keywords of every image in the current directory
//! tagmeta get-tag-metadata '*'
//!
//! # Paths with brackets, taken verbatim
//! tagmeta get -l 'shoot [raw].jpg'
//!
//! # Paths piped on stdin, one per line
//! find . -name '*.jpg' | tagmeta get --format json
//!
//! # Shortcuts to all text files, written to ./links
//! tagmeta set-shortcut -o links '*.txt'
//! tagmeta shortcut -o links --what-if '*.txt'
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/tagmeta/config.toml` on Linux); the file is only written by
//! `tagmeta config set`.
//!
//! The process exits with status 1 when any error was reported.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use colored::Colorize;
use tagmeta::{
    Result, TagmetaError,
    cli::{Cli, Commands, PathArgs, PathLines},
    commands, completions,
    config::TagmetaConfig,
    logging,
    output::{ConsoleSink, OutputOptions},
    paths::{DriveInfo, PathMode, SessionPaths},
    pipeline::ProcessSummary,
    shortcut::PlatformWriter,
    tags::ImageTagReader,
};

/// Session for this process plus the drives defined in configuration
fn build_session(config: &TagmetaConfig) -> Result<SessionPaths> {
    let mut session = SessionPaths::from_process()?;
    for (name, root) in &config.drives {
        let root = session.absolute(root);
        session = session.with_drive(DriveInfo::filesystem(name.clone(), root));
    }
    Ok(session)
}

/// Stdin reader, kept so a read failure can be reported after processing
type Piped = PathLines<io::StdinLock<'static>>;

/// Path arguments from the command line, or one per line from piped stdin
fn path_arguments<'a>(
    paths: &'a PathArgs,
    piped: &'a mut Option<Piped>,
) -> Result<Box<dyn Iterator<Item = String> + 'a>> {
    if !paths.is_empty() {
        return Ok(Box::new(paths.arguments().iter().cloned()));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(TagmetaError::InvalidInput(
            "No paths given. Pass paths as arguments or pipe them on stdin".into(),
        ));
    }

    Ok(Box::new(piped.insert(PathLines::new(stdin.lock()))))
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config_path = TagmetaConfig::config_path()?;
    let config = TagmetaConfig::load_from(&config_path)?;

    logging::init(cli.verbose || config.verbose);
    let quiet = cli.quiet || config.quiet;

    let summary: ProcessSummary = match &cli.command {
        Commands::Config { command } => {
            commands::config(config, command, &config_path, quiet, &mut io::stdout().lock())?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Completions { shell } => {
            completions::generate(*shell, &mut io::stdout().lock());
            return Ok(ExitCode::SUCCESS);
        }
        Commands::GetTagMetadata { paths } | Commands::SetShortcut { paths, .. } => {
            let session = build_session(&config)?;
            let mut sink = ConsoleSink::stdio(OutputOptions {
                format: cli.format.unwrap_or(config.output_format),
                path_format: cli.get_path_format().unwrap_or(config.path_format),
                quiet,
                base: session.cwd().to_path_buf(),
            });
            let mode: PathMode = paths.mode();
            let mut piped = None;
            let arguments = path_arguments(paths, &mut piped)?;

            let summary = if let Commands::SetShortcut { output_path, .. } = &cli.command {
                let confirm = cli.command.confirm_mode().into_surface();
                tracing::debug!("Confirmation mode: {}", cli.command.confirm_mode());
                commands::set_shortcut(
                    &session,
                    arguments,
                    mode,
                    output_path.as_deref(),
                    PlatformWriter::default(),
                    confirm,
                    &mut sink,
                )?
            } else {
                commands::get_tag_metadata(
                    &session,
                    arguments,
                    mode,
                    ImageTagReader::new(),
                    &mut sink,
                )?
            };

            if let Some(lines) = piped {
                lines.finish()?;
            }
            summary
        }
    };

    Ok(if summary.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
