use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use super::{error_record, file_with_keywords, format_path, shortcut_with_target};
use crate::actions::ResultObject;
use crate::config::{OutputFormat, PathFormat};
use crate::pipeline::Sink;
use crate::report::ReportedError;

/// Display settings shared by every record of one invocation
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub path_format: PathFormat,
    pub quiet: bool,
    /// Directory relative paths are computed against
    pub base: PathBuf,
}

#[derive(Serialize)]
struct MetadataRow<'a> {
    path: String,
    name: &'a str,
    extension: &'a str,
    exists: bool,
    keywords: String,
}

#[derive(Serialize)]
struct ShortcutRow {
    path: String,
    target: String,
}

enum Records<W: Write> {
    Text(W),
    Json(W),
    Csv(csv::Writer<W>),
}

/// [`Sink`] writing results to `out` and errors to `err`
///
/// Each record is flushed as soon as it is written.
pub struct ConsoleSink<W: Write, E: Write> {
    records: Records<W>,
    err: E,
    options: OutputOptions,
}

impl ConsoleSink<io::Stdout, io::Stderr> {
    /// Sink on the process's standard streams
    #[must_use]
    pub fn stdio(options: OutputOptions) -> Self {
        Self::new(io::stdout(), io::stderr(), options)
    }
}

impl<W: Write, E: Write> ConsoleSink<W, E> {
    pub fn new(out: W, err: E, options: OutputOptions) -> Self {
        let records = match options.format {
            OutputFormat::Text => Records::Text(out),
            OutputFormat::Json => Records::Json(out),
            OutputFormat::Csv => Records::Csv(csv::Writer::from_writer(out)),
        };
        Self {
            records,
            err,
            options,
        }
    }

    /// Flush and hand back both writers
    ///
    /// # Errors
    /// Returns an I/O error if buffered CSV output cannot be flushed.
    pub fn into_inner(self) -> io::Result<(W, E)> {
        let out = match self.records {
            Records::Text(out) | Records::Json(out) => out,
            Records::Csv(writer) => writer.into_inner().map_err(|e| e.into_error())?,
        };
        Ok((out, self.err))
    }

    fn display(&self, path: &std::path::Path) -> String {
        format_path(path, self.options.path_format, &self.options.base)
    }
}

impl<W: Write, E: Write> Sink for ConsoleSink<W, E> {
    fn emit(&mut self, result: ResultObject) -> io::Result<()> {
        let quiet = self.options.quiet;
        let path = self.display(result.file().full_name());

        match &mut self.records {
            Records::Text(out) => {
                let line = match &result {
                    ResultObject::TagMetadata(meta) => {
                        file_with_keywords(&path, &meta.keywords, quiet)
                    }
                    ResultObject::Shortcut(link) => {
                        let target = format_path(
                            &link.target,
                            self.options.path_format,
                            &self.options.base,
                        );
                        shortcut_with_target(&path, &target, quiet)
                    }
                };
                writeln!(out, "{line}")?;
                out.flush()
            }
            Records::Json(out) => {
                serde_json::to_writer(&mut *out, &result)?;
                writeln!(out)?;
                out.flush()
            }
            Records::Csv(writer) => {
                match &result {
                    ResultObject::TagMetadata(meta) => writer.serialize(MetadataRow {
                        path,
                        name: meta.file.name(),
                        extension: meta.file.extension(),
                        exists: meta.file.exists(),
                        keywords: meta.keywords.join(";"),
                    }),
                    ResultObject::Shortcut(link) => writer.serialize(ShortcutRow {
                        path,
                        target: link.target.display().to_string(),
                    }),
                }
                .map_err(io::Error::other)?;
                writer.flush()
            }
        }
    }

    fn report(&mut self, error: ReportedError) -> io::Result<()> {
        writeln!(self.err, "{}", error_record(&error))?;
        self.err.flush()
    }
}
