//! Output formatting for CLI display
//!
//! Line formatting for result objects and reported errors, plus the
//! [`ConsoleSink`] that streams them to stdout and stderr.

mod sink;

pub use sink::{ConsoleSink, OutputOptions};

use std::path::Path;

use colored::Colorize;

use crate::config::PathFormat;
use crate::report::ReportedError;

/// Format a path according to the display mode, relative to `base`
#[must_use]
pub fn format_path(path: &Path, format: PathFormat, base: &Path) -> String {
    match format {
        PathFormat::Absolute => path.display().to_string(),
        PathFormat::Relative => {
            if let Ok(rel_path) = path.strip_prefix(base)
                && !rel_path.as_os_str().is_empty()
            {
                return rel_path.display().to_string();
            }
            path.display().to_string()
        }
    }
}

/// Format an image with its keywords for display
#[must_use]
pub fn file_with_keywords(path: &str, keywords: &[String], quiet: bool) -> String {
    if quiet {
        path.to_string()
    } else if keywords.is_empty() {
        format!("  {path} (no keywords)")
    } else {
        format!("  {} [{}]", path, keywords.join(", "))
    }
}

/// Format a created shortcut for display
#[must_use]
pub fn shortcut_with_target(link: &str, target: &str, quiet: bool) -> String {
    if quiet {
        link.to_string()
    } else {
        format!("  {link} -> {target}")
    }
}

/// Two-line rendering of a reported error
#[must_use]
pub fn error_record(error: &ReportedError) -> String {
    let headline = format!("{}: {}", error.kind(), error.message());
    format!(
        "{}\n  + CategoryInfo: {} ({})",
        headline.red(),
        error.category(),
        error.target()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::PathError;
    use crate::report::{ErrorKind, ErrorTarget};

    #[test]
    fn test_format_path_relative() {
        let base = Path::new("/photos");
        let path = Path::new("/photos/2024/a.png");
        assert_eq!(format_path(path, PathFormat::Relative, base), "2024/a.png");
        assert_eq!(format_path(path, PathFormat::Absolute, base), "/photos/2024/a.png");
        assert_eq!(
            format_path(Path::new("/elsewhere/b.png"), PathFormat::Relative, base),
            "/elsewhere/b.png"
        );
    }

    #[test]
    fn test_keyword_lines() {
        let kw = vec!["sun".to_string(), "sea".to_string()];
        assert_eq!(file_with_keywords("a.png", &kw, false), "  a.png [sun, sea]");
        assert_eq!(file_with_keywords("a.png", &[], false), "  a.png (no keywords)");
        assert_eq!(file_with_keywords("a.png", &kw, true), "a.png");
    }

    #[test]
    fn test_shortcut_line() {
        assert_eq!(shortcut_with_target("d/a.lnk", "a", false), "  d/a.lnk -> a");
        assert_eq!(shortcut_with_target("d/a.lnk", "a", true), "d/a.lnk");
    }

    #[test]
    fn test_error_record_shape() {
        colored::control::set_override(false);
        let err = ReportedError::new(
            ErrorKind::ItemNotFound,
            ErrorTarget::Argument("x.png".into()),
            PathError::ItemNotFound {
                path: "/d/x.png".into(),
            },
        );
        assert_eq!(
            error_record(&err),
            "ItemNotFound: Cannot find path '/d/x.png' because it does not exist.\n  + CategoryInfo: ObjectNotFound (x.png)"
        );
    }
}
