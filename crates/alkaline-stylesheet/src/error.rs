//! Error types for stylesheet loading and parsing.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while loading or parsing a theme stylesheet.
#[derive(Debug, Error)]
pub enum StylesheetError {
    /// The stylesheet file could not be read.
    #[error("failed to read stylesheet {}: {source}", .path.display())]
    Read {
        /// Path of the stylesheet that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The stylesheet content is not valid CSS.
    #[error("failed to parse stylesheet{}: {message}", in_file(.path))]
    Parse {
        /// Source file path, when parsing file content rather than a raw
        /// string.
        path: Option<PathBuf>,
        /// Description of the syntax problem, with source location.
        message: String,
    },
}

impl StylesheetError {
    /// Attaches a source path to a parse error produced from raw text.
    pub(crate) fn with_path(self, path: &Path) -> Self {
        match self {
            StylesheetError::Parse { message, .. } => StylesheetError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        }
    }
}

fn in_file(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_display_includes_path() {
        let err = StylesheetError::Read {
            path: PathBuf::from("src/styles/themes.css"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let display = err.to_string();
        assert!(display.contains("src/styles/themes.css"));
        assert!(display.contains("no such file"));
    }

    #[test]
    fn test_parse_display_without_path() {
        let err = StylesheetError::Parse {
            path: None,
            message: "invalid rule at line 3, column 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse stylesheet: invalid rule at line 3, column 1"
        );
    }

    #[test]
    fn test_with_path_fills_parse_location() {
        let err = StylesheetError::Parse {
            path: None,
            message: "bad".to_string(),
        };
        let err = err.with_path(Path::new("themes.css"));
        assert!(err.to_string().contains("themes.css"));
    }
}
