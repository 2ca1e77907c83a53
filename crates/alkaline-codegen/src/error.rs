//! Error types for artifact generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while writing generated artifacts.
///
/// Every variant carries the path it failed on; I/O variants keep the
/// underlying error as their source.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// An artifact's parent directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An existing artifact could not be read back for region replacement.
    #[error("failed to read artifact {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An artifact could not be written.
    #[error("failed to write artifact {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A generated region has a begin marker without an end marker (or the
    /// reverse). Rewriting anyway could destroy hand-written content, so
    /// nothing is written.
    #[error("artifact {} has an incomplete generated-region marker pair", .path.display())]
    UnterminatedRegion { path: PathBuf },
}
