//! Build pipeline for the Alkaline theme artifacts.
//!
//! One-shot batch run: read the theme stylesheet, extract the declared
//! theme names, regenerate the TypeScript type artifact and the JavaScript
//! name-list artifact. The pipeline is strictly sequential; the first
//! failure aborts the remaining steps, and nothing is retried.
//!
//! The two artifact writes are best-effort, not transactional: a failure
//! writing the names artifact leaves an already-updated type artifact in
//! place.

use std::path::PathBuf;

use alkaline_codegen::{update_type_artifact, write_names_artifact, CodegenError};
use alkaline_stylesheet::{extract_theme_names, load_stylesheet, StylesheetError};
use thiserror::Error;

pub use alkaline_codegen::WriteOutcome;

/// Input and output locations for one build run.
#[derive(Debug, Clone)]
pub struct BuildPaths {
    /// Stylesheet declaring the themes.
    pub stylesheet: PathBuf,
    /// TypeScript file holding the generated `ThemeNames` union.
    pub types_artifact: PathBuf,
    /// JavaScript file holding the generated name list.
    pub names_artifact: PathBuf,
}

impl Default for BuildPaths {
    fn default() -> Self {
        Self {
            stylesheet: PathBuf::from("src/styles/themes.css"),
            types_artifact: PathBuf::from("src/types/types.ts"),
            names_artifact: PathBuf::from("src/utils/themeNames.js"),
        }
    }
}

/// Error from any step of the pipeline.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Reading or parsing the stylesheet failed.
    #[error(transparent)]
    Stylesheet(#[from] StylesheetError),

    /// Writing an artifact failed.
    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

/// Per-artifact outcomes of the generation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactOutcomes {
    /// Outcome for the type artifact.
    pub types: WriteOutcome,
    /// Outcome for the names artifact.
    pub names: WriteOutcome,
}

/// Everything a completed run produced.
#[derive(Debug)]
pub struct BuildReport {
    /// Extracted theme names, in stylesheet order.
    pub theme_names: Vec<String>,
    /// Outcomes of the artifact writes.
    pub outcomes: ArtifactOutcomes,
}

/// Reads and parses the stylesheet, returning theme names in source order.
pub fn extract(paths: &BuildPaths) -> Result<Vec<String>, StylesheetError> {
    let sheet = load_stylesheet(&paths.stylesheet)?;
    Ok(extract_theme_names(&sheet))
}

/// Regenerates both artifacts from an extracted name list.
///
/// The type artifact is updated first; the names artifact is always
/// rewritten whole.
pub fn generate(paths: &BuildPaths, names: &[String]) -> Result<ArtifactOutcomes, CodegenError> {
    let types = update_type_artifact(&paths.types_artifact, names)?;
    let names_outcome = write_names_artifact(&paths.names_artifact, names)?;
    Ok(ArtifactOutcomes {
        types,
        names: names_outcome,
    })
}

/// Runs the whole pipeline: extract, then generate.
pub fn run(paths: &BuildPaths) -> Result<BuildReport, BuildError> {
    let theme_names = extract(paths)?;
    let outcomes = generate(paths, &theme_names)?;
    Ok(BuildReport {
        theme_names,
        outcomes,
    })
}
