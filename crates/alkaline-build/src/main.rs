//! `alkaline-build`: regenerate theme artifacts from the theme stylesheet.
//!
//! Invoked with no arguments as part of the site build, it reads
//! `src/styles/themes.css`, extracts the declared theme names, and rewrites
//! the generated `ThemeNames` union in `src/types/types.ts` plus the
//! `themeNames` list in `src/utils/themeNames.js`. All paths can be
//! overridden per invocation.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::Parser;
use console::style;

use alkaline_build::{BuildPaths, WriteOutcome};

/// Generate theme-name artifacts from the Alkaline theme stylesheet.
#[derive(Parser)]
#[command(name = "alkaline-build", version)]
#[command(about = "Generate theme-name artifacts from the Alkaline theme stylesheet")]
struct Cli {
    /// Stylesheet declaring the themes [default: src/styles/themes.css]
    #[arg(long, value_name = "FILE")]
    styles: Option<PathBuf>,

    /// Output file for the generated TypeScript union type
    /// [default: src/types/types.ts]
    #[arg(long, value_name = "FILE")]
    types_out: Option<PathBuf>,

    /// Output file for the generated theme-name list
    /// [default: src/utils/themeNames.js]
    #[arg(long, value_name = "FILE")]
    names_out: Option<PathBuf>,
}

impl Cli {
    fn into_paths(self) -> BuildPaths {
        let defaults = BuildPaths::default();
        BuildPaths {
            stylesheet: self.styles.unwrap_or(defaults.stylesheet),
            types_artifact: self.types_out.unwrap_or(defaults.types_artifact),
            names_artifact: self.names_out.unwrap_or(defaults.names_artifact),
        }
    }
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{} {err:#}", style("error:").red().bold());
        process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let paths = Cli::parse().into_paths();

    println!(
        "{}",
        style(format!(
            "Extracting theme names from {}",
            paths.stylesheet.display()
        ))
        .blue()
    );
    let names = alkaline_build::extract(&paths)?;
    println!(
        "{}",
        style(format!(
            "Found {} themes: {}",
            names.len(),
            names.join(", ")
        ))
        .cyan()
    );

    println!(
        "{}",
        style("Generating theme type and name artifacts").blue()
    );
    let outcomes = alkaline_build::generate(&paths, &names)?;
    report_outcome(&paths.types_artifact, outcomes.types);
    report_outcome(&paths.names_artifact, outcomes.names);

    println!("{}", style("Theme artifact generation complete").green());
    Ok(())
}

fn report_outcome(path: &Path, outcome: WriteOutcome) {
    match outcome {
        WriteOutcome::Updated => {
            println!("{}", style(format!("Updated {}", path.display())).green());
        }
        WriteOutcome::Unchanged => {
            println!(
                "{}",
                style(format!("No changes needed in {}", path.display())).yellow()
            );
        }
    }
}
