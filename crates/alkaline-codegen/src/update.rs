//! Filesystem update semantics for the generated artifacts.

use std::fs;
use std::path::Path;

use crate::artifact::{render_names_file, render_type_block, TYPES_REGION_BEGIN, TYPES_REGION_END};
use crate::error::CodegenError;
use crate::region::locate_region;

/// Whether an artifact write changed anything on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File content changed, or the file was created.
    Updated,
    /// Existing content already matched; nothing was written.
    Unchanged,
}

/// Updates the TypeScript type artifact in place.
///
/// Only the marker-delimited region is rewritten; bytes outside it are
/// preserved exactly. A missing file is created holding just the generated
/// block, a file without markers gets the block appended after a blank
/// line, and an unchanged result skips the write entirely so the file's
/// mtime is left alone.
pub fn update_type_artifact(path: &Path, names: &[String]) -> Result<WriteOutcome, CodegenError> {
    ensure_parent_dir(path)?;
    let block = render_type_block(names);

    if !path.exists() {
        write_file(path, &format!("{block}\n"))?;
        return Ok(WriteOutcome::Updated);
    }

    let existing = fs::read_to_string(path).map_err(|source| CodegenError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let updated = match locate_region(&existing, TYPES_REGION_BEGIN, TYPES_REGION_END) {
        Ok(Some(range)) => {
            let mut next = String::with_capacity(existing.len() + block.len());
            next.push_str(&existing[..range.start]);
            next.push_str(&block);
            next.push_str(&existing[range.end..]);
            next
        }
        Ok(None) => {
            let mut next = existing.trim_end().to_string();
            if !next.is_empty() {
                next.push_str("\n\n");
            }
            next.push_str(&block);
            next.push('\n');
            next
        }
        Err(_) => {
            return Err(CodegenError::UnterminatedRegion {
                path: path.to_path_buf(),
            });
        }
    };

    if updated == existing {
        return Ok(WriteOutcome::Unchanged);
    }
    write_file(path, &updated)?;
    Ok(WriteOutcome::Updated)
}

/// Overwrites the names artifact with freshly rendered content.
///
/// The file has no hand-written parts, so there is no region logic: the
/// whole file is rewritten on every run.
pub fn write_names_artifact(path: &Path, names: &[String]) -> Result<WriteOutcome, CodegenError> {
    ensure_parent_dir(path)?;
    write_file(path, &render_names_file(names))?;
    Ok(WriteOutcome::Updated)
}

fn ensure_parent_dir(path: &Path) -> Result<(), CodegenError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| CodegenError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), CodegenError> {
    fs::write(path, content).map_err(|source| CodegenError::Write {
        path: path.to_path_buf(),
        source,
    })
}
