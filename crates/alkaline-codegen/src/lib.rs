//! Generated-artifact management for the Alkaline theme build.
//!
//! Theme names extracted from the stylesheet land in two places the site's
//! code imports:
//!
//! - a TypeScript union type (`export type ThemeNames = 'a' | 'b';`), and
//! - a JavaScript array (`export const themeNames = ['a', 'b'];`).
//!
//! The type artifact lives inside a file that may also carry hand-written
//! declarations, so its generated block is fenced by begin/end marker
//! lines and only the fenced span is ever rewritten. The names artifact is
//! owned outright and overwritten on every run.
//!
//! Updates are idempotent: regenerating from an unchanged stylesheet
//! leaves the type artifact byte-identical and skips the write.

mod artifact;
mod error;
mod region;
mod update;

pub use artifact::{
    render_names_file, render_type_block, NAMES_NOTICE, TYPES_REGION_BEGIN, TYPES_REGION_END,
};
pub use error::CodegenError;
pub use update::{update_type_artifact, write_names_artifact, WriteOutcome};
