//! Stylesheet parsing and theme-name extraction for the Alkaline theme.
//!
//! The Alkaline site declares its visual themes directly in CSS: each theme
//! is a class rule with a fixed prefix (`.theme-dark { … }`), and the
//! `:root` rule marks which theme is active by default. This crate parses
//! that stylesheet into an owned rule list and produces the ordered list of
//! theme names that the code generator turns into TypeScript/JavaScript
//! artifacts.
//!
//! Parsing sits on `cssparser`, so comments, escapes, and odd-but-valid
//! syntax are handled by a real CSS tokenizer rather than ad-hoc string
//! matching. Only top-level style rules are collected; at-rules such as
//! `@media` are skipped wholesale, since nested rules never declare themes.
//!
//! # Example
//!
//! ```rust
//! use alkaline_stylesheet::{extract_theme_names, parse_stylesheet};
//!
//! let sheet = parse_stylesheet(
//!     r#"
//!     :root, .theme-light { --bg: white; }
//!     .theme-dark { --bg: black; }
//!     "#,
//! )
//! .unwrap();
//!
//! let names = extract_theme_names(&sheet);
//! assert_eq!(names, vec!["theme-light", "theme-dark"]);
//! ```

mod css_parser;
mod error;
mod extract;
mod rule;

pub use css_parser::{load_stylesheet, parse_stylesheet};
pub use error::StylesheetError;
pub use extract::{extract_theme_names, DEFAULT_ROOT_THEME, ROOT_SELECTOR, THEME_CLASS_PREFIX};
pub use rule::{StyleRule, Stylesheet};
