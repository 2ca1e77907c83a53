//! Owned rule model for parsed stylesheets.

/// A parsed stylesheet: its top-level style rules, in source order.
///
/// At-rules and declaration bodies are dropped at parse time; theme
/// extraction only inspects selector lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// Top-level style rules in source order.
    pub rules: Vec<StyleRule>,
}

/// A single top-level style rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// Comma-separated selectors, trimmed, in source order.
    pub selectors: Vec<String>,
}

impl StyleRule {
    /// Creates a rule from any iterable of selector strings.
    pub fn new<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
        }
    }
}
