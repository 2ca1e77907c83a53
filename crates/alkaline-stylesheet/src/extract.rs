//! Theme-name extraction from parsed stylesheets.
//!
//! Theme variants are declared as class rules using a fixed prefix
//! (`.theme-dark`, `.theme-solarized`, …). The `:root` rule marks the
//! default theme: when it shares a selector list with a theme class, that
//! class names the default; a bare `:root` falls back to the most recently
//! established default.
//!
//! Extraction is deliberately literal-minded. Only the first selector of a
//! rule is consulted for the prefix check (the root check scans the whole
//! list), names are emitted in source order, and duplicates are kept
//! verbatim.

use crate::rule::Stylesheet;

/// Class-selector prefix that marks a rule as a theme declaration.
pub const THEME_CLASS_PREFIX: &str = ".theme-";

/// Selector that marks the default (root-scope) theme rule.
pub const ROOT_SELECTOR: &str = ":root";

/// Theme name used for a bare `:root` rule before any theme class has been
/// paired with it.
pub const DEFAULT_ROOT_THEME: &str = "theme-light";

/// Extracts theme names from a parsed stylesheet, in rule source order.
pub fn extract_theme_names(sheet: &Stylesheet) -> Vec<String> {
    let mut root_theme = DEFAULT_ROOT_THEME.to_string();
    let mut names = Vec::new();

    for rule in &sheet.rules {
        let is_root = rule.selectors.iter().any(|s| s == ROOT_SELECTOR);

        if is_root {
            if let Some(class) = rule
                .selectors
                .iter()
                .find(|s| s.starts_with(THEME_CLASS_PREFIX))
            {
                root_theme = strip_dot(class);
            }
            names.push(root_theme.clone());
        } else if rule
            .selectors
            .first()
            .is_some_and(|s| s.starts_with(THEME_CLASS_PREFIX))
        {
            names.push(strip_dot(&rule.selectors[0]));
        }
    }

    names
}

fn strip_dot(selector: &str) -> String {
    selector.strip_prefix('.').unwrap_or(selector).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::StyleRule;
    use proptest::prelude::*;

    fn sheet(rules: Vec<StyleRule>) -> Stylesheet {
        Stylesheet { rules }
    }

    #[test]
    fn test_prefixed_rules_in_source_order() {
        let sheet = sheet(vec![
            StyleRule::new([".theme-dark"]),
            StyleRule::new([".theme-light"]),
            StyleRule::new([".theme-solarized"]),
        ]);

        assert_eq!(
            extract_theme_names(&sheet),
            vec!["theme-dark", "theme-light", "theme-solarized"]
        );
    }

    #[test]
    fn test_bare_root_uses_fallback_default() {
        let sheet = sheet(vec![StyleRule::new([":root"])]);
        assert_eq!(extract_theme_names(&sheet), vec!["theme-light"]);
    }

    #[test]
    fn test_root_paired_with_theme_class() {
        let sheet = sheet(vec![StyleRule::new([":root", ".theme-dark"])]);
        assert_eq!(extract_theme_names(&sheet), vec!["theme-dark"]);
    }

    #[test]
    fn test_paired_root_updates_default_for_later_bare_root() {
        let sheet = sheet(vec![
            StyleRule::new([":root", ".theme-dark"]),
            StyleRule::new([".theme-light"]),
            StyleRule::new([":root"]),
        ]);

        assert_eq!(
            extract_theme_names(&sheet),
            vec!["theme-dark", "theme-light", "theme-dark"]
        );
    }

    #[test]
    fn test_root_contributes_at_its_source_position() {
        let sheet = sheet(vec![
            StyleRule::new([".theme-dark"]),
            StyleRule::new([":root", ".theme-light"]),
        ]);

        assert_eq!(
            extract_theme_names(&sheet),
            vec!["theme-dark", "theme-light"]
        );
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let sheet = sheet(vec![
            StyleRule::new([".theme-light"]),
            StyleRule::new([".theme-light"]),
        ]);

        assert_eq!(
            extract_theme_names(&sheet),
            vec!["theme-light", "theme-light"]
        );
    }

    #[test]
    fn test_prefix_check_only_sees_first_selector() {
        // `.sidebar, .theme-dark` does not qualify: the prefix check is
        // first-selector-only, and there is no :root in the list.
        let sheet = sheet(vec![
            StyleRule::new([".sidebar", ".theme-dark"]),
            StyleRule::new([".theme-light", ".sidebar"]),
        ]);

        assert_eq!(extract_theme_names(&sheet), vec!["theme-light"]);
    }

    #[test]
    fn test_unrelated_rules_contribute_nothing() {
        let sheet = sheet(vec![
            StyleRule::new(["body"]),
            StyleRule::new([".sidebar"]),
            StyleRule::new(["h1", "h2"]),
        ]);

        assert!(extract_theme_names(&sheet).is_empty());
    }

    #[test]
    fn test_empty_stylesheet() {
        assert!(extract_theme_names(&Stylesheet::default()).is_empty());
    }

    proptest! {
        // Every `.theme-*` rule contributes exactly one name, in source
        // order, when no :root rule is present.
        #[test]
        fn test_one_name_per_prefixed_rule(suffixes in prop::collection::vec("[a-z][a-z0-9]{0,6}", 0..8)) {
            let rules = suffixes
                .iter()
                .map(|s| StyleRule::new([format!(".theme-{s}")]))
                .collect();
            let expected: Vec<String> =
                suffixes.iter().map(|s| format!("theme-{s}")).collect();

            prop_assert_eq!(extract_theme_names(&sheet(rules)), expected);
        }
    }
}
