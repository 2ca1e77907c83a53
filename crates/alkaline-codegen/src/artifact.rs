//! Rendering of the generated artifact text.
//!
//! Names are emitted exactly as extracted: in source order, duplicates
//! included. An empty name list renders an empty union/array.

/// First line of the generated region in the type artifact.
pub const TYPES_REGION_BEGIN: &str = "// -- BEGIN GENERATED THEME NAMES --";

/// Last line of the generated region in the type artifact.
pub const TYPES_REGION_END: &str = "// -- END GENERATED THEME NAMES --";

/// Notice comment leading the names artifact.
pub const NAMES_NOTICE: &str = "// This file is auto-generated. Do not edit manually.";

/// Renders the marker-delimited TypeScript union block, without a trailing
/// newline.
pub fn render_type_block(names: &[String]) -> String {
    let members = quote_list(names, " | ");
    format!("{TYPES_REGION_BEGIN}\nexport type ThemeNames = {members};\n{TYPES_REGION_END}")
}

/// Renders the full content of the names artifact.
pub fn render_names_file(names: &[String]) -> String {
    let items = quote_list(names, ", ");
    format!("{NAMES_NOTICE}\nexport const themeNames = [{items}];\n")
}

fn quote_list(names: &[String], separator: &str) -> String {
    names
        .iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_type_block_joins_members_with_pipes() {
        let block = render_type_block(&names(&["theme-light", "theme-dark"]));
        assert_eq!(
            block,
            "// -- BEGIN GENERATED THEME NAMES --\n\
             export type ThemeNames = 'theme-light' | 'theme-dark';\n\
             // -- END GENERATED THEME NAMES --"
        );
    }

    #[test]
    fn test_type_block_keeps_duplicates() {
        let block = render_type_block(&names(&["theme-light", "theme-light"]));
        assert!(block.contains("'theme-light' | 'theme-light'"));
    }

    #[test]
    fn test_names_file_content() {
        let content = render_names_file(&names(&["theme-light", "theme-dark"]));
        assert_eq!(
            content,
            "// This file is auto-generated. Do not edit manually.\n\
             export const themeNames = ['theme-light', 'theme-dark'];\n"
        );
    }

    #[test]
    fn test_single_name_has_no_separator() {
        let block = render_type_block(&names(&["theme-light"]));
        assert!(block.contains("export type ThemeNames = 'theme-light';"));
    }
}
