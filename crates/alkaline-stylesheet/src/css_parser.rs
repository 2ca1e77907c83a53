//! CSS stylesheet parsing.
//!
//! Theme declarations live in ordinary CSS, so the parser needs nothing
//! beyond the top-level rule structure: for each style rule, the selector
//! list; everything else (declaration bodies, at-rules and their nested
//! contents) is consumed and discarded.
//!
//! Selector strings are captured verbatim from the source (split on
//! commas and trimmed, but otherwise unnormalized) because the extraction
//! step matches on literal prefixes (`.theme-`) and literal selectors
//! (`:root`).

use std::fs;
use std::path::Path;

use cssparser::{
    AtRuleParser, CowRcStr, ParseError, Parser, ParserInput, ParserState, QualifiedRuleParser,
};

use crate::error::StylesheetError;
use crate::rule::{StyleRule, Stylesheet};

/// Parses raw CSS text into an owned list of top-level style rules.
///
/// The first rule-level syntax error aborts the parse; no partial
/// stylesheet is returned. At-rules are skipped silently, not treated as
/// errors.
pub fn parse_stylesheet(css: &str) -> Result<Stylesheet, StylesheetError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let mut collector = RuleCollector { rules: Vec::new() };

    let rule_list = cssparser::StyleSheetParser::new(&mut parser, &mut collector);
    for result in rule_list {
        if let Err((err, _slice)) = result {
            return Err(StylesheetError::Parse {
                path: None,
                message: format!(
                    "invalid rule at line {}, column {}",
                    err.location.line + 1,
                    err.location.column
                ),
            });
        }
    }

    Ok(Stylesheet {
        rules: collector.rules,
    })
}

/// Reads and parses a stylesheet file.
pub fn load_stylesheet(path: &Path) -> Result<Stylesheet, StylesheetError> {
    let css = fs::read_to_string(path).map_err(|source| StylesheetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_stylesheet(&css).map_err(|err| err.with_path(path))
}

struct RuleCollector {
    rules: Vec<StyleRule>,
}

impl<'i> QualifiedRuleParser<'i> for RuleCollector {
    type Prelude = Vec<String>;
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let start = input.position();
        while input.next().is_ok() {}

        let selectors: Vec<String> = input
            .slice_from(start)
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if selectors.is_empty() {
            return Err(input.new_custom_error::<(), ()>(()));
        }
        Ok(selectors)
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        // Declarations are irrelevant to extraction; drain the block.
        while input.next().is_ok() {}
        self.rules.push(StyleRule { selectors: prelude });
        Ok(())
    }
}

// At-rules are consumed and dropped. Nested style rules inside @media are
// intentionally NOT collected: only top-level rules declare themes.
impl<'i> AtRuleParser<'i> for RuleCollector {
    type Prelude = ();
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        _name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        while input.next().is_ok() {}
        Ok(())
    }

    fn rule_without_block(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        Ok(())
    }

    fn parse_block<'t>(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        while input.next().is_ok() {}
        Ok(())
    }
}
