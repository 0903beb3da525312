//! Stylesheets as ordered selector → declaration block maps.
//!
//! Parsing is lenient: at-rules, nested rules and anything the tokenizer
//! can't make sense of are skipped. Values are kept as their source text
//! and only interpreted later by the cascade.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, StyleSheetParser, Token,
    parse_important,
};
use serde::ser::{Serialize, Serializer};

use crate::style::{DeclarationBlock, StyleValue, kebab_to_camel};

/// A parsed stylesheet.
///
/// Selectors keep the order they first appear in. A selector repeated
/// within one sheet replaces the earlier block in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    rules: Vec<(String, DeclarationBlock)>,
}

impl Stylesheet {
    /// An empty sheet.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Set the block for `selector`, replacing any earlier one.
    pub fn insert(&mut self, selector: impl Into<String>, block: DeclarationBlock) -> Option<DeclarationBlock> {
        let selector = normalize_selector(&selector.into());
        if let Some(slot) = self.rules.iter_mut().find(|(s, _)| *s == selector) {
            return Some(std::mem::replace(&mut slot.1, block));
        }
        self.rules.push((selector, block));
        None
    }

    /// The block for `selector`.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<&DeclarationBlock> {
        let selector = normalize_selector(selector);
        self.rules
            .iter()
            .find(|(s, _)| *s == selector)
            .map(|(_, block)| block)
    }

    /// Rules in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DeclarationBlock)> {
        self.rules.iter().map(|(selector, block)| (selector.as_str(), block))
    }

    /// Number of distinct selectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the sheet has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Fold `other` into this sheet: blocks for a selector already present
    /// are merged key by key with `other` winning, new selectors are appended.
    pub fn merge(&mut self, other: &Self) {
        for (selector, block) in other.iter() {
            match self.rules.iter_mut().find(|(s, _)| s == selector) {
                Some((_, existing)) => existing.merge(block),
                None => self.rules.push((selector.to_string(), block.clone())),
            }
        }
    }
}

impl Serialize for Stylesheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Combine sheets in document order, later sheets winning per key.
#[must_use]
pub fn combine_stylesheets(sheets: &[Stylesheet]) -> Stylesheet {
    sheets.iter().fold(Stylesheet::new(), |mut combined, sheet| {
        combined.merge(sheet);
        combined
    })
}

/// [§ 9 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
///
/// Parse CSS text into a [`Stylesheet`]. Property names are converted to
/// camelCase and `!important` is dropped.
#[must_use]
pub fn parse_stylesheet(css: &str) -> Stylesheet {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut sheet = Stylesheet::new();
    let mut rule_parser = TopLevelRuleParser { sheet: &mut sheet };

    for result in StyleSheetParser::new(&mut parser, &mut rule_parser) {
        // Invalid rules are skipped
        let _ = result;
    }
    sheet
}

/// Collapse whitespace and put one space after each comma of a selector list.
fn normalize_selector(selector: &str) -> String {
    selector
        .split(',')
        .map(|part| part.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join(", ")
}

struct TopLevelRuleParser<'a> {
    sheet: &'a mut Stylesheet,
}

impl<'i> AtRuleParser<'i> for TopLevelRuleParser<'_> {
    type Prelude = ();
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        _name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        Err(input.new_custom_error(()))
    }
}

impl<'i> QualifiedRuleParser<'i> for TopLevelRuleParser<'_> {
    type Prelude = String;
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let start = input.position();
        while input.next().is_ok() {}
        let selector = input.slice_from(start).trim();
        if selector.is_empty() {
            return Err(input.new_custom_error(()));
        }
        Ok(selector.to_string())
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut block = DeclarationBlock::new();
        let mut decl_parser = DeclarationListParser { block: &mut block };
        for result in RuleBodyParser::new(input, &mut decl_parser) {
            // Invalid declarations are skipped
            let _ = result;
        }
        let _ = self.sheet.insert(prelude, block);
        Ok(())
    }
}

/// Collects the declarations of one rule body into a block.
pub(super) struct DeclarationListParser<'a> {
    pub(super) block: &'a mut DeclarationBlock,
}

impl<'i> AtRuleParser<'i> for DeclarationListParser<'_> {
    type Prelude = ();
    type AtRule = ();
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for DeclarationListParser<'_> {
    type Prelude = ();
    type QualifiedRule = ();
    type Error = ();
}

impl<'i> DeclarationParser<'i> for DeclarationListParser<'_> {
    type Declaration = ();
    type Error = ();

    /// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
    ///
    /// The value is the source text up to a trailing `!important`.
    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        // Custom properties aren't style keys
        if name.starts_with("--") {
            return Err(input.new_custom_error(()));
        }
        let start = input.position();
        let mut end = start;
        loop {
            let important = input.try_parse(|i| {
                parse_important(i)?;
                i.expect_exhausted()
            });
            if important.is_ok() {
                break;
            }
            let opens_block = match input.next() {
                Ok(token) => matches!(
                    token,
                    Token::Function(_)
                        | Token::ParenthesisBlock
                        | Token::SquareBracketBlock
                        | Token::CurlyBracketBlock
                ),
                Err(_) => break,
            };
            // A block's contents are only skipped by the next `next()`, so
            // consume them here to move past the closing bracket.
            if opens_block {
                let _ = input.parse_nested_block(|nested| {
                    while nested.next().is_ok() {}
                    Ok::<_, ParseError<'i, ()>>(())
                });
            }
            end = input.position();
        }
        let value = input.slice(start..end).trim();
        if value.is_empty() {
            return Err(input.new_custom_error(()));
        }
        let _ = self
            .block
            .set(kebab_to_camel(&name.to_ascii_lowercase()), StyleValue::from(value));
        Ok(())
    }
}

impl<'i> RuleBodyItemParser<'i, (), ()> for DeclarationListParser<'_> {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_rules_in_order() {
        let sheet = parse_stylesheet("p { color: red } .note { font-size: 12px; }");
        let selectors: Vec<&str> = sheet.iter().map(|(s, _)| s).collect();
        assert_eq!(selectors, ["p", ".note"]);
        assert_eq!(
            sheet.get(".note").and_then(|b| b.get("fontSize")),
            Some(&StyleValue::from("12px"))
        );
    }

    #[test]
    fn test_important_is_stripped() {
        let sheet = parse_stylesheet("p { color: red !important; margin: 0 auto }");
        let block = sheet.get("p").unwrap();
        assert_eq!(block.get("color"), Some(&StyleValue::from("red")));
        assert_eq!(block.get("margin"), Some(&StyleValue::from("0 auto")));
    }

    #[test]
    fn test_values_ending_in_functions_are_whole() {
        let sheet = parse_stylesheet(
            "p { color: rgb(0, 128, 0); transform: rotate(45deg) scale(2); border: 1px solid hsl(0, 100%, 50%) !important }",
        );
        let block = sheet.get("p").unwrap();
        assert_eq!(block.get("color"), Some(&StyleValue::from("rgb(0, 128, 0)")));
        assert_eq!(
            block.get("transform"),
            Some(&StyleValue::from("rotate(45deg) scale(2)"))
        );
        assert_eq!(
            block.get("border"),
            Some(&StyleValue::from("1px solid hsl(0, 100%, 50%)"))
        );
    }

    #[test]
    fn test_repeated_selector_replaces_block() {
        let sheet = parse_stylesheet("p { color: red; margin: 1px } p { color: blue }");
        assert_eq!(sheet.len(), 1);
        let block = sheet.get("p").unwrap();
        assert_eq!(block.get("color"), Some(&StyleValue::from("blue")));
        assert!(!block.contains("margin"));
    }

    #[test]
    fn test_at_rules_and_garbage_are_skipped() {
        let sheet = parse_stylesheet("@media print { p { color: red } } h1 { color: green }");
        assert_eq!(sheet.len(), 1);
        assert!(sheet.get("h1").is_some());
    }

    #[test]
    fn test_selector_lists_are_normalized() {
        let sheet = parse_stylesheet("h1,h2   h3 { color: red }");
        assert!(sheet.get("h1, h2 h3").is_some());
    }
}
