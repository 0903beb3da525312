//! [CSS Style Attributes](https://www.w3.org/TR/css-style-attr/)

use cssparser::{Parser, ParserInput, RuleBodyParser};

use super::stylesheet::DeclarationListParser;
use crate::style::DeclarationBlock;

/// Parse the contents of a `style` attribute, e.g. `font-size: 12px; color: red`.
///
/// Declarations are separated by `;` and split on their first `:`, so values
/// such as `url(http://…)` survive. Names become camelCase; empty and
/// malformed declarations are skipped. A later declaration of the same
/// property wins.
#[must_use]
pub fn parse_inline_style(text: &str) -> DeclarationBlock {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut block = DeclarationBlock::new();
    let mut decl_parser = DeclarationListParser { block: &mut block };
    for result in RuleBodyParser::new(&mut parser, &mut decl_parser) {
        let _ = result;
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn test_basic_inline_style() {
        let block = parse_inline_style("font-size: 12px; color: red");
        assert_eq!(block.get("fontSize"), Some(&StyleValue::from("12px")));
        assert_eq!(block.get("color"), Some(&StyleValue::from("red")));
    }

    #[test]
    fn test_skips_malformed_declarations() {
        let block = parse_inline_style(";; color ; margin: ; padding: 2px;");
        assert_eq!(block.len(), 1);
        assert_eq!(block.get("padding"), Some(&StyleValue::from("2px")));
    }

    #[test]
    fn test_value_keeps_colons() {
        let block = parse_inline_style("background-color: rgb(1, 2, 3); clip-path: url(a:b)");
        assert_eq!(block.get("backgroundColor"), Some(&StyleValue::from("rgb(1, 2, 3)")));
        assert_eq!(block.get("clipPath"), Some(&StyleValue::from("url(a:b)")));
    }
}
