//! [CSS Transforms Level 1](https://www.w3.org/TR/css-transforms-1/)
//!
//! Parses a `transform` list into the operation records the layout engine
//! takes. Angles become degrees, translations become points.

use cssparser::{ParseError, Parser, ParserInput, Token};

use super::color::angle_to_degrees;
use super::length::{ConvertOptions, StyleContext, convert_str, split_scalar};
use crate::error::StyleError;
use crate::style::{TransformKind, TransformOperation};

/// Parse a transform list such as `translate(10px, 5px) rotate(45deg)`.
///
/// `none` yields an empty list.
///
/// # Errors
///
/// Returns [`StyleError::InvalidValue`] for unknown functions, wrong
/// argument counts, or arguments that don't resolve.
pub fn parse_transform(
    text: &str,
    ctx: &StyleContext,
    opts: &ConvertOptions,
) -> Result<Vec<TransformOperation>, StyleError> {
    let invalid = || StyleError::InvalidValue {
        key: None,
        value: text.to_string(),
    };
    if text.trim().eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }

    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut operations = Vec::new();
    while !parser.is_exhausted() {
        let name = parser
            .expect_function()
            .map_err(|_| invalid())?
            .to_ascii_lowercase();
        let args = parser.parse_nested_block(raw_args).map_err(|_| invalid())?;
        let operation = build_operation(&name, &args, ctx, opts).ok_or_else(invalid)?;
        operations.push(operation);
    }

    if operations.is_empty() {
        return Err(invalid());
    }
    Ok(operations)
}

enum ArgToken {
    Separator,
    Value,
    Other,
}

/// The source text of each numeric argument, commas dropped.
fn raw_args<'i>(input: &mut Parser<'i, '_>) -> Result<Vec<&'i str>, ParseError<'i, ()>> {
    let mut args = Vec::new();
    while !input.is_exhausted() {
        let start = input.position();
        let kind = match input.next()? {
            Token::Comma => ArgToken::Separator,
            Token::Number { .. } | Token::Dimension { .. } | Token::Percentage { .. } => {
                ArgToken::Value
            }
            _ => ArgToken::Other,
        };
        match kind {
            ArgToken::Separator => {}
            ArgToken::Value => args.push(input.slice_from(start).trim()),
            ArgToken::Other => return Err(input.new_custom_error(())),
        }
    }
    Ok(args)
}

/// [§ 14 Transform Functions](https://www.w3.org/TR/css-transforms-1/#transform-functions)
fn build_operation(
    name: &str,
    args: &[&str],
    ctx: &StyleContext,
    opts: &ConvertOptions,
) -> Option<TransformOperation> {
    let number = |raw: &str| {
        split_scalar(raw)
            .filter(|(_, unit)| unit.is_empty())
            .map(|(value, _)| value)
    };
    // "<angle> | <zero>": a bare number is taken as degrees.
    let angle = |raw: &str| {
        let (value, unit) = split_scalar(raw)?;
        if unit.is_empty() {
            Some(value)
        } else {
            angle_to_degrees(value, unit)
        }
    };
    let length = |raw: &str| {
        number(raw).or_else(|| convert_str(raw, ctx, opts).ok()?.as_number())
    };

    let (operation, value) = match (name, args) {
        ("scale", [x]) => (TransformKind::Scale, vec![number(x)?; 2]),
        ("scale", [x, y]) => (TransformKind::Scale, vec![number(x)?, number(y)?]),
        ("scalex", [x]) => (TransformKind::Scale, vec![number(x)?, 1.0]),
        ("scaley", [y]) => (TransformKind::Scale, vec![1.0, number(y)?]),
        ("translate", [x]) => (TransformKind::Translate, vec![length(x)?, 0.0]),
        ("translate", [x, y]) => (TransformKind::Translate, vec![length(x)?, length(y)?]),
        ("translatex", [x]) => (TransformKind::Translate, vec![length(x)?, 0.0]),
        ("translatey", [y]) => (TransformKind::Translate, vec![0.0, length(y)?]),
        ("rotate", [a]) => (TransformKind::Rotate, vec![angle(a)?]),
        ("skew", [x]) => (TransformKind::Skew, vec![angle(x)?, 0.0]),
        ("skew", [x, y]) => (TransformKind::Skew, vec![angle(x)?, angle(y)?]),
        ("skewx", [x]) => (TransformKind::Skew, vec![angle(x)?, 0.0]),
        ("skewy", [y]) => (TransformKind::Skew, vec![0.0, angle(y)?]),
        ("matrix", [_, _, _, _, _, _]) => (
            TransformKind::Matrix,
            args.iter().map(|raw| number(raw)).collect::<Option<Vec<_>>>()?,
        ),
        _ => return None,
    };
    Some(TransformOperation { operation, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<TransformOperation>, StyleError> {
        parse_transform(text, &StyleContext::default(), &ConvertOptions::default())
    }

    fn op(operation: TransformKind, value: &[f64]) -> TransformOperation {
        TransformOperation { operation, value: value.to_vec() }
    }

    #[test]
    fn test_single_functions() {
        assert_eq!(parse("scale(2)"), Ok(vec![op(TransformKind::Scale, &[2.0, 2.0])]));
        assert_eq!(parse("rotate(0.5turn)"), Ok(vec![op(TransformKind::Rotate, &[180.0])]));
        assert_eq!(parse("skewY(10deg)"), Ok(vec![op(TransformKind::Skew, &[0.0, 10.0])]));
    }

    #[test]
    fn test_translate_converts_lengths() {
        assert_eq!(parse("translate(1in, 5)"), Ok(vec![op(TransformKind::Translate, &[72.0, 5.0])]));
        assert_eq!(parse("translateY(2pt)"), Ok(vec![op(TransformKind::Translate, &[0.0, 2.0])]));
    }

    #[test]
    fn test_lists_and_matrix() {
        let ops = parse("translateX(10pt) matrix(1, 0, 0, 1, 5, 6)").unwrap();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[1], op(TransformKind::Matrix, &[1.0, 0.0, 0.0, 1.0, 5.0, 6.0]));
        assert!(ops.iter().all(TransformOperation::is_well_formed));
    }

    #[test]
    fn test_none_and_errors() {
        assert_eq!(parse("none"), Ok(Vec::new()));
        assert!(parse("").is_err());
        assert!(parse("wobble(1)").is_err());
        assert!(parse("matrix(1, 2, 3)").is_err());
        assert!(parse("rotate(45px)").is_err());
        assert!(parse("translate(50%)").is_err());
    }
}
