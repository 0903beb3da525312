//! Shorthand expansion
//!
//! The layout engine only understands longhands, so every shorthand in a
//! declaration block is replaced by the longhands it stands for before
//! values are converted. Expansion repeats until nothing expandable is left:
//! `border` yields `borderWidth`, which yields `borderTopWidth` and friends.

mod tokenize;

pub use tokenize::split_parts;

use folio_common::warning::warn_once;

use crate::error::StyleError;
use crate::style::{DeclarationBlock, StyleKey, StyleValue};
use crate::validate::{is_line_style, is_line_width};
use crate::values::is_color;

/// How [`expand_block`] treats conflicts and bad shorthands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Longhands produced by expansion override longhands declared
    /// explicitly in the same block. When false the explicit ones win.
    pub prefer_expanded: bool,
    /// Fail on a shorthand that can't be expanded instead of passing it
    /// through with a warning.
    pub strict: bool,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            prefer_expanded: true,
            strict: false,
        }
    }
}

/// The result of expanding one declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Expansion {
    /// Not a shorthand; keep the declaration as it is.
    Longhand,
    /// The longhands the shorthand stands for, possibly still containing
    /// shorthands themselves.
    Expanded(DeclarationBlock),
}

const EDGE_PADDING: [StyleKey; 4] = [
    StyleKey::PaddingTop,
    StyleKey::PaddingRight,
    StyleKey::PaddingBottom,
    StyleKey::PaddingLeft,
];
const EDGE_MARGIN: [StyleKey; 4] = [
    StyleKey::MarginTop,
    StyleKey::MarginRight,
    StyleKey::MarginBottom,
    StyleKey::MarginLeft,
];
const EDGE_BORDER_WIDTH: [StyleKey; 4] = [
    StyleKey::BorderTopWidth,
    StyleKey::BorderRightWidth,
    StyleKey::BorderBottomWidth,
    StyleKey::BorderLeftWidth,
];
const EDGE_BORDER_COLOR: [StyleKey; 4] = [
    StyleKey::BorderTopColor,
    StyleKey::BorderRightColor,
    StyleKey::BorderBottomColor,
    StyleKey::BorderLeftColor,
];
const EDGE_BORDER_STYLE: [StyleKey; 4] = [
    StyleKey::BorderTopStyle,
    StyleKey::BorderRightStyle,
    StyleKey::BorderBottomStyle,
    StyleKey::BorderLeftStyle,
];
/// Corners clockwise from top-left, matching the edge order.
const CORNER_RADIUS: [StyleKey; 4] = [
    StyleKey::BorderTopLeftRadius,
    StyleKey::BorderTopRightRadius,
    StyleKey::BorderBottomRightRadius,
    StyleKey::BorderBottomLeftRadius,
];

/// Longhands of a single-side `border{Side}` shorthand: width, color, style.
type SideTriple = [StyleKey; 3];

const BORDER_TOP: SideTriple = [
    StyleKey::BorderTopWidth,
    StyleKey::BorderTopColor,
    StyleKey::BorderTopStyle,
];
const BORDER_RIGHT: SideTriple = [
    StyleKey::BorderRightWidth,
    StyleKey::BorderRightColor,
    StyleKey::BorderRightStyle,
];
const BORDER_BOTTOM: SideTriple = [
    StyleKey::BorderBottomWidth,
    StyleKey::BorderBottomColor,
    StyleKey::BorderBottomStyle,
];
const BORDER_LEFT: SideTriple = [
    StyleKey::BorderLeftWidth,
    StyleKey::BorderLeftColor,
    StyleKey::BorderLeftStyle,
];
/// `border` itself classifies into the all-sides shorthands.
const BORDER_ALL: SideTriple = [
    StyleKey::BorderWidth,
    StyleKey::BorderColor,
    StyleKey::BorderStyle,
];

const FLEX_DIRECTIONS: &[&str] = &["row", "row-reverse", "column", "column-reverse"];
const FLEX_WRAPS: &[&str] = &["nowrap", "wrap", "wrap-reverse"];

/// Expand one declaration.
///
/// Names that aren't shorthands (or aren't style keys at all) come back as
/// [`Expansion::Longhand`].
///
/// # Errors
///
/// Returns [`StyleError::ShorthandExpansionFailure`] when a shorthand's
/// parts can't be assigned to longhands.
pub fn expand(name: &str, value: &StyleValue) -> Result<Expansion, StyleError> {
    let Some(key) = StyleKey::from_css_name(name) else {
        return Ok(Expansion::Longhand);
    };
    let parts: Vec<StyleValue> = match value {
        StyleValue::Number(_) => vec![value.clone()],
        StyleValue::Text(text) => split_parts(text).into_iter().map(StyleValue::from).collect(),
        StyleValue::Transform(_) => return Ok(Expansion::Longhand),
    };
    let failure = || StyleError::ShorthandExpansionFailure {
        key: key.name().to_string(),
        value: value.to_string(),
    };

    let longhands = match key {
        StyleKey::Padding => edges(EDGE_PADDING, &parts),
        StyleKey::Margin => edges(EDGE_MARGIN, &parts),
        StyleKey::BorderWidth => edges(EDGE_BORDER_WIDTH, &parts),
        StyleKey::BorderColor => edges(EDGE_BORDER_COLOR, &parts),
        StyleKey::BorderStyle => edges(EDGE_BORDER_STYLE, &parts),
        StyleKey::BorderRadius => edges(CORNER_RADIUS, &parts),
        StyleKey::Gap => pair([StyleKey::RowGap, StyleKey::ColumnGap], &parts),
        StyleKey::ObjectPosition => match parts.as_slice() {
            [fit] => Some(vec![(StyleKey::ObjectFit, fit.clone())]),
            _ => pair([StyleKey::ObjectPositionX, StyleKey::ObjectPositionY], &parts),
        },
        StyleKey::MarginHorizontal => both([StyleKey::MarginLeft, StyleKey::MarginRight], value),
        StyleKey::MarginVertical => both([StyleKey::MarginTop, StyleKey::MarginBottom], value),
        StyleKey::PaddingHorizontal => both([StyleKey::PaddingLeft, StyleKey::PaddingRight], value),
        StyleKey::PaddingVertical => both([StyleKey::PaddingTop, StyleKey::PaddingBottom], value),
        StyleKey::Flex => flex(&parts),
        StyleKey::FlexFlow => flex_flow(&parts),
        StyleKey::Border => border(BORDER_ALL, EDGE_BORDER_WIDTH.as_slice(), &parts),
        StyleKey::BorderTop => border(BORDER_TOP, &[StyleKey::BorderTopWidth], &parts),
        StyleKey::BorderRight => border(BORDER_RIGHT, &[StyleKey::BorderRightWidth], &parts),
        StyleKey::BorderBottom => border(BORDER_BOTTOM, &[StyleKey::BorderBottomWidth], &parts),
        StyleKey::BorderLeft => border(BORDER_LEFT, &[StyleKey::BorderLeftWidth], &parts),
        _ => return Ok(Expansion::Longhand),
    };

    let longhands = longhands.ok_or_else(failure)?;
    Ok(Expansion::Expanded(
        longhands
            .into_iter()
            .map(|(key, value)| (key.name(), value))
            .collect(),
    ))
}

/// Expand every shorthand in `block`, repeatedly, until none is left.
///
/// Each produced longhand lands either over or under the explicit longhands
/// of the block, as [`ExpandOptions::prefer_expanded`] says.
///
/// # Errors
///
/// Returns [`StyleError::ShorthandExpansionFailure`] for a malformed
/// shorthand when [`ExpandOptions::strict`] is set. Otherwise the shorthand
/// is kept unexpanded and a warning is printed.
pub fn expand_block(
    block: &DeclarationBlock,
    opts: &ExpandOptions,
) -> Result<DeclarationBlock, StyleError> {
    let mut expanded = DeclarationBlock::new();
    let mut explicit = DeclarationBlock::new();
    for (name, value) in block.iter() {
        match expand(name, value) {
            Ok(Expansion::Longhand) => {
                let _ = explicit.set(name, value.clone());
            }
            Ok(Expansion::Expanded(longhands)) => {
                let longhands = expand_block(&longhands, opts)?;
                expanded.merge(&longhands);
            }
            Err(err) if opts.strict => return Err(err),
            Err(err) => {
                warn_once("expand", &format!("{err}, keeping it unexpanded"));
                let _ = explicit.set(name, value.clone());
            }
        }
    }

    if opts.prefer_expanded {
        explicit.merge(&expanded);
        Ok(explicit)
    } else {
        expanded.merge(&explicit);
        Ok(expanded)
    }
}

/// [§ 1.1 Shorthand properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
///
/// Four-sided expansion in top, right, bottom, left order:
/// one value for all sides, two for vertical/horizontal, three for
/// top/horizontal/bottom. More than four parts fall back to the first four.
fn edges(keys: [StyleKey; 4], parts: &[StyleValue]) -> Option<Vec<(StyleKey, StyleValue)>> {
    let [top, right, bottom, left] = keys;
    let values = match parts {
        [] => return None,
        [all] => [all, all, all, all],
        [vertical, horizontal] => [vertical, horizontal, vertical, horizontal],
        [t, horizontal, b] => [t, horizontal, b, horizontal],
        [t, r, b, l, ..] => [t, r, b, l],
    };
    Some(
        [top, right, bottom, left]
            .into_iter()
            .zip(values)
            .map(|(key, value)| (key, value.clone()))
            .collect(),
    )
}

/// One value for both keys, or one each. Extra parts fall back to the first two.
fn pair(keys: [StyleKey; 2], parts: &[StyleValue]) -> Option<Vec<(StyleKey, StyleValue)>> {
    let [first, second] = keys;
    match parts {
        [] => None,
        [both] => Some(vec![(first, both.clone()), (second, both.clone())]),
        [a, b, ..] => Some(vec![(first, a.clone()), (second, b.clone())]),
    }
}

fn both(keys: [StyleKey; 2], value: &StyleValue) -> Option<Vec<(StyleKey, StyleValue)>> {
    if value.as_str().is_some_and(|text| text.trim().is_empty()) {
        return None;
    }
    Some(keys.into_iter().map(|key| (key, value.clone())).collect())
}

/// [§ 7.1 The flex Shorthand](https://www.w3.org/TR/css-flexbox-1/#flex-property)
///
/// `none` is `0 0 auto` and `auto` is `1 1 auto`. A single number sets both
/// grow and shrink; the basis is `auto` unless given third.
fn flex(parts: &[StyleValue]) -> Option<Vec<(StyleKey, StyleValue)>> {
    let auto = StyleValue::from("auto");
    let (grow, shrink, basis) = match parts {
        [] => return None,
        [keyword] if keyword.is_keyword("none") => (StyleValue::from(0), StyleValue::from(0), auto),
        [keyword] if keyword.is_keyword("auto") => (StyleValue::from(1), StyleValue::from(1), auto),
        [both] => (both.clone(), both.clone(), auto),
        [grow, shrink] => (grow.clone(), shrink.clone(), auto),
        [grow, shrink, basis, ..] => (grow.clone(), shrink.clone(), basis.clone()),
    };
    Some(vec![
        (StyleKey::FlexGrow, grow),
        (StyleKey::FlexShrink, shrink),
        (StyleKey::FlexBasis, basis),
    ])
}

/// [§ 5.3 The flex-flow Shorthand](https://www.w3.org/TR/css-flexbox-1/#flex-flow-property)
fn flex_flow(parts: &[StyleValue]) -> Option<Vec<(StyleKey, StyleValue)>> {
    if parts.is_empty() {
        return None;
    }
    let mut longhands = Vec::new();
    for part in parts {
        let text = part.as_str()?.to_ascii_lowercase();
        if FLEX_DIRECTIONS.contains(&text.as_str()) {
            longhands.push((StyleKey::FlexDirection, part.clone()));
        } else if FLEX_WRAPS.contains(&text.as_str()) {
            longhands.push((StyleKey::FlexWrap, part.clone()));
        } else {
            return None;
        }
    }
    Some(longhands)
}

/// [§ 4.4 Border Shorthand Properties](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
///
/// Parts are classified by what they look like, in any order. `none` zeroes
/// the widths instead.
fn border(
    [width, color, style]: SideTriple,
    none_widths: &[StyleKey],
    parts: &[StyleValue],
) -> Option<Vec<(StyleKey, StyleValue)>> {
    if let [only] = parts
        && only.is_keyword("none")
    {
        return Some(none_widths.iter().map(|key| (*key, StyleValue::from(0))).collect());
    }
    if parts.is_empty() {
        return None;
    }
    let mut longhands = Vec::new();
    for part in parts {
        let key = match part {
            StyleValue::Number(_) => width,
            StyleValue::Text(text) if is_line_width(text) => width,
            StyleValue::Text(text) if is_line_style(text) => style,
            StyleValue::Text(text) if is_color(text) => color,
            StyleValue::Text(_) | StyleValue::Transform(_) => return None,
        };
        longhands.push((key, part.clone()));
    }
    Some(longhands)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expanded(name: &str, value: impl Into<StyleValue>) -> DeclarationBlock {
        match expand(name, &value.into()) {
            Ok(Expansion::Expanded(block)) => block,
            other => panic!("{name} did not expand: {other:?}"),
        }
    }

    #[test]
    fn test_three_part_edges() {
        let block = expanded("margin", "1px 2px 3px");
        assert_eq!(block.get("marginTop"), Some(&StyleValue::from("1px")));
        assert_eq!(block.get("marginRight"), Some(&StyleValue::from("2px")));
        assert_eq!(block.get("marginLeft"), Some(&StyleValue::from("2px")));
        assert_eq!(block.get("marginBottom"), Some(&StyleValue::from("3px")));
    }

    #[test]
    fn test_numbers_expand() {
        let block = expanded("padding", 5);
        assert_eq!(block.len(), 4);
        assert!(block.iter().all(|(_, v)| *v == StyleValue::from(5)));
    }

    #[test]
    fn test_longhands_are_not_expanded() {
        assert_eq!(expand("paddingTop", &"1px".into()), Ok(Expansion::Longhand));
        assert_eq!(expand("float", &"left".into()), Ok(Expansion::Longhand));
    }

    #[test]
    fn test_border_side_classifies_in_any_order() {
        let block = expanded("borderTop", "red dashed 2px");
        assert_eq!(block.get("borderTopColor"), Some(&StyleValue::from("red")));
        assert_eq!(block.get("borderTopStyle"), Some(&StyleValue::from("dashed")));
        assert_eq!(block.get("borderTopWidth"), Some(&StyleValue::from("2px")));
    }

    #[test]
    fn test_unclassifiable_border_fails() {
        let err = expand("border", &"1px wobbly".into()).unwrap_err();
        assert!(matches!(err, StyleError::ShorthandExpansionFailure { .. }));
    }
}
