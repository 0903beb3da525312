//! List item markers
//!
//! [CSS Lists and Counters Level 3](https://www.w3.org/TR/css-lists-3/)

use strum_macros::{Display, EnumString};

use crate::style::{DeclarationBlock, StyleValue};

/// [§ 3.2 list-style-type](https://www.w3.org/TR/css-lists-3/#text-markers)
///
/// The marker styles the layout engine can draw. Unknown names fall back to
/// [`ListStyleType::Decimal`] in ordered lists and [`ListStyleType::Disc`]
/// in unordered ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ListStyleType {
    /// 1, 2, 3
    Decimal,
    /// 01, 02, 03
    DecimalLeadingZero,
    /// a, b, c
    #[strum(serialize = "lower-alpha", serialize = "lower-latin")]
    LowerAlpha,
    /// A, B, C
    #[strum(serialize = "upper-alpha", serialize = "upper-latin")]
    UpperAlpha,
    /// i, ii, iii
    LowerRoman,
    /// I, II, III
    UpperRoman,
    /// •
    Disc,
    /// ○
    Circle,
    /// ■
    Square,
    /// ▼
    DisclosureOpen,
    /// ▶
    DisclosureClosed,
    /// –
    Dash,
    /// ◆
    Diamond,
    /// ➤
    Arrow,
    /// ✓
    Checkmark,
    /// ★
    Star,
    /// □
    HollowSquare,
    /// ▸
    CustomTriangle,
}

/// What goes in the bullet column of a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMarker {
    /// Marker text such as `3.` or `•`.
    Text(String),
    /// An image marker from `url(...)`.
    Image(String),
}

/// The marker for one list item.
///
/// `style_type` is the item's `list-style-type` (or `list-style`) text,
/// falling back to its list's. `none` anywhere in it means no marker.
#[must_use]
pub fn list_marker(style_type: &str, ordered: bool, number: i64) -> Option<ListMarker> {
    let style_type = style_type.trim();
    if style_type.split_whitespace().any(|word| word.eq_ignore_ascii_case("none")) {
        return None;
    }
    if let Some(start) = style_type.find("url(") {
        let rest = &style_type[start + 4..];
        let src = rest.split(')').next().unwrap_or_default();
        return Some(ListMarker::Image(src.replace(['"', '\''], "")));
    }
    if ordered {
        Some(ListMarker::Text(format!("{}.", ordered_marker(number, style_type))))
    } else {
        Some(ListMarker::Text(unordered_marker(style_type).to_string()))
    }
}

/// Marker text for item `number` of an ordered list.
///
/// Numbers below 1 are clamped to 1. Alphabetic markers go `z`, `aa`, `ab`.
#[must_use]
pub fn ordered_marker(number: i64, style_type: &str) -> String {
    let n = number.max(1).unsigned_abs();
    match style_type.parse().unwrap_or(ListStyleType::Decimal) {
        ListStyleType::DecimalLeadingZero => format!("{n:02}"),
        ListStyleType::LowerAlpha => alphabetic(n, b'a'),
        ListStyleType::UpperAlpha => alphabetic(n, b'A'),
        ListStyleType::LowerRoman => roman(n).to_ascii_lowercase(),
        ListStyleType::UpperRoman => roman(n),
        _ => n.to_string(),
    }
}

/// Glyph for an unordered list item.
#[must_use]
pub fn unordered_marker(style_type: &str) -> char {
    match style_type.parse().unwrap_or(ListStyleType::Disc) {
        ListStyleType::Circle => '○',
        ListStyleType::Square => '■',
        ListStyleType::DisclosureOpen => '▼',
        ListStyleType::DisclosureClosed => '▶',
        ListStyleType::Dash => '–',
        ListStyleType::Diamond => '◆',
        ListStyleType::Arrow => '➤',
        ListStyleType::Checkmark => '✓',
        ListStyleType::Star => '★',
        ListStyleType::HollowSquare => '□',
        ListStyleType::CustomTriangle => '▸',
        _ => '•',
    }
}

/// [§ 4.4.2 The ol element](https://html.spec.whatwg.org/multipage/grouping-content.html#ordinal-value)
///
/// The ordinal of an item given the list's `start` and the `value`
/// attributes of the items up to and including it. An item's own `value`
/// wins; otherwise it counts on from the item before it.
#[must_use]
pub fn item_number(start: i64, values: &[Option<i64>]) -> i64 {
    values.iter().fold(start - 1, |previous, value| value.unwrap_or(previous + 1))
}

/// Style of the bullet column of a list item.
#[must_use]
pub fn bullet_style() -> DeclarationBlock {
    [
        ("width", StyleValue::from(30)),
        ("textAlign", StyleValue::from("right")),
        ("flexShrink", StyleValue::from(0)),
        ("flexGrow", StyleValue::from(0)),
        ("paddingRight", StyleValue::from(5)),
    ]
    .into_iter()
    .collect()
}

/// Style of the content column of a list item.
#[must_use]
pub fn content_style() -> DeclarationBlock {
    [
        ("textAlign", StyleValue::from("left")),
        ("flexGrow", StyleValue::from(1)),
        ("flexBasis", StyleValue::from(1)),
    ]
    .into_iter()
    .collect()
}

fn alphabetic(n: u64, base: u8) -> String {
    let mut letters = Vec::new();
    let mut n = n;
    while n > 0 {
        let digit = u8::try_from((n - 1) % 26).unwrap_or_default();
        letters.push(char::from(base + digit));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

fn roman(mut n: u64) -> String {
    const NUMERALS: [(u64, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_markers() {
        assert_eq!(ordered_marker(3, "decimal"), "3");
        assert_eq!(ordered_marker(7, "decimal-leading-zero"), "07");
        assert_eq!(ordered_marker(12, "decimal-leading-zero"), "12");
        assert_eq!(ordered_marker(2, "lower-latin"), "b");
        assert_eq!(ordered_marker(27, "upper-alpha"), "AA");
        assert_eq!(ordered_marker(52, "lower-alpha"), "az");
        assert_eq!(ordered_marker(1994, "upper-roman"), "MCMXCIV");
        assert_eq!(ordered_marker(4, "lower-roman"), "iv");
        assert_eq!(ordered_marker(0, "bogus"), "1");
    }

    #[test]
    fn test_unordered_markers() {
        assert_eq!(unordered_marker("square"), '■');
        assert_eq!(unordered_marker("STAR"), '★');
        assert_eq!(unordered_marker(""), '•');
    }

    #[test]
    fn test_list_marker() {
        assert_eq!(list_marker("none", true, 1), None);
        assert_eq!(list_marker("square inside none", false, 1), None);
        assert_eq!(list_marker("upper-roman", true, 9), Some(ListMarker::Text("IX.".to_string())));
        assert_eq!(
            list_marker("url('dot.png')", false, 1),
            Some(ListMarker::Image("dot.png".to_string()))
        );
    }

    #[test]
    fn test_item_number() {
        assert_eq!(item_number(1, &[None, None, None]), 3);
        assert_eq!(item_number(5, &[None]), 5);
        assert_eq!(item_number(1, &[None, Some(10), None]), 11);
        assert_eq!(item_number(1, &[None, Some(10), Some(2)]), 2);
    }
}
