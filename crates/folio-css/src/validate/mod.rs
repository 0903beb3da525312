//! Style key and value validation
//!
//! The layout engine accepts a closed set of keys, each with its own value
//! grammar. The cascade asks the validator about every declaration whose
//! value the unit converter could not resolve: an accepted value is passed
//! through as written, a coercible one is replaced (numeric strings become
//! numbers), and a rejected one goes to the invalid-value policy.

mod grammar;

use grammar::{FONT_WEIGHT, Grammar, LINE_STYLE, LINE_WIDTH};

use crate::style::{StyleKey, StyleValue};
use crate::values::{ConvertOptions, StyleContext, is_color, parse_transform, split_scalar};

/// Units the validator's scalar grammar allows.
const SCALAR_UNITS: &[&str] = &[
    "px", "em", "rem", "%", "vh", "vw", "vmin", "vmax", "cm", "mm", "in", "pt", "pc",
];

/// How a value relates to its key's grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Validity {
    /// Valid as written.
    Accepted,
    /// Valid once replaced by the contained value.
    Coercible(StyleValue),
    /// Not valid for the key.
    Rejected,
}

impl Validity {
    /// Whether the value may be kept, as is or coerced.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Rejected)
    }

    /// The value to keep: the coerced value, `original` if accepted, `None` if rejected.
    #[must_use]
    pub fn into_value(self, original: &StyleValue) -> Option<StyleValue> {
        match self {
            Self::Accepted => Some(original.clone()),
            Self::Coercible(value) => Some(value),
            Self::Rejected => None,
        }
    }
}

/// Whether `key` names a style key, in camelCase or kebab-case.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    StyleKey::from_css_name(key).is_some()
}

/// Whether `value` is valid for `key`, possibly after coercion.
#[must_use]
pub fn is_valid_value(key: StyleKey, value: &StyleValue) -> bool {
    classify(key, value).is_valid()
}

/// Classify `value` against the grammar of `key`.
#[must_use]
pub fn classify(key: StyleKey, value: &StyleValue) -> Validity {
    let grammar = Grammar::of(key);
    match value {
        StyleValue::Number(number) => {
            if number.is_finite() && grammar.accepts_number() && weight_in_range(grammar, *number) {
                Validity::Accepted
            } else {
                Validity::Rejected
            }
        }
        StyleValue::Transform(operations) => {
            if grammar == Grammar::Transform && operations.iter().all(|op| op.is_well_formed()) {
                Validity::Accepted
            } else {
                Validity::Rejected
            }
        }
        StyleValue::Text(text) => classify_text(grammar, text.trim()),
    }
}

/// Classify a named key; unknown keys are rejected.
#[must_use]
pub fn classify_named(key: &str, value: &StyleValue) -> Validity {
    StyleKey::from_css_name(key).map_or(Validity::Rejected, |key| classify(key, value))
}

fn classify_text(grammar: Grammar, text: &str) -> Validity {
    if text.is_empty() {
        return Validity::Rejected;
    }
    if grammar.accepts_number()
        && let Some(number) = plain_number(text)
    {
        if !weight_in_range(grammar, number) {
            return Validity::Rejected;
        }
        return Validity::Coercible(StyleValue::Number(number));
    }

    let valid = match grammar {
        Grammar::Keyword(words) => {
            let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
            words.iter().any(|word| word.eq_ignore_ascii_case(&normalized))
        }
        Grammar::Constant(word) => word.eq_ignore_ascii_case(text),
        Grammar::Length { signed, auto } => {
            is_length(text, signed) || (auto && text.eq_ignore_ascii_case("auto"))
        }
        Grammar::LineWidth => is_line_width(text),
        Grammar::Color => is_color(text),
        Grammar::Paint => {
            is_color(text)
                || text.eq_ignore_ascii_case("none")
                || (text.starts_with("url(") && text.ends_with(')'))
        }
        Grammar::FontWeight => FONT_WEIGHT.iter().any(|w| w.eq_ignore_ascii_case(text)),
        Grammar::Number => false,
        Grammar::Transform => {
            parse_transform(text, &StyleContext::default(), &ConvertOptions::default()).is_ok()
        }
        Grammar::Text | Grammar::Any => true,
    };
    if valid {
        Validity::Accepted
    } else {
        Validity::Rejected
    }
}

/// Numeric font weights run from 100 to 900.
fn weight_in_range(grammar: Grammar, number: f64) -> bool {
    grammar != Grammar::FontWeight || (100.0..=900.0).contains(&number)
}

/// A number with nothing after it.
fn plain_number(text: &str) -> Option<f64> {
    split_scalar(text)
        .filter(|(_, rest)| rest.is_empty())
        .map(|(value, _)| value)
}

/// `^[0-9]+(\.[0-9]+)?(px|em|rem|%|vh|vw|vmin|vmax|cm|mm|in|pt|pc)?$`
#[must_use]
pub fn is_scalar(text: &str) -> bool {
    let digits = |s: &str| s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let integer = digits(text);
    if integer == 0 {
        return false;
    }
    let mut rest = &text[integer..];
    if let Some(fraction) = rest.strip_prefix('.') {
        let end = digits(fraction);
        if end == 0 {
            return false;
        }
        rest = &fraction[end..];
    }
    rest.is_empty() || SCALAR_UNITS.iter().any(|unit| unit.eq_ignore_ascii_case(rest))
}

/// A scalar, optionally negative.
fn is_length(text: &str, signed: bool) -> bool {
    is_scalar(text) || (signed && text.strip_prefix('-').is_some_and(is_scalar))
}

/// [`<line-style>`](https://www.w3.org/TR/css-backgrounds-3/#typedef-line-style)
#[must_use]
pub fn is_line_style(text: &str) -> bool {
    LINE_STYLE.contains(&text.trim().to_ascii_lowercase().as_str())
}

/// [`<line-width>`](https://www.w3.org/TR/css-backgrounds-3/#typedef-line-width):
/// a scalar or `thin`/`medium`/`thick`.
#[must_use]
pub fn is_line_width(text: &str) -> bool {
    let text = text.trim();
    is_scalar(text) || LINE_WIDTH.contains(&text.to_ascii_lowercase().as_str())
}
