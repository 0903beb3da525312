//! CSS Color values and parsing
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//!
//! The layout engine only understands `#RRGGBB`, so every color literal the
//! pipeline accepts is decoded into a [`ColorValue`] and written back out in
//! that form.

use cssparser::{ParseError, Parser, ParserInput, Token};
use serde::Serialize;

use super::named_colors::NAMED_COLORS;
use crate::error::StyleError;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
///
/// A decoded color literal. Alpha is kept while parsing but the layout
/// engine never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    /// Red, 0-255.
    pub r: u8,
    /// Green, 0-255.
    pub g: u8,
    /// Blue, 0-255.
    pub b: u8,
    /// Alpha, 255 opaque.
    pub a: u8,
}

impl ColorValue {
    /// Fully transparent black, the value of the `transparent` keyword.
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    /// "The syntax of a <hex-color> is a <hash-token> token whose value consists of
    /// 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        // "The three-digit RGB notation (#RGB) is converted into six-digit form (#RRGGBB)
        // by replicating digits, not by adding zeros."
        let short = |i: usize| u8::from_str_radix(&hex[i..=i].repeat(2), 16).ok();
        let long = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => Some(Self { r: short(0)?, g: short(1)?, b: short(2)?, a: 255 }),
            4 => Some(Self { r: short(0)?, g: short(1)?, b: short(2)?, a: short(3)? }),
            6 => Some(Self { r: long(0)?, g: long(2)?, b: long(4)?, a: 255 }),
            8 => Some(Self { r: long(0)?, g: long(2)?, b: long(4)?, a: long(6)? }),
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    ///
    /// Keyword lookup is ASCII case-insensitive. `transparent` is included.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        if name == "transparent" {
            return Some(Self::TRANSPARENT);
        }
        NAMED_COLORS
            .binary_search_by(|(candidate, _)| (*candidate).cmp(name.as_str()))
            .ok()
            .map(|index| {
                let [r, g, b] = NAMED_COLORS[index].1;
                Self { r, g, b, a: 255 }
            })
    }

    /// Parse any supported color literal: hex, named, `rgb()`/`rgba()` or
    /// `hsl()`/`hsla()`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.starts_with('#') {
            return Self::from_hex(text);
        }
        if text.contains('(') {
            return parse_color_function(text);
        }
        Self::from_named(text)
    }

    /// Six-digit uppercase `#RRGGBB`, the form handed to the layout engine.
    /// Alpha is discarded.
    #[must_use]
    pub fn to_rgb_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Whether `text` is a color literal the pipeline can decode.
#[must_use]
pub fn is_color(text: &str) -> bool {
    ColorValue::parse(text).is_some()
}

/// Whether `text` is written in a color syntax, decodable or not.
///
/// Used by the unit converter to decide between `InvalidColor` and
/// `InvalidValue` for a value it can't handle.
#[must_use]
pub fn looks_like_color(text: &str) -> bool {
    let text = text.trim();
    if text.starts_with('#') || is_color(text) {
        return true;
    }
    let lower = text.to_ascii_lowercase();
    ["rgb(", "rgba(", "hsl(", "hsla("]
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}

/// Convert a color literal to the layout engine's `#RRGGBB` form.
///
/// `transparent` has no opaque equivalent and is passed through as the keyword.
///
/// # Errors
///
/// Returns [`StyleError::InvalidColor`] when the literal cannot be decoded.
pub fn convert_color(text: &str) -> Result<String, StyleError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("transparent") {
        return Ok("transparent".to_string());
    }
    ColorValue::parse(text)
        .map(|color| color.to_rgb_hex())
        .ok_or_else(|| StyleError::InvalidColor {
            key: None,
            value: text.to_string(),
        })
}

/// [§ 4.1 The RGB Functions: rgb() and rgba()](https://www.w3.org/TR/css-color-4/#rgb-functions)
/// [§ 4.1 The HSL Functions: hsl() and hsla()](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
///
/// Per CSS Color 4, rgb()/rgba() and hsl()/hsla() are aliases.
fn parse_color_function(text: &str) -> Option<ColorValue> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let name = parser.expect_function().ok()?.clone();
    let args = parser.parse_nested_block(color_args).ok()?;
    parser.expect_exhausted().ok()?;

    match name.to_ascii_lowercase().as_str() {
        "rgb" | "rgba" => rgb_from_args(&args),
        "hsl" | "hsla" => hsl_from_args(&args),
        _ => None,
    }
}

/// One argument of a color function, percentages kept as 0-100.
#[derive(Debug, Clone, Copy)]
enum ColorArg {
    Number(f64),
    Percentage(f64),
}

/// Extract numeric arguments from a color function's block, skipping commas
/// and the `/` before alpha.
///
/// Space- and comma-separated forms are both accepted. Angles become
/// degrees for the hue.
fn color_args<'i>(input: &mut Parser<'i, '_>) -> Result<Vec<ColorArg>, ParseError<'i, ()>> {
    let mut args = Vec::new();
    while !input.is_exhausted() {
        let token = input.next()?.clone();
        match token {
            Token::Number { value, .. } => args.push(ColorArg::Number(f64::from(value))),
            Token::Percentage { unit_value, .. } => {
                args.push(ColorArg::Percentage(f64::from(unit_value) * 100.0));
            }
            Token::Dimension { value, ref unit, .. } => {
                let Some(degrees) = angle_to_degrees(f64::from(value), unit) else {
                    return Err(input.new_custom_error(()));
                };
                args.push(ColorArg::Number(degrees));
            }
            Token::Comma | Token::Delim('/') => {}
            _ => return Err(input.new_custom_error(())),
        }
    }
    Ok(args)
}

/// [§ 7.1 Angle units](https://www.w3.org/TR/css-values-4/#angles)
pub(crate) fn angle_to_degrees(value: f64, unit: &str) -> Option<f64> {
    match unit.to_ascii_lowercase().as_str() {
        "deg" => Some(value),
        "rad" => Some(value.to_degrees()),
        "grad" => Some(value * 0.9),
        "turn" => Some(value * 360.0),
        _ => None,
    }
}

/// "rgb() = rgb( <percentage>{3} [ / <alpha-value> ]? ) |
///          rgb( <number>{3} [ / <alpha-value> ]? )"
///
/// "Values outside these ranges are not invalid, but are clamped to the
/// ranges defined here at parsed-value time."
fn rgb_from_args(args: &[ColorArg]) -> Option<ColorValue> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    Some(ColorValue {
        r: color_channel_to_u8(args[0]),
        g: color_channel_to_u8(args[1]),
        b: color_channel_to_u8(args[2]),
        // "If omitted, it defaults to 100%."
        a: args.get(3).map_or(255, |alpha| alpha_to_u8(*alpha)),
    })
}

/// "hsl() = hsl( <hue> <percentage> <percentage> [ / <alpha-value> ]? )"
fn hsl_from_args(args: &[ColorArg]) -> Option<ColorValue> {
    if !(3..=4).contains(&args.len()) {
        return None;
    }
    let hue = match args[0] {
        ColorArg::Number(v) => v,
        ColorArg::Percentage(v) => v * 3.6,
    };
    let fraction = |arg: ColorArg| match arg {
        ColorArg::Percentage(v) | ColorArg::Number(v) => v / 100.0,
    };
    let (r, g, b) = hsl_to_rgb(hue, fraction(args[1]), fraction(args[2]));
    Some(ColorValue {
        r,
        g,
        b,
        a: args.get(3).map_or(255, |alpha| alpha_to_u8(*alpha)),
    })
}

/// Numbers are taken as 0-255, percentages as 0%-100%.
fn color_channel_to_u8(arg: ColorArg) -> u8 {
    match arg {
        ColorArg::Number(n) => channel(n),
        ColorArg::Percentage(p) => channel(p * 255.0 / 100.0),
    }
}

/// Alpha as a 0-1 number or a percentage.
fn alpha_to_u8(arg: ColorArg) -> u8 {
    match arg {
        ColorArg::Number(n) => channel(n * 255.0),
        ColorArg::Percentage(p) => channel(p * 255.0 / 100.0),
    }
}

/// Round and clamp to a byte.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// [§ 7.1 Converting HSL colors to sRGB](https://www.w3.org/TR/css-color-4/#hsl-to-rgb)
///
/// Hue in degrees, wrapped into 0-360. Saturation and lightness are 0-1.
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let hue = hue.rem_euclid(360.0);
    let saturation = saturation.clamp(0.0, 1.0);
    let lightness = lightness.clamp(0.0, 1.0);

    let chroma = (1.0 - 2.0f64.mul_add(lightness, -1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let second = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

    let (r, g, b) = if sector < 1.0 {
        (chroma, second, 0.0)
    } else if sector < 2.0 {
        (second, chroma, 0.0)
    } else if sector < 3.0 {
        (0.0, chroma, second)
    } else if sector < 4.0 {
        (0.0, second, chroma)
    } else if sector < 5.0 {
        (second, 0.0, chroma)
    } else {
        (chroma, 0.0, second)
    };

    let lift = lightness - chroma / 2.0;
    (
        channel((r + lift) * 255.0),
        channel((g + lift) * 255.0),
        channel((b + lift) * 255.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_table_is_sorted() {
        assert!(NAMED_COLORS.windows(2).all(|pair| pair[0].0 < pair[1].0));
        assert_eq!(NAMED_COLORS.len(), 148);
    }

    #[test]
    fn test_hex_forms() {
        assert_eq!(ColorValue::from_hex("#fff"), Some(ColorValue { r: 255, g: 255, b: 255, a: 255 }));
        assert_eq!(ColorValue::from_hex("#ff000080").map(|c| c.a), Some(128));
        assert_eq!(ColorValue::from_hex("#12345"), None);
        assert_eq!(ColorValue::from_hex("#ggg"), None);
    }

    #[test]
    fn test_rgb_functions() {
        assert_eq!(ColorValue::parse("rgb(255, 0, 0)").map(|c| c.to_rgb_hex()), Some("#FF0000".to_string()));
        assert_eq!(ColorValue::parse("rgba(0, 0, 255, 0.5)").map(|c| c.a), Some(128));
        assert_eq!(ColorValue::parse("rgb(0 128 0 / 50%)").map(|c| (c.g, c.a)), Some((128, 128)));
        assert_eq!(ColorValue::parse("rgb(100%, 0%, 0%)").map(|c| c.r), Some(255));
        assert_eq!(ColorValue::parse("rgb(1, 2)"), None);
        assert_eq!(ColorValue::parse("rgb(a, b, c)"), None);
    }

    #[test]
    fn test_hsl_functions() {
        assert_eq!(ColorValue::parse("hsl(0, 100%, 50%)").map(|c| c.to_rgb_hex()), Some("#FF0000".to_string()));
        assert_eq!(ColorValue::parse("hsl(120deg 100% 25%)").map(|c| c.to_rgb_hex()), Some("#008000".to_string()));
        assert_eq!(ColorValue::parse("hsla(240, 100%, 50%, 0.5)").map(|c| (c.b, c.a)), Some((255, 128)));
    }

    #[test]
    fn test_convert_color() {
        assert_eq!(convert_color("Red"), Ok("#FF0000".to_string()));
        assert_eq!(convert_color("transparent"), Ok("transparent".to_string()));
        assert!(matches!(convert_color("#zzzzzz"), Err(StyleError::InvalidColor { .. })));
    }

    #[test]
    fn test_looks_like_color() {
        assert!(looks_like_color("#zzz"));
        assert!(looks_like_color("rgb(nope)"));
        assert!(looks_like_color("rebeccapurple"));
        assert!(!looks_like_color("12px"));
        assert!(!looks_like_color("notacolor"));
    }
}
