//! CSS length values and conversion to points
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! The layout engine works in points (1/72 in). Every scalar that leaves the
//! cascade has been resolved against a [`StyleContext`]: absolute units by
//! fixed factors, font-relative units against the em/rem bases, and
//! viewport/percentage units against the parent box.

use folio_common::warning::warn_once;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::color::{convert_color, looks_like_color};
use crate::error::StyleError;
use crate::style::StyleValue;

/// Points per inch, the default target resolution.
pub const DEFAULT_TARGET_DPI: f64 = 72.0;

/// Base font size in points for `em` and `rem` when the context has none.
pub const DEFAULT_FONT_BASE: f64 = 18.0;

/// Millimetres per inch.
const MM_PER_INCH: f64 = 25.4;

/// Centimetres per inch.
const CM_PER_INCH: f64 = 2.54;

/// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// The units the converter knows how to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Unit {
    /// "1in = 2.54cm = 96px"
    In,
    /// Millimetres.
    Mm,
    /// Centimetres.
    Cm,
    /// Points, the layout engine's native unit.
    Pt,
    /// "1% of the height of the initial containing block"
    Vh,
    /// "1% of the width of the initial containing block"
    Vw,
    /// Pixels at the context DPI.
    Px,
    /// "Equal to the computed value of font-size on the root element."
    Rem,
    /// "Equal to the computed value of the font-size property of the element on which it is used."
    Em,
    /// Percentage of the parent dimension named by [`PctOf`].
    #[strum(serialize = "%")]
    Percent,
}

/// Which parent dimension `%` resolves against.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PctOf {
    /// Parent width.
    #[default]
    Width,
    /// Parent height.
    Height,
}

/// A number with an optional unit, as written in a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalarValue {
    /// The numeric part.
    pub value: f64,
    /// The unit, `None` for a bare number.
    pub unit: Option<Unit>,
}

impl ScalarValue {
    /// Parse `<number><unit>?` where the number is `-?\d*\.?\d+`.
    ///
    /// # Errors
    ///
    /// - [`StyleError::InvalidUnit`] when the number is followed by an unknown unit
    /// - [`StyleError::InvalidValue`] when the text is not a scalar
    pub fn parse(text: &str) -> Result<Self, StyleError> {
        let text = text.trim();
        let invalid = || StyleError::InvalidValue {
            key: None,
            value: text.to_string(),
        };
        let (value, suffix) = split_scalar(text).ok_or_else(invalid)?;
        if suffix.is_empty() {
            return Ok(Self { value, unit: None });
        }
        match suffix.parse::<Unit>() {
            Ok(unit) => Ok(Self {
                value,
                unit: Some(unit),
            }),
            Err(_) if suffix.bytes().all(|b| b.is_ascii_alphabetic()) => {
                Err(StyleError::InvalidUnit {
                    key: None,
                    unit: suffix.to_string(),
                    value: text.to_string(),
                })
            }
            Err(_) => Err(invalid()),
        }
    }
}

/// Split a scalar into its number and whatever follows it.
///
/// Returns `None` when the text doesn't start with a number.
pub(crate) fn split_scalar(text: &str) -> Option<(f64, &str)> {
    let bytes = text.as_bytes();
    let mut end = usize::from(bytes.first() == Some(&b'-'));
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut has_digits = end > digits_start;
    if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        has_digits = true;
    }
    if !has_digits {
        return None;
    }
    let value = text[..end].parse::<f64>().ok()?;
    Some((value, &text[end..]))
}

/// Resolution parameters for one node.
///
/// Built fresh for every node from its parent's resolved box and the
/// document DPI; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleContext {
    /// Resolution the source document was authored for; `px` uses it.
    pub dpi: Option<f64>,
    /// Output resolution in units per inch.
    pub target_dpi: f64,
    /// Font size in points that `em` multiplies.
    pub em_base: Option<f64>,
    /// Root font size in points that `rem` multiplies.
    pub rem_base: Option<f64>,
    /// Width of the parent box in points.
    pub parent_width: Option<f64>,
    /// Height of the parent box in points.
    pub parent_height: Option<f64>,
    /// Axis `%` resolves against.
    pub pct_of: PctOf,
}

impl Default for StyleContext {
    fn default() -> Self {
        Self {
            dpi: None,
            target_dpi: DEFAULT_TARGET_DPI,
            em_base: None,
            rem_base: None,
            parent_width: None,
            parent_height: None,
            pct_of: PctOf::Width,
        }
    }
}

impl StyleContext {
    /// Set the source DPI.
    #[must_use]
    pub const fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = Some(dpi);
        self
    }

    /// Set the target DPI.
    #[must_use]
    pub const fn with_target_dpi(mut self, target_dpi: f64) -> Self {
        self.target_dpi = target_dpi;
        self
    }

    /// Set the parent box dimensions.
    #[must_use]
    pub const fn with_parent_size(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        self.parent_width = width;
        self.parent_height = height;
        self
    }

    /// Set the em and rem bases.
    #[must_use]
    pub const fn with_font_bases(mut self, em_base: Option<f64>, rem_base: Option<f64>) -> Self {
        self.em_base = em_base;
        self.rem_base = rem_base;
        self
    }

    /// Set the `%` axis.
    #[must_use]
    pub const fn with_pct_of(mut self, pct_of: PctOf) -> Self {
        self.pct_of = pct_of;
        self
    }

    /// Context for a child of a node whose resolved box had the given
    /// width, height and font size (all in points, `None` when not fixed).
    ///
    /// DPI, target DPI, rem base and the `%` axis carry over. A child with no
    /// fixed dimension keeps nothing to resolve relative units against.
    #[must_use]
    pub const fn for_child(&self, width: Option<f64>, height: Option<f64>, font_size: Option<f64>) -> Self {
        let mut child = *self;
        child.parent_width = width;
        child.parent_height = height;
        if font_size.is_some() {
            child.em_base = font_size;
        }
        child
    }

    /// Bit pattern of every field, for use in hashed cache keys.
    pub(crate) fn fingerprint(&self) -> [u64; 7] {
        let bits = |v: Option<f64>| v.map_or(u64::MAX, f64::to_bits);
        [
            bits(self.dpi),
            self.target_dpi.to_bits(),
            bits(self.em_base),
            bits(self.rem_base),
            bits(self.parent_width),
            bits(self.parent_height),
            match self.pct_of {
                PctOf::Width => 0,
                PctOf::Height => 1,
            },
        ]
    }
}

/// Options that change how strictly [`convert`] treats bad units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    /// Pass through values with unknown or missing units (and `vw` with no
    /// parent width) instead of failing.
    pub ignore_invalid_unit: bool,
    /// `em` base when the context has none.
    pub default_em_base: f64,
    /// `rem` base when the context has none.
    pub default_rem_base: f64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            ignore_invalid_unit: false,
            default_em_base: DEFAULT_FONT_BASE,
            default_rem_base: DEFAULT_FONT_BASE,
        }
    }
}

impl ConvertOptions {
    /// Options with `ignore_invalid_unit` set.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            ignore_invalid_unit: true,
            ..Self::default()
        }
    }
}

/// Convert one declaration value to what the layout engine expects.
///
/// Colors become `#RRGGBB` text, scalars become points. See [`convert_str`].
///
/// # Errors
///
/// Any of the errors of [`convert_str`]; a bare number has no unit and
/// fails with [`StyleError::InvalidUnit`] unless `ignore_invalid_unit` is set.
pub fn convert(
    value: &StyleValue,
    ctx: &StyleContext,
    opts: &ConvertOptions,
) -> Result<StyleValue, StyleError> {
    match value {
        StyleValue::Text(text) => convert_str(text, ctx, opts),
        StyleValue::Number(number) => unresolved(*number, "", &number.to_string(), opts),
        StyleValue::Transform(_) => Err(StyleError::InvalidValue {
            key: None,
            value: value.to_string(),
        }),
    }
}

/// Convert a textual value.
///
/// # Errors
///
/// - [`StyleError::InvalidColor`] for color syntax that doesn't decode
/// - [`StyleError::InvalidValue`] for anything that isn't `<number><unit>?`
/// - [`StyleError::InvalidUnit`] for unknown or absent units (strict mode)
/// - [`StyleError::MissingBasis`] for `%`, `vh`, and `vw` (strict mode) without a parent dimension
pub fn convert_str(
    text: &str,
    ctx: &StyleContext,
    opts: &ConvertOptions,
) -> Result<StyleValue, StyleError> {
    let text = text.trim();
    if looks_like_color(text) {
        return convert_color(text).map(StyleValue::Text);
    }
    let scalar = match ScalarValue::parse(text) {
        Ok(scalar) => scalar,
        Err(StyleError::InvalidUnit { unit, .. }) => {
            let (value, _) = split_scalar(text).ok_or_else(|| StyleError::InvalidValue {
                key: None,
                value: text.to_string(),
            })?;
            return unresolved(value, &unit, text, opts);
        }
        Err(err) => return Err(err),
    };
    match scalar.unit {
        Some(unit) => to_points(scalar.value, unit, text, ctx, opts).map(StyleValue::Number),
        None => unresolved(scalar.value, "", text, opts),
    }
}

/// A scalar whose unit the converter can't resolve.
fn unresolved(
    value: f64,
    unit: &str,
    text: &str,
    opts: &ConvertOptions,
) -> Result<StyleValue, StyleError> {
    if opts.ignore_invalid_unit {
        warn_once("units", &format!("invalid unit '{unit}' in {text}, using {value}"));
        Ok(StyleValue::Number(value))
    } else {
        Err(StyleError::InvalidUnit {
            key: None,
            unit: unit.to_string(),
            value: text.to_string(),
        })
    }
}

/// A zero basis counts as absent.
fn basis(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.abs() > f64::EPSILON)
}

/// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// Resolve `value` in `unit` to points.
fn to_points(
    value: f64,
    unit: Unit,
    text: &str,
    ctx: &StyleContext,
    opts: &ConvertOptions,
) -> Result<f64, StyleError> {
    let missing = |axis: PctOf| StyleError::MissingBasis {
        key: None,
        basis: axis,
        value: text.to_string(),
    };
    let target = ctx.target_dpi;
    let points = match unit {
        Unit::In => value * target,
        Unit::Mm => value * (target / MM_PER_INCH),
        Unit::Cm => value * (target / CM_PER_INCH),
        Unit::Rem => value * basis(ctx.rem_base).unwrap_or(opts.default_rem_base),
        Unit::Em => value * basis(ctx.em_base).unwrap_or(opts.default_em_base),
        Unit::Px => {
            let source = basis(ctx.dpi).unwrap_or(target);
            (value * target / source).round()
        }
        Unit::Pt => value,
        Unit::Vh => {
            let height = basis(ctx.parent_height).ok_or_else(|| missing(PctOf::Height))?;
            value * (height / 100.0)
        }
        Unit::Vw => match basis(ctx.parent_width) {
            Some(width) => value * (width / 100.0),
            None if opts.ignore_invalid_unit => {
                warn_once("units", &format!("no parent width to resolve {text}, using {value}"));
                value
            }
            None => return Err(missing(PctOf::Width)),
        },
        Unit::Percent => {
            let reference = match ctx.pct_of {
                PctOf::Width => ctx.parent_width,
                PctOf::Height => ctx.parent_height,
            };
            let reference = basis(reference).ok_or_else(|| missing(ctx.pct_of))?;
            value / 100.0 * reference
        }
    };
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_scalar() {
        assert_eq!(split_scalar("12px"), Some((12.0, "px")));
        assert_eq!(split_scalar("-.5em"), Some((-0.5, "em")));
        assert_eq!(split_scalar("3.25"), Some((3.25, "")));
        assert_eq!(split_scalar("5."), Some((5.0, ".")));
        assert_eq!(split_scalar("px"), None);
        assert_eq!(split_scalar("-"), None);
        assert_eq!(split_scalar("+5"), None);
    }

    #[test]
    fn test_parse_scalar() {
        assert_eq!(
            ScalarValue::parse("50%"),
            Ok(ScalarValue { value: 50.0, unit: Some(Unit::Percent) })
        );
        assert_eq!(ScalarValue::parse("7"), Ok(ScalarValue { value: 7.0, unit: None }));
        assert!(matches!(ScalarValue::parse("12xx"), Err(StyleError::InvalidUnit { unit, .. }) if unit == "xx"));
        assert!(matches!(ScalarValue::parse("5."), Err(StyleError::InvalidValue { .. })));
        assert!(matches!(ScalarValue::parse("auto"), Err(StyleError::InvalidValue { .. })));
    }

    #[test]
    fn test_zero_basis_counts_as_absent() {
        let ctx = StyleContext::default().with_parent_size(Some(0.0), None);
        let result = convert_str("50%", &ctx, &ConvertOptions::default());
        assert!(matches!(result, Err(StyleError::MissingBasis { basis: PctOf::Width, .. })));
    }

    #[test]
    fn test_for_child_carries_dpi_and_replaces_box() {
        let parent = StyleContext::default()
            .with_dpi(96.0)
            .with_parent_size(Some(500.0), Some(800.0))
            .with_font_bases(Some(12.0), Some(10.0));
        let child = parent.for_child(Some(200.0), None, None);
        assert_eq!(child.dpi, Some(96.0));
        assert_eq!(child.parent_width, Some(200.0));
        assert_eq!(child.parent_height, None);
        assert_eq!(child.em_base, Some(12.0));
        assert_eq!(parent.for_child(None, None, Some(9.0)).em_base, Some(9.0));
    }
}
