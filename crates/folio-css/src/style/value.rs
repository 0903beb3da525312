//! Declaration values.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// A style value: text, a number, or a list of transform operations.
///
/// Values come in as text from CSS and leave the cascade as numbers (points)
/// wherever a unit was resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A number, in points once resolved.
    Number(f64),
    /// Text: keywords, colors, unresolved scalars.
    Text(String),
    /// Parsed `transform`/`gradientTransform` operations.
    Transform(Vec<TransformOperation>),
}

impl StyleValue {
    /// The text, if this is a textual value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) | Self::Transform(_) => None,
        }
    }

    /// The number, if this is numeric.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) | Self::Transform(_) => None,
        }
    }

    /// Whether the value is the given keyword (ASCII case-insensitive).
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.as_str()
            .is_some_and(|text| text.trim().eq_ignore_ascii_case(keyword))
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
            Self::Transform(operations) => {
                for (i, operation) in operations.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{operation}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for StyleValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for StyleValue {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<Vec<TransformOperation>> for StyleValue {
    fn from(operations: Vec<TransformOperation>) -> Self {
        Self::Transform(operations)
    }
}

/// [CSS Transforms Level 1 § 14](https://www.w3.org/TR/css-transforms-1/#transform-functions)
///
/// The operation kinds the layout engine can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    /// Scale by (x, y).
    Scale,
    /// Translate by (x, y) points.
    Translate,
    /// Rotate by an angle in degrees.
    Rotate,
    /// Skew by (x, y) degrees.
    Skew,
    /// 2-D affine matrix (a, b, c, d, e, f).
    Matrix,
}

impl TransformKind {
    /// Number of values the operation takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Rotate => 1,
            Self::Scale | Self::Translate | Self::Skew => 2,
            Self::Matrix => 6,
        }
    }
}

/// One transform operation, `{operation, value}` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformOperation {
    /// What the operation does.
    pub operation: TransformKind,
    /// Its arguments; the length must equal [`TransformKind::arity`].
    pub value: Vec<f64>,
}

impl TransformOperation {
    /// Whether the argument count matches the operation.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.value.len() == self.operation.arity() && self.value.iter().all(|v| v.is_finite())
    }
}

impl fmt::Display for TransformOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.operation)?;
        for (i, value) in self.value.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}
