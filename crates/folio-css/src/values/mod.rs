//! Value types and conversion
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS Transforms Level 1](https://www.w3.org/TR/css-transforms-1/)

mod color;
mod length;
mod named_colors;
mod transform;

pub use color::{ColorValue, convert_color, is_color, looks_like_color};
pub use length::{
    ConvertOptions, DEFAULT_FONT_BASE, DEFAULT_TARGET_DPI, PctOf, ScalarValue, StyleContext, Unit,
    convert, convert_str,
};
pub use transform::parse_transform;

pub(crate) use length::split_scalar;
