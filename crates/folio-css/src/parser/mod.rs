//! CSS text parsing: stylesheets and inline `style` attributes.

/// Stylesheet parsing per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod stylesheet;

/// Inline `style` attribute parsing.
pub mod inline;

pub use inline::parse_inline_style;
pub use stylesheet::{Stylesheet, combine_stylesheets, parse_stylesheet};
