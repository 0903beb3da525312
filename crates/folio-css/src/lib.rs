//! CSS style resolution for an HTML-to-PDF layout engine.
//!
//! The layout engine takes flat, flexbox-flavored style maps in points.
//! This crate turns CSS as found in HTML documents into those maps.
//!
//! # Scope
//!
//! - **Parsing** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - Stylesheets as ordered selector → declaration maps
//!   - Inline `style` attributes
//!
//! - **Selectors** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, class, ID and universal selectors, compounds and lists
//!   - Specificity calculation
//!
//! - **Shorthand expansion** ([§ 1.1 Shorthands](https://www.w3.org/TR/css-cascade-4/#shorthand))
//!   - `padding`, `margin`, `border*`, `borderRadius`, `gap`, `flex`, `flexFlow`, `objectPosition`
//!
//! - **Values** ([CSS Values Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Absolute, font-relative, viewport and percentage lengths to points
//!   - Hex, `rgb()`, `hsl()` and named colors to `#RRGGBB`
//!   - Transform functions
//!
//! - **Validation** of keys and values against the layout engine's grammar
//!
//! - **Cascade**: stylesheet, intrinsic, inline and override precedence,
//!   with a per-document cache
//!
//! - **Tables**: collapsed borders for flex-emulated tables
//!
//! # Not Implemented
//!
//! - Combinators, pseudo-classes and attribute selectors (they never match)
//! - Media queries and other at-rules (skipped)
//! - Property inheritance

/// Resolver configuration.
pub mod config;
/// Style resolution and caching per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod cascade;
/// Element kinds and their intrinsic styles.
pub mod element;
/// Errors and the invalid-value policy.
pub mod error;
/// Shorthand expansion.
pub mod expand;
/// List markers per [CSS Lists Level 3](https://www.w3.org/TR/css-lists-3/).
pub mod list;
/// CSS parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// CSS selector parsing and matching per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// Style keys, values and maps.
pub mod style;
/// Collapsed table borders.
pub mod table;
/// Style key and value validation.
pub mod validate;
/// Unit, color and transform conversion per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;

// Re-exports for convenience
pub use cascade::{StyleCache, StyleResolver};
pub use config::ResolverConfig;
pub use element::{ElementKind, intrinsic_style};
pub use error::{OnInvalid, StyleError};
pub use expand::{ExpandOptions, Expansion, expand, expand_block};
pub use parser::{Stylesheet, combine_stylesheets, parse_inline_style, parse_stylesheet};
pub use selector::{ParsedSelector, SelectorMatcher, SimpleSelectorMatcher, Specificity, StyledNode, parse_selector};
pub use style::{DeclarationBlock, ResolvedStyle, Side, StyleKey, StyleValue, TransformOperation};
pub use table::{TableGrid, TableOptions, TableSummary};
pub use validate::{Validity, classify, is_valid_key, is_valid_value};
pub use values::{ConvertOptions, PctOf, StyleContext, convert, convert_str};
