//! Style resolution
//!
//! Loosely follows [CSS Cascading and Inheritance Level 4](https://www.w3.org/TR/css-cascade-4/)
//! with a fixed precedence instead of specificity:
//!
//! 1. matching stylesheet rules, in document order
//! 2. the element's intrinsic style (`<b>` is bold)
//! 3. the inline `style` attribute
//! 4. caller overrides
//!
//! Each source is expanded to longhands on its own, later sources win key by
//! key, and the merged block is converted to what the layout engine takes.

mod cache;

pub use cache::StyleCache;

use crate::config::ResolverConfig;
use crate::element::intrinsic_style;
use crate::error::StyleError;
use crate::expand::expand_block;
use crate::parser::{Stylesheet, combine_stylesheets, parse_inline_style};
use crate::selector::{SelectorMatcher, SimpleSelectorMatcher, StyledNode};
use crate::style::{DeclarationBlock, ResolvedStyle, StyleKey, StyleValue};
use crate::validate::classify;
use crate::values::{StyleContext, convert, parse_transform};

/// Resolves declarations from every source into one [`ResolvedStyle`].
#[derive(Debug, Clone, Default)]
pub struct StyleResolver<M = SimpleSelectorMatcher> {
    config: ResolverConfig,
    matcher: M,
}

impl StyleResolver {
    /// A resolver matching selectors with [`SimpleSelectorMatcher`].
    #[must_use]
    pub const fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            matcher: SimpleSelectorMatcher,
        }
    }
}

impl<M: SelectorMatcher> StyleResolver<M> {
    /// A resolver with a custom selector matcher.
    pub const fn with_matcher(config: ResolverConfig, matcher: M) -> Self {
        Self { config, matcher }
    }

    /// The configuration in use.
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the style of `node`.
    ///
    /// `inline` defaults to the node's own `style` attribute. `stylesheets`
    /// are combined in order before matching.
    ///
    /// # Errors
    ///
    /// Only under [`OnInvalid::Throw`](crate::error::OnInvalid::Throw): the
    /// first declaration that neither converts nor validates, or the first
    /// shorthand that can't be expanded.
    pub fn resolve(
        &self,
        node: &StyledNode,
        inline: Option<&DeclarationBlock>,
        stylesheets: &[Stylesheet],
        overrides: Option<&DeclarationBlock>,
        ctx: &StyleContext,
    ) -> Result<ResolvedStyle, StyleError> {
        let combined = combine_stylesheets(stylesheets);
        let mut sources = self.matched_blocks(node, &combined);

        let intrinsic = intrinsic_style(&node.tag);
        sources.push(&intrinsic);

        let parsed_inline;
        let inline = match inline {
            Some(block) => Some(block),
            None => {
                parsed_inline = node.inline_style.as_deref().map(parse_inline_style);
                parsed_inline.as_ref()
            }
        };
        sources.extend(inline);
        sources.extend(overrides);

        let expand_opts = self.config.expand_options();
        let mut merged = DeclarationBlock::new();
        for block in sources {
            merged.merge(&expand_block(block, &expand_opts)?);
        }
        self.resolve_expanded(&merged, ctx)
    }

    /// Resolve a single declaration block, as for a `style` attribute with
    /// no stylesheet.
    ///
    /// # Errors
    ///
    /// As for [`StyleResolver::resolve`].
    pub fn resolve_block(
        &self,
        block: &DeclarationBlock,
        ctx: &StyleContext,
    ) -> Result<ResolvedStyle, StyleError> {
        let expanded = expand_block(block, &self.config.expand_options())?;
        self.resolve_expanded(&expanded, ctx)
    }

    /// Blocks of the rules in `sheet` whose selector matches `node`, in
    /// document order.
    pub fn matched_blocks<'a>(&self, node: &StyledNode, sheet: &'a Stylesheet) -> Vec<&'a DeclarationBlock> {
        sheet
            .iter()
            .filter(|(selector, _)| self.matcher.matches(selector, node))
            .map(|(_, block)| block)
            .collect()
    }

    fn resolve_expanded(
        &self,
        block: &DeclarationBlock,
        ctx: &StyleContext,
    ) -> Result<ResolvedStyle, StyleError> {
        let mut resolved = ResolvedStyle::new();
        for (name, value) in block.iter() {
            match self.resolve_declaration(name, value, ctx) {
                Ok((key, value)) => {
                    let _ = resolved.insert(key, value);
                }
                Err(err) => self.config.on_invalid.handle(err)?,
            }
        }
        Ok(resolved)
    }

    /// Turn one longhand declaration into a resolved entry.
    ///
    /// Conversion is tried first; a value that doesn't convert, or converts
    /// into something its key doesn't take, is validated as written.
    fn resolve_declaration(
        &self,
        name: &str,
        value: &StyleValue,
        ctx: &StyleContext,
    ) -> Result<(StyleKey, StyleValue), StyleError> {
        let Some(key) = StyleKey::from_css_name(name) else {
            return Err(StyleError::InvalidStyleKey {
                key: name.to_string(),
                value: value.to_string(),
            });
        };
        let invalid_value = || StyleError::InvalidStyleValue {
            key: key.name().to_string(),
            value: value.to_string(),
        };

        if key == StyleKey::FontFamily {
            return value
                .as_str()
                .and_then(|family| self.config.valid_font(family))
                .map(|font| (key, StyleValue::from(font)))
                .ok_or_else(invalid_value);
        }

        let value = if key.is_border_width() {
            normalize_border_width(value)
        } else {
            value.clone()
        };

        if matches!(key, StyleKey::Transform | StyleKey::GradientTransform)
            && let Some(text) = value.as_str()
        {
            return parse_transform(text, ctx, &self.config.convert_options())
                .map(|operations| (key, StyleValue::Transform(operations)))
                .map_err(|err| err.with_key(key.name()));
        }

        let conversion = convert(&value, ctx, &self.config.convert_options());
        if let Ok(converted) = &conversion
            && classify(key, converted).is_valid()
        {
            return Ok((key, converted.clone()));
        }

        if let Some(raw) = classify(key, &value).into_value(&value) {
            return Ok((key, raw));
        }

        match conversion {
            Err(StyleError::InvalidValue { .. }) | Ok(_) => Err(invalid_value()),
            Err(err) => Err(err.with_key(key.name())),
        }
    }
}

/// Border width keywords as lengths: `none` and `hidden` draw nothing.
fn normalize_border_width(value: &StyleValue) -> StyleValue {
    let Some(text) = value.as_str() else {
        return value.clone();
    };
    match text.trim().to_ascii_lowercase().as_str() {
        "none" | "hidden" => StyleValue::from(0),
        "thin" => StyleValue::from("1px"),
        "medium" => StyleValue::from("3px"),
        "thick" => StyleValue::from("5px"),
        _ => value.clone(),
    }
}
