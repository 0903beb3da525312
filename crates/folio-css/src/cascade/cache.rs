//! Memoized resolution for nodes that look alike.

use std::collections::HashMap;

use crate::error::StyleError;
use crate::parser::Stylesheet;
use crate::selector::{SelectorMatcher, StyledNode};
use crate::style::{DeclarationBlock, ResolvedStyle};
use crate::values::StyleContext;

use super::StyleResolver;

/// Everything about a node that can change its resolved style.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Fingerprint {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    inline_style: Option<String>,
    overrides: Vec<(String, String)>,
    stylesheet_count: usize,
    context: [u64; 7],
}

impl Fingerprint {
    fn new(
        node: &StyledNode,
        stylesheet_count: usize,
        overrides: Option<&DeclarationBlock>,
        ctx: &StyleContext,
    ) -> Self {
        let mut classes = node.classes.clone();
        classes.sort_unstable();
        classes.dedup();
        Self {
            tag: node.tag.clone(),
            id: node.id.clone(),
            classes,
            inline_style: node.inline_style.clone(),
            overrides: overrides
                .into_iter()
                .flat_map(DeclarationBlock::iter)
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            stylesheet_count,
            context: ctx.fingerprint(),
        }
    }
}

/// Caches resolved styles per document.
///
/// Two lookups share an entry when the node's tag, ID, class set and inline
/// style match, along with the overrides, the context and the number of
/// stylesheets. Stylesheets are assumed to only ever be appended to; call
/// [`StyleCache::clear`] when one is edited in place. Attributes
/// other than `id`, `class` and `style` are not part of the key, so a
/// matcher that looks at them should not be used through the cache.
#[derive(Debug, Clone, Default)]
pub struct StyleCache {
    entries: HashMap<Fingerprint, ResolvedStyle>,
    hits: usize,
    misses: usize,
}

impl StyleCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `node`, reusing an earlier result for an identical node.
    ///
    /// # Errors
    ///
    /// Whatever [`StyleResolver::resolve`] returns. Errors are not cached.
    pub fn resolve<M: SelectorMatcher>(
        &mut self,
        resolver: &StyleResolver<M>,
        node: &StyledNode,
        stylesheets: &[Stylesheet],
        overrides: Option<&DeclarationBlock>,
        ctx: &StyleContext,
    ) -> Result<ResolvedStyle, StyleError> {
        let fingerprint = Fingerprint::new(node, stylesheets.len(), overrides, ctx);
        if let Some(style) = self.entries.get(&fingerprint) {
            self.hits += 1;
            return Ok(style.clone());
        }
        self.misses += 1;
        let style = resolver.resolve(node, None, stylesheets, overrides, ctx)?;
        let _ = self.entries.insert(fingerprint, style.clone());
        Ok(style)
    }

    /// Lookups answered from the cache.
    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that had to resolve.
    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    /// Number of cached styles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
