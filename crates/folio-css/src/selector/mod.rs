//! CSS selector parsing and matching
//!
//! Nodes reach the cascade without their tree, so only what a node carries
//! can be matched: type, class and ID selectors, the universal selector,
//! and lists of those. Selectors that need more (pseudo-classes, attribute
//! selectors, combinators) parse, but never match.
//!
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/)

use std::collections::BTreeMap;
use std::iter::Peekable;
use std::str::Chars;

use folio_common::warning::warn_once;
use serde::{Deserialize, Serialize};

/// A node as the cascade sees it: tag, identity and its own style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyledNode {
    /// Lowercase tag name.
    pub tag: String,
    /// The `id` attribute.
    pub id: Option<String>,
    /// The `class` attribute split on whitespace.
    pub classes: Vec<String>,
    /// Every other attribute.
    pub attributes: BTreeMap<String, String>,
    /// The `style` attribute text.
    pub inline_style: Option<String>,
}

impl StyledNode {
    /// A node with only a tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Build a node from raw markup attributes. `id`, `class` and `style`
    /// are lifted into their own fields.
    #[must_use]
    pub fn from_attributes<K, V>(tag: &str, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut node = Self::new(tag);
        for (name, value) in attributes {
            let name = name.into().to_ascii_lowercase();
            let value = value.into();
            match name.as_str() {
                "id" => node.id = Some(value),
                "class" => node.classes = value.split_whitespace().map(str::to_string).collect(),
                "style" => node.inline_style = Some(value),
                _ => {
                    let _ = node.attributes.insert(name, value);
                }
            }
        }
        node
    }

    /// Set the ID.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Add a class.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Set an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        let _ = self.attributes.insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    /// Set the inline style text.
    #[must_use]
    pub fn with_inline_style(mut self, style: &str) -> Self {
        self.inline_style = Some(style.to_string());
        self
    }

    /// Whether the node has `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Decides whether a stylesheet selector applies to a node.
///
/// The cascade is generic over this so callers with tree context can match
/// combinators and structural pseudo-classes themselves.
pub trait SelectorMatcher {
    /// Whether `selector` (possibly a comma-separated list) matches `node`.
    fn matches(&self, selector: &str, node: &StyledNode) -> bool;
}

/// Matches compound selectors against the node alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleSelectorMatcher;

impl SelectorMatcher for SimpleSelectorMatcher {
    fn matches(&self, selector: &str, node: &StyledNode) -> bool {
        parse_selector_list(selector).iter().any(|parsed| {
            if parsed.is_supported() {
                parsed.matches(node)
            } else {
                warn_once("selector", &format!("unsupported selector '{}' never matches", parsed.text));
                false
            }
        })
    }
}

/// One condition of a compound selector.
///
/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    Type(String),
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    Class(String),
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    Id(String),
    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    Universal,
    /// A pseudo-class, pseudo-element or attribute selector. Needs context
    /// the node doesn't carry, so it never matches.
    NeverMatch,
}

impl SimpleSelector {
    /// Check if this simple selector matches the given node.
    #[must_use]
    pub fn matches(&self, node: &StyledNode) -> bool {
        match self {
            // "represents an element in the document tree with the same
            // qualified name as the identifier"
            Self::Type(name) => node.tag.eq_ignore_ascii_case(name),
            Self::Class(class) => node.has_class(class),
            Self::Id(id) => node.id.as_deref() == Some(id.as_str()),
            Self::Universal => true,
            Self::NeverMatch => false,
        }
    }
}

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
///
/// (IDs, classes and pseudo-classes, types), compared in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

/// A selector from a rule prelude, split into its conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSelector {
    /// Trimmed source text, used in warnings.
    pub text: String,
    /// Conditions that must all hold.
    pub conditions: Vec<SimpleSelector>,
    /// Whether a combinator joined two compounds.
    pub has_combinator: bool,
    /// Its specificity.
    pub specificity: Specificity,
}

impl ParsedSelector {
    /// Whether the selector can be matched without tree context.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        !self.has_combinator && !self.conditions.contains(&SimpleSelector::NeverMatch)
    }

    /// [§ 4.1 Selector Matching](https://www.w3.org/TR/selectors-4/#match-a-selector-against-an-element)
    ///
    /// All simple selectors of the compound must match the node.
    #[must_use]
    pub fn matches(&self, node: &StyledNode) -> bool {
        !self.has_combinator && self.conditions.iter().all(|simple| simple.matches(node))
    }
}

/// [§ 4.3.9 ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || !c.is_ascii()
}

/// Parse one selector of a list.
///
/// Returns `None` when nothing selector-like is left after trimming.
#[must_use]
pub fn parse_selector(raw: &str) -> Option<ParsedSelector> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    let mut simple_selectors = Vec::new();
    let mut has_combinator = false;
    let mut chars = text.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            '.' | '#' => {
                let _ = chars.next();
                let ident = take_ident(&mut chars);
                if ident.is_empty() {
                    return None;
                }
                simple_selectors.push(if c == '.' {
                    SimpleSelector::Class(ident)
                } else {
                    SimpleSelector::Id(ident)
                });
            }
            '*' => {
                let _ = chars.next();
                simple_selectors.push(SimpleSelector::Universal);
            }
            // [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
            ':' => {
                while chars.next_if_eq(&':').is_some() {}
                let _ = take_ident(&mut chars);
                if chars.next_if_eq(&'(').is_some() {
                    skip_past(&mut chars, ')');
                }
                simple_selectors.push(SimpleSelector::NeverMatch);
            }
            // [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
            '[' => {
                skip_past(&mut chars, ']');
                simple_selectors.push(SimpleSelector::NeverMatch);
            }
            // [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
            '>' | '+' | '~' => {
                let _ = chars.next();
                has_combinator = true;
            }
            c if c.is_whitespace() => {
                let _ = chars.next();
                has_combinator = true;
            }
            c if is_ident_char(c) => {
                simple_selectors.push(SimpleSelector::Type(take_ident(&mut chars).to_ascii_lowercase()));
            }
            _ => return None,
        }
    }

    let specificity = calculate_specificity(&simple_selectors);
    Some(ParsedSelector {
        text: text.to_owned(),
        conditions: simple_selectors,
        has_combinator,
        specificity,
    })
}

/// Parse a comma-separated selector list, dropping unparseable entries.
#[must_use]
pub fn parse_selector_list(raw: &str) -> Vec<ParsedSelector> {
    raw.split(',').filter_map(parse_selector).collect()
}

fn take_ident(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&ch) = chars.peek()
        && is_ident_char(ch)
    {
        ident.push(ch);
        let _ = chars.next();
    }
    ident
}

fn skip_past(chars: &mut Peekable<Chars<'_>>, close: char) {
    for ch in chars.by_ref() {
        if ch == close {
            break;
        }
    }
}

fn calculate_specificity(simple_selectors: &[SimpleSelector]) -> Specificity {
    let mut specificity = Specificity::default();
    for simple in simple_selectors {
        match simple {
            SimpleSelector::Id(_) => specificity.0 += 1,
            // Attribute and pseudo selectors weigh like classes.
            SimpleSelector::Class(_) | SimpleSelector::NeverMatch => specificity.1 += 1,
            SimpleSelector::Type(_) => specificity.2 += 1,
            SimpleSelector::Universal => {}
        }
    }
    specificity
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> StyledNode {
        StyledNode::from_attributes("P", [("id", "intro"), ("class", "note  wide"), ("lang", "en")])
    }

    #[test]
    fn test_from_attributes_lifts_fields() {
        let node = node();
        assert_eq!(node.tag, "p");
        assert_eq!(node.id.as_deref(), Some("intro"));
        assert_eq!(node.classes, ["note", "wide"]);
        assert_eq!(node.attributes.get("lang").map(String::as_str), Some("en"));
    }

    #[test]
    fn test_compound_matching() {
        let matcher = SimpleSelectorMatcher;
        assert!(matcher.matches("p", &node()));
        assert!(matcher.matches("P.note#intro", &node()));
        assert!(matcher.matches("*", &node()));
        assert!(matcher.matches("h1, .wide", &node()));
        assert!(!matcher.matches("p.missing", &node()));
        assert!(!matcher.matches("#other", &node()));
    }

    #[test]
    fn test_context_selectors_never_match() {
        let matcher = SimpleSelectorMatcher;
        assert!(!matcher.matches("div p", &node()));
        assert!(!matcher.matches("p:first-child", &node()));
        assert!(!matcher.matches("p[lang]", &node()));
        assert!(!matcher.matches("div > p", &node()));
    }

    #[test]
    fn test_specificity() {
        let specificity = |s: &str| parse_selector(s).unwrap().specificity;
        assert_eq!(specificity("p"), Specificity(0, 0, 1));
        assert_eq!(specificity("p.note#intro"), Specificity(1, 1, 1));
        assert_eq!(specificity("a:hover"), Specificity(0, 1, 1));
        assert!(specificity("#a") > specificity(".a.b.c"));
    }

    #[test]
    fn test_invalid_selectors() {
        assert!(parse_selector("").is_none());
        assert!(parse_selector(". foo").is_none());
        assert!(parse_selector_list(" , p").len() == 1);
    }
}
