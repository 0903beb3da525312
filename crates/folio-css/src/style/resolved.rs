//! The cascade's output for one node.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

use super::{StyleKey, StyleValue};

/// The final property map for one node.
///
/// Every key is a [`StyleKey`], every shorthand has been expanded and every
/// resolvable unit is in points. Percentages with nothing to resolve against
/// stay as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedStyle {
    properties: BTreeMap<StyleKey, StyleValue>,
}

impl ResolvedStyle {
    /// An empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: BTreeMap::new(),
        }
    }

    /// The value of `key`.
    #[must_use]
    pub fn get(&self, key: StyleKey) -> Option<&StyleValue> {
        self.properties.get(&key)
    }

    /// The value of `key` if it is a number.
    #[must_use]
    pub fn number(&self, key: StyleKey) -> Option<f64> {
        self.get(key).and_then(StyleValue::as_number)
    }

    /// The value of `key` if it is text.
    #[must_use]
    pub fn text(&self, key: StyleKey) -> Option<&str> {
        self.get(key).and_then(StyleValue::as_str)
    }

    /// Set `key`, returning the previous value.
    pub fn insert(&mut self, key: StyleKey, value: impl Into<StyleValue>) -> Option<StyleValue> {
        self.properties.insert(key, value.into())
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: StyleKey) -> Option<StyleValue> {
        self.properties.remove(&key)
    }

    /// Whether `key` is set.
    #[must_use]
    pub fn contains(&self, key: StyleKey) -> bool {
        self.properties.contains_key(&key)
    }

    /// Keep only the properties `keep` returns true for.
    pub fn retain(&mut self, mut keep: impl FnMut(StyleKey, &StyleValue) -> bool) {
        self.properties.retain(|key, value| keep(*key, value));
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate in key order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &StyleValue)> {
        self.properties.iter().map(|(key, value)| (*key, value))
    }

    /// Overlay `other` on top of this style.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            let _ = self.insert(key, value.clone());
        }
    }

    /// This style with `other` overlaid.
    #[must_use]
    pub fn merged(mut self, other: &Self) -> Self {
        self.merge(other);
        self
    }
}

impl<V: Into<StyleValue>> FromIterator<(StyleKey, V)> for ResolvedStyle {
    fn from_iter<I: IntoIterator<Item = (StyleKey, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(key, value)| (key, value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for ResolvedStyle {
    type Item = (StyleKey, StyleValue);
    type IntoIter = btree_map::IntoIter<StyleKey, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overlays() {
        let base: ResolvedStyle = [(StyleKey::Color, "#000000"), (StyleKey::Width, "50%")]
            .into_iter()
            .collect();
        let top: ResolvedStyle = [(StyleKey::Color, "#FF0000")].into_iter().collect();
        let merged = base.merged(&top);
        assert_eq!(merged.text(StyleKey::Color), Some("#FF0000"));
        assert_eq!(merged.text(StyleKey::Width), Some("50%"));
    }

    #[test]
    fn test_serializes_as_camel_case_object() {
        let mut style = ResolvedStyle::new();
        let _ = style.insert(StyleKey::PaddingTop, 5);
        let _ = style.insert(StyleKey::FontWeight, "bold");
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"fontWeight":"bold","paddingTop":5.0}"#);
    }
}
