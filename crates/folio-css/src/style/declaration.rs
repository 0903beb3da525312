//! Raw declaration blocks, before validation.

use serde::ser::{Serialize, Serializer};

use super::StyleValue;

/// An insertion-ordered map of property name to raw value.
///
/// Names are whatever the author wrote, normalized to camelCase. Setting a
/// name that is already present replaces its value in place, so a block
/// keeps the position of the first declaration of each property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclarationBlock {
    declarations: Vec<(String, StyleValue)>,
}

impl DeclarationBlock {
    /// An empty block.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            declarations: Vec::new(),
        }
    }

    /// Set `name` to `value`, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Option<StyleValue> {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.declarations.iter_mut().find(|(n, _)| *n == name) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.declarations.push((name, value));
        None
    }

    /// The value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.declarations
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Whether `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<StyleValue> {
        let index = self.declarations.iter().position(|(n, _)| n == name)?;
        Some(self.declarations.remove(index).1)
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the block is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.declarations
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Shallow merge: every declaration of `other` overrides this block's.
    pub fn merge(&mut self, other: &Self) {
        for (name, value) in other.iter() {
            let _ = self.set(name, value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for DeclarationBlock {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut block = Self::new();
        for (name, value) in iter {
            let _ = block.set(name, value);
        }
        block
    }
}

impl IntoIterator for DeclarationBlock {
    type Item = (String, StyleValue);
    type IntoIter = std::vec::IntoIter<(String, StyleValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.into_iter()
    }
}

impl Serialize for DeclarationBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
