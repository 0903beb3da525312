//! Style pipeline errors and the policy for handling them.
//!
//! Every error carries the raw value that caused it, and the style key once
//! it is known. Unit and color errors are raised before the key is known and
//! get it attached by the cascade through [`StyleError::with_key`].

use folio_common::warning::warn_once;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use thiserror::Error;

use crate::values::PctOf;

/// An error raised while expanding, converting or validating a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The property name is not one the layout engine understands.
    #[error("invalid style key: {key}")]
    InvalidStyleKey {
        /// Offending property name.
        key: String,
        /// Raw value it was declared with.
        value: String,
    },

    /// The value neither converts nor matches the grammar of its key.
    #[error("invalid style value for {key}: {value}")]
    InvalidStyleValue {
        /// Property name.
        key: String,
        /// Offending raw value.
        value: String,
    },

    /// A color literal that could not be decoded.
    #[error("invalid color value{}: {value}", key_label(.key))]
    InvalidColor {
        /// Property name, once known.
        key: Option<String>,
        /// Offending raw value.
        value: String,
    },

    /// A scalar whose unit is unknown, or a bare number where a unit is required.
    #[error("invalid unit '{unit}'{}: {value}", key_label(.key))]
    InvalidUnit {
        /// Property name, once known.
        key: Option<String>,
        /// The unit as written; empty when absent.
        unit: String,
        /// Offending raw value.
        value: String,
    },

    /// Input that isn't a `<number><unit>?` scalar at all.
    #[error("invalid value{}: {value}", key_label(.key))]
    InvalidValue {
        /// Property name, once known.
        key: Option<String>,
        /// Offending raw value.
        value: String,
    },

    /// A relative unit (`%`, `vw`, `vh`) with no parent dimension to resolve against.
    #[error("no parent {basis} to resolve{}: {value}", key_label(.key))]
    MissingBasis {
        /// Property name, once known.
        key: Option<String>,
        /// The dimension that was missing.
        basis: PctOf,
        /// Offending raw value.
        value: String,
    },

    /// A shorthand whose parts could not be assigned (strict mode only).
    #[error("could not expand shorthand {key}: {value}")]
    ShorthandExpansionFailure {
        /// Shorthand property name.
        key: String,
        /// Offending raw value.
        value: String,
    },
}

fn key_label(key: &Option<String>) -> String {
    key.as_ref().map_or_else(String::new, |key| format!(" for {key}"))
}

impl StyleError {
    /// Attach the property name to an error raised before it was known.
    #[must_use]
    pub fn with_key(mut self, name: &str) -> Self {
        match &mut self {
            Self::InvalidColor { key, .. }
            | Self::InvalidUnit { key, .. }
            | Self::InvalidValue { key, .. }
            | Self::MissingBasis { key, .. } => {
                if key.is_none() {
                    *key = Some(name.to_string());
                }
            }
            Self::InvalidStyleKey { .. }
            | Self::InvalidStyleValue { .. }
            | Self::ShorthandExpansionFailure { .. } => {}
        }
        self
    }

    /// The property name this error is about, if known.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::InvalidStyleKey { key, .. }
            | Self::InvalidStyleValue { key, .. }
            | Self::ShorthandExpansionFailure { key, .. } => Some(key),
            Self::InvalidColor { key, .. }
            | Self::InvalidUnit { key, .. }
            | Self::InvalidValue { key, .. }
            | Self::MissingBasis { key, .. } => key.as_deref(),
        }
    }

    /// The raw value that caused the error.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidStyleKey { value, .. }
            | Self::InvalidStyleValue { value, .. }
            | Self::InvalidColor { value, .. }
            | Self::InvalidUnit { value, .. }
            | Self::InvalidValue { value, .. }
            | Self::MissingBasis { value, .. }
            | Self::ShorthandExpansionFailure { value, .. } => value,
        }
    }
}

/// What to do with a declaration that fails both conversion and validation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum OnInvalid {
    /// Drop the declaration silently.
    #[strum(serialize = "ignore")]
    Ignore,
    /// Drop the declaration and emit a warning.
    #[default]
    #[strum(to_string = "warn", serialize = "consolewarn", serialize = "console-warn")]
    #[serde(alias = "consoleWarn")]
    Warn,
    /// Propagate the error to the caller.
    #[strum(serialize = "throw")]
    Throw,
}

impl OnInvalid {
    /// Apply the policy to `error`.
    ///
    /// # Errors
    ///
    /// Returns `error` unchanged under [`OnInvalid::Throw`].
    pub fn handle(self, error: StyleError) -> Result<(), StyleError> {
        match self {
            Self::Ignore => Ok(()),
            Self::Warn => {
                warn_once("cascade", &format!("dropped declaration: {error}"));
                Ok(())
            }
            Self::Throw => Err(error),
        }
    }
}
