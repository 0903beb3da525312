//! Resolver configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes. Field names are camelCase on the wire:
//!
//! ```json
//! { "dpi": 96, "validFonts": ["Helvetica", "Courier"], "onInvalid": "throw" }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::OnInvalid;
use crate::expand::ExpandOptions;
use crate::values::{ConvertOptions, DEFAULT_FONT_BASE, DEFAULT_TARGET_DPI, PctOf, StyleContext};

/// Source DPI assumed for `px` when nothing else is known.
pub const DEFAULT_DPI: f64 = 96.0;

/// Options for [`StyleResolver`](crate::cascade::StyleResolver).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverConfig {
    /// Resolution documents are authored for.
    pub dpi: f64,
    /// Output resolution.
    pub target_dpi: f64,
    /// `em` base when the context has none.
    pub default_em_base: f64,
    /// `rem` base when the context has none.
    pub default_rem_base: f64,
    /// Font families the layout engine has registered. A `fontFamily`
    /// naming anything else is treated as an invalid value.
    pub valid_fonts: Vec<String>,
    /// What to do with declarations that neither convert nor validate.
    pub on_invalid: OnInvalid,
    /// Whether longhands from expansion beat explicit longhands in the same block.
    pub prefer_expanded: bool,
    /// Pass through values with unknown units instead of failing them.
    pub ignore_invalid_unit: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            target_dpi: DEFAULT_TARGET_DPI,
            default_em_base: DEFAULT_FONT_BASE,
            default_rem_base: DEFAULT_FONT_BASE,
            valid_fonts: vec!["Helvetica".to_string()],
            on_invalid: OnInvalid::Warn,
            prefer_expanded: true,
            ignore_invalid_unit: false,
        }
    }
}

impl ResolverConfig {
    /// The root context for a document: DPIs set, no parent box.
    #[must_use]
    pub const fn root_context(&self) -> StyleContext {
        StyleContext {
            dpi: Some(self.dpi),
            target_dpi: self.target_dpi,
            em_base: None,
            rem_base: None,
            parent_width: None,
            parent_height: None,
            pct_of: PctOf::Width,
        }
    }

    /// Unit converter options.
    #[must_use]
    pub const fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            ignore_invalid_unit: self.ignore_invalid_unit,
            default_em_base: self.default_em_base,
            default_rem_base: self.default_rem_base,
        }
    }

    /// Expander options. Expansion is only strict when invalid input throws.
    #[must_use]
    pub fn expand_options(&self) -> ExpandOptions {
        ExpandOptions {
            prefer_expanded: self.prefer_expanded,
            strict: self.on_invalid == OnInvalid::Throw,
        }
    }

    /// The allow-list entry for `family`, as registered.
    ///
    /// Only the first family of a list counts, with quotes removed and
    /// compared without regard to ASCII case.
    #[must_use]
    pub fn valid_font(&self, family: &str) -> Option<&str> {
        let first = family
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches(|c| c == '"' || c == '\'');
        self.valid_fonts
            .iter()
            .find(|font| font.eq_ignore_ascii_case(first))
            .map(String::as_str)
    }
}
