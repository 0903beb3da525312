//! What the layout engine does with each HTML tag, and the styles some tags
//! carry before any stylesheet applies.

use strum_macros::{Display, EnumString};

use crate::style::{DeclarationBlock, StyleValue};

/// How an element is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ElementKind {
    /// Not rendered, nor are its children.
    Skip,
    /// Not rendered itself; its children are laid out in its place.
    Forward,
    /// A run of text.
    Text,
    /// A block container.
    View,
    /// A hyperlink.
    Link,
    /// An image.
    Image,
    /// A list item with a marker and content column.
    ListItem,
    /// A table container.
    Table,
    /// A table row.
    TableRow,
    /// A table cell.
    TableCell,
    /// A forced line break.
    LineBreak,
    /// A horizontal rule.
    Rule,
    /// An SVG root or shape, rendered with its attributes as props.
    Svg,
    /// Anything else, laid out as a block container.
    Generic,
}

impl ElementKind {
    /// Classify a tag name, case-insensitively.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "style" | "script" | "noscript" | "meta" | "link" | "head" => Self::Skip,
            "html" | "body" | "thead" | "tbody" => Self::Forward,
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "p" | "span" | "dt" | "figcaption" | "b"
            | "strong" | "i" | "em" | "u" | "s" | "mark" | "small" | "sub" | "sup" | "code" => {
                Self::Text
            }
            "div" | "ul" | "ol" | "dl" | "dd" | "article" | "section" | "aside" | "header"
            | "footer" | "nav" | "main" | "blockquote" | "figure" | "pre" => Self::View,
            "a" => Self::Link,
            "img" => Self::Image,
            "li" => Self::ListItem,
            "table" => Self::Table,
            "tr" => Self::TableRow,
            "td" | "th" => Self::TableCell,
            "br" => Self::LineBreak,
            "hr" => Self::Rule,
            "svg" | "line" | "polyline" | "polygon" | "path" | "rect" | "circle" | "ellipse"
            | "text" | "tspan" | "g" | "stop" | "defs" | "clippath" | "lineargradient"
            | "radialgradient" => Self::Svg,
            _ => Self::Generic,
        }
    }

    /// Whether an element of this kind is laid out even with no content.
    #[must_use]
    pub const fn renders_when_empty(self) -> bool {
        matches!(self, Self::Image | Self::LineBreak | Self::Rule)
    }
}

/// Declarations a tag applies before inline styles, e.g. `font-weight: bold`
/// for `<b>`. Values are raw and go through the cascade like any other.
#[must_use]
pub fn intrinsic_style(tag: &str) -> DeclarationBlock {
    let entries: &[(&str, &str)] = match tag.to_ascii_lowercase().as_str() {
        "b" | "strong" => &[("fontWeight", "bold")],
        "i" | "em" => &[("fontStyle", "italic")],
        "u" => &[("textDecoration", "underline")],
        "s" => &[("textDecoration", "line-through")],
        "mark" => &[("backgroundColor", "#ffff00")],
        "small" => &[("fontSize", "0.8em")],
        "sub" => &[("fontSize", "0.8em"), ("verticalAlign", "sub")],
        "sup" => &[("fontSize", "0.8em"), ("verticalAlign", "super")],
        "hr" => {
            let mut block = DeclarationBlock::new();
            let _ = block.set("height", StyleValue::from(1));
            let _ = block.set("backgroundColor", "#000000");
            return block;
        }
        _ => &[],
    };
    entries.iter().copied().collect()
}
