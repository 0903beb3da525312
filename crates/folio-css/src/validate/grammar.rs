//! Per-key value grammar.

use crate::style::StyleKey;

const ALIGN_CONTENT: &[&str] = &[
    "center",
    "flex-end",
    "flex-start",
    "space-around",
    "space-between",
    "space-evenly",
    "stretch",
];
const ALIGN_ITEMS: &[&str] = &["baseline", "center", "flex-end", "flex-start", "stretch"];
const ALIGN_SELF: &[&str] = &["auto", "baseline", "center", "flex-end", "flex-start", "stretch"];
const BORDER_STYLE: &[&str] = &["dashed", "dotted", "solid"];
const DIRECTION: &[&str] = &["ltr", "rtl"];
const DISPLAY: &[&str] = &["flex", "none"];
const DOMINANT_BASELINE: &[&str] = &[
    "auto",
    "central",
    "hanging",
    "mathematical",
    "middle",
    "text-after-edge",
    "text-before-edge",
];
const FILL_RULE: &[&str] = &["evenodd", "nonzero"];
const FLEX_DIRECTION: &[&str] = &["column", "column-reverse", "row", "row-reverse"];
const FLEX_WRAP: &[&str] = &["nowrap", "wrap", "wrap-reverse"];
const FONT_STYLE: &[&str] = &["italic", "normal", "oblique"];
const JUSTIFY_CONTENT: &[&str] = &[
    "center",
    "flex-end",
    "flex-start",
    "space-around",
    "space-between",
    "space-evenly",
];
const POSITION: &[&str] = &["absolute", "relative", "static"];
const STROKE_LINECAP: &[&str] = &["butt", "round", "square"];
const STROKE_LINEJOIN: &[&str] = &["bevel", "butt", "miter", "round", "square"];
const TEXT_ALIGN: &[&str] = &["center", "justify", "left", "right"];
const TEXT_ANCHOR: &[&str] = &["end", "middle", "start"];
const TEXT_DECORATION: &[&str] = &[
    "line-through",
    "line-through underline",
    "none",
    "underline",
    "underline line-through",
];
const TEXT_TRANSFORM: &[&str] = &["capitalize", "lowercase", "none", "uppercase", "upperfirst"];
const VERTICAL_ALIGN: &[&str] = &["sub", "super"];
const VISIBILITY: &[&str] = &["collapse", "hidden", "visible"];

/// `font-weight` keywords; numeric weights are checked separately.
pub(super) const FONT_WEIGHT: &[&str] = &["normal", "bold", "bolder", "lighter"];

/// `<line-style>`
pub(super) const LINE_STYLE: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// `<line-width>` keywords.
pub(super) const LINE_WIDTH: &[&str] = &["thin", "medium", "thick"];

/// The shape of the values a key accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Grammar {
    /// One of a fixed set of keywords.
    Keyword(&'static [&'static str]),
    /// Exactly this keyword.
    Constant(&'static str),
    /// A number or a scalar. `signed` allows a leading `-`, `auto` allows the keyword.
    Length { signed: bool, auto: bool },
    /// A length or `thin`/`medium`/`thick`.
    LineWidth,
    /// A color literal.
    Color,
    /// A color, `none`, or `url(...)`.
    Paint,
    /// 100-900 or a weight keyword.
    FontWeight,
    /// A unitless number.
    Number,
    /// Transform records, or text that parses into them.
    Transform,
    /// Any text.
    Text,
    /// Any text or number; shorthands and loosely typed keys.
    Any,
}

const LENGTH: Grammar = Grammar::Length {
    signed: false,
    auto: false,
};
const SIZE: Grammar = Grammar::Length {
    signed: false,
    auto: true,
};
const OFFSET: Grammar = Grammar::Length {
    signed: true,
    auto: true,
};

impl Grammar {
    /// The grammar of `key`.
    pub(super) const fn of(key: StyleKey) -> Self {
        use StyleKey as K;
        match key {
            K::AlignContent => Self::Keyword(ALIGN_CONTENT),
            K::AlignItems => Self::Keyword(ALIGN_ITEMS),
            K::AlignSelf => Self::Keyword(ALIGN_SELF),
            K::BorderStyle
            | K::BorderTopStyle
            | K::BorderRightStyle
            | K::BorderBottomStyle
            | K::BorderLeftStyle => Self::Keyword(BORDER_STYLE),
            K::Direction => Self::Keyword(DIRECTION),
            K::Display => Self::Keyword(DISPLAY),
            K::DominantBaseline => Self::Keyword(DOMINANT_BASELINE),
            K::FillRule => Self::Keyword(FILL_RULE),
            K::FlexDirection => Self::Keyword(FLEX_DIRECTION),
            K::FlexWrap => Self::Keyword(FLEX_WRAP),
            K::FontStyle => Self::Keyword(FONT_STYLE),
            K::JustifyContent => Self::Keyword(JUSTIFY_CONTENT),
            K::Position => Self::Keyword(POSITION),
            K::StrokeLinecap => Self::Keyword(STROKE_LINECAP),
            K::StrokeLinejoin => Self::Keyword(STROKE_LINEJOIN),
            K::TextAlign => Self::Keyword(TEXT_ALIGN),
            K::TextAnchor => Self::Keyword(TEXT_ANCHOR),
            K::TextDecoration => Self::Keyword(TEXT_DECORATION),
            K::TextTransform => Self::Keyword(TEXT_TRANSFORM),
            K::VerticalAlign => Self::Keyword(VERTICAL_ALIGN),
            K::Visibility => Self::Keyword(VISIBILITY),

            K::Overflow => Self::Constant("hidden"),
            K::TextOverflow => Self::Constant("ellipsis"),

            K::Width
            | K::Height
            | K::MinWidth
            | K::MinHeight
            | K::MaxWidth
            | K::MaxHeight
            | K::FlexBasis => SIZE,
            K::Top
            | K::Right
            | K::Bottom
            | K::Left
            | K::MarginTop
            | K::MarginRight
            | K::MarginBottom
            | K::MarginLeft => OFFSET,
            K::LetterSpacing => Self::Length {
                signed: true,
                auto: false,
            },
            K::PaddingTop
            | K::PaddingRight
            | K::PaddingBottom
            | K::PaddingLeft
            | K::BorderTopLeftRadius
            | K::BorderTopRightRadius
            | K::BorderBottomRightRadius
            | K::BorderBottomLeftRadius
            | K::ColumnGap
            | K::RowGap
            | K::FontSize
            | K::LineHeight
            | K::StrokeWidth => LENGTH,

            K::BorderTopWidth | K::BorderRightWidth | K::BorderBottomWidth | K::BorderLeftWidth => {
                Self::LineWidth
            }

            K::Color
            | K::BackgroundColor
            | K::BorderTopColor
            | K::BorderRightColor
            | K::BorderBottomColor
            | K::BorderLeftColor
            | K::TextDecorationColor => Self::Color,
            K::Fill | K::Stroke => Self::Paint,

            K::FontWeight => Self::FontWeight,

            K::Opacity
            | K::FillOpacity
            | K::StrokeOpacity
            | K::FlexGrow
            | K::FlexShrink
            | K::ZIndex
            | K::MaxLines
            | K::AspectRatio => Self::Number,

            K::Transform | K::GradientTransform => Self::Transform,

            K::FontFamily
            | K::ClipPath
            | K::StrokeDasharray
            | K::ObjectFit
            | K::JustifySelf
            | K::TextDecorationStyle => Self::Text,

            K::Border
            | K::BorderTop
            | K::BorderRight
            | K::BorderBottom
            | K::BorderLeft
            | K::BorderColor
            | K::BorderWidth
            | K::BorderRadius
            | K::Flex
            | K::FlexFlow
            | K::Gap
            | K::Margin
            | K::MarginHorizontal
            | K::MarginVertical
            | K::Padding
            | K::PaddingHorizontal
            | K::PaddingVertical
            | K::ObjectPosition
            | K::ObjectPositionX
            | K::ObjectPositionY
            | K::TextIndent
            | K::TransformOrigin
            | K::TransformOriginX
            | K::TransformOriginY => Self::Any,
        }
    }

    /// Whether a bare number satisfies the grammar.
    pub(super) const fn accepts_number(self) -> bool {
        matches!(
            self,
            Self::Length { .. } | Self::LineWidth | Self::FontWeight | Self::Number | Self::Any
        )
    }
}
