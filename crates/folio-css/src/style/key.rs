//! The closed set of style keys the layout engine accepts.
//!
//! Keys are camelCase (`paddingTop`). Declarations written in CSS use
//! kebab-case (`padding-top`); [`StyleKey::from_css_name`] accepts both.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// One of the edges of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, Serialize)]
pub enum Side {
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
}

impl Side {
    /// All four sides in CSS order (top, right, bottom, left).
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The edge facing this one on the neighboring box.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// `border{Side}Width`
    #[must_use]
    pub const fn border_width(self) -> StyleKey {
        match self {
            Self::Top => StyleKey::BorderTopWidth,
            Self::Right => StyleKey::BorderRightWidth,
            Self::Bottom => StyleKey::BorderBottomWidth,
            Self::Left => StyleKey::BorderLeftWidth,
        }
    }

    /// `border{Side}Color`
    #[must_use]
    pub const fn border_color(self) -> StyleKey {
        match self {
            Self::Top => StyleKey::BorderTopColor,
            Self::Right => StyleKey::BorderRightColor,
            Self::Bottom => StyleKey::BorderBottomColor,
            Self::Left => StyleKey::BorderLeftColor,
        }
    }

    /// `border{Side}Style`
    #[must_use]
    pub const fn border_style(self) -> StyleKey {
        match self {
            Self::Top => StyleKey::BorderTopStyle,
            Self::Right => StyleKey::BorderRightStyle,
            Self::Bottom => StyleKey::BorderBottomStyle,
            Self::Left => StyleKey::BorderLeftStyle,
        }
    }

    /// `margin{Side}`
    #[must_use]
    pub const fn margin(self) -> StyleKey {
        match self {
            Self::Top => StyleKey::MarginTop,
            Self::Right => StyleKey::MarginRight,
            Self::Bottom => StyleKey::MarginBottom,
            Self::Left => StyleKey::MarginLeft,
        }
    }
}

/// A property the layout engine understands.
///
/// Parses from and displays as the camelCase name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum StyleKey {
    /// `align-content`
    AlignContent,
    /// `align-items`
    AlignItems,
    /// `align-self`
    AlignSelf,
    /// `aspect-ratio`
    AspectRatio,
    /// `background-color`
    BackgroundColor,
    /// `border`
    Border,
    /// `border-bottom`
    BorderBottom,
    /// `border-bottom-color`
    BorderBottomColor,
    /// `border-bottom-left-radius`
    BorderBottomLeftRadius,
    /// `border-bottom-right-radius`
    BorderBottomRightRadius,
    /// `border-bottom-style`
    BorderBottomStyle,
    /// `border-bottom-width`
    BorderBottomWidth,
    /// `border-color`
    BorderColor,
    /// `border-left`
    BorderLeft,
    /// `border-left-color`
    BorderLeftColor,
    /// `border-left-style`
    BorderLeftStyle,
    /// `border-left-width`
    BorderLeftWidth,
    /// `border-radius`
    BorderRadius,
    /// `border-right`
    BorderRight,
    /// `border-right-color`
    BorderRightColor,
    /// `border-right-style`
    BorderRightStyle,
    /// `border-right-width`
    BorderRightWidth,
    /// `border-style`
    BorderStyle,
    /// `border-top`
    BorderTop,
    /// `border-top-color`
    BorderTopColor,
    /// `border-top-left-radius`
    BorderTopLeftRadius,
    /// `border-top-right-radius`
    BorderTopRightRadius,
    /// `border-top-style`
    BorderTopStyle,
    /// `border-top-width`
    BorderTopWidth,
    /// `border-width`
    BorderWidth,
    /// `bottom`
    Bottom,
    /// `clip-path`
    ClipPath,
    /// `color`
    Color,
    /// `column-gap`
    ColumnGap,
    /// `direction`
    Direction,
    /// `display`
    Display,
    /// `dominant-baseline`
    DominantBaseline,
    /// `fill`
    Fill,
    /// `fill-opacity`
    FillOpacity,
    /// `fill-rule`
    FillRule,
    /// `flex`
    Flex,
    /// `flex-basis`
    FlexBasis,
    /// `flex-direction`
    FlexDirection,
    /// `flex-flow`
    FlexFlow,
    /// `flex-grow`
    FlexGrow,
    /// `flex-shrink`
    FlexShrink,
    /// `flex-wrap`
    FlexWrap,
    /// `font-family`
    FontFamily,
    /// `font-size`
    FontSize,
    /// `font-style`
    FontStyle,
    /// `font-weight`
    FontWeight,
    /// `gap`
    Gap,
    /// `gradient-transform`
    GradientTransform,
    /// `height`
    Height,
    /// `justify-content`
    JustifyContent,
    /// `justify-self`
    JustifySelf,
    /// `left`
    Left,
    /// `letter-spacing`
    LetterSpacing,
    /// `line-height`
    LineHeight,
    /// `margin`
    Margin,
    /// `margin-bottom`
    MarginBottom,
    /// `margin-horizontal`
    MarginHorizontal,
    /// `margin-left`
    MarginLeft,
    /// `margin-right`
    MarginRight,
    /// `margin-top`
    MarginTop,
    /// `margin-vertical`
    MarginVertical,
    /// `max-height`
    MaxHeight,
    /// `max-lines`
    MaxLines,
    /// `max-width`
    MaxWidth,
    /// `min-height`
    MinHeight,
    /// `min-width`
    MinWidth,
    /// `object-fit`
    ObjectFit,
    /// `object-position`
    ObjectPosition,
    /// `object-position-x`
    ObjectPositionX,
    /// `object-position-y`
    ObjectPositionY,
    /// `opacity`
    Opacity,
    /// `overflow`
    Overflow,
    /// `padding`
    Padding,
    /// `padding-bottom`
    PaddingBottom,
    /// `padding-horizontal`
    PaddingHorizontal,
    /// `padding-left`
    PaddingLeft,
    /// `padding-right`
    PaddingRight,
    /// `padding-top`
    PaddingTop,
    /// `padding-vertical`
    PaddingVertical,
    /// `position`
    Position,
    /// `right`
    Right,
    /// `row-gap`
    RowGap,
    /// `stroke`
    Stroke,
    /// `stroke-dasharray`
    StrokeDasharray,
    /// `stroke-linecap`
    StrokeLinecap,
    /// `stroke-linejoin`
    StrokeLinejoin,
    /// `stroke-opacity`
    StrokeOpacity,
    /// `stroke-width`
    StrokeWidth,
    /// `text-align`
    TextAlign,
    /// `text-anchor`
    TextAnchor,
    /// `text-decoration`
    TextDecoration,
    /// `text-decoration-color`
    TextDecorationColor,
    /// `text-decoration-style`
    TextDecorationStyle,
    /// `text-indent`
    TextIndent,
    /// `text-overflow`
    TextOverflow,
    /// `text-transform`
    TextTransform,
    /// `top`
    Top,
    /// `transform`
    Transform,
    /// `transform-origin`
    TransformOrigin,
    /// `transform-origin-x`
    TransformOriginX,
    /// `transform-origin-y`
    TransformOriginY,
    /// `vertical-align`
    VerticalAlign,
    /// `visibility`
    Visibility,
    /// `width`
    Width,
    /// `z-index`
    ZIndex,
}

impl StyleKey {
    /// Look up a key written either as camelCase or as a CSS kebab-case name.
    #[must_use]
    pub fn from_css_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.contains('-') {
            kebab_to_camel(name).parse().ok()
        } else {
            name.parse().ok()
        }
    }

    /// The camelCase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Whether this is a border width, either per side or the shorthand.
    #[must_use]
    pub const fn is_border_width(self) -> bool {
        matches!(
            self,
            Self::BorderWidth
                | Self::BorderTopWidth
                | Self::BorderRightWidth
                | Self::BorderBottomWidth
                | Self::BorderLeftWidth
        )
    }

    /// Whether the key belongs to the `border*` family (widths, colors,
    /// styles, radii and the shorthands).
    #[must_use]
    pub fn is_border(self) -> bool {
        self.name().starts_with("border")
    }
}

/// Convert a CSS property name to camelCase: `border-top-width` → `borderTopWidth`.
///
/// Vendor prefixes keep their leading capital (`-webkit-box` → `WebkitBox`).
#[must_use]
pub fn kebab_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_key_names_round_trip() {
        for key in StyleKey::iter() {
            assert_eq!(key.name().parse::<StyleKey>(), Ok(key), "{key}");
        }
        assert_eq!(StyleKey::iter().count(), 110);
    }

    #[test]
    fn test_irregular_names() {
        assert_eq!(StyleKey::ZIndex.name(), "zIndex");
        assert_eq!(StyleKey::ObjectPositionX.name(), "objectPositionX");
        assert_eq!(StyleKey::TransformOriginY.to_string(), "transformOriginY");
    }

    #[test]
    fn test_from_css_name() {
        assert_eq!(StyleKey::from_css_name("padding-top"), Some(StyleKey::PaddingTop));
        assert_eq!(StyleKey::from_css_name("backgroundColor"), Some(StyleKey::BackgroundColor));
        assert_eq!(StyleKey::from_css_name("z-index"), Some(StyleKey::ZIndex));
        assert_eq!(StyleKey::from_css_name("float"), None);
    }

    #[test]
    fn test_kebab_to_camel() {
        assert_eq!(kebab_to_camel("border-top-left-radius"), "borderTopLeftRadius");
        assert_eq!(kebab_to_camel("-webkit-box"), "WebkitBox");
        assert_eq!(kebab_to_camel("color"), "color");
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Top.opposite(), Side::Bottom);
        assert_eq!(Side::Left.border_width(), StyleKey::BorderLeftWidth);
        assert!(StyleKey::BorderRadius.is_border());
        assert!(!StyleKey::Margin.is_border());
        assert!(StyleKey::BorderWidth.is_border_width());
    }
}
