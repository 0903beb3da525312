//! Integration tests for element kinds, intrinsic styles and list markers.

use folio_css::list::{
    ListMarker, ListStyleType, bullet_style, content_style, item_number, list_marker,
};
use folio_css::{
    ElementKind, OnInvalid, ResolverConfig, StyleContext, StyleKey, StyleResolver, StyledNode,
    intrinsic_style,
};

fn strict_resolver() -> StyleResolver {
    StyleResolver::new(ResolverConfig {
        on_invalid: OnInvalid::Throw,
        ..ResolverConfig::default()
    })
}

#[test]
fn test_element_kinds() {
    let kinds: Vec<ElementKind> = ["p", "img", "LI", "tr", "br", "hr", "circle", "head", "section"]
        .into_iter()
        .map(ElementKind::from_tag)
        .collect();
    assert_eq!(
        kinds,
        [
            ElementKind::Text,
            ElementKind::Image,
            ElementKind::ListItem,
            ElementKind::TableRow,
            ElementKind::LineBreak,
            ElementKind::Rule,
            ElementKind::Svg,
            ElementKind::Skip,
            ElementKind::View,
        ]
    );
    assert!(ElementKind::Image.renders_when_empty());
    assert!(!ElementKind::Text.renders_when_empty());
}

#[test]
fn test_intrinsic_styles_resolve_cleanly() {
    let resolver = strict_resolver();
    let ctx = StyleContext::default().with_font_bases(Some(10.0), None);
    for tag in ["b", "strong", "i", "em", "u", "s", "mark", "small", "sub", "sup", "hr"] {
        let style = resolver.resolve_block(&intrinsic_style(tag), &ctx);
        assert!(style.is_ok_and(|style| !style.is_empty()), "{tag}");
    }
}

#[test]
fn test_intrinsic_values() {
    let resolver = strict_resolver();
    let ctx = StyleContext::default().with_font_bases(Some(10.0), None);
    let resolve = |tag: &str| {
        resolver
            .resolve(&StyledNode::new(tag), None, &[], None, &ctx)
            .unwrap()
    };

    let sub = resolve("sub");
    assert_eq!(sub.number(StyleKey::FontSize), Some(8.0));
    assert_eq!(sub.text(StyleKey::VerticalAlign), Some("sub"));

    let mark = resolve("mark");
    assert_eq!(mark.text(StyleKey::BackgroundColor), Some("#FFFF00"));

    let hr = resolve("hr");
    assert_eq!(hr.number(StyleKey::Height), Some(1.0));
    assert_eq!(hr.text(StyleKey::BackgroundColor), Some("#000000"));

    assert!(resolve("p").is_empty());
}

#[test]
fn test_ordered_list_markers() {
    let markers: Vec<Option<ListMarker>> = (1..=4).map(|n| list_marker("lower-roman", true, n)).collect();
    let texts: Vec<String> = markers
        .into_iter()
        .map(|marker| match marker {
            Some(ListMarker::Text(text)) => text,
            other => panic!("unexpected marker {other:?}"),
        })
        .collect();
    assert_eq!(texts, ["i.", "ii.", "iii.", "iv."]);

    assert_eq!(list_marker("", true, 3), Some(ListMarker::Text("3.".to_string())));
    assert_eq!(
        list_marker("Upper-Alpha", true, 28),
        Some(ListMarker::Text("AB.".to_string()))
    );
}

#[test]
fn test_unordered_list_markers() {
    assert_eq!(list_marker("circle", false, 1), Some(ListMarker::Text("○".to_string())));
    assert_eq!(list_marker("disc outside", false, 1), Some(ListMarker::Text("•".to_string())));
    assert_eq!(list_marker("NONE", false, 1), None);
    assert_eq!(
        list_marker("square url(\"/img/bullet.png\")", false, 1),
        Some(ListMarker::Image("/img/bullet.png".to_string()))
    );
}

#[test]
fn test_item_numbers_follow_value_attributes() {
    let values = [None, None, Some(7), None];
    let numbers: Vec<i64> = (1..=values.len())
        .map(|n| item_number(3, &values[..n]))
        .collect();
    assert_eq!(numbers, [3, 4, 7, 8]);
}

#[test]
fn test_style_type_names() {
    assert_eq!("lower-latin".parse::<ListStyleType>(), Ok(ListStyleType::LowerAlpha));
    assert_eq!("DECIMAL".parse::<ListStyleType>(), Ok(ListStyleType::Decimal));
    assert_eq!(ListStyleType::DecimalLeadingZero.to_string(), "decimal-leading-zero");
    assert!("klingon".parse::<ListStyleType>().is_err());
}

#[test]
fn test_list_item_columns_resolve() {
    let resolver = strict_resolver();
    let ctx = StyleContext::default();

    let bullet = resolver.resolve_block(&bullet_style(), &ctx).unwrap();
    assert_eq!(bullet.number(StyleKey::Width), Some(30.0));
    assert_eq!(bullet.text(StyleKey::TextAlign), Some("right"));
    assert_eq!(bullet.number(StyleKey::PaddingRight), Some(5.0));

    let content = resolver.resolve_block(&content_style(), &ctx).unwrap();
    assert_eq!(content.number(StyleKey::FlexGrow), Some(1.0));
    assert_eq!(content.number(StyleKey::FlexBasis), Some(1.0));
}
