//! Integration tests for shorthand expansion.

use folio_css::expand::split_parts;
use folio_css::{
    DeclarationBlock, ExpandOptions, Expansion, StyleError, StyleValue, expand, expand_block,
    parse_inline_style,
};

fn text(block: &DeclarationBlock, name: &str) -> Option<String> {
    block.get(name).map(ToString::to_string)
}

fn lenient() -> ExpandOptions {
    ExpandOptions::default()
}

#[test]
fn test_four_values() {
    let block = expand_block(&parse_inline_style("padding: 1px 2px 3px 4px"), &lenient()).unwrap();
    assert_eq!(block.len(), 4);
    assert_eq!(text(&block, "paddingTop").as_deref(), Some("1px"));
    assert_eq!(text(&block, "paddingRight").as_deref(), Some("2px"));
    assert_eq!(text(&block, "paddingBottom").as_deref(), Some("3px"));
    assert_eq!(text(&block, "paddingLeft").as_deref(), Some("4px"));
    assert!(!block.contains("padding"));
}

#[test]
fn test_one_and_two_values() {
    let block = expand_block(&parse_inline_style("padding: 5px"), &lenient()).unwrap();
    for side in ["paddingTop", "paddingRight", "paddingBottom", "paddingLeft"] {
        assert_eq!(text(&block, side).as_deref(), Some("5px"), "{side}");
    }

    let block = expand_block(&parse_inline_style("margin: 0 auto"), &lenient()).unwrap();
    assert_eq!(text(&block, "marginTop").as_deref(), Some("0"));
    assert_eq!(text(&block, "marginBottom").as_deref(), Some("0"));
    assert_eq!(text(&block, "marginLeft").as_deref(), Some("auto"));
    assert_eq!(text(&block, "marginRight").as_deref(), Some("auto"));
}

#[test]
fn test_border_expands_recursively() {
    let block = expand_block(&parse_inline_style("border: 1px solid #333"), &lenient()).unwrap();
    assert_eq!(block.len(), 12);
    for side in ["Top", "Right", "Bottom", "Left"] {
        assert_eq!(text(&block, &format!("border{side}Width")).as_deref(), Some("1px"));
        assert_eq!(text(&block, &format!("border{side}Style")).as_deref(), Some("solid"));
        assert_eq!(text(&block, &format!("border{side}Color")).as_deref(), Some("#333"));
    }
}

#[test]
fn test_border_none_zeroes_widths() {
    let block = expand_block(&parse_inline_style("border: none"), &lenient()).unwrap();
    assert_eq!(block.len(), 4);
    assert!(block.iter().all(|(_, value)| *value == StyleValue::from(0)));
}

#[test]
fn test_border_color_function_stays_whole() {
    let block =
        expand_block(&parse_inline_style("border-left: 2px dotted rgb(0, 0, 255)"), &lenient()).unwrap();
    assert_eq!(text(&block, "borderLeftColor").as_deref(), Some("rgb(0, 0, 255)"));
    assert_eq!(text(&block, "borderLeftStyle").as_deref(), Some("dotted"));
}

#[test]
fn test_flex() {
    let block = expand_block(&parse_inline_style("flex: 1"), &lenient()).unwrap();
    assert_eq!(text(&block, "flexGrow").as_deref(), Some("1"));
    assert_eq!(text(&block, "flexShrink").as_deref(), Some("1"));
    assert_eq!(text(&block, "flexBasis").as_deref(), Some("auto"));

    let block = expand_block(&parse_inline_style("flex: none"), &lenient()).unwrap();
    assert_eq!(block.get("flexGrow"), Some(&StyleValue::from(0)));
    assert_eq!(block.get("flexShrink"), Some(&StyleValue::from(0)));

    let block = expand_block(&parse_inline_style("flex: 2 0 50%"), &lenient()).unwrap();
    assert_eq!(text(&block, "flexBasis").as_deref(), Some("50%"));
}

#[test]
fn test_flex_flow_and_gap() {
    let block =
        expand_block(&parse_inline_style("flex-flow: column wrap; gap: 4px 8px"), &lenient()).unwrap();
    assert_eq!(text(&block, "flexDirection").as_deref(), Some("column"));
    assert_eq!(text(&block, "flexWrap").as_deref(), Some("wrap"));
    assert_eq!(text(&block, "rowGap").as_deref(), Some("4px"));
    assert_eq!(text(&block, "columnGap").as_deref(), Some("8px"));
}

#[test]
fn test_axis_shorthands() {
    let block: DeclarationBlock = [("paddingHorizontal", "3px"), ("marginVertical", "1em")]
        .into_iter()
        .collect();
    let block = expand_block(&block, &lenient()).unwrap();
    assert_eq!(text(&block, "paddingLeft").as_deref(), Some("3px"));
    assert_eq!(text(&block, "paddingRight").as_deref(), Some("3px"));
    assert_eq!(text(&block, "marginTop").as_deref(), Some("1em"));
    assert_eq!(text(&block, "marginBottom").as_deref(), Some("1em"));
}

#[test]
fn test_conflict_resolution() {
    let block = parse_inline_style("padding-top: 9px; padding: 1px");

    let preferred = expand_block(&block, &lenient()).unwrap();
    assert_eq!(text(&preferred, "paddingTop").as_deref(), Some("1px"));

    let explicit = expand_block(
        &block,
        &ExpandOptions {
            prefer_expanded: false,
            strict: false,
        },
    )
    .unwrap();
    assert_eq!(text(&explicit, "paddingTop").as_deref(), Some("9px"));
    assert_eq!(text(&explicit, "paddingBottom").as_deref(), Some("1px"));
}

#[test]
fn test_bad_shorthands() {
    let block = parse_inline_style("border: 1px wobbly; color: red");

    let kept = expand_block(&block, &lenient()).unwrap();
    assert_eq!(text(&kept, "border").as_deref(), Some("1px wobbly"));
    assert_eq!(text(&kept, "color").as_deref(), Some("red"));

    let strict = ExpandOptions {
        prefer_expanded: true,
        strict: true,
    };
    assert!(matches!(
        expand_block(&block, &strict),
        Err(StyleError::ShorthandExpansionFailure { .. })
    ));
}

#[test]
fn test_longhands_pass_through() {
    assert_eq!(expand("fontSize", &StyleValue::from("12px")), Ok(Expansion::Longhand));
    assert_eq!(
        expand("transform", &StyleValue::from("rotate(4deg)")),
        Ok(Expansion::Longhand)
    );
}

#[test]
fn test_split_parts() {
    assert_eq!(split_parts("1px solid rgb(0, 0, 0)"), ["1px", "solid", "rgb(0, 0, 0)"]);
    assert_eq!(split_parts("  a   b "), ["a", "b"]);
    assert!(split_parts("   ").is_empty());
}
