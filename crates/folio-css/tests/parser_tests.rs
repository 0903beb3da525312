//! Integration tests for stylesheet and inline style parsing.

use folio_css::{DeclarationBlock, StyleValue, Stylesheet, combine_stylesheets, parse_inline_style, parse_stylesheet};

fn value<'a>(sheet: &'a Stylesheet, selector: &str, name: &str) -> Option<&'a StyleValue> {
    sheet.get(selector).and_then(|block| block.get(name))
}

#[test]
fn test_document_stylesheet() {
    let css = r"
        /* page furniture */
        body { font-family: Helvetica; margin: 0 }
        h1, h2 { font-weight: bold }
        .note p {
            background-color: #eee;
            border-left: 2px solid red;
        }
        #footer { font-size: 9pt }
    ";
    let sheet = parse_stylesheet(css);
    let selectors: Vec<&str> = sheet.iter().map(|(selector, _)| selector).collect();
    assert_eq!(selectors, ["body", "h1, h2", ".note p", "#footer"]);
    assert_eq!(value(&sheet, "body", "fontFamily"), Some(&StyleValue::from("Helvetica")));
    assert_eq!(
        value(&sheet, ".note p", "borderLeft"),
        Some(&StyleValue::from("2px solid red"))
    );
    assert_eq!(value(&sheet, "#footer", "fontSize"), Some(&StyleValue::from("9pt")));
}

#[test]
fn test_empty_and_broken_input() {
    assert!(parse_stylesheet("").is_empty());
    assert!(parse_stylesheet("   /* nothing */ ").is_empty());

    let sheet = parse_stylesheet("p { color: red; ; : blue; width } div { color: blue }");
    assert_eq!(value(&sheet, "p", "color"), Some(&StyleValue::from("red")));
    assert_eq!(sheet.get("p").map(DeclarationBlock::len), Some(1));
    assert_eq!(value(&sheet, "div", "color"), Some(&StyleValue::from("blue")));
}

#[test]
fn test_custom_properties_and_at_rules_are_dropped() {
    let sheet = parse_stylesheet(
        "@import url(base.css); :root { --accent: red } @font-face { font-family: X } a { color: blue }",
    );
    assert!(sheet.get(":root").is_none_or(DeclarationBlock::is_empty));
    assert_eq!(value(&sheet, "a", "color"), Some(&StyleValue::from("blue")));
}

#[test]
fn test_combined_sheets_merge_per_key() {
    let base = parse_stylesheet("p { color: red; margin: 1px } h1 { color: black }");
    let theme = parse_stylesheet("p { color: green } footer { color: gray }");
    let combined = combine_stylesheets(&[base, theme]);

    let selectors: Vec<&str> = combined.iter().map(|(selector, _)| selector).collect();
    assert_eq!(selectors, ["p", "h1", "footer"]);
    assert_eq!(value(&combined, "p", "color"), Some(&StyleValue::from("green")));
    assert_eq!(value(&combined, "p", "margin"), Some(&StyleValue::from("1px")));
}

#[test]
fn test_inline_style() {
    let block = parse_inline_style("color: red; COLOR: blue; border-top-left-radius: 4px !important");
    assert_eq!(block.get("color"), Some(&StyleValue::from("blue")));
    assert_eq!(block.get("borderTopLeftRadius"), Some(&StyleValue::from("4px")));
    assert_eq!(block.len(), 2);
}

#[test]
fn test_inline_style_edge_cases() {
    assert!(parse_inline_style("").is_empty());
    assert!(parse_inline_style(";;;").is_empty());
    let block = parse_inline_style("background-image: url(http://example.com/a.png)");
    assert_eq!(
        block.get("backgroundImage"),
        Some(&StyleValue::from("url(http://example.com/a.png)"))
    );
}
