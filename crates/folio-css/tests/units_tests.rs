//! Integration tests for unit and color conversion.

use folio_css::error::StyleError;
use folio_css::values::{ConvertOptions, PctOf, StyleContext, convert, convert_str};
use folio_css::StyleValue;
use quickcheck_macros::quickcheck;

fn points(text: &str, ctx: &StyleContext, opts: &ConvertOptions) -> f64 {
    match convert_str(text, ctx, opts) {
        Ok(StyleValue::Number(n)) => n,
        other => panic!("{text} did not convert to points: {other:?}"),
    }
}

fn strict(text: &str) -> Result<StyleValue, StyleError> {
    convert_str(text, &StyleContext::default(), &ConvertOptions::default())
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
}

#[test]
fn test_absolute_units() {
    let ctx = StyleContext::default();
    let opts = ConvertOptions::default();
    assert_close(points("1in", &ctx, &opts), 72.0);
    assert_close(points("2cm", &ctx, &opts), 2.0 * 72.0 / 2.54);
    assert_close(points("25.4mm", &ctx, &opts), 72.0);
    assert_close(points("12pt", &ctx, &opts), 12.0);
    assert_close(points("-3pt", &ctx, &opts), -3.0);
}

#[test]
fn test_units_ignore_case() {
    let ctx = StyleContext::default();
    let opts = ConvertOptions::default();
    assert_close(points("1IN", &ctx, &opts), 72.0);
    assert_close(points("12Pt", &ctx, &opts), 12.0);
    assert_close(points("2CM", &ctx, &opts), 2.0 * 72.0 / 2.54);
    assert!(matches!(strict("12XX"), Err(StyleError::InvalidUnit { .. })));
}

#[test]
fn test_target_dpi() {
    let ctx = StyleContext::default().with_target_dpi(144.0);
    assert_close(points("1in", &ctx, &ConvertOptions::default()), 144.0);
}

#[test]
fn test_px_rounds_to_target() {
    let opts = ConvertOptions::default();
    let ctx = StyleContext::default().with_dpi(96.0);
    assert_close(points("10px", &ctx, &opts), 8.0);
    assert_close(points("96px", &ctx, &opts), 72.0);
    // Without a source DPI, px maps one to one.
    assert_close(points("10px", &StyleContext::default(), &opts), 10.0);
}

#[test]
fn test_font_relative_units() {
    let opts = ConvertOptions::default();
    assert_close(points("1.5em", &StyleContext::default(), &opts), 27.0);
    assert_close(points("2rem", &StyleContext::default(), &opts), 36.0);

    let ctx = StyleContext::default().with_font_bases(Some(10.0), Some(12.0));
    assert_close(points("1.5em", &ctx, &opts), 15.0);
    assert_close(points("2rem", &ctx, &opts), 24.0);

    let zero = StyleContext::default().with_font_bases(Some(0.0), None);
    assert_close(points("1em", &zero, &opts), 18.0);
}

#[test]
fn test_relative_units_need_a_basis() {
    assert!(matches!(
        strict("50%"),
        Err(StyleError::MissingBasis { basis: PctOf::Width, .. })
    ));
    assert!(matches!(
        strict("10vh"),
        Err(StyleError::MissingBasis { basis: PctOf::Height, .. })
    ));
    assert!(matches!(strict("10vw"), Err(StyleError::MissingBasis { .. })));

    let ctx = StyleContext::default().with_parent_size(Some(200.0), Some(400.0));
    let opts = ConvertOptions::default();
    assert_close(points("50%", &ctx, &opts), 100.0);
    assert_close(points("50%", &ctx.with_pct_of(PctOf::Height), &opts), 200.0);
    assert_close(points("10vw", &ctx, &opts), 20.0);
    assert_close(points("10vh", &ctx, &opts), 40.0);
}

#[test]
fn test_lenient_mode() {
    let ctx = StyleContext::default();
    let lenient = ConvertOptions::lenient();
    assert_close(points("50vw", &ctx, &lenient), 50.0);
    assert_close(points("12", &ctx, &lenient), 12.0);
    assert_close(points("3vmin", &ctx, &lenient), 3.0);
    // Only vw falls back; vh and % still need their basis.
    assert!(convert_str("50%", &ctx, &lenient).is_err());
    assert!(convert_str("5vh", &ctx, &lenient).is_err());
}

#[test]
fn test_unit_errors() {
    assert!(matches!(strict("12"), Err(StyleError::InvalidUnit { .. })));
    assert!(matches!(strict("12foo"), Err(StyleError::InvalidUnit { .. })));
    assert!(matches!(strict("abc"), Err(StyleError::InvalidValue { .. })));
    assert!(matches!(
        convert(&StyleValue::from(4), &StyleContext::default(), &ConvertOptions::default()),
        Err(StyleError::InvalidUnit { .. })
    ));
}

#[test]
fn test_colors_become_hex() {
    assert_eq!(strict("red"), Ok(StyleValue::from("#FF0000")));
    assert_eq!(strict("#abc"), Ok(StyleValue::from("#AABBCC")));
    assert_eq!(strict("#11223380"), Ok(StyleValue::from("#112233")));
    assert_eq!(strict("rgb(0, 128, 255)"), Ok(StyleValue::from("#0080FF")));
    assert_eq!(strict("transparent"), Ok(StyleValue::from("transparent")));
    assert!(matches!(strict("#12345"), Err(StyleError::InvalidColor { .. })));
}

#[quickcheck]
fn prop_points_are_identity(value: i32) -> bool {
    strict(&format!("{value}pt")) == Ok(StyleValue::Number(f64::from(value)))
}

#[quickcheck]
fn prop_inches_scale_by_target_dpi(value: i16) -> bool {
    strict(&format!("{value}in")) == Ok(StyleValue::Number(f64::from(value) * 72.0))
}

#[quickcheck]
fn prop_percent_of_width(pct: u8, width: u16) -> bool {
    let width = f64::from(width) + 1.0;
    let ctx = StyleContext::default().with_parent_size(Some(width), None);
    let expected = f64::from(pct) / 100.0 * width;
    match convert_str(&format!("{pct}%"), &ctx, &ConvertOptions::default()) {
        Ok(StyleValue::Number(n)) => (n - expected).abs() < 1e-9,
        _ => false,
    }
}
