//! Splitting shorthand values into parts.

/// Split a shorthand value into its space-separated parts.
///
/// Whitespace inside parentheses never splits, and neither does a space
/// directly after `<digit>,`, so `1px solid rgb(0, 0, 0)` and legacy
/// `rgb(0, 0, 0)` written without its function name both stay whole.
/// Empty parts are dropped.
#[must_use]
pub fn split_parts(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;

    for (i, ch) in text.char_indices() {
        match ch {
            '(' => {
                depth += 1;
                let _ = start.get_or_insert(i);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                let _ = start.get_or_insert(i);
            }
            c if c.is_whitespace() => {
                if let Some(s) = start
                    && depth == 0
                    && !ends_with_number_comma(&text[s..i])
                {
                    parts.push(text[s..i].trim_end());
                    start = None;
                }
            }
            _ => {
                let _ = start.get_or_insert(i);
            }
        }
    }
    if let Some(s) = start {
        parts.push(text[s..].trim_end());
    }
    parts
}

fn ends_with_number_comma(part: &str) -> bool {
    let bytes = part.trim_end().as_bytes();
    matches!(bytes, [.., digit, b','] if digit.is_ascii_digit())
}
