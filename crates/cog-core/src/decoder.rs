//! Cog decoder — converts cog text into a [`ConfigDocument`].
//!
//! The decoder is a single linear scan over the input lines. Each line is
//! classified (after trimming) as one of:
//!
//! - blank: ignored, the pending comment survives
//! - full-line comment (`// ...`): becomes the pending comment
//! - section header (`[name]`): opens or re-opens a section
//! - key-value (`key = value`): split on the first `=`
//! - anything else: skipped
//!
//! The only state carried between lines is the current section name and the
//! pending full-line comment. Nothing here can fail: unrecognised values fall
//! back to strings and malformed lines are dropped.
//!
//! # Comment attachment
//!
//! An inline comment (`key = 1 // note`) always wins. A pending full-line
//! comment attaches to the next key-value line only when that line has no
//! inline comment; it is consumed by that line either way.

use crate::document::ConfigDocument;
use crate::types::{Value, DEFAULT_SECTION};

/// Marker that starts both full-line and inline comments.
pub const COMMENT_MARKER: &str = "//";

/// Decode cog text into a fresh document (with no source path).
pub fn decode(text: &str) -> ConfigDocument {
    let mut doc = ConfigDocument::new();
    let mut current: Option<String> = None;
    let mut pending_comment: Option<String> = None;

    for (idx, raw) in text.lines().enumerate() {
        match classify_line(raw) {
            Line::Blank => {}
            Line::Comment(comment) => {
                pending_comment = Some(comment.to_string());
            }
            Line::Header(name) => {
                doc.section_or_insert(name);
                current = Some(name.to_string());
            }
            Line::KeyValue {
                key,
                value,
                inline_comment,
            } => {
                let pending = pending_comment.take();
                let comment = inline_comment.map(str::to_string).or(pending);
                let section = current.as_deref().unwrap_or(DEFAULT_SECTION);
                doc.section_or_insert(section).set_with_comment(
                    key.to_string(),
                    parse_value(value),
                    comment,
                );
            }
            Line::Malformed => {
                tracing::trace!(line = idx + 1, text = raw, "skipping malformed line");
            }
        }
    }

    doc
}

/// Classification of one input line. Borrowed slices point into the line.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Blank,
    Comment(&'a str),
    Header(&'a str),
    KeyValue {
        key: &'a str,
        value: &'a str,
        inline_comment: Option<&'a str>,
    },
    Malformed,
}

fn classify_line(raw: &str) -> Line<'_> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with(COMMENT_MARKER) {
        return Line::Comment(trimmed);
    }
    if let Some(name) = parse_header(trimmed) {
        return Line::Header(name);
    }
    match trimmed.split_once('=') {
        Some((key, rest)) => {
            let (value, inline_comment) = match rest.find(COMMENT_MARKER) {
                Some(pos) => (&rest[..pos], Some(rest[pos..].trim_end())),
                None => (rest, None),
            };
            Line::KeyValue {
                key: key.trim(),
                value: value.trim(),
                inline_comment,
            }
        }
        None => Line::Malformed,
    }
}

/// `[name]` → `name` (interior trimmed). Returns `None` for anything else.
fn parse_header(trimmed: &str) -> Option<&str> {
    trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}

/// Infer a typed value from value text. Checks run in a fixed order and the
/// first match wins:
///
/// 1. `true` / `false`, case-insensitive → `Boolean`
/// 2. `-?[0-9]+` → `Integer` (falls through to string on `i64` overflow)
/// 3. `-?[0-9]+.[0-9]+` → `Float` (falls through to string when too large
///    for a finite `f64`)
/// 4. `"..."` → `String` of the interior, no unescaping
/// 5. anything else → `String` of the trimmed text
pub fn parse_value(text: &str) -> Value {
    let text = text.trim();

    if text.eq_ignore_ascii_case("true") {
        return Value::Boolean(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Value::Boolean(false);
    }
    if is_integer_literal(text) {
        if let Ok(i) = text.parse::<i64>() {
            return Value::Integer(i);
        }
    } else if is_decimal_literal(text) {
        // `parse` saturates to infinity on overflow rather than failing.
        if let Some(f) = text.parse::<f64>().ok().filter(|f| f.is_finite()) {
            return Value::Float(f);
        }
    }
    if let Some(inner) = strip_quotes(text) {
        return Value::String(inner.to_string());
    }
    Value::String(text.to_string())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_integer_literal(text: &str) -> bool {
    is_digits(text.strip_prefix('-').unwrap_or(text))
}

fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    match unsigned.split_once('.') {
        Some((whole, frac)) => is_digits(whole) && is_digits(frac),
        None => false,
    }
}

fn strip_quotes(text: &str) -> Option<&str> {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_blank_and_whitespace() {
        assert_eq!(classify_line(""), Line::Blank);
        assert_eq!(classify_line("   \t"), Line::Blank);
    }

    #[test]
    fn classify_indented_comment() {
        assert_eq!(classify_line("   // hello  "), Line::Comment("// hello"));
    }

    #[test]
    fn classify_header_trims_interior() {
        assert_eq!(classify_line("  [ Display ]  "), Line::Header("Display"));
        assert_eq!(classify_line("[]"), Line::Header(""));
    }

    #[test]
    fn classify_unclosed_bracket_is_malformed() {
        assert_eq!(classify_line("[Display"), Line::Malformed);
    }

    #[test]
    fn classify_key_value_splits_on_first_equals() {
        assert_eq!(
            classify_line("expr = a=b"),
            Line::KeyValue {
                key: "expr",
                value: "a=b",
                inline_comment: None,
            }
        );
    }

    #[test]
    fn classify_inline_comment_keeps_marker_and_spacing() {
        assert_eq!(
            classify_line("height = 600   //  pixels  "),
            Line::KeyValue {
                key: "height",
                value: "600",
                inline_comment: Some("//  pixels"),
            }
        );
    }

    #[test]
    fn classify_no_equals_is_malformed() {
        assert_eq!(classify_line("just some words"), Line::Malformed);
    }

    #[test]
    fn integer_literal_rules() {
        assert!(is_integer_literal("0"));
        assert!(is_integer_literal("-12"));
        assert!(!is_integer_literal("-"));
        assert!(!is_integer_literal("+1"));
        assert!(!is_integer_literal("1_000"));
    }

    #[test]
    fn decimal_literal_rules() {
        assert!(is_decimal_literal("3.14"));
        assert!(is_decimal_literal("-0.5"));
        assert!(!is_decimal_literal(".5"));
        assert!(!is_decimal_literal("5."));
        assert!(!is_decimal_literal("1.2.3"));
        assert!(!is_decimal_literal("1e5"));
    }

    #[test]
    fn strip_quotes_needs_both_ends() {
        assert_eq!(strip_quotes("\"a\""), Some("a"));
        assert_eq!(strip_quotes("\"\""), Some(""));
        assert_eq!(strip_quotes("\""), None);
        assert_eq!(strip_quotes("\"a"), None);
    }
}
