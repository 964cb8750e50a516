//! Cog encoder — converts a [`ConfigDocument`] back into cog text.
//!
//! Output layout:
//!
//! - sections in document order; `DEFAULT` has no `[header]` line
//! - one `key = value` line per entry, in key order, with the entry's comment
//!   (if any) appended after a single space
//! - an empty line after every section block
//!
//! Lines are joined with `\n`, so a non-empty document ends with exactly one
//! newline after its final block.
//!
//! # Example
//! ```
//! use cog_core::ConfigDocument;
//!
//! let doc: ConfigDocument = "[Display]\nwidth = 800 // px\n".parse().unwrap();
//! assert_eq!(doc.to_cog_string(), "[Display]\nwidth = 800 // px\n");
//! ```

use crate::document::ConfigDocument;
use crate::types::Value;

/// Encode a document to cog text.
pub fn encode(doc: &ConfigDocument) -> String {
    let mut out = String::new();
    let mut first = true;
    let mut push_line = |out: &mut String, line: &str| {
        if !first {
            out.push('\n');
        }
        first = false;
        out.push_str(line);
    };

    for section in doc.sections() {
        if !section.is_default() {
            push_line(&mut out, &format!("[{}]", section.name()));
        }
        for entry in section.entries() {
            let mut line = format!("{} = {}", entry.key(), format_value(entry.value()));
            if let Some(comment) = entry.comment().filter(|c| !c.is_empty()) {
                line.push(' ');
                line.push_str(comment);
            }
            push_line(&mut out, &line);
        }
        push_line(&mut out, "");
    }

    out
}

/// Format a single value for the right-hand side of `key = value`.
///
/// Strings are wrapped in double quotes verbatim. Embedded quotes are not
/// escaped, so a string containing `"` does not survive a reload unchanged.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Boolean(b) => (if *b { "true" } else { "false" }).to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::String(s) => format!("\"{}\"", s),
    }
}

/// Format a float so it reads back as a float: plain decimal notation (no
/// exponent) that always contains a `.`.
///
/// Non-finite values have no literal form; they are written as `NaN`, `inf`
/// or `-inf` and read back as strings.
fn format_float(f: f64) -> String {
    if !f.is_finite() {
        return f.to_string();
    }
    // `Display` for f64 never uses exponent notation and is the shortest text
    // that parses back to the same bits.
    let s = f.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{}.0", s)
    }
}
