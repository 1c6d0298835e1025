//! Escaping of raw export text for embedding in JSON string literals.
//!
//! The export encodes a literal quote as a doubled quote (`""`), carries
//! literal tabs inside field values, and occasionally contains stray
//! control characters. [`escape_json`] turns such text into a valid JSON
//! string-literal body:
//!
//! - every backslash is doubled
//! - a doubled-quote pair becomes one `\"`; a lone quote is escaped the
//!   same way
//! - a literal tab becomes the two characters `\t`
//! - any other ASCII control character is dropped, with a warning naming
//!   the code point and its position

use tracing::warn;

/// Escape `text` so that wrapping it in double quotes yields a valid
/// JSON string literal.
pub fn escape_json(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut pos = 0usize;
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => {
                // The export writes a literal quote as ""; consume the
                // partner when present.
                if chars.peek() == Some(&'"') {
                    chars.next();
                    pos += 1;
                }
                out.push_str("\\\"");
            }
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 32 => {
                warn!(
                    "dropping control character {:#04x} at position {}",
                    c as u32, pos
                );
            }
            c => out.push(c),
        }
        pos += 1;
    }
    out
}
