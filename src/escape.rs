//! HTML escaping for text content and attribute values.
//!
//! Escaping is unconditional: text and attribute values always pass through
//! here, raw artifacts never do.

use std::borrow::Cow;

/// Escape `&`, `<`, `>`, `"` and `'`.
///
/// Returns the input untouched when nothing needs replacing.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(needs_escape) else {
        return Cow::Borrowed(input);
    };

    let mut escaped = String::with_capacity(input.len() + 16);
    escaped.push_str(&input[..first]);
    for ch in input[first..].chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

fn needs_escape(ch: char) -> bool {
    matches!(ch, '&' | '<' | '>' | '"' | '\'')
}
