//! JSON string escaping for the wire format.
//!
//! JSON carries UTF-8 natively, so only the JSON special characters and
//! control characters need escaping. Multi-byte UTF-8 sequences pass
//! through unchanged — no re-encoding, no normalization.

/// Escape a string for embedding in a JSON string literal.
///
/// `None` yields an empty string. Escaping rules:
/// - `"` and `\` get a backslash escape
/// - backspace, form feed, newline, carriage return and tab use their
///   short escapes (`\b` `\f` `\n` `\r` `\t`)
/// - any other character below 0x20 becomes `\u00xx` (lowercase hex)
/// - everything from 0x20 up, including all non-ASCII, passes through
///
/// Total function — always succeeds, for any input.
pub fn escape_json(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_input_yields_empty_string() {
        assert_eq!(escape_json(None), "");
    }

    #[test]
    fn plain_ascii_passes_through() {
        assert_eq!(escape_json(Some("hello world")), "hello world");
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        assert_eq!(escape_json(Some(r#"a"b"#)), r#"a\"b"#);
        assert_eq!(escape_json(Some(r"a\b")), r"a\\b");
    }

    #[test]
    fn short_escapes_for_common_controls() {
        assert_eq!(escape_json(Some("a\nb\tc\r")), "a\\nb\\tc\\r");
        assert_eq!(escape_json(Some("\u{08}\u{0c}")), "\\b\\f");
    }

    #[test]
    fn other_controls_use_lowercase_u_escapes() {
        assert_eq!(escape_json(Some("\u{01}")), "\\u0001");
        assert_eq!(escape_json(Some("\u{1f}")), "\\u001f");
        assert_eq!(escape_json(Some("\u{1b}[0m")), "\\u001b[0m");
    }

    #[test]
    fn utf8_passes_through_unchanged() {
        assert_eq!(escape_json(Some("héllo wörld")), "héllo wörld");
        assert_eq!(escape_json(Some("日本語")), "日本語");
        assert_eq!(escape_json(Some("🦀")), "🦀");
    }
}
