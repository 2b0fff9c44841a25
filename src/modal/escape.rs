//! Text safety for interpolated dialog strings
//!
//! Every caller-supplied string passes through one of these before it
//! reaches a surface: markup gets entity-escaped, the terminal gets control
//! characters stripped.

use std::borrow::Cow;

/// Escape text for insertion into HTML element content or a quoted attribute
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Remove characters a terminal would interpret instead of printing.
///
/// Line breaks survive, tabs become a single space, every other control
/// character (including ESC, which starts ANSI sequences) is dropped.
pub fn sanitize_for_terminal(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c.is_control() && c != '\n') {
        return Cow::Borrowed(text);
    }

    let sanitized = text
        .chars()
        .filter_map(|c| match c {
            '\n' => Some('\n'),
            '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect();
    Cow::Owned(sanitized)
}

/// Single-line variant used for titles, labels and field content
pub fn sanitize_line(text: &str) -> String {
    sanitize_for_terminal(text).replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_script_tag() {
        let escaped = escape_html("<script>alert('x')</script>");
        assert_eq!(escaped, "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;");
        assert!(!escaped.contains('<'));
    }

    #[test]
    fn test_escape_quotes_and_ampersand() {
        assert_eq!(escape_html(r#"Tom & "Jerry""#), "Tom &amp; &quot;Jerry&quot;");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_html("Delete user?"), Cow::Borrowed(_)));
        assert!(matches!(sanitize_for_terminal("line one\nline two"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_sanitize_strips_escape_sequences() {
        let hostile = "name\x1b[2J\x1b]0;pwned\x07\tend";
        let clean = sanitize_for_terminal(hostile);
        assert!(!clean.contains('\x1b'));
        assert!(!clean.contains('\x07'));
        assert_eq!(clean, "name[2J]0;pwned end");
    }

    #[test]
    fn test_sanitize_line_flattens_newlines() {
        assert_eq!(sanitize_line("a\nb\r\nc"), "a b c");
    }
}
