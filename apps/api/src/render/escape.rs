//! HTML escaping for user-supplied text.
//!
//! Every string a user typed passes through [`escape_html`] before it is
//! embedded in generated markup. The published site is served as a raw HTML
//! document, so an unescaped value here is an injection vector, not a
//! cosmetic bug.

/// Escapes the five HTML-significant characters. Everything else passes
/// through untouched, newlines included — layout preserves those with
/// `white-space: pre-wrap`, not `<br>` insertion.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(escape_html("Senior Engineer"), "Senior Engineer");
    }

    #[test]
    fn test_script_tag_is_neutralized() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_ampersand_escaped_first() {
        // Pre-escaped input must not double-resolve: "&lt;" stays literal.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_attribute_breakout_characters_escaped() {
        assert_eq!(escape_html(r#""onload="x"#), "&quot;onload=&quot;x");
    }

    #[test]
    fn test_newlines_survive() {
        assert_eq!(escape_html("line one\nline two"), "line one\nline two");
    }
}
