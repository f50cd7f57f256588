//! HTML escaping for values interpolated into the receipt.
//!
//! [`NamedEntities`] is registered in `askama.toml` as the escaper for
//! `.html` templates.

use std::borrow::Cow;
use std::fmt;

/// Escapes `& < > " '` into HTML character references.
///
/// Returns the input untouched (borrowed) when nothing needs escaping.
///
/// ```rust
/// use ticket_core::escape::escape_html;
///
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_html("Tom & Jerry's"), "Tom &amp; Jerry&apos;s");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// askama escaper that writes named references (`&apos;`, `&quot;`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedEntities;

impl askama_escape::Escaper for NamedEntities {
    fn write_escaped<W>(&self, mut fmt: W, string: &str) -> fmt::Result
    where
        W: fmt::Write,
    {
        fmt.write_str(&escape_html(string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_special_characters() {
        assert_eq!(
            escape_html(r#"& < > " '"#),
            "&amp; &lt; &gt; &quot; &apos;"
        );
    }

    #[test]
    fn test_no_raw_specials_remain() {
        let input = r#"<a href="x">Tom & 'Jerry'</a>"#;
        let escaped = escape_html(input);
        let without_refs = escaped
            .replace("&amp;", "")
            .replace("&lt;", "")
            .replace("&gt;", "")
            .replace("&quot;", "")
            .replace("&apos;", "");
        assert!(!without_refs.contains(['&', '<', '>', '"', '\'']));
    }

    #[test]
    fn test_ampersand_escaped_once() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_borrowed_when_clean() {
        assert!(matches!(escape_html("Tienda X"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escaper_writes_named_references() {
        use askama_escape::Escaper;

        let mut out = String::new();
        NamedEntities.write_escaped(&mut out, "O'Brien & <Hijos>").unwrap();
        assert_eq!(out, "O&apos;Brien &amp; &lt;Hijos&gt;");
    }
}
