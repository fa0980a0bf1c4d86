//! HTML entity escaping.

/// Escapes the five HTML-significant characters (`&`, `<`, `>`, `"`, `'`).
///
/// Square brackets are deliberately not in the escape set: they delimit
/// BBCode tags and must stay matchable by the render rules after escaping.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five_characters() {
        assert_eq!(
            escape_html(r#"<a href="x" onclick='y'>&"#),
            "&lt;a href=&quot;x&quot; onclick=&#039;y&#039;&gt;&amp;"
        );
    }

    #[test]
    fn ampersand_is_not_double_escaped_in_one_pass() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn brackets_pass_through() {
        assert_eq!(escape_html("[b]x[/b]"), "[b]x[/b]");
    }

    #[test]
    fn empty_input() {
        assert_eq!(escape_html(""), "");
    }
}
