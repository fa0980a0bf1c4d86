//! Tag removal for plain-text excerpts and previews.

use std::sync::LazyLock;

use regex::Regex;

/// Any `[name]`, `[/name]`, or `[name=value]` span, for any word-character
/// name, not just the six render-known tags.
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[/?\w+(?:=[^\]]+)?\]").unwrap());

/// Removes every BBCode-shaped tag, leaving interior text and all non-tag
/// brackets untouched.
///
/// The output is **not** HTML-escaped; callers placing it in an HTML
/// context must escape it themselves.
pub fn strip(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    ANY_TAG.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_known_tags() {
        assert_eq!(strip("[b]x[/b] y"), "x y");
    }

    #[test]
    fn strips_unknown_tags_too() {
        assert_eq!(strip("[spoiler]boo[/spoiler]"), "boo");
    }

    #[test]
    fn strips_value_form() {
        assert_eq!(strip("[url=https://example.com]link[/url]"), "link");
        assert_eq!(strip("[quote=author]said[/quote]"), "said");
    }

    #[test]
    fn leaves_non_tag_brackets() {
        assert_eq!(strip("a [not a tag] b"), "a [not a tag] b");
    }

    #[test]
    fn does_not_escape_html() {
        assert_eq!(strip("[b]<em>[/b]"), "<em>");
    }

    #[test]
    fn empty_input() {
        assert_eq!(strip(""), "");
    }
}
