//! BBCode to HTML rendering over pre-escaped text.
//!
//! The pipeline runs in a fixed order and each step's safety depends on the
//! previous one:
//!
//! 1. The whole input is HTML-escaped, so no user-supplied text can form a
//!    live tag regardless of what later steps do.
//! 2. The rules below rewrite the escaped `[tag]...[/tag]` spans into the
//!    whitelisted HTML elements. Inline tags (`b`, `i`, `u`, `url`) match
//!    within a single line; `quote` and `code` spans may cross lines.
//! 3. Remaining newlines become `<br>`, after substitution, so line breaks
//!    inside code blocks are converted too.
//!
//! Unknown bracket syntax like `[spoiler]` is left as literal escaped text.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use url::Url;

use crate::escape::escape_html;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\[b\](.*?)\[/b\]").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\[i\](.*?)\[/i\]").unwrap());
static UNDERLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\[u\](.*?)\[/u\]").unwrap());
static URL_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[url\](.*?)\[/url\]").unwrap());
static URL_LABELED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[url=(.*?)\](.*?)\[/url\]").unwrap());
static QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\[quote\](.*?)\[/quote\]").unwrap());
static QUOTE_ATTRIBUTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\[quote=(.*?)\](.*?)\[/quote\]").unwrap());
static CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\[code\](.*?)\[/code\]").unwrap());

/// One substitution rule: a pattern over escaped text and a builder that
/// only ever emits whitelisted HTML around already-escaped content.
type Rule = (&'static LazyLock<Regex>, fn(&Captures) -> String);

/// The fixed rule sequence. Order matters: the bare `[url]` and `[quote]`
/// forms are tried before their `=value` variants, which cannot overlap
/// because `[url]` does not match `[url=`.
static RULES: [Rule; 8] = [
    (&BOLD, bold),
    (&ITALIC, italic),
    (&UNDERLINE, underline),
    (&URL_BARE, url_bare),
    (&URL_LABELED, url_labeled),
    (&QUOTE, quote),
    (&QUOTE_ATTRIBUTED, quote_attributed),
    (&CODE, code),
];

/// Renders BBCode markup to safe HTML. Total: empty input yields empty
/// output, and no input can produce unescaped user-controlled HTML.
pub fn render(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Escape everything first; the rules below only see inert text.
    let mut html = escape_html(text);

    for &(pattern, apply) in RULES.iter() {
        html = pattern
            .replace_all(&html, |caps: &Captures| apply(caps))
            .into_owned();
    }

    // Newlines last, so breaks inside code blocks are converted as well.
    html.replace('\n', "<br>")
}

fn bold(caps: &Captures) -> String {
    format!("<strong>{}</strong>", &caps[1])
}

fn italic(caps: &Captures) -> String {
    format!("<em>{}</em>", &caps[1])
}

fn underline(caps: &Captures) -> String {
    format!("<u>{}</u>", &caps[1])
}

fn url_bare(caps: &Captures) -> String {
    let trimmed = caps[1].trim();
    if is_safe_url(trimmed) {
        format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(trimmed),
            escape_html(trimmed)
        )
    } else {
        // Invalid URL: emit the whole original span as inert text, never a
        // partial substitution.
        escape_html(&caps[0])
    }
}

fn url_labeled(caps: &Captures) -> String {
    let trimmed = caps[1].trim();
    if is_safe_url(trimmed) {
        format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(trimmed),
            &caps[2]
        )
    } else {
        escape_html(&caps[0])
    }
}

fn quote(caps: &Captures) -> String {
    format!("<blockquote class=\"bbcode-quote\">{}</blockquote>", &caps[1])
}

fn quote_attributed(caps: &Captures) -> String {
    // The author is re-escaped even though the whole document already was:
    // attribution text must never be interpretable as markup.
    format!(
        "<blockquote class=\"bbcode-quote\"><cite>{} wrote:</cite>{}</blockquote>",
        escape_html(&caps[1]),
        &caps[2]
    )
}

fn code(caps: &Captures) -> String {
    // Code bodies are re-escaped so interior literal entities survive as
    // typed, preserving the original formatting exactly.
    format!(
        "<pre class=\"bbcode-code\"><code>{}</code></pre>",
        escape_html(&caps[1])
    )
}

/// Accepts only absolute URLs with an `http` or `https` scheme. Anything
/// else (script-invoking schemes, relative paths, malformed syntax) is
/// rejected and downgrades the enclosing tag to inert text.
fn is_safe_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
