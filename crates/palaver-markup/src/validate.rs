//! Structural tag-balance validation, applied at write time before a post,
//! private message, or signature is accepted.
//!
//! The check is purely structural: tags must close in LIFO order, and only
//! the six known tag names participate. Unrecognized bracketed text is never
//! treated as a tag, so `[foo]` always passes through as literal text.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use palaver_core::error::AppError;

/// Opening or closing token of a known tag, with an optional `=value` part.
static TAG_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[(/?)(b|i|u|url|quote|code)(?:=[^\]]+)?\]").unwrap());

/// A structural markup error, reported to the author as a rejected
/// submission naming the offending tag(s).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// A closing tag appeared without a matching open tag on top of the stack.
    #[error("Mismatched closing tag [/{0}]")]
    MismatchedTag(String),
    /// One or more tags were never closed, outermost first.
    #[error("Unclosed tags: {}", .0.join(", "))]
    UnclosedTags(Vec<String>),
}

impl From<MarkupError> for AppError {
    fn from(err: MarkupError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Validates that every known tag in `text` is balanced in strict LIFO
/// order. Nesting semantics beyond balance are not checked.
pub fn validate(text: &str) -> Result<(), MarkupError> {
    let mut stack: Vec<String> = Vec::new();

    for caps in TAG_TOKEN.captures_iter(text) {
        let is_closing = &caps[1] == "/";
        let name = caps[2].to_lowercase();

        if is_closing {
            if stack.last().is_some_and(|top| *top == name) {
                stack.pop();
            } else {
                return Err(MarkupError::MismatchedTag(name));
            }
        } else {
            stack.push(name);
        }
    }

    if stack.is_empty() {
        Ok(())
    } else {
        Err(MarkupError::UnclosedTags(stack))
    }
}
