//! # palaver-markup
//!
//! The BBCode subsystem of Palaver: a sanitizing renderer, a structural
//! validator, and a tag stripper. This is the one place where user-authored
//! text is turned into HTML, so its ordering contract is strict: every
//! character of the input is HTML-escaped *before* any tag is interpreted,
//! and the renderer only ever introduces markup from its own fixed rule set.
//!
//! ## Modules
//!
//! - `escape` — HTML entity escaping
//! - `render` — ordered fixed-rule BBCode → HTML pipeline
//! - `validate` — LIFO tag-balance check used at write time
//! - `strip` — tag removal for plain-text excerpts

pub mod escape;
pub mod render;
pub mod strip;
pub mod validate;

pub use escape::escape_html;
pub use render::render;
pub use strip::strip;
pub use validate::{MarkupError, validate};
