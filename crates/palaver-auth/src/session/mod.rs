//! Session lifecycle management.

pub mod cookie;
pub mod manager;

pub use manager::{SessionManager, SessionRecord};
