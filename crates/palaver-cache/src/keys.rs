//! Cache key builders for all Palaver store entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

/// Key for a session record, looked up by the bearer token itself.
pub fn session(token: &str) -> String {
    format!("session:{token}")
}

/// Key for a rate limit window, per action and client identity.
pub fn rate_limit(action: &str, identity: &str) -> String {
    format!("rate:{action}:{identity}")
}
