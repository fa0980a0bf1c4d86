//! Session cookie string builders.
//!
//! The token travels as an `HttpOnly`, `SameSite=Lax` cookie; the web layer
//! attaches these values verbatim to `Set-Cookie`.

use palaver_core::config::session::SessionConfig;

/// Builds the Set-Cookie value establishing a session.
pub fn session_cookie(config: &SessionConfig, token: &str) -> String {
    format!(
        "{}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        config.cookie_name,
        config.ttl_seconds()
    )
}

/// Builds the Set-Cookie value clearing the session cookie.
pub fn clear_session_cookie(config: &SessionConfig) -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        config.cookie_name
    )
}
