//! CSRF protection over the double-submit cookie pattern.
//!
//! The client holds two artifacts: the cleartext token (echoed back in a
//! `csrf_token` form field or an `x-csrf-token` header on every mutating
//! request) and a cookie carrying only the token's SHA-256 digest. Verify
//! recomputes the digest of the presented token and compares. A missing
//! token, missing cookie, or mismatch are all the same `false` — callers
//! cannot tell which factor failed.

use palaver_core::config::security::SecurityConfig;

use crate::token::{generate_token, hash_token};

/// Name of the cookie carrying the CSRF token digest.
pub const CSRF_COOKIE_NAME: &str = "csrf_token";

/// Name of the form field / header carrying the cleartext token.
pub const CSRF_FIELD_NAME: &str = "csrf_token";

/// A freshly issued CSRF pair.
#[derive(Debug, Clone)]
pub struct CsrfPair {
    /// Cleartext token, embedded in the page for the client to echo back.
    pub token: String,
    /// Digest to be stored in the client's cookie.
    pub digest: String,
}

/// Issues and verifies CSRF tokens.
#[derive(Debug, Clone)]
pub struct CsrfGuard {
    /// Token length in random bytes.
    token_bytes: usize,
    /// Cookie lifetime in seconds.
    ttl_seconds: u64,
}

impl CsrfGuard {
    /// Creates a new guard from security configuration.
    pub fn new(config: &SecurityConfig) -> Self {
        Self {
            token_bytes: config.csrf_token_bytes,
            ttl_seconds: config.csrf_ttl_seconds,
        }
    }

    /// Mints a new token and its storage digest.
    pub fn issue(&self) -> CsrfPair {
        let token = generate_token(self.token_bytes);
        let digest = hash_token(&token);
        CsrfPair { token, digest }
    }

    /// Verifies a presented token against the digest from the cookie.
    /// Either side missing, or any mismatch, is `false`.
    pub fn verify(&self, presented: Option<&str>, stored_digest: Option<&str>) -> bool {
        match (presented, stored_digest) {
            (Some(token), Some(digest)) if !token.is_empty() && !digest.is_empty() => {
                hash_token(token) == digest
            }
            _ => false,
        }
    }

    /// Builds the Set-Cookie value carrying the digest.
    pub fn cookie(&self, digest: &str) -> String {
        format!(
            "{CSRF_COOKIE_NAME}={digest}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.ttl_seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> CsrfGuard {
        CsrfGuard::new(&SecurityConfig::default())
    }

    #[test]
    fn issued_pair_verifies() {
        let guard = guard();
        let pair = guard.issue();
        assert!(guard.verify(Some(&pair.token), Some(&pair.digest)));
    }

    #[test]
    fn foreign_token_is_rejected() {
        let guard = guard();
        let pair = guard.issue();
        let other = guard.issue();
        assert!(!guard.verify(Some(&other.token), Some(&pair.digest)));
    }

    #[test]
    fn missing_sides_are_rejected() {
        let guard = guard();
        let pair = guard.issue();
        assert!(!guard.verify(None, Some(&pair.digest)));
        assert!(!guard.verify(Some(&pair.token), None));
        assert!(!guard.verify(None, None));
        assert!(!guard.verify(Some(""), Some("")));
    }

    #[test]
    fn cookie_carries_digest_and_attributes() {
        let guard = guard();
        let cookie = guard.cookie("deadbeef");
        assert!(cookie.starts_with("csrf_token=deadbeef;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=3600"));
    }
}
