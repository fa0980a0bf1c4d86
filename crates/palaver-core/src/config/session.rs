//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session lifetime in days. The TTL slides forward on every
    /// authenticated read.
    #[serde(default = "default_ttl_days")]
    pub ttl_days: u64,
    /// Length of the session token in random bytes (hex-encoded to twice
    /// as many characters).
    #[serde(default = "default_token_bytes")]
    pub token_bytes: usize,
    /// Name of the session cookie presented to the client.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl SessionConfig {
    /// Session TTL expressed in seconds, as used for store expiry and the
    /// cookie Max-Age attribute.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_days * 24 * 60 * 60
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_days: default_ttl_days(),
            token_bytes: default_token_bytes(),
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_ttl_days() -> u64 {
    30
}

fn default_token_bytes() -> usize {
    32
}

fn default_cookie_name() -> String {
    "session_id".to_string()
}
