//! Credential and token configuration.

use serde::{Deserialize, Serialize};

/// Credential hashing and token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Minimum password length accepted at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Minimum zxcvbn score (0-4) accepted at registration.
    #[serde(default = "default_password_score")]
    pub password_min_score: u8,
    /// Length of CSRF tokens in random bytes.
    #[serde(default = "default_csrf_token_bytes")]
    pub csrf_token_bytes: usize,
    /// Lifetime of the CSRF cookie in seconds.
    #[serde(default = "default_csrf_ttl")]
    pub csrf_ttl_seconds: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min(),
            password_min_score: default_password_score(),
            csrf_token_bytes: default_csrf_token_bytes(),
            csrf_ttl_seconds: default_csrf_ttl(),
        }
    }
}

fn default_password_min() -> usize {
    8
}

fn default_password_score() -> u8 {
    3
}

fn default_csrf_token_bytes() -> usize {
    32
}

fn default_csrf_ttl() -> u64 {
    3600
}
