//! Per-action rate limit configuration.

use serde::{Deserialize, Serialize};

/// A single fixed-window rate limit policy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateLimitPolicy {
    /// Window length in seconds.
    pub window_seconds: u64,
    /// Maximum number of requests allowed within the window.
    pub max_requests: usize,
}

impl RateLimitPolicy {
    /// Window length in milliseconds, matching the stored timestamps.
    pub fn window_ms(&self) -> i64 {
        self.window_seconds as i64 * 1000
    }
}

/// Rate limit policies for every throttled action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Login attempts.
    #[serde(default = "default_login")]
    pub login: RateLimitPolicy,
    /// Account registrations.
    #[serde(default = "default_register")]
    pub register: RateLimitPolicy,
    /// New posts and replies.
    #[serde(default = "default_post")]
    pub post: RateLimitPolicy,
    /// Private messages.
    #[serde(default = "default_pm")]
    pub pm: RateLimitPolicy,
    /// Search queries.
    #[serde(default = "default_search")]
    pub search: RateLimitPolicy,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            login: default_login(),
            register: default_register(),
            post: default_post(),
            pm: default_pm(),
            search: default_search(),
        }
    }
}

fn default_login() -> RateLimitPolicy {
    // 5 attempts per 15 minutes
    RateLimitPolicy {
        window_seconds: 15 * 60,
        max_requests: 5,
    }
}

fn default_register() -> RateLimitPolicy {
    // 3 per hour
    RateLimitPolicy {
        window_seconds: 60 * 60,
        max_requests: 3,
    }
}

fn default_post() -> RateLimitPolicy {
    // 10 posts per minute
    RateLimitPolicy {
        window_seconds: 60,
        max_requests: 10,
    }
}

fn default_pm() -> RateLimitPolicy {
    // 5 PMs per minute
    RateLimitPolicy {
        window_seconds: 60,
        max_requests: 5,
    }
}

fn default_search() -> RateLimitPolicy {
    // 20 searches per minute
    RateLimitPolicy {
        window_seconds: 60,
        max_requests: 20,
    }
}
