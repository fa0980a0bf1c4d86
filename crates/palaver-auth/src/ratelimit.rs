//! Sliding-window rate limiting over the key-value store.
//!
//! Each `(action, identity)` pair owns a JSON list of request timestamps in
//! epoch milliseconds. A check reads the list, prunes entries older than the
//! action's window, and either denies (at capacity, nothing written) or
//! appends the current timestamp and writes the list back with a TTL equal
//! to the window, so idle keys expire on their own.
//!
//! Two deliberate weakenings, both inherited from the original design:
//!
//! - **Fail open.** If the store is unavailable the request is allowed.
//!   Rate limiting is a non-critical control; blocking all traffic on a
//!   store outage would be worse than briefly not throttling. Every
//!   occurrence is logged at `warn`.
//! - **No locking.** The read-modify-write sequence is not atomic, so two
//!   concurrent requests can both observe the same window and both be
//!   allowed, overshooting the limit by the burst width. Do not add
//!   distributed locking to close this; the approximation is accepted.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use palaver_cache::keys;
use palaver_core::config::ratelimit::{RateLimitConfig, RateLimitPolicy};
use palaver_core::traits::cache::CacheProvider;

/// The set of throttled actions and their key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateLimitAction {
    /// Login attempts.
    Login,
    /// Account registration.
    Register,
    /// New posts and replies.
    Post,
    /// Private messages.
    Pm,
    /// Search queries.
    Search,
}

impl RateLimitAction {
    /// Stable name used in store keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Post => "post",
            Self::Pm => "pm",
            Self::Search => "search",
        }
    }
}

impl std::fmt::Display for RateLimitAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-action sliding-window request limiter.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    /// Backing key-value store, injected.
    store: Arc<dyn CacheProvider>,
    /// Per-action policies.
    config: RateLimitConfig,
}

impl RateLimiter {
    /// Creates a new limiter over the given store.
    pub fn new(store: Arc<dyn CacheProvider>, config: RateLimitConfig) -> Self {
        Self { store, config }
    }

    /// The policy for an action.
    pub fn policy(&self, action: RateLimitAction) -> RateLimitPolicy {
        match action {
            RateLimitAction::Login => self.config.login,
            RateLimitAction::Register => self.config.register,
            RateLimitAction::Post => self.config.post,
            RateLimitAction::Pm => self.config.pm,
            RateLimitAction::Search => self.config.search,
        }
    }

    /// Checks whether a request by `identity` for `action` is allowed now.
    /// A denial performs no writes; the caller must surface it as a
    /// "too many requests" outcome with no side effects.
    pub async fn allow(&self, action: RateLimitAction, identity: &str) -> bool {
        self.allow_at(action, identity, Utc::now().timestamp_millis())
            .await
    }

    async fn allow_at(&self, action: RateLimitAction, identity: &str, now_ms: i64) -> bool {
        let policy = self.policy(action);
        let key = keys::rate_limit(action.as_str(), identity);

        let stored = match self.store.get(&key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(%action, identity, error = %e, "Store unavailable, rate limiter failing open");
                return true;
            }
        };

        let mut requests: Vec<i64> = stored
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default();

        requests.retain(|&ts| now_ms - ts < policy.window_ms());

        if requests.len() >= policy.max_requests {
            debug!(%action, identity, count = requests.len(), "Rate limit exceeded");
            return false;
        }

        requests.push(now_ms);

        let serialized = match serde_json::to_string(&requests) {
            Ok(json) => json,
            Err(e) => {
                warn!(%action, identity, error = %e, "Failed to serialize window, failing open");
                return true;
            }
        };

        let ttl = std::time::Duration::from_secs(policy.window_seconds);
        if let Err(e) = self.store.set(&key, &serialized, ttl).await {
            warn!(%action, identity, error = %e, "Store unavailable, rate limiter failing open");
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use palaver_cache::memory::MemoryCacheProvider;
    use palaver_core::config::cache::MemoryCacheConfig;

    fn limiter() -> RateLimiter {
        let provider = MemoryCacheProvider::new(&MemoryCacheConfig::default(), 60);
        RateLimiter::new(Arc::new(provider), RateLimitConfig::default())
    }

    #[tokio::test]
    async fn allows_up_to_limit_then_denies() {
        let limiter = limiter();
        let now = 1_000_000;

        // Login policy: 5 per 15 minutes.
        for i in 0..5 {
            assert!(
                limiter
                    .allow_at(RateLimitAction::Login, "203.0.113.9", now + i)
                    .await
            );
        }
        assert!(
            !limiter
                .allow_at(RateLimitAction::Login, "203.0.113.9", now + 5)
                .await
        );
    }

    #[tokio::test]
    async fn window_reopens_after_expiry() {
        let limiter = limiter();
        let now = 1_000_000;
        let window_ms = limiter.policy(RateLimitAction::Login).window_ms();

        for i in 0..5 {
            limiter
                .allow_at(RateLimitAction::Login, "198.51.100.7", now + i)
                .await;
        }
        assert!(
            !limiter
                .allow_at(RateLimitAction::Login, "198.51.100.7", now + 10)
                .await
        );

        // Simulated clock: just past the window, the old entries prune away.
        assert!(
            limiter
                .allow_at(RateLimitAction::Login, "198.51.100.7", now + window_ms)
                .await
        );
    }

    #[tokio::test]
    async fn identities_are_isolated() {
        let limiter = limiter();
        let now = 1_000_000;

        for i in 0..5 {
            limiter
                .allow_at(RateLimitAction::Login, "first", now + i)
                .await;
        }
        assert!(!limiter.allow_at(RateLimitAction::Login, "first", now + 6).await);
        assert!(limiter.allow_at(RateLimitAction::Login, "second", now + 6).await);
    }

    #[tokio::test]
    async fn actions_are_isolated() {
        let limiter = limiter();
        let now = 1_000_000;

        for i in 0..5 {
            limiter
                .allow_at(RateLimitAction::Login, "shared", now + i)
                .await;
        }
        assert!(!limiter.allow_at(RateLimitAction::Login, "shared", now + 6).await);
        assert!(limiter.allow_at(RateLimitAction::Post, "shared", now + 6).await);
    }

    #[tokio::test]
    async fn denial_does_not_extend_the_window() {
        let limiter = limiter();
        let now = 1_000_000;
        let window_ms = limiter.policy(RateLimitAction::Pm).window_ms();

        for i in 0..5 {
            limiter.allow_at(RateLimitAction::Pm, "pm-user", now + i).await;
        }
        // Denied attempts must not be recorded as requests.
        for i in 5..50 {
            assert!(!limiter.allow_at(RateLimitAction::Pm, "pm-user", now + i).await);
        }
        assert!(
            limiter
                .allow_at(RateLimitAction::Pm, "pm-user", now + window_ms)
                .await
        );
    }

    #[tokio::test]
    async fn corrupt_stored_window_is_treated_as_empty() {
        let provider = Arc::new(MemoryCacheProvider::new(&MemoryCacheConfig::default(), 60));
        let limiter = RateLimiter::new(provider.clone(), RateLimitConfig::default());

        provider
            .set(
                &keys::rate_limit("login", "corrupt"),
                "not json",
                std::time::Duration::from_secs(60),
            )
            .await
            .unwrap();

        assert!(limiter.allow_at(RateLimitAction::Login, "corrupt", 1_000).await);
    }

    #[tokio::test]
    async fn fails_open_when_store_errors() {
        #[derive(Debug)]
        struct BrokenStore;

        #[async_trait::async_trait]
        impl CacheProvider for BrokenStore {
            async fn get(&self, _key: &str) -> palaver_core::AppResult<Option<String>> {
                Err(palaver_core::AppError::cache("store down"))
            }
            async fn set(
                &self,
                _key: &str,
                _value: &str,
                _ttl: std::time::Duration,
            ) -> palaver_core::AppResult<()> {
                Err(palaver_core::AppError::cache("store down"))
            }
            async fn set_default(&self, _key: &str, _value: &str) -> palaver_core::AppResult<()> {
                Err(palaver_core::AppError::cache("store down"))
            }
            async fn delete(&self, _key: &str) -> palaver_core::AppResult<()> {
                Err(palaver_core::AppError::cache("store down"))
            }
            async fn exists(&self, _key: &str) -> palaver_core::AppResult<bool> {
                Err(palaver_core::AppError::cache("store down"))
            }
            async fn health_check(&self) -> palaver_core::AppResult<bool> {
                Ok(false)
            }
        }

        let limiter = RateLimiter::new(Arc::new(BrokenStore), RateLimitConfig::default());
        for _ in 0..20 {
            assert!(limiter.allow(RateLimitAction::Login, "anyone").await);
        }
    }
}
