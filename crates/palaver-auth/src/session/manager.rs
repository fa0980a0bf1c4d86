//! Session creation, lookup, and revocation over the key-value store.
//!
//! A session is keyed by its bearer token and holds a snapshot of the user
//! at login time. Reads slide the TTL forward, so an active user stays
//! logged in; the absolute cutoff is enforced by the store expiring the
//! record. The refresh is a read-then-write without locking: two
//! concurrent reads may both rewrite the record, which is harmless since
//! last-write-wins on `last_seen_at` is acceptable.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use palaver_cache::keys;
use palaver_core::config::session::SessionConfig;
use palaver_core::error::AppError;
use palaver_core::result::AppResult;
use palaver_core::traits::cache::CacheProvider;

use crate::identity::ClientInfo;
use crate::role::Role;
use crate::token::generate_token;

/// The session record stored against the bearer token.
///
/// `role` and `username` are snapshots from login time; changes to the
/// underlying user are not reflected until the session is recreated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The session token itself.
    pub id: String,
    /// Owning user id.
    pub user_id: i64,
    /// Username snapshot.
    pub username: String,
    /// Role snapshot.
    pub role: Role,
    /// Creation time, epoch milliseconds.
    pub created_at: i64,
    /// Last authenticated read, epoch milliseconds.
    pub last_seen_at: i64,
    /// Client IP at creation.
    pub ip: String,
    /// Client user-agent at creation.
    pub user_agent: String,
}

/// Issues, reads, refreshes, and revokes login sessions.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Backing key-value store, injected.
    store: Arc<dyn CacheProvider>,
    /// Session configuration.
    config: SessionConfig,
}

impl SessionManager {
    /// Creates a new session manager over the given store.
    pub fn new(store: Arc<dyn CacheProvider>, config: SessionConfig) -> Self {
        Self { store, config }
    }

    /// The configured session lifetime.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.config.ttl_seconds())
    }

    /// Creates a session for a freshly authenticated user and returns the
    /// bearer token to be set as the client's cookie.
    pub async fn create_session(
        &self,
        user_id: i64,
        username: &str,
        role: Role,
        client: &ClientInfo,
    ) -> AppResult<String> {
        let token = generate_token(self.config.token_bytes);
        let now = Utc::now().timestamp_millis();

        let record = SessionRecord {
            id: token.clone(),
            user_id,
            username: username.to_string(),
            role,
            created_at: now,
            last_seen_at: now,
            ip: client.ip.clone(),
            user_agent: client.user_agent.clone(),
        };

        let serialized = serde_json::to_string(&record)
            .map_err(|e| AppError::session(format!("Failed to serialize session: {e}")))?;

        self.store
            .set(&keys::session(&token), &serialized, self.ttl())
            .await?;

        info!(user_id, username, %role, "Session created");
        Ok(token)
    }

    /// Looks up a session by its bearer token. A hit refreshes
    /// `last_seen_at` and renews the TTL from now (sliding expiry on read).
    ///
    /// Returns `None` for unknown or expired tokens, for records that fail
    /// to decode, and when the store is unavailable — an unreachable store
    /// means no identity, never a guessed one.
    pub async fn get_session(&self, token: &str) -> Option<SessionRecord> {
        if token.is_empty() {
            return None;
        }

        let key = keys::session(token);

        let raw = match self.store.get(&key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Store unavailable, treating session as absent");
                return None;
            }
        };

        let mut record: SessionRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "Undecodable session record, treating as absent");
                return None;
            }
        };

        record.last_seen_at = Utc::now().timestamp_millis();

        match serde_json::to_string(&record) {
            Ok(serialized) => {
                if let Err(e) = self.store.set(&key, &serialized, self.ttl()).await {
                    // The identity was read successfully; a failed refresh
                    // only means the TTL does not slide this time.
                    warn!(error = %e, "Failed to refresh session record");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize refreshed session"),
        }

        debug!(user_id = record.user_id, "Session resolved");
        Some(record)
    }

    /// Removes a session unconditionally. Idempotent: deleting an unknown
    /// token succeeds.
    pub async fn delete_session(&self, token: &str) -> AppResult<()> {
        if token.is_empty() {
            return Ok(());
        }
        self.store.delete(&keys::session(token)).await?;
        info!("Session deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use palaver_cache::memory::MemoryCacheProvider;
    use palaver_core::config::cache::MemoryCacheConfig;

    fn manager() -> SessionManager {
        let provider = MemoryCacheProvider::new(&MemoryCacheConfig::default(), 60);
        SessionManager::new(Arc::new(provider), SessionConfig::default())
    }

    fn client() -> ClientInfo {
        ClientInfo::resolve(Some("203.0.113.9"), None, Some("test-agent"))
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let manager = manager();
        let token = manager
            .create_session(7, "alice", Role::Moderator, &client())
            .await
            .unwrap();

        assert_eq!(token.len(), 64);

        let record = manager.get_session(&token).await.unwrap();
        assert_eq!(record.id, token);
        assert_eq!(record.user_id, 7);
        assert_eq!(record.username, "alice");
        assert_eq!(record.role, Role::Moderator);
        assert_eq!(record.ip, "203.0.113.9");
        assert_eq!(record.user_agent, "test-agent");
    }

    #[tokio::test]
    async fn unknown_token_resolves_to_none() {
        let manager = manager();
        assert!(manager.get_session("never-issued").await.is_none());
        assert!(manager.get_session("").await.is_none());
    }

    #[tokio::test]
    async fn delete_revokes_the_session() {
        let manager = manager();
        let token = manager
            .create_session(1, "bob", Role::User, &client())
            .await
            .unwrap();

        assert!(manager.get_session(&token).await.is_some());
        manager.delete_session(&token).await.unwrap();
        assert!(manager.get_session(&token).await.is_none());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let manager = manager();
        manager.delete_session("never-issued").await.unwrap();
        manager.delete_session("").await.unwrap();
    }

    #[tokio::test]
    async fn read_refreshes_last_seen() {
        let manager = manager();
        let token = manager
            .create_session(2, "carol", Role::User, &client())
            .await
            .unwrap();

        let first = manager.get_session(&token).await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        let second = manager.get_session(&token).await.unwrap();

        assert!(second.last_seen_at >= first.last_seen_at);
        assert_eq!(second.created_at, first.created_at);
    }

    #[tokio::test]
    async fn tokens_are_unique_per_session() {
        let manager = manager();
        let a = manager
            .create_session(3, "dave", Role::User, &client())
            .await
            .unwrap();
        let b = manager
            .create_session(3, "dave", Role::User, &client())
            .await
            .unwrap();
        assert_ne!(a, b);
    }
}
