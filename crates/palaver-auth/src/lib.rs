//! # palaver-auth
//!
//! The credential and session trust boundary of the Palaver forum.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and registration policy
//! - `token` — CSPRNG token generation and SHA-256 token digests
//! - `csrf` — CSRF token issue/verify over the double-submit cookie pattern
//! - `ratelimit` — sliding-window request limiter over the key-value store
//! - `session` — session lifecycle (create, read-with-refresh, delete)
//! - `identity` — client IP/user-agent resolution from proxy headers
//! - `role` — forum roles and moderation capability checks

pub mod csrf;
pub mod identity;
pub mod password;
pub mod ratelimit;
pub mod role;
pub mod session;
pub mod token;

pub use csrf::CsrfGuard;
pub use identity::ClientInfo;
pub use password::{PasswordHasher, PasswordPolicy};
pub use ratelimit::{RateLimitAction, RateLimiter};
pub use role::Role;
pub use session::{SessionManager, SessionRecord};
