//! # palaver-cache
//!
//! Key-value store providers for Palaver. The rate limiter and session
//! manager talk to a [`CacheProvider`] behind the [`CacheManager`]; the
//! backend is selected by configuration:
//!
//! - `redis` — production backend over a `ConnectionManager`
//! - `memory` — in-process backend for tests and local development
//!
//! [`CacheProvider`]: palaver_core::traits::cache::CacheProvider

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::CacheManager;
