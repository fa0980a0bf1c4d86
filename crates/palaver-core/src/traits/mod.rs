//! Shared traits implemented across Palaver crates.

pub mod cache;

pub use cache::CacheProvider;
