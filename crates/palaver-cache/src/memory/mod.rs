//! In-memory store backend.

pub mod store;

pub use store::MemoryCacheProvider;
