//! # palaver-core
//!
//! Core crate for the Palaver forum. Contains the key-value store trait,
//! configuration schemas, and the unified error system shared by the
//! markup, cache, and auth crates.
//!
//! This crate has **no** internal dependencies on other Palaver crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
