//! Configuration types
//!
//! Startup configuration for the engine, validated before use. With the
//! `serde` feature the configuration can be persisted as postcard binary.

#[cfg(feature = "serde")]
pub mod store;
pub mod types;

pub use types::*;
