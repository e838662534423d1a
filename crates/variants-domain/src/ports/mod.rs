//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the domain and external layers.
//! High-level modules define the interfaces; providers implement them.

/// External service provider ports
pub mod providers;

pub use providers::{CacheEntryConfig, CacheProvider, VariantStoreProvider};
