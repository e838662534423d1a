//! External Provider Ports
//!
//! Ports for the two shared external resources the service depends on.
//!
//! ## Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | CacheProvider | Key-value cache in front of full-collection reads |
//! | VariantStoreProvider | Durable document store, source of truth |

/// Cache provider port
pub mod cache;
/// Variant store provider port
pub mod variant_store;

// Re-export provider ports for convenience
pub use cache::{CacheEntryConfig, CacheProvider};
pub use variant_store::VariantStoreProvider;
