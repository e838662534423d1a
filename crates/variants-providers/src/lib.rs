//! # Variants API - Provider Implementations
//!
//! This crate contains the user-selectable backends for the two ports the
//! service depends on. Each provider implements a trait defined in
//! `variants-domain` and registers a factory into the linkme slices declared
//! by `variants-application`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache | `CacheProvider` | Moka, Redis, Null |
//! | Variant Store | `VariantStoreProvider` | InMemory, MongoDB |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! variants-providers = { version = "0.1", features = ["cache-redis", "store-mongodb"] }
//! ```

// Re-export domain types commonly used with providers
pub use variants_domain::error::{Error, Result};
pub use variants_domain::ports::providers::{CacheProvider, VariantStoreProvider};

/// Provider-specific constants
pub mod constants;

/// Cache provider implementations
pub mod cache;

/// Variant store provider implementations
pub mod store;
