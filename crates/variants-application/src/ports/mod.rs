//! Application Port Interfaces
//!
//! ## Organization
//!
//! - **registry/** - Auto-registration system for plugin providers
//! - **providers** - Provider ports re-exported from the domain layer

/// Provider registry for dynamic provider discovery
pub mod registry;

/// Provider ports, re-exported from the domain
pub mod providers {
    pub use variants_domain::ports::providers::*;
}

pub use providers::{CacheEntryConfig, CacheProvider, VariantStoreProvider};
