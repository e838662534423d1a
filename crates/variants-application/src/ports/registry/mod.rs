//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for plugin providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = redis" → RedisCacheProvider  │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in variants-providers)
//!
//! ```ignore
//! use variants_application::ports::registry::{CacheProviderEntry, CACHE_PROVIDERS};
//!
//! #[linkme::distributed_slice(CACHE_PROVIDERS)]
//! static MOKA_PROVIDER: CacheProviderEntry = CacheProviderEntry {
//!     name: "moka",
//!     description: "Moka in-memory cache",
//!     factory: |config| Ok(Arc::new(MokaCacheProvider::from_config(config))),
//! };
//! ```
//!
//! ### Resolving a Provider (in variants-infrastructure)
//!
//! ```ignore
//! use variants_application::ports::registry::resolve_cache_provider;
//!
//! let config = CacheProviderConfig::new("redis").with_uri("redis://localhost:6379");
//! let provider = resolve_cache_provider(&config)?;
//! ```

pub mod cache;
pub mod variant_store;

// Re-export all registry types and functions
pub use cache::{
    list_cache_providers, resolve_cache_provider, CacheProviderConfig, CacheProviderEntry,
    CACHE_PROVIDERS,
};
pub use variant_store::{
    list_variant_store_providers, resolve_variant_store_provider, VariantStoreProviderConfig,
    VariantStoreProviderEntry, VARIANT_STORE_PROVIDERS,
};
