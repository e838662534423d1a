//! Composition root
//!
//! Resolves the configured providers from the linkme registry and wires
//! them into the application services.
//!
//! ```text
//! AppConfig → Resolvers → linkme registry → Arc<dyn Provider> → Services
//! ```

pub mod bootstrap;
pub mod provider_resolvers;

pub use bootstrap::{init_app, init_test_app, AppContext};
pub use provider_resolvers::{CacheProviderResolver, VariantStoreProviderResolver};
