//! Variant Store Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`InMemoryVariantStore`] | Local | Process-local collection for development and tests |
//! | [`MongoVariantStore`] | Durable | MongoDB collection with a unique `variant_id` index |

pub mod memory;
#[cfg(feature = "store-mongodb")]
pub mod mongodb;

pub use memory::InMemoryVariantStore;
#[cfg(feature = "store-mongodb")]
pub use mongodb::MongoVariantStore;
