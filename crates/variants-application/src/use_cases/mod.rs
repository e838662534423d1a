//! Use Cases
//!
//! Application service implementations coordinating the cache and the
//! document store.

pub mod policy;
pub mod variant_read_service;
pub mod variant_write_service;

pub use policy::{CacheWritePolicy, ReadPathOptions};
pub use variant_read_service::VariantReadServiceImpl;
pub use variant_write_service::VariantWriteServiceImpl;
