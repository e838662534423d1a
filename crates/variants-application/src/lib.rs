//! Application Layer - Variants API
//!
//! This crate holds the cache-aside coordination logic of the service:
//! how a full-collection read is served from cache or store, and how
//! mutations interact with the cached snapshot.
//!
//! ## Use Cases
//!
//! - [`VariantReadServiceImpl`]: cache-aside read path
//! - [`VariantWriteServiceImpl`]: store mutations plus the cache write policy
//!
//! ## Ports (Interfaces)
//!
//! - `domain_services::*`: service interfaces consumed by the HTTP layer
//! - `ports::registry::*`: linkme slices providers register into
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `variants-domain`: entities, value objects and provider ports
//! - Pure Rust libraries for async, serialization, logging

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
