//! Application Service Interfaces
//!
//! Contracts the HTTP layer consumes. Implementations live in
//! [`crate::use_cases`].

pub mod variants;

pub use variants::{VariantReadServiceInterface, VariantWriteServiceInterface};
