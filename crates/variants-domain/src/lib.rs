//! # Variants API - Domain Layer
//!
//! Core types and contracts for the variant collection service. This crate
//! has no knowledge of HTTP, Redis or MongoDB; it only defines what the
//! outer layers must provide.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | The [`Variant`](entities::Variant) document |
//! | [`value_objects`] | Read provenance and mutation outcomes |
//! | [`ports`] | Cache and document store provider contracts |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Cache keys and shared literals |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::Variant;
pub use error::{Error, Result};
pub use value_objects::{
    InsertedVariant, ListProvenance, MutationOutcome, ReplaceOutcome, VariantListing,
};
