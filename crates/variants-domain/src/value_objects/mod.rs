//! Domain Value Objects
//!
//! Immutable values describing the results of read and write operations.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ListProvenance`] | Whether a listing came from cache or store |
//! | [`VariantListing`] | Records plus provenance |
//! | [`InsertedVariant`] | Identity of an inserted document |
//! | [`ReplaceOutcome`] | Matched/modified/upserted counts of a replacement |
//! | [`MutationOutcome`] | Applied or not-found for patch and delete |

/// Read path value objects
pub mod listing;
/// Write path value objects
pub mod mutation;

pub use listing::{ListProvenance, VariantListing};
pub use mutation::{InsertedVariant, MutationOutcome, ReplaceOutcome};
