//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`Variant`] | A coronavirus variant document |
//! | [`VariantPatch`] | Validated partial update for a variant |

/// Variant document and partial update
pub mod variant;

pub use variant::{Variant, VariantPatch};
