//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are shared by
//! the application, provider and server layers. Infrastructure-specific
//! constants remain in `variants_infrastructure::constants`.

// ============================================================================
// CACHE KEY CONSTANTS
// ============================================================================

/// Cache key holding the serialized snapshot of the whole collection
pub const ALL_VARIANTS_CACHE_KEY: &str = "all_variants";

// ============================================================================
// DOCUMENT FIELD CONSTANTS
// ============================================================================

/// Business key field of a variant document
pub const VARIANT_ID_FIELD: &str = "variant_id";

/// Display name field of a variant document
pub const VARIANT_NAME_FIELD: &str = "name";

/// Store-assigned identity field
pub const DOCUMENT_ID_FIELD: &str = "_id";

/// Default collection name in the document store
pub const VARIANTS_COLLECTION: &str = "covid-variants";
