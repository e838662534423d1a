//! Server constants

// ============================================================================
// ROUTE BASES
// ============================================================================

/// Mount point of the variant collection routes
pub const VARIANTS_BASE: &str = "/variants";

/// Mount point of the sequence stub routes
pub const SEQUENCES_BASE: &str = "/sequences";

/// Mount point of the administrative routes
pub const ADMIN_BASE: &str = "/admin";

// ============================================================================
// RESPONSE VALUES
// ============================================================================

/// `result` value of a successful mutation
pub const RESULT_SUCCESS: &str = "success";

/// `result` value of a mutation whose target was missing
pub const RESULT_WARNING: &str = "warning";

// ============================================================================
// CORS
// ============================================================================

/// Methods advertised to browsers
pub const CORS_ALLOWED_METHODS: &str = "GET, POST, PUT, PATCH, DELETE, OPTIONS";
