//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default token time-to-live in seconds (5 minutes)
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 300;

/// Minimum signing secret length (security requirement)
pub const MIN_SIGNING_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

// =============================================================================
// Credential Verification
// =============================================================================

/// Upper bound on a single credential verification call, in milliseconds.
/// A verifier that has not answered by then is reported as unavailable
/// instead of hanging the request.
pub const DEFAULT_VERIFIER_TIMEOUT_MS: u64 = 2_000;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;
