//! Application services layer - Use cases and business logic.
//!
//! The token codec is the leaf: deterministic, tamper-evident claim
//! serialization. The auth service sits above it and orchestrates login
//! and inspection against the swappable credential verifier.

mod auth_service;
pub mod token_codec;
pub mod verifier;

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, TokenResponse, IDENTIFIER_CLAIM};
pub use token_codec::{Clock, SystemClock, TokenCodec};
pub use verifier::{AcceptNonEmpty, CredentialVerifier};

#[cfg(any(test, feature = "test-utils"))]
pub use verifier::MockCredentialVerifier;
