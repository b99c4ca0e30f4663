//! Credential verification collaborator.
//!
//! The auth service never decides whether a credential pair is good; it
//! asks a `CredentialVerifier`. The wired default accepts any non-empty
//! pair, which is a stand-in: a real user store implements this trait and
//! replaces it at state construction time without touching token logic.

use async_trait::async_trait;

use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Checks an (identifier, proof) pair against some credential store.
///
/// Implementations own their I/O and failure characteristics; the caller
/// enforces a timeout around `verify`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Returns true when the pair is acceptable.
    async fn verify(&self, identifier: &str, proof: &str) -> AppResult<bool>;
}

/// Placeholder policy: any non-empty pair is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptNonEmpty;

#[async_trait]
impl CredentialVerifier for AcceptNonEmpty {
    async fn verify(&self, identifier: &str, proof: &str) -> AppResult<bool> {
        Ok(!identifier.is_empty() && !proof.is_empty())
    }
}
