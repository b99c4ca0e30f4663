//! Authentication service - orchestrates login and token inspection.
//!
//! Stateless across requests: validates credential input shape, consults
//! the credential verifier under a timeout, embeds the result as claims,
//! and hands signing to the token codec. The signing secret and TTL come
//! from the injected `Config`, never from ambient state.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::Config;
use crate::domain::{ClaimSet, ClaimValue};
use crate::errors::{AppError, AppResult};
use crate::services::token_codec::TokenCodec;
use crate::services::verifier::CredentialVerifier;

/// Claim key under which the authenticated identifier is embedded.
pub const IDENTIFIER_CLAIM: &str = "identifier";

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Signed token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange a credential pair for a signed token.
    async fn login(&self, identifier: String, proof: String) -> AppResult<TokenResponse>;

    /// Verify a token and return the claims it carries.
    fn inspect(&self, token: &str) -> AppResult<ClaimSet>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    verifier: Arc<dyn CredentialVerifier>,
    codec: TokenCodec,
    config: Config,
}

impl Authenticator {
    /// Create a new auth service instance.
    pub fn new(verifier: Arc<dyn CredentialVerifier>, codec: TokenCodec, config: Config) -> Self {
        Self {
            verifier,
            codec,
            config,
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, identifier: String, proof: String) -> AppResult<TokenResponse> {
        // Missing input is a client error, not a credential failure
        if identifier.trim().is_empty() {
            return Err(AppError::invalid_input("identifier is required"));
        }
        if proof.trim().is_empty() {
            return Err(AppError::invalid_input("proof is required"));
        }

        // The verifier owns its own I/O; we only bound how long we wait
        let accepted = tokio::time::timeout(
            self.config.verifier_timeout(),
            self.verifier.verify(&identifier, &proof),
        )
        .await
        .map_err(|_| AppError::VerifierUnavailable)?
        .unwrap_or(false);

        if !accepted {
            return Err(AppError::CredentialRejected);
        }

        let mut claims = BTreeMap::new();
        claims.insert(IDENTIFIER_CLAIM.to_string(), ClaimValue::Str(identifier));

        let token = self.codec.encode(
            &claims,
            self.config.signing_secret_bytes(),
            self.config.token_ttl(),
        )?;

        Ok(TokenResponse { token })
    }

    fn inspect(&self, token: &str) -> AppResult<ClaimSet> {
        let claims = self
            .codec
            .decode(token, self.config.signing_secret_bytes())?;
        Ok(claims)
    }
}
