//! Token codec - tamper-evident serialization of claims.
//!
//! Claims go in, a signed compact JWT (HS256) comes out; the reverse path
//! verifies the signature and expiry before any claims are surfaced. The
//! codec holds no per-request state; the secret and TTL arrive as explicit
//! parameters on every call.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;

use crate::domain::{ClaimSet, ClaimValue, RESERVED_CLAIM_KEYS};
use crate::errors::TokenError;

/// Signing algorithms this service will accept when verifying a token.
/// A header naming anything else, including "none", is rejected before
/// the signature is even looked at.
const ALLOWED_ALGORITHMS: &[&str] = &["HS256"];

/// Clock abstraction so expiry behavior is deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time, used everywhere outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Encodes claim maps into signed tokens and verifies them back.
#[derive(Clone)]
pub struct TokenCodec {
    clock: Arc<dyn Clock>,
}

impl Default for TokenCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Just the `alg` field of a token header, read before verification so the
/// allow-list check does not depend on the header parsing into our own
/// algorithm type.
#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

impl TokenCodec {
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Mint a signed token carrying `custom` plus codec-stamped `iat` and
    /// `exp` claims. Reserved keys in `custom` are overwritten.
    ///
    /// Encoding is deterministic: identical claims, secret, and clock
    /// instant produce byte-identical tokens.
    pub fn encode(
        &self,
        custom: &BTreeMap<String, ClaimValue>,
        secret: &[u8],
        ttl: Duration,
    ) -> Result<String, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let mut custom = custom.clone();
        for key in RESERVED_CLAIM_KEYS {
            custom.remove(*key);
        }

        let now = self.clock.now().timestamp();
        let claims = ClaimSet {
            iat: now,
            exp: now + ttl.num_seconds(),
            custom,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .map_err(|e| TokenError::InvalidClaims(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// Checks run in order: structural split, algorithm allow-list,
    /// signature, payload shape, expiry. Any failure yields no claims at
    /// all. Tampering and a wrong secret are indistinguishable to the
    /// caller; both surface as `SignatureInvalid`.
    pub fn decode(&self, token: &str, secret: &[u8]) -> Result<ClaimSet, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        check_algorithm(token)?;

        // Expiry is checked against the injected clock below, not the
        // crate's wall clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::from(["exp".to_string()]);

        let data = decode::<ClaimSet>(token, &DecodingKey::from_secret(secret), &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                jsonwebtoken::errors::ErrorKind::InvalidAlgorithm
                | jsonwebtoken::errors::ErrorKind::InvalidAlgorithmName => {
                    TokenError::UnsupportedAlgorithm
                }
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?;

        if self.clock.now().timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}

/// Split the token, decode the header, and check its `alg` against the
/// allow-list. Runs before signature verification so an attacker-chosen
/// algorithm never reaches the verifier.
fn check_algorithm(token: &str) -> Result<(), TokenError> {
    let mut parts = token.split('.');
    let header_b64 = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(_payload), Some(_signature), None) => header,
        _ => return Err(TokenError::Malformed),
    };

    let header_bytes = URL_SAFE_NO_PAD
        .decode(header_b64)
        .map_err(|_| TokenError::Malformed)?;
    let header: RawHeader =
        serde_json::from_slice(&header_bytes).map_err(|_| TokenError::Malformed)?;

    if !ALLOWED_ALGORITHMS.contains(&header.alg.as_str()) {
        return Err(TokenError::UnsupportedAlgorithm);
    }

    Ok(())
}
