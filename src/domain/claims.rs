//! Claim value objects - the payload signed into tokens.
//!
//! Claims are a schema-flexible but type-checked mapping: arbitrary keys,
//! scalar-only values. Nested objects and arrays are rejected during
//! deserialization, so malformed claim bodies fail at the boundary rather
//! than at signing time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Claim keys managed by the token codec. Caller-supplied values under
/// these keys are overwritten when a token is minted.
pub const RESERVED_CLAIM_KEYS: &[&str] = &["iat", "exp"];

/// A single claim value: JSON scalars only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClaimValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<&str> for ClaimValue {
    fn from(value: &str) -> Self {
        ClaimValue::Str(value.to_string())
    }
}

impl From<String> for ClaimValue {
    fn from(value: String) -> Self {
        ClaimValue::Str(value)
    }
}

impl From<i64> for ClaimValue {
    fn from(value: i64) -> Self {
        ClaimValue::Int(value)
    }
}

impl From<bool> for ClaimValue {
    fn from(value: bool) -> Self {
        ClaimValue::Bool(value)
    }
}

/// The full claim set embedded in a token: caller-supplied claims plus the
/// two reserved fields the codec stamps at mint time.
///
/// The custom claims live in a `BTreeMap`, so a given claim set always
/// serializes with the same key order and identical claims produce
/// identical payload bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSet {
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    #[serde(flatten)]
    pub custom: BTreeMap<String, ClaimValue>,
}

impl ClaimSet {
    /// Look up a custom claim by key.
    pub fn get(&self, key: &str) -> Option<&ClaimValue> {
        self.custom.get(key)
    }
}
