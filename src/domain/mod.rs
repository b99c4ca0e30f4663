//! Domain layer - Core business entities and logic
//!
//! Contains the claim model that tokens carry, independent of the codec
//! and transport that move it around.

pub mod claims;

pub use claims::{ClaimSet, ClaimValue, RESERVED_CLAIM_KEYS};
