//! Authgate - a minimal authentication microservice
//!
//! Issues signed, time-bound claim tokens in exchange for credentials and
//! verifies presented tokens back into claims.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Claim model carried by tokens
//! - **services**: Token codec and authentication orchestration
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # Usage
//!
//! ```bash
//! SIGNING_SECRET=... cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{ClaimSet, ClaimValue};
pub use errors::{AppError, AppResult, TokenError};
