//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::services::{AcceptNonEmpty, AuthService, Authenticator, TokenCodec};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// Wires the placeholder credential verifier; a deployment with a real
    /// credential store swaps the verifier here and nothing else changes.
    pub fn from_config(config: Config) -> Self {
        let auth_service = Authenticator::new(
            Arc::new(AcceptNonEmpty),
            TokenCodec::new(),
            config,
        );

        Self {
            auth_service: Arc::new(auth_service),
        }
    }

    /// Create application state with a manually injected service.
    pub fn new(auth_service: Arc<dyn AuthService>) -> Self {
        Self { auth_service }
    }
}
