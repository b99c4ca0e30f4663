//! Application settings loaded from environment variables.

use std::env;
use std::time::Duration as StdDuration;

use chrono::Duration;

use super::constants::{
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_TOKEN_TTL_SECS, DEFAULT_VERIFIER_TIMEOUT_MS,
    MIN_SIGNING_SECRET_LENGTH,
};

/// Application configuration.
///
/// Constructed once at process startup and passed by reference into the
/// services that need it. The signing secret is never read from ambient
/// state after startup.
#[derive(Clone)]
pub struct Config {
    signing_secret: String,
    pub token_ttl_secs: i64,
    pub verifier_timeout_ms: u64,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("signing_secret", &"[REDACTED]")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("verifier_timeout_ms", &self.verifier_timeout_ms)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if SIGNING_SECRET is not set or is too short (security
    /// requirement). A missing secret is a fatal startup error, never a
    /// per-request error.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let signing_secret = env::var("SIGNING_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                // Development mode: use default but warn
                tracing::warn!("SIGNING_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            } else {
                // Production mode: panic
                panic!("SIGNING_SECRET environment variable must be set in production");
            }
        });

        // Validate signing secret length
        if signing_secret.len() < MIN_SIGNING_SECRET_LENGTH {
            panic!(
                "SIGNING_SECRET must be at least {} characters long",
                MIN_SIGNING_SECRET_LENGTH
            );
        }

        let token_ttl_secs = env::var("TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs: &i64| *secs > 0)
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

        Self {
            signing_secret,
            token_ttl_secs,
            verifier_timeout_ms: env::var("VERIFIER_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_VERIFIER_TIMEOUT_MS),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Build a configuration with an explicit signing secret and defaults
    /// for everything else. Used wherever env-based loading is not wanted,
    /// e.g. tests that need a distinct secret per case.
    pub fn new(signing_secret: impl Into<String>) -> Self {
        Self {
            signing_secret: signing_secret.into(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            verifier_timeout_ms: DEFAULT_VERIFIER_TIMEOUT_MS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }

    /// Override the token time-to-live.
    pub fn with_token_ttl_secs(mut self, secs: i64) -> Self {
        self.token_ttl_secs = secs;
        self
    }

    /// Override the credential verifier timeout.
    pub fn with_verifier_timeout_ms(mut self, ms: u64) -> Self {
        self.verifier_timeout_ms = ms;
        self
    }

    /// Get signing secret bytes for token signing/verification.
    pub fn signing_secret_bytes(&self) -> &[u8] {
        self.signing_secret.as_bytes()
    }

    /// Token time-to-live as a duration.
    pub fn token_ttl(&self) -> Duration {
        Duration::seconds(self.token_ttl_secs)
    }

    /// Verifier timeout as a duration.
    pub fn verifier_timeout(&self) -> StdDuration {
        StdDuration::from_millis(self.verifier_timeout_ms)
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_secret() {
        let config = Config::new("super-secret-signing-key-32-chars!!");
        let rendered = format!("{:?}", config);

        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn builder_overrides_apply() {
        let config = Config::new("s".repeat(32))
            .with_token_ttl_secs(60)
            .with_verifier_timeout_ms(500);

        assert_eq!(config.token_ttl(), Duration::seconds(60));
        assert_eq!(config.verifier_timeout(), StdDuration::from_millis(500));
    }
}
