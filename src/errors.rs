//! Centralized error handling.
//!
//! Provides a unified error type for the entire application, with
//! automatic HTTP response conversion. Every token verification failure
//! collapses into one uniform unauthorized response so a caller cannot
//! distinguish a forged token from an expired one.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures raised by the token codec.
///
/// Encode-path kinds (`InvalidClaims`, `MissingSecret`) indicate a broken
/// service configuration or claim set; decode-path kinds cover everything
/// a presented token can be rejected for.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("claims could not be serialized: {0}")]
    InvalidClaims(String),

    #[error("signing secret is empty")]
    MissingSecret,

    #[error("token structure is malformed")]
    Malformed,

    #[error("token signature is invalid")]
    SignatureInvalid,

    #[error("token has expired")]
    Expired,

    #[error("token algorithm is not on the allow-list")]
    UnsupportedAlgorithm,
}

impl TokenError {
    /// Whether this kind can only arise while minting a token.
    /// Encode-path failures are server faults, not client faults.
    fn is_encode_failure(&self) -> bool {
        matches!(self, TokenError::InvalidClaims(_) | TokenError::MissingSecret)
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("Authentication required")]
    Unauthorized,

    #[error("Credential rejected")]
    CredentialRejected,

    #[error("Credential verifier unavailable")]
    VerifierUnavailable,

    // Validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Token codec failures propagate unchanged
    #[error(transparent)]
    Token(#[from] TokenError),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized | AppError::CredentialRejected => "UNAUTHORIZED",
            AppError::VerifierUnavailable => "VERIFIER_UNAVAILABLE",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Token(e) if e.is_encode_failure() => "INTERNAL_ERROR",
            AppError::Token(_) => "UNAUTHORIZED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::CredentialRejected => StatusCode::UNAUTHORIZED,
            AppError::VerifierUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Token(e) if e.is_encode_failure() => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Token(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            // Show full message for client input errors
            AppError::InvalidInput(msg) => format!("Invalid input: {}", msg),

            // One message for every way a credential or token can fail;
            // which one it was is logged server-side only
            AppError::Unauthorized | AppError::CredentialRejected => {
                "Authentication failed".to_string()
            }
            AppError::Token(e) if !e.is_encode_failure() => {
                tracing::warn!("Token verification failed: {:?}", e);
                "Invalid or expired token".to_string()
            }

            AppError::VerifierUnavailable => {
                tracing::error!("Credential verifier did not answer within its timeout");
                "Credential verification is temporarily unavailable".to_string()
            }
            AppError::Token(e) => {
                tracing::error!("Token encoding failed: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_failures_map_to_unauthorized() {
        for err in [
            TokenError::Malformed,
            TokenError::SignatureInvalid,
            TokenError::Expired,
            TokenError::UnsupportedAlgorithm,
        ] {
            let app: AppError = err.into();
            assert_eq!(app.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(app.code(), "UNAUTHORIZED");
        }
    }

    #[test]
    fn verification_failures_share_one_body() {
        let expired: AppError = TokenError::Expired.into();
        let forged: AppError = TokenError::SignatureInvalid.into();

        assert_eq!(expired.user_message(), forged.user_message());
        assert_eq!(expired.code(), forged.code());
    }

    #[test]
    fn encode_failures_are_server_errors() {
        let missing: AppError = TokenError::MissingSecret.into();
        assert_eq!(missing.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bad_claims: AppError = TokenError::InvalidClaims("NaN".to_string()).into();
        assert_eq!(bad_claims.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn input_errors_are_client_errors() {
        let err = AppError::invalid_input("proof is required");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "INVALID_INPUT");
    }
}
