//! Integration tests for API endpoints.
//!
//! These tests drive the real router with the real authenticator; only the
//! credential verifier is swapped per case, the way a deployment would
//! swap it.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use authgate::api::{create_router, AppState};
use authgate::config::Config;
use authgate::errors::AppResult;
use authgate::services::{
    AcceptNonEmpty, Authenticator, Clock, CredentialVerifier, TokenCodec, IDENTIFIER_CLAIM,
};
use authgate::ClaimValue;

const SECRET: &str = "test-secret-key-for-testing-only-32chars";

/// Clock pinned to a fixed instant.
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Verifier that rejects every credential pair.
struct RejectAll;

#[async_trait]
impl CredentialVerifier for RejectAll {
    async fn verify(&self, _identifier: &str, _proof: &str) -> AppResult<bool> {
        Ok(false)
    }
}

/// Verifier that never answers within the configured timeout.
struct NeverAnswers;

#[async_trait]
impl CredentialVerifier for NeverAnswers {
    async fn verify(&self, _identifier: &str, _proof: &str) -> AppResult<bool> {
        tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        Ok(true)
    }
}

fn test_config() -> Config {
    Config::new(SECRET).with_verifier_timeout_ms(100)
}

fn app_with(verifier: Arc<dyn CredentialVerifier>) -> Router {
    let service = Authenticator::new(verifier, TokenCodec::new(), test_config());
    create_router(AppState::new(Arc::new(service)))
}

fn app() -> Router {
    app_with(Arc::new(AcceptNonEmpty))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn login_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/auth")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn contents_request(token: &str) -> Request<Body> {
    Request::builder()
        .uri("/contents")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

// =============================================================================
// Liveness
// =============================================================================

#[tokio::test]
async fn liveness_probe_returns_fixed_payload() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

// =============================================================================
// Login and inspection round trip
// =============================================================================

#[tokio::test]
async fn login_then_inspect_returns_identifier_claim() {
    let app = app();

    let response = app
        .clone()
        .oneshot(login_request(
            json!({"identifier": "a@b.com", "proof": "secret"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let token = body["token"].as_str().unwrap().to_string();
    assert!(!token.is_empty());

    let response = app.oneshot(contents_request(&token)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let claims = body_json(response).await;
    assert_eq!(claims[IDENTIFIER_CLAIM], "a@b.com");
    assert!(claims["iat"].as_i64().is_some());
    assert!(claims["exp"].as_i64().unwrap() > claims["iat"].as_i64().unwrap());
}

// =============================================================================
// Login input validation
// =============================================================================

#[tokio::test]
async fn login_with_empty_proof_is_bad_request() {
    let response = app()
        .oneshot(login_request(
            json!({"identifier": "a@b.com", "proof": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn login_with_missing_field_is_bad_request() {
    let response = app()
        .oneshot(login_request(json!({"identifier": "a@b.com"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rejected_credential_is_unauthorized() {
    let response = app_with(Arc::new(RejectAll))
        .oneshot(login_request(
            json!({"identifier": "a@b.com", "proof": "wrong"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unresponsive_verifier_is_service_unavailable() {
    let response = app_with(Arc::new(NeverAnswers))
        .oneshot(login_request(
            json!({"identifier": "a@b.com", "proof": "secret"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_json(response).await["error"]["code"],
        "VERIFIER_UNAVAILABLE"
    );
}

// =============================================================================
// Token gating
// =============================================================================

#[tokio::test]
async fn contents_without_header_is_unauthorized() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/contents")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn contents_with_garbage_token_is_unauthorized() {
    let response = app()
        .oneshot(contents_request("definitely-not-a-token"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Every way a token can fail verification must produce the same response
/// body, so callers cannot probe which check rejected them.
#[tokio::test]
async fn verification_failures_are_indistinguishable() {
    let app = app();

    // Expired: minted far in the past with the right secret
    let past = DateTime::from_timestamp(1_000_000_000, 0).unwrap();
    let expired_codec = TokenCodec::with_clock(Arc::new(FixedClock(past)));
    let mut claims = std::collections::BTreeMap::new();
    claims.insert(IDENTIFIER_CLAIM.to_string(), ClaimValue::from("a@b.com"));
    let expired = expired_codec
        .encode(&claims, SECRET.as_bytes(), Duration::seconds(60))
        .unwrap();

    // Forged: minted with a different secret
    let forged = TokenCodec::new()
        .encode(
            &claims,
            b"a-completely-different-secret-32char",
            Duration::seconds(60),
        )
        .unwrap();

    let mut bodies = Vec::new();
    for token in [expired.as_str(), forged.as_str(), "garbage"] {
        let response = app
            .clone()
            .oneshot(contents_request(token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        bodies.push(body_json(response).await);
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);
}
