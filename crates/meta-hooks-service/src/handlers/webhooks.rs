//! Webhook handlers for Facebook, Instagram and Threads.
//!
//! Each platform route is mounted with an `Extension<Platform>` so the same
//! two handlers serve all three paths.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use meta_hooks_core::crypto::{self, constant_time_eq, SignatureAlgorithm};
use meta_hooks_core::{Platform, UpdateRecord};

use crate::error::ApiError;
use crate::state::AppState;

/// Handshake query sent by Meta when a subscription is created.
#[derive(Debug, Deserialize)]
pub struct HandshakeQuery {
    /// Always `subscribe` for a subscription handshake.
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    /// Token configured on the Meta developer dashboard.
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    /// Value to echo back on success.
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// Webhook response.
#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookResponse {
    /// Whether the webhook was stored.
    pub received: bool,
}

/// Answer a subscription handshake by echoing `hub.challenge`.
pub async fn verify_subscription(
    Extension(platform): Extension<Platform>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<HandshakeQuery>,
) -> Result<String, ApiError> {
    let mode_ok = query.mode.as_deref() == Some("subscribe");
    let token_ok = query
        .verify_token
        .as_deref()
        .is_some_and(|token| constant_time_eq(token, &state.config.verify_token));

    if !(mode_ok && token_ok) {
        tracing::warn!(
            platform = %platform,
            mode = ?query.mode,
            "Failed webhook verification"
        );
        return Err(ApiError::BadRequest("Webhook verification failed".into()));
    }

    tracing::info!(platform = %platform, "Webhook verified successfully");
    Ok(query.challenge.unwrap_or_default())
}

/// Accept a webhook delivery and add it to the update history.
pub async fn receive_update(
    Extension(platform): Extension<Platform>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookResponse>, ApiError> {
    if platform.requires_signature() {
        authenticate(&state, &headers, &body)?;
        tracing::debug!(platform = %platform, "Request header X-Hub-Signature validated");
    }

    let payload: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(platform = %platform, error = %e, "Unreadable webhook payload");
        ApiError::BadRequest(format!("Invalid JSON payload: {e}"))
    })?;

    let record = UpdateRecord::capture(platform, payload);
    let record_id = record.id;
    state.store.append(record)?;

    tracing::info!(
        platform = %platform,
        record_id = %record_id,
        bytes = body.len(),
        "Received webhook update"
    );

    Ok(Json(WebhookResponse { received: true }))
}

/// Check the delivery signatures against the configured app secret.
///
/// `X-Hub-Signature` is always required. `X-Hub-Signature-256`, when sent,
/// must match as well.
fn authenticate(state: &AppState, headers: &HeaderMap, body: &[u8]) -> Result<(), ApiError> {
    let secret = state.config.app_secret.as_deref();
    let header = |algorithm: SignatureAlgorithm| {
        headers
            .get(algorithm.header_name())
            .and_then(|v| v.to_str().ok())
    };

    if !crypto::verify(body, secret, header(SignatureAlgorithm::Sha1)) {
        tracing::warn!(
            secret_configured = secret.is_some(),
            "Request header X-Hub-Signature not present or invalid"
        );
        return Err(ApiError::Unauthorized);
    }

    if let Some(sha256) = header(SignatureAlgorithm::Sha256) {
        if !crypto::verify_signature(SignatureAlgorithm::Sha256, body, secret, Some(sha256)) {
            tracing::warn!("Request header X-Hub-Signature-256 invalid");
            return Err(ApiError::Unauthorized);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use axum::http::HeaderValue;

    fn state_with_secret(secret: Option<&str>) -> AppState {
        AppState::in_memory(ServiceConfig {
            app_secret: secret.map(String::from),
            ..ServiceConfig::default()
        })
    }

    fn headers_for(pairs: &[(&'static str, String)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn authenticate_accepts_sha1_only() {
        let state = state_with_secret(Some("s3cr3t"));
        let body = br#"{"a":1}"#;
        let headers = headers_for(&[(
            "x-hub-signature",
            crypto::sign(SignatureAlgorithm::Sha1, "s3cr3t", body),
        )]);
        assert!(authenticate(&state, &headers, body).is_ok());
    }

    #[test]
    fn authenticate_checks_sha256_when_present() {
        let state = state_with_secret(Some("s3cr3t"));
        let body = br#"{"a":1}"#;
        let good = headers_for(&[
            (
                "x-hub-signature",
                crypto::sign(SignatureAlgorithm::Sha1, "s3cr3t", body),
            ),
            (
                "x-hub-signature-256",
                crypto::sign(SignatureAlgorithm::Sha256, "s3cr3t", body),
            ),
        ]);
        assert!(authenticate(&state, &good, body).is_ok());

        let bad = headers_for(&[
            (
                "x-hub-signature",
                crypto::sign(SignatureAlgorithm::Sha1, "s3cr3t", body),
            ),
            (
                "x-hub-signature-256",
                crypto::sign(SignatureAlgorithm::Sha256, "wrong", body),
            ),
        ]);
        assert!(matches!(
            authenticate(&state, &bad, body),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn authenticate_rejects_sha256_without_sha1() {
        let state = state_with_secret(Some("s3cr3t"));
        let body = b"{}";
        let headers = headers_for(&[(
            "x-hub-signature-256",
            crypto::sign(SignatureAlgorithm::Sha256, "s3cr3t", body),
        )]);
        assert!(authenticate(&state, &headers, body).is_err());
    }

    #[test]
    fn authenticate_fails_without_secret() {
        let state = state_with_secret(None);
        let body = b"{}";
        let headers = headers_for(&[(
            "x-hub-signature",
            crypto::sign(SignatureAlgorithm::Sha1, "", body),
        )]);
        assert!(authenticate(&state, &headers, body).is_err());
    }
}
