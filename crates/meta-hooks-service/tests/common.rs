//! Common test utilities for meta-hooks integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::body::Bytes;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use axum_test::{TestResponse, TestServer};

use meta_hooks_core::crypto::{sign, SignatureAlgorithm};
use meta_hooks_service::{create_router, AppState, ServiceConfig};
use meta_hooks_store::{MemoryStore, UpdateStore};

/// App secret configured by default in the harness.
pub const APP_SECRET: &str = "s3cr3t";

/// Verify token configured in the harness.
pub const VERIFY_TOKEN: &str = "test-verify-token";

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// The update history behind the server, for direct inspection.
    pub store: Arc<MemoryStore>,
}

impl TestHarness {
    /// Create a harness with an app secret configured.
    pub fn new() -> Self {
        Self::with_secret(Some(APP_SECRET))
    }

    /// Create a harness with the given app secret (or none).
    pub fn with_secret(app_secret: Option<&str>) -> Self {
        let config = ServiceConfig {
            host: "127.0.0.1".into(),
            port: 0,
            app_secret: app_secret.map(String::from),
            verify_token: VERIFY_TOKEN.into(),
            ..ServiceConfig::default()
        };
        Self::with_store(Arc::new(MemoryStore::new()), config)
    }

    /// Create a harness over a specific store and config.
    pub fn with_store(store: Arc<MemoryStore>, config: ServiceConfig) -> Self {
        let state = AppState::new(store.clone(), config);
        let router: Router = create_router(state);
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, store }
    }

    /// Number of updates currently retained.
    pub fn stored(&self) -> usize {
        self.store.len().expect("store readable")
    }

    /// POST raw bytes to a platform path with optional signature headers.
    pub async fn post_raw(
        &self,
        path: &str,
        body: Vec<u8>,
        headers: &[(&'static str, String)],
    ) -> TestResponse {
        let mut request = self
            .server
            .post(path)
            .content_type("application/json")
            .bytes(Bytes::from(body));
        for (name, value) in headers {
            request = request.add_header(
                HeaderName::from_static(*name),
                HeaderValue::from_str(value).expect("valid header value"),
            );
        }
        request.await
    }

    /// POST a JSON payload signed with `secret` using `X-Hub-Signature`.
    pub async fn post_signed(
        &self,
        path: &str,
        payload: &serde_json::Value,
        secret: &str,
    ) -> TestResponse {
        let body = serde_json::to_vec(payload).expect("serializable payload");
        let signature = sign(SignatureAlgorithm::Sha1, secret, &body);
        self.post_raw(path, body, &[("x-hub-signature", signature)])
            .await
    }

    /// POST an unsigned JSON payload.
    pub async fn post_unsigned(&self, path: &str, payload: &serde_json::Value) -> TestResponse {
        let body = serde_json::to_vec(payload).expect("serializable payload");
        self.post_raw(path, body, &[]).await
    }

    /// Fetch `/updates` as JSON.
    pub async fn updates(&self) -> Vec<serde_json::Value> {
        let response = self.server.get("/updates").await;
        response.assert_status_ok();
        response.json()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
