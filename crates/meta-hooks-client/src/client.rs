//! Meta-Hooks HTTP client implementation.

use reqwest::Client;
use std::time::Duration;

use meta_hooks_core::crypto::{sign, SignatureAlgorithm};

use crate::error::ClientError;
use crate::types::{
    ApiErrorResponse, HealthResponse, Platform, UpdateRecord, WebhookResponse,
};

/// Meta-Hooks API client.
///
/// Deliveries are signed with the app secret when one is set, using both
/// `X-Hub-Signature` and `X-Hub-Signature-256` like Meta does.
#[derive(Debug, Clone)]
pub struct MetaHooksClient {
    client: Client,
    base_url: String,
    app_secret: Option<String>,
}

impl MetaHooksClient {
    /// Create a new client without an app secret.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the receiver (e.g., `"http://localhost:5000"`)
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a new client with custom options.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the HTTP client cannot be built.
    pub fn with_options(
        base_url: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            app_secret: None,
        })
    }

    /// Sign deliveries with this app secret.
    #[must_use]
    pub fn with_app_secret(mut self, app_secret: impl Into<String>) -> Self {
        self.app_secret = Some(app_secret.into());
        self
    }

    /// Perform a subscription handshake and return the echoed challenge.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::HandshakeRejected` if the receiver answers 400,
    /// or another error if the request fails.
    pub async fn verify_subscription(
        &self,
        platform: Platform,
        verify_token: &str,
        challenge: &str,
    ) -> Result<String, ClientError> {
        let url = format!("{}/{platform}", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("hub.mode", "subscribe"),
                ("hub.verify_token", verify_token),
                ("hub.challenge", challenge),
            ])
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(response.text().await?);
        }

        match Self::error_from(response).await {
            ClientError::Api {
                message,
                status: 400,
                ..
            } => Err(ClientError::HandshakeRejected { message }),
            other => Err(other),
        }
    }

    /// Send a JSON delivery to a platform endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Unauthorized` if the receiver rejects the
    /// signature, or another error if the request fails.
    pub async fn send_update(
        &self,
        platform: Platform,
        payload: &serde_json::Value,
    ) -> Result<WebhookResponse, ClientError> {
        let body = serde_json::to_vec(payload)?;
        self.send_raw(platform, body).await
    }

    /// Send raw body bytes to a platform endpoint, signing them as-is.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Unauthorized` if the receiver rejects the
    /// signature, or another error if the request fails.
    pub async fn send_raw(
        &self,
        platform: Platform,
        body: Vec<u8>,
    ) -> Result<WebhookResponse, ClientError> {
        let url = format!("{}/{platform}", self.base_url);

        let mut request = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(secret) = &self.app_secret {
            for algorithm in [SignatureAlgorithm::Sha1, SignatureAlgorithm::Sha256] {
                request = request.header(algorithm.header_name(), sign(algorithm, secret, &body));
            }
        } else if platform.requires_signature() {
            tracing::warn!(platform = %platform, "Sending unsigned delivery to a signed endpoint");
        }

        let response = request.body(body).send().await?;
        Self::handle_response(response).await
    }

    /// List retained updates, newest first, optionally for one platform.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn list_updates(
        &self,
        platform: Option<Platform>,
    ) -> Result<Vec<UpdateRecord>, ClientError> {
        let url = format!("{}/updates", self.base_url);

        let mut request = self.client.get(&url);
        if let Some(platform) = platform {
            request = request.query(&[("platform", platform.as_str())]);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Check receiver health.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        if response.status().is_success() {
            return Ok(response.json().await?);
        }

        match Self::error_from(response).await {
            ClientError::Api { status: 401, .. } => Err(ClientError::Unauthorized),
            other => Err(other),
        }
    }

    /// Build an error from a non-success response.
    async fn error_from(response: reqwest::Response) -> ClientError {
        let status = response.status();

        match response.json::<ApiErrorResponse>().await {
            Ok(api_error) => ClientError::Api {
                code: api_error.error.code,
                message: api_error.error.message,
                status: status.as_u16(),
            },
            Err(_) => ClientError::Api {
                code: "unknown".to_string(),
                message: format!("HTTP {status}"),
                status: status.as_u16(),
            },
        }
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}
