//! Service configuration.

use serde::Deserialize;
use std::path::Path;

/// Port used when `PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 5000;

/// Handshake token used when `VERIFY_TOKEN` is unset.
pub const DEFAULT_VERIFY_TOKEN: &str = "token";

/// Service configuration loaded once at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Host to bind (default: "0.0.0.0").
    pub host: String,

    /// Port to listen on (default: 5000).
    pub port: u16,

    /// App secret used to check `X-Hub-Signature` on Facebook deliveries.
    pub app_secret: Option<String>,

    /// Token expected in `hub.verify_token` during the handshake (default: "token").
    pub verify_token: String,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// Raw `PORT` value that failed to parse, if any.
    pub rejected_port: Option<String>,
}

/// A non-fatal configuration problem reported at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigWarning {
    /// No app secret: Facebook deliveries cannot be authenticated.
    #[error("APP_SECRET is not set; Facebook webhook deliveries will be rejected")]
    MissingAppSecret,

    /// The handshake token is the public placeholder.
    #[error("VERIFY_TOKEN is not set; using the default placeholder token")]
    DefaultVerifyToken,

    /// `PORT` could not be parsed.
    #[error("PORT value {0:?} is not a valid port; using the default")]
    InvalidPort(String),
}

/// Secrets file structure.
#[derive(Debug, Default, Deserialize)]
pub struct MetaSecrets {
    /// App secret from the Meta developer dashboard.
    #[serde(default)]
    pub app_secret: Option<String>,
    /// Handshake verify token.
    #[serde(default)]
    pub verify_token: Option<String>,
}

impl ServiceConfig {
    /// Load configuration from environment variables and the secrets file.
    #[must_use]
    pub fn from_env() -> Self {
        let secrets = load_meta_secrets();
        Self::from_sources(|key| std::env::var(key).ok(), secrets)
    }

    /// Build configuration from a variable lookup and optional file secrets.
    ///
    /// Secrets from the file take precedence over variables. Empty values are
    /// treated as unset.
    #[must_use]
    pub fn from_sources<F>(var: F, secrets: Option<MetaSecrets>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());
        let secrets = secrets.unwrap_or_default();

        let raw_port = var("PORT");
        let parsed_port: Option<u16> = raw_port
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok());
        let rejected_port = raw_port.filter(|_| parsed_port.is_none());

        Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parsed_port.unwrap_or(DEFAULT_PORT),
            app_secret: secrets
                .app_secret
                .filter(|s| !s.is_empty())
                .or_else(|| var("APP_SECRET")),
            verify_token: secrets
                .verify_token
                .filter(|s| !s.is_empty())
                .or_else(|| var("VERIFY_TOKEN"))
                .unwrap_or_else(|| DEFAULT_VERIFY_TOKEN.into()),
            cors_origins: var("CORS_ORIGINS")
                .unwrap_or_else(|| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            max_body_bytes: var("MAX_BODY_BYTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024), // 1MB
            request_timeout_seconds: var("REQUEST_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            rejected_port,
        }
    }

    /// Address to bind, `host:port`.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Non-fatal problems with this configuration.
    #[must_use]
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if self.app_secret.as_deref().map_or(true, str::is_empty) {
            warnings.push(ConfigWarning::MissingAppSecret);
        }
        if self.verify_token == DEFAULT_VERIFY_TOKEN {
            warnings.push(ConfigWarning::DefaultVerifyToken);
        }
        if let Some(raw) = &self.rejected_port {
            warnings.push(ConfigWarning::InvalidPort(raw.clone()));
        }
        warnings
    }
}

/// Load Meta secrets from the first secrets file found.
fn load_meta_secrets() -> Option<MetaSecrets> {
    let secret_paths = [
        ".secrets/meta.json",
        "meta-hooks/.secrets/meta.json",
        "../.secrets/meta.json",
    ];

    for path in &secret_paths {
        if let Ok(secrets) = load_secrets_file::<MetaSecrets>(path) {
            tracing::info!(path = %path, "Loaded Meta secrets from file");
            return Some(secrets);
        }
    }

    tracing::debug!("Meta secrets file not found, using environment variables");
    None
}

/// Load secrets from a JSON file.
fn load_secrets_file<T: serde::de::DeserializeOwned>(
    path: impl AsRef<Path>,
) -> Result<T, std::io::Error> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Secrets file not found",
        ));
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            app_secret: None,
            verify_token: DEFAULT_VERIFY_TOKEN.into(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
            rejected_port: None,
        }
    }
}
