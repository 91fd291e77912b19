//! Client error types.

/// Errors that can occur when using the meta-hooks client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response.
    #[error("API error: {code} - {message}")]
    Api {
        /// Error code.
        code: String,
        /// Error message.
        message: String,
        /// HTTP status code.
        status: u16,
    },

    /// The receiver rejected the delivery signature.
    #[error("delivery rejected: signature missing or invalid")]
    Unauthorized,

    /// The receiver rejected the subscription handshake.
    #[error("handshake rejected: {message}")]
    HandshakeRejected {
        /// Error message from the receiver.
        message: String,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
