//! Meta-Hooks Client SDK.
//!
//! This crate talks to a running meta-hooks receiver the way Meta does:
//! it performs subscription handshakes and sends signed deliveries. It can
//! also read back the retained update history. Useful for smoke-testing a
//! deployment.
//!
//! # Example
//!
//! ```no_run
//! use meta_hooks_client::MetaHooksClient;
//! use meta_hooks_core::Platform;
//!
//! # async fn example() -> Result<(), meta_hooks_client::ClientError> {
//! let client = MetaHooksClient::new("https://hooks.example.com")?.with_app_secret("s3cr3t");
//!
//! let challenge = client
//!     .verify_subscription(Platform::Facebook, "token", "test_challenge")
//!     .await?;
//! assert_eq!(challenge, "test_challenge");
//!
//! client
//!     .send_update(Platform::Facebook, &serde_json::json!({"object": "page", "entry": []}))
//!     .await?;
//!
//! let updates = client.list_updates(None).await?;
//! println!("{} updates retained", updates.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod error;
mod types;

pub use client::{ClientOptions, MetaHooksClient};
pub use error::ClientError;
pub use types::*;
