//! Meta-Hooks HTTP Service.
//!
//! This crate receives webhook callbacks from Facebook, Instagram and Threads:
//!
//! - Subscription handshake (`GET /{platform}`)
//! - Event delivery (`POST /{platform}`), authenticated for Facebook
//! - Recent update history (`GET /updates`)
//! - A static landing page that polls the history
//!
//! # Authentication
//!
//! Facebook deliveries must carry `X-Hub-Signature: sha1=<hex>`, the
//! HMAC-SHA1 of the raw body keyed by `APP_SECRET`. Without a configured
//! secret every Facebook delivery is rejected with 401.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers need async for the Handler trait

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{ConfigWarning, ServiceConfig};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
