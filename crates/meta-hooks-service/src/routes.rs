//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use meta_hooks_core::Platform;

use crate::error::ApiError;
use crate::handlers::{health, ui, updates, webhooks};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /` - Landing page
/// - `GET /app.js` - Landing page script
/// - `GET /health` - Health check
/// - `GET /updates` - Recent updates, newest first
///
/// ## Webhooks (one pair per platform)
/// - `GET /facebook`, `GET /instagram`, `GET /threads` - Subscription handshake
/// - `POST /facebook` - Facebook deliveries (signature verified)
/// - `POST /instagram`, `POST /threads` - Instagram and Threads deliveries
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    let webhook_routes = Platform::ALL
        .into_iter()
        .fold(Router::<Arc<AppState>>::new(), |router, platform| {
            router.route(
                &format!("/{platform}"),
                get(webhooks::verify_subscription)
                    .post(webhooks::receive_update)
                    .layer(Extension(platform)),
            )
        });

    Router::new()
        .route("/", get(ui::index))
        .route("/app.js", get(ui::app_js))
        .route("/health", get(health::health))
        .route("/updates", get(updates::list_updates))
        .merge(webhook_routes)
        // Global middleware
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Turn a handler panic into a generic 500 response.
#[allow(clippy::needless_pass_by_value)] // Signature required by CatchPanicLayer
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(AnyOrigin)
            .allow_methods(AnyOrigin)
            .allow_headers(AnyOrigin)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(AnyOrigin)
            .allow_headers(AnyOrigin)
    }
}
