//! Embedded landing page.
//!
//! The page polls `GET /updates` and renders one card per delivery.

use axum::http::header;
use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const APP_JS: &str = include_str!("../../static/app.js");

/// Landing page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Polling script loaded by the landing page.
pub async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        APP_JS,
    )
}
