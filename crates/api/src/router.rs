//! Router and middleware for the catalog API.
//!
//! [`build_app_router`] is the single place the HTTP surface is assembled;
//! `main.rs` serves it and the integration tests drive it with `oneshot`.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// How long browsers may cache a preflight answer.
const CORS_MAX_AGE: Duration = Duration::from_secs(60 * 60);

/// Mount `/health` and the `/api/v1` catalog routes behind the middleware
/// stack.
///
/// `Router::layer` wraps everything added before it, so the last layer is
/// the outermost. CORS answers preflights before anything else. Each request
/// then gets an `x-request-id` that the trace span records and the response
/// echoes back. Handlers run innermost, under the timeout, with panics
/// turned into 500s.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static("x-request-id");
    let timeout = Duration::from_secs(config.request_timeout_secs);

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(catalog_cors(&config.cors_origins))
        .with_state(state)
}

/// Cross-origin access for browser clients: read-only, JSON only.
///
/// Origins are validated when the configuration is loaded, so anything that
/// still fails to parse here is skipped.
fn catalog_cors(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE])
        .max_age(CORS_MAX_AGE)
}
