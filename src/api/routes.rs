//! API route definitions.

use axum::http::{header, HeaderValue, Method};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::handlers;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state);

    // Tracing layer with request timing
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/history/{user_id}", get(handlers::get_history))
        .route("/chat", post(handlers::chat))
        .with_state(state)
        .layer(cors)
        .layer(trace_layer)
}

/// Build the CORS layer based on configuration.
///
/// With no configured origins the layer is permissive, so browser clients can
/// reach the bot from anywhere; configured origins restrict it.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let headers = [header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN];

    if state.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers);
    }

    let origins: Vec<HeaderValue> = state
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("CORS: Invalid origin in config: {}", origin);
                None
            })
        })
        .collect();

    if origins.is_empty() {
        tracing::error!("CORS: All configured origins are invalid!");
        // An origin no browser sends, so cross-origin requests are denied.
        return CorsLayer::new()
            .allow_origin(AllowOrigin::exact(HeaderValue::from_static("null")))
            .allow_methods(methods)
            .allow_headers(headers);
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
}
