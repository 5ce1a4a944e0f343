pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod startup;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Settings;

/// Origins always permitted alongside the configured frontend URLs.
const FALLBACK_ORIGINS: [&str; 2] = ["http://localhost:3000", "https://aitrademaestro.com"];

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/api/chat", post(handlers::chat))
        .route("/api/config", get(handlers::get_config))
        .with_state(state)
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add CORS layer
        .layer(cors)
}

/// Browser clients are allowed only from the configured frontend URLs
/// plus the fixed fallback origins. Credentials are permitted, so the
/// header list is mirrored rather than wildcarded.
fn cors_layer(settings: &Settings) -> CorsLayer {
    let mut origins = vec![
        settings.urls.frontend.dev.clone(),
        settings.urls.frontend.production.clone(),
    ];
    origins.extend(FALLBACK_ORIGINS.iter().map(|o| o.to_string()));
    origins.sort();
    origins.dedup();

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}
