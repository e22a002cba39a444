//! `cadence serve` -- HTTP JSON API server for the workflow service.
//!
//! Exposes the workflow service as an async HTTP service using `axum` +
//! `tokio`. Supports concurrent request handling; state lives in the
//! in-memory store for the lifetime of the process.
//!
//! Security features:
//! - CORS headers on all responses (permissive for local dev)
//! - Per-IP rate limiting (default: 60 req/min, configurable; /health exempt)
//! - Request body limit of 1 MB
//!
//! Endpoints:
//! - GET  /health                                      - Server status
//! - POST /api/workflows                               - Create a workflow definition
//! - GET  /api/workflows                               - List workflow definitions
//! - GET  /api/workflows/{id}                          - One workflow definition
//! - POST /api/workflows/{id}/instances                - Start an instance
//! - GET  /api/instances                               - List workflow instances
//! - GET  /api/instances/{id}                          - One workflow instance
//! - POST /api/instances/{id}/actions/{action_id}      - Execute an action
//!
//! All responses use Content-Type: application/json; failures carry an
//! `{"error": "..."}` body.

mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{middleware as axum_middleware, Json, Router};
use tower_http::cors::{Any, CorsLayer};

use cadence_engine::WorkflowService;
use cadence_storage::InMemoryWorkflowStore;

use self::handlers::{
    handle_create_definition, handle_execute_action, handle_get_definition, handle_get_instance,
    handle_health, handle_list_definitions, handle_list_instances, handle_not_found,
    handle_start_instance,
};
use self::middleware::rate_limit_middleware;
use self::state::{AppState, RateLimiter};

/// Maximum request body size: 1 MB.
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Default rate limit: 60 requests per minute per IP.
const DEFAULT_RATE_LIMIT: u64 = 60;

/// Rate limit window duration in seconds (1 minute).
const RATE_LIMIT_WINDOW_SECS: u64 = 60;

/// Construct a JSON error response with the given status code and message.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({"error": message})))
}

/// Start the HTTP server on the given port.
///
/// Rate limit resolution order: `--rate-limit` flag, `CADENCE_RATE_LIMIT`
/// env var, default.
pub async fn start_server(
    port: u16,
    rate_limit: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let rate_limit = rate_limit
        .or_else(|| {
            std::env::var("CADENCE_RATE_LIMIT")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
        })
        .unwrap_or(DEFAULT_RATE_LIMIT);

    let state = Arc::new(AppState {
        service: WorkflowService::new(InMemoryWorkflowStore::new()),
        rate_limiter: RateLimiter::new(rate_limit),
    });

    // CORS: permissive for local dev; tighten for production.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(handle_health))
        .route(
            "/api/workflows",
            post(handle_create_definition).get(handle_list_definitions),
        )
        .route("/api/workflows/{id}", get(handle_get_definition))
        .route("/api/workflows/{id}/instances", post(handle_start_instance))
        .route("/api/instances", get(handle_list_instances))
        .route("/api/instances/{id}", get(handle_get_instance))
        .route(
            "/api/instances/{id}/actions/{action_id}",
            post(handle_execute_action),
        )
        .fallback(handle_not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, rate_limit, "cadence listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
