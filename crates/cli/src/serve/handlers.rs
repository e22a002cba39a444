//! HTTP route handlers for the workflow API.
//!
//! Handlers are thin: deserialize, call the service, map the result. The
//! status code comes from [`cadence_engine::ErrorClass`], never from
//! inspecting message strings.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use cadence_core::DefinitionRequest;
use cadence_engine::{EngineError, ErrorClass};

use super::json_error;
use super::state::AppState;

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /health
pub(crate) async fn handle_health() -> impl IntoResponse {
    let response = serde_json::json!({
        "status": "ok",
        "cadence_version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(response))
}

/// Map an engine refusal to a response.
fn engine_error(err: EngineError) -> Response {
    let status = match err.class() {
        ErrorClass::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorClass::NotFound => StatusCode::NOT_FOUND,
        ErrorClass::IllegalState | ErrorClass::IllegalTransition => StatusCode::CONFLICT,
        ErrorClass::Storage => StatusCode::INTERNAL_SERVER_ERROR,
    };
    json_error(status, &err.to_string()).into_response()
}

/// POST /api/workflows
pub(crate) async fn handle_create_definition(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DefinitionRequest>,
) -> Response {
    match state.service.create_definition(request).await {
        Ok(definition) => (
            StatusCode::CREATED,
            [(
                header::LOCATION,
                format!("/api/workflows/{}", definition.id),
            )],
            Json(definition),
        )
            .into_response(),
        Err(err) => engine_error(err),
    }
}

/// GET /api/workflows/{id}
pub(crate) async fn handle_get_definition(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.service.get_definition(&id).await {
        Ok(Some(definition)) => (StatusCode::OK, Json(definition)).into_response(),
        Ok(None) => json_error(
            StatusCode::NOT_FOUND,
            &format!("workflow definition '{}' not found", id),
        )
        .into_response(),
        Err(err) => engine_error(err),
    }
}

/// GET /api/workflows
pub(crate) async fn handle_list_definitions(State(state): State<Arc<AppState>>) -> Response {
    match state.service.list_definitions().await {
        Ok(definitions) => (StatusCode::OK, Json(definitions)).into_response(),
        Err(err) => engine_error(err),
    }
}

/// POST /api/workflows/{id}/instances
pub(crate) async fn handle_start_instance(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.service.start_instance(&id).await {
        Ok(instance) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/api/instances/{}", instance.id))],
            Json(instance),
        )
            .into_response(),
        Err(err) => engine_error(err),
    }
}

/// GET /api/instances/{id}
pub(crate) async fn handle_get_instance(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.service.get_instance(&id).await {
        Ok(Some(instance)) => (StatusCode::OK, Json(instance)).into_response(),
        Ok(None) => json_error(
            StatusCode::NOT_FOUND,
            &format!("workflow instance '{}' not found", id),
        )
        .into_response(),
        Err(err) => engine_error(err),
    }
}

/// GET /api/instances
pub(crate) async fn handle_list_instances(State(state): State<Arc<AppState>>) -> Response {
    match state.service.list_instances().await {
        Ok(instances) => (StatusCode::OK, Json(instances)).into_response(),
        Err(err) => engine_error(err),
    }
}

/// POST /api/instances/{id}/actions/{action_id}
pub(crate) async fn handle_execute_action(
    State(state): State<Arc<AppState>>,
    Path((id, action_id)): Path<(String, String)>,
) -> Response {
    match state.service.execute_action(&id, &action_id).await {
        Ok(instance) => (StatusCode::OK, Json(instance)).into_response(),
        Err(err) => engine_error(err),
    }
}
