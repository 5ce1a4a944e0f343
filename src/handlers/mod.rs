use axum::{Json, extract::State};
use serde_json::json;

use crate::AppState;
use crate::dtos::{ChatRequest, ChatResponse, ConfigResponse, RootResponse};
use crate::error::AppError;

/// Root status endpoint: fixed name and version from the injected settings.
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: state.settings.app.name.clone(),
        version: state.settings.app.version.clone(),
    })
}

/// Liveness probe. The service has no downstream dependencies, so this
/// always reports healthy once the process is serving.
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": state.settings.app.name,
    }))
}

/// Echo a chat message back inside a fixed template.
///
/// A message that is empty after trimming is rejected with 400; the
/// untrimmed message is interpolated verbatim on success.
pub async fn chat(Json(req): Json<ChatRequest>) -> Result<Json<ChatResponse>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Message cannot be empty"
        )));
    }

    tracing::debug!(message_len = req.message.len(), "Echoing chat message");

    let response = format!(
        "You sent: {}. This is a simple echo response from the API.",
        req.message
    );

    Ok(Json(ChatResponse::success(response)))
}

/// Expose the app section of the startup-loaded configuration.
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        app_name: state.settings.app.name.clone(),
        version: state.settings.app.version.clone(),
        description: state.settings.app.description.clone(),
    })
}
