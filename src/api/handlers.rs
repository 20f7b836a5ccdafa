//! HTTP request handlers

use super::cors::permissive_cors;
use super::types::{ChatReply, ChatRequest, ErrorResponse};
use super::AppState;
use crate::assistant::AssistantError;
use crate::llm::LlmMessage;
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};

const INVALID_REQUEST_MESSAGE: &str =
    "Invalid request. Please send a POST request with 'chatHistory' in the body.";
const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to get response from AI. Internal server error.";

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Any method is routed here so non-POST requests get the 400 body
        .route("/api/chat", any(chat))
        .route("/version", get(get_version))
        .layer(middleware::from_fn(permissive_cors))
        .with_state(state)
}

// ============================================================
// Chat
// ============================================================

async fn chat(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    if method != Method::POST {
        tracing::warn!(%method, "Invalid request: method must be POST");
        return Err(AppError::InvalidRequest);
    }

    let request: ChatRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Invalid request: body is not a chat request");
        AppError::InvalidRequest
    })?;

    let Some(chat_history) = request.chat_history else {
        tracing::warn!("Invalid request: missing chatHistory");
        return Err(AppError::InvalidRequest);
    };

    let history: Vec<LlmMessage> = chat_history.iter().map(LlmMessage::from).collect();
    tracing::info!(
        turns = history.len(),
        model = %state.assistant.model_id(),
        "Received chat history"
    );

    match state.assistant.reply(history).await {
        Ok(text) => {
            tracing::debug!(chars = text.len(), "Assistant replied");
            Ok(Json(ChatReply { bot_response: text }))
        }
        Err(AssistantError::InvalidRequest(reason)) => {
            tracing::warn!(reason, "Invalid request");
            Err(AppError::InvalidRequest)
        }
        Err(AssistantError::Upstream(e)) => {
            tracing::error!(error = %e, kind = ?e.kind, "Upstream call failed");
            Err(AppError::Upstream(e.message))
        }
    }
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    InvalidRequest,
    Upstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidRequest => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(INVALID_REQUEST_MESSAGE),
            ),
            AppError::Upstream(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(UPSTREAM_FAILURE_MESSAGE).with_details(details),
            ),
        };

        (status, Json(body)).into_response()
    }
}
