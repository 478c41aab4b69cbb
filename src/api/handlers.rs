//! HTTP request handlers

use super::assets::{serve_index, serve_static};
use super::types::{ChatRequest, ChatResponse};
use super::AppState;
use crate::assistant::AssistantError;
use crate::session::CallBook;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root serves the UI
        .route("/", get(serve_index))
        .route("/assets/*path", get(serve_static))
        // Message handling
        .route("/api/chat", post(chat))
        // Demo bootstrap for a fresh client
        .route("/api/session", get(new_session))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Chat
// ============================================================

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(req) = payload?;

    let reply = state
        .assistant
        .respond(&req.message, req.calls.as_deref(), Utc::now())?;

    tracing::debug!(
        intent = %reply.intent,
        calls = req.calls.as_ref().map_or(0, Vec::len),
        history = req.chat_history.len(),
        has_action = reply.action.is_some(),
        "Handled chat message"
    );

    Ok(Json(reply.into()))
}

// ============================================================
// Session bootstrap
// ============================================================

async fn new_session() -> Json<CallBook> {
    Json(CallBook::with_demo_data(Utc::now()))
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    concat!("callbook ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

/// Any failure while handling a message. Every variant produces the same
/// response; the cause only goes to the log.
#[derive(Debug)]
enum AppError {
    Malformed(JsonRejection),
    Assistant(AssistantError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Malformed(rejection)
    }
}

impl From<AssistantError> for AppError {
    fn from(err: AssistantError) -> Self {
        AppError::Assistant(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Malformed(rejection) => {
                tracing::error!(error = %rejection.body_text(), "Malformed chat request");
            }
            AppError::Assistant(err) => {
                tracing::error!(error = %err, "Error processing chat request");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ChatResponse::failure()),
        )
            .into_response()
    }
}
