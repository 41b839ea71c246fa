//! Core types shared across the crate: API payloads and the error type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============= API Request/Response Types =============

/// Request body for `POST /api/ask`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AskRequest {
    /// The student's question.
    pub question: String,
    /// Session to append the answer to. A new session is created when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
}

/// Response body for `POST /api/ask`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub session_id: Uuid,
    pub question: String,
    pub answer: String,
    /// Number of textbook segments used to ground the answer.
    pub references: usize,
}

/// One question/answer pair in a session's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

/// Response body for `GET /api/history/{session_id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub session_id: Uuid,
    /// Total entries recorded for the session, before truncation.
    pub total: usize,
    pub entries: Vec<HistoryEntry>,
}

/// Response body for `DELETE /api/history/{session_id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClearHistoryResponse {
    pub session_id: Uuid,
    pub cleared: usize,
}

/// Response body for `GET /api/status`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// One of `ready` or `error`.
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Number of indexed textbook segments (0 when the index is unset).
    pub segments: usize,
    pub embedding_model: String,
    pub llm_model: String,
}

// ============= Error Types =============

/// Crate-wide error type. Pipeline components flatten most of these to
/// empty results or user-facing strings before they ever reach a handler;
/// the variants that do cross the API boundary map to HTTP statuses below.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Chunking error: {0}")]
    Chunking(String),

    #[error("Index build error: {0}")]
    IndexBuild(String),

    #[error("Index load error: {0}")]
    IndexLoad(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
