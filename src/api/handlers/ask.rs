use crate::{
    tutor::EngineStatus,
    types::{AppError, AskRequest, AskResponse, Result},
    AppState,
};
use axum::{extract::State, Json};
use tracing::info;

/// Answer a student question.
///
/// Empty or whitespace-only questions are rejected here, before any
/// embedding or completion call. When the startup build failed the
/// endpoint refuses with 503 until the process is restarted.
pub async fn ask(
    State(state): State<AppState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    let question = payload.question.trim();
    if question.is_empty() {
        return Err(AppError::InvalidInput(
            "Question must not be empty".to_string(),
        ));
    }

    if let EngineStatus::Error(msg) = state.engine.status() {
        return Err(AppError::Unavailable(format!(
            "The tutor failed to initialize: {}",
            msg
        )));
    }

    let session_id = payload
        .session_id
        .unwrap_or_else(|| state.sessions.create_session());

    let (answer, references) = state.engine.ask(question).await;
    info!(%session_id, references, "Answered question");

    state
        .sessions
        .append(session_id, question.to_string(), answer.clone());

    Ok(Json(AskResponse {
        session_id,
        question: question.to_string(),
        answer,
        references,
    }))
}
