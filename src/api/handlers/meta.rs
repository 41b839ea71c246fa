use crate::{
    tutor::{catalog, EngineStatus},
    types::StatusResponse,
    AppState,
};
use axum::{extract::State, Json};

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Engine readiness and index statistics.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let (status, error) = match state.engine.status() {
        EngineStatus::Ready => ("ready".to_string(), None),
        EngineStatus::Error(msg) => ("error".to_string(), Some(msg.clone())),
    };

    Json(StatusResponse {
        status,
        error,
        segments: state.engine.segment_count(),
        embedding_model: state.engine.embedding_model().to_string(),
        llm_model: state.engine.llm_model().to_string(),
    })
}

/// Canned questions a UI can offer as one-click buttons.
pub async fn sample_questions() -> Json<Vec<&'static str>> {
    Json(catalog::SAMPLE_QUESTIONS.to_vec())
}

/// Topic suggestions covering the textbook.
pub async fn topics() -> Json<Vec<&'static str>> {
    Json(catalog::TOPICS.to_vec())
}
