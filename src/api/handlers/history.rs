use crate::{
    session::DEFAULT_HISTORY_LIMIT,
    types::{AppError, ClearHistoryResponse, HistoryResponse, Result},
    AppState,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
}

/// The last-N history entries for a session, oldest first.
pub async fn get_history(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(params): Query<HistoryParams>,
) -> Result<Json<HistoryResponse>> {
    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let entries = state
        .sessions
        .recent(session_id, limit)
        .ok_or_else(|| AppError::NotFound(format!("unknown session {}", session_id)))?;
    let total = state.sessions.len(session_id).unwrap_or(0);

    Ok(Json(HistoryResponse {
        session_id,
        total,
        entries,
    }))
}

/// Clear a session's history. Leaves the index untouched.
pub async fn clear_history(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ClearHistoryResponse>> {
    let cleared = state
        .sessions
        .clear(session_id)
        .ok_or_else(|| AppError::NotFound(format!("unknown session {}", session_id)))?;

    Ok(Json(ClearHistoryResponse {
        session_id,
        cleared,
    }))
}
