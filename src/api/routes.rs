use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(crate::api::handlers::meta::health))
        .route("/api/status", get(crate::api::handlers::meta::status))
        .route(
            "/api/questions",
            get(crate::api::handlers::meta::sample_questions),
        )
        .route("/api/topics", get(crate::api::handlers::meta::topics))
        .route("/api/ask", post(crate::api::handlers::ask::ask))
        .route(
            "/api/history/{session_id}",
            get(crate::api::handlers::history::get_history)
                .delete(crate::api::handlers::history::clear_history),
        )
}
