//! # geo-tutor
//!
//! A retrieval-augmented question-answering tutor over the NCERT Class 10
//! Geography textbook. At startup the textbook PDF is extracted, chunked,
//! embedded, and persisted as a flat vector index; at query time the most
//! relevant segments ground an LLM-generated answer served over HTTP.
//!
//! ## Pipeline
//!
//! 1. **Extraction** - `pdf-extract` pulls the textbook text
//! 2. **Chunking** - overlapping character-budget segments
//! 3. **Indexing** - fastembed embeddings in a persisted cosine index
//! 4. **Retrieval** - top-k nearest segments per question
//! 5. **Generation** - Groq chat completion grounded on the segments
//!
//! ## Modules
//!
//! - [`api`] - axum handlers and routes
//! - [`ingest`] - PDF extraction and the index build pipeline
//! - [`rag`] - chunking, embeddings, vector index, retrieval
//! - [`llm`] - chat-completion client
//! - [`tutor`] - prompt assembly and the engine facade
//! - [`session`] - per-session answer history
//! - [`types`] - API payloads and error handling
//! - [`utils`] - environment configuration

/// HTTP API handlers and routes.
pub mod api;
/// Command-line interface.
pub mod cli;
/// Document ingestion pipeline.
pub mod ingest;
/// LLM completion clients.
pub mod llm;
/// Retrieval components.
pub mod rag;
/// Session history store.
pub mod session;
/// Tutor engine and prompt assembly.
pub mod tutor;
/// Core types and error handling.
pub mod types;
/// Configuration utilities.
pub mod utils;

pub use types::{AppError, Result};
pub use utils::config::Config;

use session::SessionStore;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tutor::TutorEngine;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<TutorEngine>,
    pub sessions: Arc<SessionStore>,
}

/// Build the full application router with tracing and CORS layers.
pub fn app(state: AppState) -> axum::Router {
    api::routes::create_router()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
