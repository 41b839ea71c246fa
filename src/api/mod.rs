//! HTTP API layer, built on axum.
//!
//! # Endpoints
//!
//! - `POST /api/ask` - Answer a question, appending it to a session
//! - `GET /api/history/{session_id}` - Last-N history entries
//! - `DELETE /api/history/{session_id}` - Clear a session's history
//! - `GET /api/questions` - Canned sample questions
//! - `GET /api/topics` - Topic suggestions
//! - `GET /api/status` - Engine readiness and index stats
//! - `GET /api/health` - Liveness

pub mod handlers;
pub mod routes;
