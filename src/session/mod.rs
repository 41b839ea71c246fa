//! Per-session question/answer history.
//!
//! Sessions live for the process lifetime and hold history in insertion
//! order. Clearing a session's history is independent of the index.

use crate::types::HistoryEntry;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// How many entries `recent` returns when the client doesn't say.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

#[derive(Default)]
struct Session {
    history: Vec<HistoryEntry>,
}

/// Thread-safe store of all active sessions.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh session id.
    pub fn create_session(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().insert(id, Session::default());
        id
    }

    /// Append an answered question, creating the session if needed.
    pub fn append(&self, session_id: Uuid, question: String, answer: String) {
        let mut sessions = self.sessions.write();
        sessions
            .entry(session_id)
            .or_default()
            .history
            .push(HistoryEntry {
                question,
                answer,
                asked_at: Utc::now(),
            });
    }

    /// Total entries for a session; `None` for an unknown session.
    pub fn len(&self, session_id: Uuid) -> Option<usize> {
        self.sessions
            .read()
            .get(&session_id)
            .map(|s| s.history.len())
    }

    /// The last `limit` entries in insertion order; `None` for an
    /// unknown session.
    pub fn recent(&self, session_id: Uuid, limit: usize) -> Option<Vec<HistoryEntry>> {
        let sessions = self.sessions.read();
        let session = sessions.get(&session_id)?;
        let skip = session.history.len().saturating_sub(limit);
        Some(session.history[skip..].to_vec())
    }

    /// Drop all history for a session, returning how many entries were
    /// removed; `None` for an unknown session.
    pub fn clear(&self, session_id: Uuid) -> Option<usize> {
        let mut sessions = self.sessions.write();
        let session = sessions.get_mut(&session_id)?;
        let cleared = session.history.len();
        session.history.clear();
        Some(cleared)
    }
}
