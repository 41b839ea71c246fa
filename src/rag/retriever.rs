//! Query-time retrieval over the persisted index.

use crate::rag::embeddings::Embedder;
use crate::rag::index::{ScoredSegment, VectorIndex};
use std::sync::Arc;
use tracing::{debug, warn};

/// Embeds a query and returns the top-k nearest segments.
///
/// Read-only over the index. A retriever without an index, or one whose
/// query embedding fails, returns an empty list rather than an error;
/// the answerer handles an empty context on its own.
pub struct Retriever {
    embedder: Arc<dyn Embedder>,
    index: Option<Arc<VectorIndex>>,
    k: usize,
}

impl Retriever {
    pub fn new(embedder: Arc<dyn Embedder>, index: Option<Arc<VectorIndex>>, k: usize) -> Self {
        Self { embedder, index, k }
    }

    pub fn segment_count(&self) -> usize {
        self.index.as_ref().map_or(0, |ix| ix.len())
    }

    pub fn retrieve(&self, query: &str) -> Vec<ScoredSegment> {
        let Some(index) = &self.index else {
            return Vec::new();
        };

        let embedding = match self.embedder.embed_one(query) {
            Ok(embedding) => embedding,
            Err(e) => {
                warn!("Failed to embed query: {}", e);
                return Vec::new();
            }
        };

        let results = index.search(&embedding, self.k);
        debug!(results = results.len(), k = self.k, "Retrieved segments");
        results
    }
}
