//! The tutor engine: retrieval plus answer generation behind one handle.

pub mod answerer;
pub mod catalog;

use crate::llm::LLMClient;
use crate::rag::embeddings::Embedder;
use crate::rag::index::VectorIndex;
use crate::rag::retriever::Retriever;
use answerer::Answerer;
use std::sync::Arc;

/// Lifecycle state after the one-shot startup build.
///
/// The index is built (or loaded) synchronously before the listener
/// starts, so requests only ever observe `Ready` or `Error`. An `Error`
/// state is sticky: there is no retry, only a restart.
#[derive(Debug, Clone)]
pub enum EngineStatus {
    Ready,
    Error(String),
}

pub struct TutorEngine {
    status: EngineStatus,
    embedder: Arc<dyn Embedder>,
    retriever: Retriever,
    answerer: Answerer,
}

impl TutorEngine {
    /// An engine that serves questions. `index` may be `None`, in which
    /// case retrieval returns nothing and answers fall back to general
    /// guidance.
    pub fn new(
        embedder: Arc<dyn Embedder>,
        llm: Arc<dyn LLMClient>,
        index: Option<Arc<VectorIndex>>,
        k: usize,
    ) -> Self {
        Self {
            status: EngineStatus::Ready,
            retriever: Retriever::new(embedder.clone(), index, k),
            answerer: Answerer::new(llm),
            embedder,
        }
    }

    /// An engine whose startup build failed. Question handling is
    /// refused until the process is restarted.
    pub fn failed(embedder: Arc<dyn Embedder>, llm: Arc<dyn LLMClient>, message: String) -> Self {
        Self {
            status: EngineStatus::Error(message),
            retriever: Retriever::new(embedder.clone(), None, 0),
            answerer: Answerer::new(llm),
            embedder,
        }
    }

    pub fn status(&self) -> &EngineStatus {
        &self.status
    }

    pub fn segment_count(&self) -> usize {
        self.retriever.segment_count()
    }

    pub fn embedding_model(&self) -> &str {
        self.embedder.model_id()
    }

    pub fn llm_model(&self) -> &str {
        self.answerer.model_name()
    }

    /// Retrieve grounding segments and generate an answer. Returns the
    /// answer text and the number of segments that grounded it.
    pub async fn ask(&self, question: &str) -> (String, usize) {
        let segments = self.retriever.retrieve(question);
        let answer = self.answerer.answer(question, &segments).await;
        (answer, segments.len())
    }
}
