//! Shared test fixtures: a deterministic keyword embedder, a mock LLM
//! client, and AppState construction helpers.

#![allow(dead_code)]

use async_trait::async_trait;
use geo_tutor::{
    llm::LLMClient,
    rag::{embeddings::Embedder, index::VectorIndex},
    session::SessionStore,
    tutor::TutorEngine,
    types::{AppError, Result},
    AppState,
};
use std::sync::Arc;

/// Keywords doubling as embedding dimensions. A text's vector is the
/// count of each keyword it contains, which makes retrieval outcomes
/// predictable by construction.
const KEYWORDS: [&str; 4] = ["water", "forest", "soil", "agriculture"];

pub struct KeywordEmbedder;

impl Embedder for KeywordEmbedder {
    fn model_id(&self) -> &str {
        "keyword-test-model"
    }

    fn dimensions(&self) -> usize {
        KEYWORDS.len()
    }

    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|text| {
                let lower = text.to_lowercase();
                KEYWORDS
                    .iter()
                    .map(|kw| lower.matches(kw).count() as f32)
                    .collect()
            })
            .collect())
    }
}

/// Embedder that fails the test if it is ever called.
pub struct PanickingEmbedder;

impl Embedder for PanickingEmbedder {
    fn model_id(&self) -> &str {
        "panicking"
    }

    fn dimensions(&self) -> usize {
        1
    }

    fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>> {
        panic!("embedder must not be called");
    }
}

pub struct MockLLMClient {
    pub response: String,
    pub should_fail: bool,
}

impl MockLLMClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            response: String::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate_with_system(&self, _system: &str, _prompt: &str) -> Result<String> {
        if self.should_fail {
            return Err(AppError::Completion("mock LLM failure".to_string()));
        }
        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        "mock-llm"
    }
}

/// LLM client that fails the test if it is ever called.
pub struct PanickingLLMClient;

#[async_trait]
impl LLMClient for PanickingLLMClient {
    async fn generate_with_system(&self, _system: &str, _prompt: &str) -> Result<String> {
        panic!("LLM client must not be called");
    }

    fn model_name(&self) -> &str {
        "panicking-llm"
    }
}

/// The corpus used across API tests, with one clear best match per keyword.
pub fn sample_segments() -> Vec<String> {
    vec![
        "Rivers and dams are central to water resources in India.".to_string(),
        "Forest cover and wildlife sanctuaries protect biodiversity.".to_string(),
        "Soil erosion degrades arable land over time.".to_string(),
        "Agriculture employs the majority of the rural workforce.".to_string(),
    ]
}

/// Build a ready index over `sample_segments` with the keyword embedder.
pub fn sample_index() -> VectorIndex {
    let embedder = KeywordEmbedder;
    let segments = sample_segments();
    let embeddings = embedder.embed(&segments).unwrap();
    VectorIndex::build(segments, embeddings, embedder.model_id()).unwrap()
}

pub fn state_with_engine(engine: TutorEngine) -> AppState {
    AppState {
        engine: Arc::new(engine),
        sessions: Arc::new(SessionStore::new()),
    }
}

/// A fully ready state: keyword embedder, sample index, mock LLM.
pub fn ready_state(llm_response: &str) -> AppState {
    let engine = TutorEngine::new(
        Arc::new(KeywordEmbedder),
        Arc::new(MockLLMClient::new(llm_response)),
        Some(Arc::new(sample_index())),
        3,
    );
    state_with_engine(engine)
}
