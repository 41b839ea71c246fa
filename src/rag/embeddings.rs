//! Sentence embedding service.
//!
//! The [`Embedder`] trait is the seam between the pipeline and the
//! embedding model, so tests can substitute a deterministic embedder.
//! The production implementation wraps fastembed's ONNX runtime with
//! the `all-MiniLM-L6-v2` model.

use crate::types::{AppError, Result};
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use parking_lot::Mutex;

/// Identifier persisted in the index manifest; loads are rejected when
/// the active embedder reports a different id or dimension.
pub const EMBEDDING_MODEL_ID: &str = "sentence-transformers/all-MiniLM-L6-v2";
pub const EMBEDDING_DIMENSIONS: usize = 384;

pub trait Embedder: Send + Sync {
    /// Stable identifier of the underlying model.
    fn model_id(&self) -> &str;

    /// Output vector dimensionality.
    fn dimensions(&self) -> usize;

    /// Embed a batch of texts, one vector per input, in input order.
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Embed a single query string.
    fn embed_one(&self, text: &str) -> Result<Vec<f32>> {
        let mut vectors = self.embed(std::slice::from_ref(&text.to_string()))?;
        vectors
            .pop()
            .ok_or_else(|| AppError::Embedding("model returned no vector".to_string()))
    }
}

/// fastembed-backed embedder. The ONNX session is stateful, so it sits
/// behind a mutex and the service is shared via `Arc`.
pub struct FastembedEmbedder {
    model: Mutex<TextEmbedding>,
}

impl FastembedEmbedder {
    /// Initialize the model, downloading weights on first use.
    pub fn new() -> Result<Self> {
        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(true),
        )
        .map_err(|e| AppError::Embedding(format!("failed to load embedding model: {}", e)))?;

        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl Embedder for FastembedEmbedder {
    fn model_id(&self) -> &str {
        EMBEDDING_MODEL_ID
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSIONS
    }

    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let inputs: Vec<&str> = texts.iter().map(String::as_str).collect();
        self.model
            .lock()
            .embed(inputs, None)
            .map_err(|e| AppError::Embedding(e.to_string()))
    }
}
