//! Document ingestion pipeline: extract, chunk, embed, persist.
//!
//! Runs once at startup when no persisted index exists, or on demand via
//! the `ingest` subcommand. The build is all-or-nothing: any failure
//! aborts without writing a partial index.

pub mod extractor;

use crate::rag::chunker::TextChunker;
use crate::rag::embeddings::Embedder;
use crate::rag::index::VectorIndex;
use crate::types::{AppError, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub use extractor::PdfExtractor;

/// Extract → chunk → embed → persist.
pub struct IngestPipeline {
    chunker: TextChunker,
    embedder: Arc<dyn Embedder>,
}

impl IngestPipeline {
    pub fn new(chunker: TextChunker, embedder: Arc<dyn Embedder>) -> Self {
        Self { chunker, embedder }
    }

    /// Build the index from `pdf_path` and persist it under `store_path`.
    pub fn run(&self, pdf_path: &Path, store_path: &Path) -> Result<VectorIndex> {
        let index = self.build(pdf_path)?;
        index.save(store_path)?;
        info!(
            path = %store_path.display(),
            segments = index.len(),
            "Vector index persisted"
        );
        Ok(index)
    }

    /// Build the index without persisting it.
    pub fn build(&self, pdf_path: &Path) -> Result<VectorIndex> {
        info!(path = %pdf_path.display(), "Extracting text from PDF");
        let text = PdfExtractor::extract(pdf_path);
        if text.trim().is_empty() {
            return Err(AppError::Extraction(format!(
                "no text extracted from {}",
                pdf_path.display()
            )));
        }
        self.index_text(&text)
    }

    /// Chunk and embed already-extracted text into an index.
    pub fn index_text(&self, text: &str) -> Result<VectorIndex> {
        let segments = self.chunker.chunk(text);
        if segments.is_empty() {
            return Err(AppError::Chunking("document produced no segments".to_string()));
        }
        info!(segments = segments.len(), "Chunked document");

        let embeddings = self
            .embedder
            .embed(&segments)
            .map_err(|e| AppError::IndexBuild(format!("embedding failed: {}", e)))?;

        VectorIndex::build(segments, embeddings, self.embedder.model_id())
    }
}
