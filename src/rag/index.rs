//! Flat cosine-similarity vector index with on-disk persistence.
//!
//! The index is built wholesale from the ingestion pipeline and is
//! read-only afterwards. Persistence is a directory with two JSON files:
//! `manifest.json` (embedding model id and dimensions) and
//! `segments.json` (the (embedding, segment) pairs in insertion order).
//! Loading verifies the manifest against the active embedder so an index
//! built with a different model is rejected instead of silently searched.

use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

const MANIFEST_FILE: &str = "manifest.json";
const SEGMENTS_FILE: &str = "segments.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexManifest {
    pub model_id: String,
    pub dimensions: usize,
    pub segment_count: usize,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct IndexEntry {
    segment: String,
    embedding: Vec<f32>,
}

/// A retrieved segment with its similarity to the query.
#[derive(Debug, Clone)]
pub struct ScoredSegment {
    pub segment: String,
    pub score: f32,
}

#[derive(Debug)]
pub struct VectorIndex {
    manifest: IndexManifest,
    entries: Vec<IndexEntry>,
}

impl VectorIndex {
    /// Assemble an index from segments and their embeddings.
    ///
    /// Fails when the inputs are empty, the counts disagree, or any
    /// vector has a dimension different from the first.
    pub fn build(
        segments: Vec<String>,
        embeddings: Vec<Vec<f32>>,
        model_id: &str,
    ) -> Result<Self> {
        if segments.is_empty() {
            return Err(AppError::IndexBuild("no segments to index".to_string()));
        }
        if segments.len() != embeddings.len() {
            return Err(AppError::IndexBuild(format!(
                "{} segments but {} embeddings",
                segments.len(),
                embeddings.len()
            )));
        }

        let dimensions = embeddings[0].len();
        if dimensions == 0 || embeddings.iter().any(|e| e.len() != dimensions) {
            return Err(AppError::IndexBuild(
                "inconsistent embedding dimensions".to_string(),
            ));
        }

        let entries = segments
            .into_iter()
            .zip(embeddings)
            .map(|(segment, embedding)| IndexEntry { segment, embedding })
            .collect::<Vec<_>>();

        Ok(Self {
            manifest: IndexManifest {
                model_id: model_id.to_string(),
                dimensions,
                segment_count: entries.len(),
                created_at: chrono::Utc::now(),
            },
            entries,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn manifest(&self) -> &IndexManifest {
        &self.manifest
    }

    /// Top-k segments by cosine similarity, descending. Ties keep
    /// insertion order (the sort is stable). `k` larger than the index
    /// returns everything.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<ScoredSegment> {
        let mut scored: Vec<ScoredSegment> = self
            .entries
            .iter()
            .map(|entry| ScoredSegment {
                segment: entry.segment.clone(),
                score: cosine_similarity(query, &entry.embedding),
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(k);
        scored
    }

    /// Persist to `dir`, atomically: write a temp sibling, then rename
    /// over the target so a crashed build never leaves a partial index.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let staging = dir.with_extension("tmp");
        if staging.exists() {
            std::fs::remove_dir_all(&staging)
                .map_err(|e| AppError::IndexBuild(format!("failed to clear staging dir: {}", e)))?;
        }
        std::fs::create_dir_all(&staging)
            .map_err(|e| AppError::IndexBuild(format!("failed to create staging dir: {}", e)))?;

        let manifest = serde_json::to_vec_pretty(&self.manifest)
            .map_err(|e| AppError::IndexBuild(format!("failed to encode manifest: {}", e)))?;
        std::fs::write(staging.join(MANIFEST_FILE), manifest)
            .map_err(|e| AppError::IndexBuild(format!("failed to write manifest: {}", e)))?;

        let entries = serde_json::to_vec(&self.entries)
            .map_err(|e| AppError::IndexBuild(format!("failed to encode segments: {}", e)))?;
        std::fs::write(staging.join(SEGMENTS_FILE), entries)
            .map_err(|e| AppError::IndexBuild(format!("failed to write segments: {}", e)))?;

        if dir.exists() {
            std::fs::remove_dir_all(dir)
                .map_err(|e| AppError::IndexBuild(format!("failed to replace old index: {}", e)))?;
        }
        std::fs::rename(&staging, dir)
            .map_err(|e| AppError::IndexBuild(format!("failed to move index into place: {}", e)))?;

        Ok(())
    }

    /// Load a persisted index, verifying it was built with the expected
    /// embedding model and dimensionality.
    pub fn load(dir: &Path, expected_model: &str, expected_dimensions: usize) -> Result<Self> {
        let manifest_raw = std::fs::read(dir.join(MANIFEST_FILE))
            .map_err(|e| AppError::IndexLoad(format!("failed to read manifest: {}", e)))?;
        let manifest: IndexManifest = serde_json::from_slice(&manifest_raw)
            .map_err(|e| AppError::IndexLoad(format!("invalid manifest: {}", e)))?;

        if manifest.model_id != expected_model {
            return Err(AppError::IndexLoad(format!(
                "index was built with embedding model {:?}, but {:?} is active",
                manifest.model_id, expected_model
            )));
        }
        if manifest.dimensions != expected_dimensions {
            return Err(AppError::IndexLoad(format!(
                "index has {} dimensions, but the active model produces {}",
                manifest.dimensions, expected_dimensions
            )));
        }

        let entries_raw = std::fs::read(dir.join(SEGMENTS_FILE))
            .map_err(|e| AppError::IndexLoad(format!("failed to read segments: {}", e)))?;
        let entries: Vec<IndexEntry> = serde_json::from_slice(&entries_raw)
            .map_err(|e| AppError::IndexLoad(format!("invalid segments file: {}", e)))?;

        if entries.len() != manifest.segment_count {
            return Err(AppError::IndexLoad(format!(
                "manifest records {} segments but {} are present",
                manifest.segment_count,
                entries.len()
            )));
        }

        info!(
            segments = entries.len(),
            model = %manifest.model_id,
            "Vector index loaded"
        );
        Ok(Self { manifest, entries })
    }
}

/// Cosine similarity; zero for mismatched lengths or zero vectors.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> VectorIndex {
        VectorIndex::build(
            vec![
                "water resources".to_string(),
                "forest cover".to_string(),
                "soil erosion".to_string(),
            ],
            vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ],
            "test-model",
        )
        .unwrap()
    }

    #[test]
    fn search_returns_k_results_by_descending_similarity() {
        let index = sample_index();
        let results = index.search(&[0.9, 0.4, 0.1], 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].segment, "water resources");
        assert_eq!(results[1].segment, "forest cover");
        assert!(results[0].score >= results[1].score);
    }

    #[test]
    fn search_with_k_beyond_len_returns_everything() {
        let index = sample_index();
        assert_eq!(index.search(&[1.0, 0.0, 0.0], 10).len(), 3);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let index = VectorIndex::build(
            vec!["first".to_string(), "second".to_string()],
            vec![vec![1.0, 0.0], vec![1.0, 0.0]],
            "test-model",
        )
        .unwrap();
        let results = index.search(&[1.0, 0.0], 2);
        assert_eq!(results[0].segment, "first");
        assert_eq!(results[1].segment, "second");
    }

    #[test]
    fn build_rejects_empty_and_mismatched_inputs() {
        assert!(VectorIndex::build(vec![], vec![], "m").is_err());
        assert!(VectorIndex::build(
            vec!["a".to_string()],
            vec![vec![1.0], vec![2.0]],
            "m"
        )
        .is_err());
        assert!(VectorIndex::build(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![1.0, 2.0], vec![3.0]],
            "m"
        )
        .is_err());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vector_store");

        let index = sample_index();
        index.save(&path).unwrap();

        let loaded = VectorIndex::load(&path, "test-model", 3).unwrap();
        assert_eq!(loaded.len(), 3);
        let results = loaded.search(&[0.0, 1.0, 0.0], 1);
        assert_eq!(results[0].segment, "forest cover");
    }

    #[test]
    fn load_rejects_model_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vector_store");
        sample_index().save(&path).unwrap();

        let err = VectorIndex::load(&path, "another-model", 3).unwrap_err();
        assert!(matches!(err, AppError::IndexLoad(_)));
    }

    #[test]
    fn load_rejects_dimension_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vector_store");
        sample_index().save(&path).unwrap();

        let err = VectorIndex::load(&path, "test-model", 384).unwrap_err();
        assert!(matches!(err, AppError::IndexLoad(_)));
    }

    #[test]
    fn load_fails_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err =
            VectorIndex::load(&dir.path().join("nowhere"), "test-model", 3).unwrap_err();
        assert!(matches!(err, AppError::IndexLoad(_)));
    }

    #[test]
    fn save_replaces_an_existing_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vector_store");
        sample_index().save(&path).unwrap();

        let replacement = VectorIndex::build(
            vec!["only one".to_string()],
            vec![vec![1.0, 0.0, 0.0]],
            "test-model",
        )
        .unwrap();
        replacement.save(&path).unwrap();

        let loaded = VectorIndex::load(&path, "test-model", 3).unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn cosine_similarity_edge_cases() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        let sim = cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]);
        assert!((sim - 1.0).abs() < 1e-6);
    }
}
