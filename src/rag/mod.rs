//! Retrieval components: chunking, embeddings, the vector index, and
//! query-time retrieval.

pub mod chunker;
pub mod embeddings;
pub mod index;
pub mod retriever;
