use crate::types::{AppError, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub document: DocumentConfig,
    pub llm: LLMConfig,
    pub rag: RAGConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    /// Path to the textbook PDF ingested at startup.
    pub pdf_path: String,
    /// Directory holding the persisted vector index.
    pub vector_store_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LLMConfig {
    /// Completion credential. Absent is fine for `ingest`, which never
    /// calls the LLM; serving checks it via [`LLMConfig::require_api_key`].
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
}

impl LLMConfig {
    /// The completion credential, required on the serve path only.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| AppError::Configuration("GROQ_API_KEY is not set".to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RAGConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    /// Number of segments retrieved per question.
    pub retrieval_k: usize,
}

impl Config {
    /// Load configuration from the environment (and a `.env` file if present).
    ///
    /// Everything has a default except `GROQ_API_KEY`, which may be left
    /// unset; it is only enforced when starting the server.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("GROQ_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let config = Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: parse_var("PORT", 3000)?,
            },
            document: DocumentConfig {
                pdf_path: env::var("PDF_PATH").unwrap_or_else(|_| "textbook.pdf".to_string()),
                vector_store_path: env::var("VECTOR_STORE_PATH")
                    .unwrap_or_else(|_| "vector_store".to_string()),
            },
            llm: LLMConfig {
                api_key,
                api_base: env::var("LLM_API_BASE")
                    .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
                model: env::var("LLM_MODEL")
                    .unwrap_or_else(|_| "llama-3.1-8b-instant".to_string()),
            },
            rag: RAGConfig {
                chunk_size: parse_var("CHUNK_SIZE", 1000)?,
                chunk_overlap: parse_var("CHUNK_OVERLAP", 200)?,
                retrieval_k: parse_var("RETRIEVAL_K", 3)?,
            },
        };

        if config.rag.chunk_overlap >= config.rag.chunk_size {
            return Err(AppError::Configuration(format!(
                "CHUNK_OVERLAP ({}) must be smaller than CHUNK_SIZE ({})",
                config.rag.chunk_overlap, config.rag.chunk_size
            )));
        }

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| {
            AppError::Configuration(format!("{} has an invalid value: {:?}", name, raw))
        }),
        Err(_) => Ok(default),
    }
}
