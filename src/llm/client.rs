use crate::types::Result;
use async_trait::async_trait;

/// Chat-completion client trait implemented by all providers.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate a completion for `prompt` under `system` instructions.
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String>;

    /// Model identifier, for status reporting.
    fn model_name(&self) -> &str;
}
