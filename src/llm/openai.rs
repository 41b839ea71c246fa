use crate::llm::client::LLMClient;
use crate::types::{AppError, Result};
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;

/// Fixed sampling parameters; every request uses the same ones.
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1024;

/// Client for OpenAI-compatible chat-completion APIs (Groq included).
pub struct OpenAIChatClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAIChatClient {
    pub fn new(api_key: String, api_base: String, model: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);

        Self {
            client: Client::with_config(config),
            model,
        }
    }
}

#[async_trait]
impl LLMClient for OpenAIChatClient {
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .messages(vec![
                ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage::from(
                    system.to_string(),
                )),
                ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage::from(
                    prompt.to_string(),
                )),
            ])
            .build()
            .map_err(|e| AppError::Completion(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AppError::Completion(format!("Completion API error: {}", e)))?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AppError::Completion("No response from completion API".to_string()))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
