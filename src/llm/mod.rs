//! LLM completion client.
//!
//! The [`LLMClient`] trait abstracts the hosted completion service so the
//! answerer can be tested against a mock. The production implementation
//! speaks the OpenAI chat-completion protocol, which Groq also exposes.

pub mod client;
pub mod openai;

pub use client::LLMClient;
pub use openai::OpenAIChatClient;
