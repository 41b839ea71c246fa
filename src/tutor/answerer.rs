//! Prompt assembly and answer generation.

use crate::llm::LLMClient;
use crate::rag::index::ScoredSegment;
use std::sync::Arc;
use tracing::error;

const SYSTEM_PROMPT: &str = "You are an AI geography tutor specializing in NCERT Class 10 Geography. \
Your role is to help students understand geographical concepts, processes, and phenomena.\n\n\
Instructions:\n\
1. Use the provided context from the NCERT textbook to answer questions\n\
2. Provide clear, educational explanations suitable for Class 10 students\n\
3. Include relevant examples and real-world applications when possible\n\
4. If the context doesn't contain enough information, acknowledge this and provide general guidance\n\
5. Encourage further learning and exploration of the topic\n\
6. Use simple language that students can easily understand";

const EMPTY_CONTEXT: &str = "No relevant information found in the geography textbook.";

const PROVENANCE_NOTE: &str =
    "\n\n*This answer is based on NCERT Class 10 Geography textbook content.*";

const APOLOGY: &str = "I apologize, but I'm having trouble generating a response right now. \
Please try again.";

/// Turns a question plus retrieved segments into a student-facing answer.
///
/// `answer` is infallible by design: completion failures are logged and
/// flattened to a fixed apology so the session loop never sees an error.
pub struct Answerer {
    llm: Arc<dyn LLMClient>,
}

impl Answerer {
    pub fn new(llm: Arc<dyn LLMClient>) -> Self {
        Self { llm }
    }

    pub fn model_name(&self) -> &str {
        self.llm.model_name()
    }

    pub async fn answer(&self, question: &str, segments: &[ScoredSegment]) -> String {
        let context = build_context(segments);
        let prompt = build_prompt(question, &context);

        match self.llm.generate_with_system(SYSTEM_PROMPT, &prompt).await {
            Ok(mut answer) => {
                if !segments.is_empty() {
                    answer.push_str(PROVENANCE_NOTE);
                }
                answer
            }
            Err(e) => {
                error!("Completion failed: {}", e);
                APOLOGY.to_string()
            }
        }
    }
}

fn build_context(segments: &[ScoredSegment]) -> String {
    if segments.is_empty() {
        return EMPTY_CONTEXT.to_string();
    }

    let mut context = String::from("Based on the NCERT Class 10 Geography textbook:\n\n");
    for (i, scored) in segments.iter().enumerate() {
        context.push_str(&format!("Reference {}:\n{}\n\n", i + 1, scored.segment));
    }
    context
}

fn build_prompt(question: &str, context: &str) -> String {
    format!(
        "Context from NCERT Class 10 Geography textbook:\n{}\n\n\
         Student Question: {}\n\n\
         Please provide a comprehensive answer based on the context provided. \
         If the context is insufficient, provide what you can and suggest where \
         the student might find more information.",
        context, question
    )
}
