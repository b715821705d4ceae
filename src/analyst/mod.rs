pub mod gemini;
pub mod prompt;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

pub use gemini::GeminiClient;

/// Returned to the caller when the model produced no text.
pub const NO_CONTENT_MESSAGE: &str = "No content generated";
/// Returned to the caller when generation failed for any other reason.
pub const GENERATION_ERROR_MESSAGE: &str = "Error generating content";

#[derive(Debug, thiserror::Error)]
pub enum AnalystError {
    #[error("no Gemini API key configured. Set GEMINI_API_KEY or run `data-analyst configure`.")]
    MissingApiKey,
    #[error("request to Gemini failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Gemini returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("no response body received from Gemini")]
    EmptyResponse,
}

/// Something that turns a prompt into generated text.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AnalystError>;
}

/// Front door for prompt analysis. The question is wrapped in the report
/// template and a fence around the whole answer is removed. Never fails:
/// errors are logged and collapsed into fixed fallback text.
#[derive(Clone)]
pub struct Analyst {
    generator: Arc<dyn ContentGenerator>,
}

impl Analyst {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator }
    }

    pub async fn generate_content(&self, question: &str) -> String {
        let prompt = prompt::format_analysis_prompt(question);
        debug!(prompt_chars = prompt.chars().count(), "analysis prompt built");

        match self.generator.generate(&prompt).await {
            Ok(text) => {
                let text = prompt::strip_code_fences(&text);
                info!(
                    question_chars = question.trim().chars().count(),
                    response_chars = text.chars().count(),
                    "content generated"
                );
                text
            }
            Err(AnalystError::EmptyResponse) => {
                error!("no response body received from Gemini API");
                NO_CONTENT_MESSAGE.to_string()
            }
            Err(e) => {
                error!("error generating content with Gemini: {e}");
                GENERATION_ERROR_MESSAGE.to_string()
            }
        }
    }
}
