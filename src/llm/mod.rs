//! Generation client for the Gemini text API.
//!
//! Everything upstream-specific is isolated behind the [`TextGenerator`]
//! trait: one model identifier, one prompt string, one text result. No
//! retries, no streaming; a deterministic stub stands in for tests.

mod gemini;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::GeminiClient;

/// Errors that can occur during text generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("generation API error: {0}")]
    Api(String),

    #[error("failed to parse generation response: {0}")]
    Parse(String),
}

/// A text-generation backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text from a prompt with the given model.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerateError>;
}
