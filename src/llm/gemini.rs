//! Google Gemini generation backend.
//!
//! Calls the `generateContent` endpoint of the Generative Language API.
//! Requires an API key (GEMINI_API_KEY via `Settings`).

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Settings;

use super::{GenerateError, TextGenerator};

/// Gemini client over the REST API.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiApiError>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiResponseContent,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    message: String,
}

impl GeminiClient {
    /// Create a client from startup settings.
    pub fn new(settings: &Settings) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: settings.api_key.clone(),
            endpoint: settings.api_endpoint.clone(),
        }
    }

    fn request_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, model, self.api_key
        )
    }

    /// Pull the generated text out of a decoded API response.
    fn response_text(response: GeminiResponse) -> Result<String, GenerateError> {
        if let Some(error) = response.error {
            return Err(GenerateError::Api(error.message));
        }
        response
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| GenerateError::Parse("response contained no text".to_string()))
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerateError> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(model, prompt_chars = prompt.len(), "Calling Gemini");
        let resp = self
            .client
            .post(self.request_url(model))
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerateError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(GenerateError::Api(format!("HTTP {}: {}", status, body)));
        }

        let decoded: GeminiResponse = resp
            .json()
            .await
            .map_err(|e| GenerateError::Parse(e.to_string()))?;

        Self::response_text(decoded)
    }
}
