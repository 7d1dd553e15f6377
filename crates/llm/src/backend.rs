//! LLM backend implementations
//!
//! Gemini over the generativelanguage REST API. Unconfigured is a first
//! class state: the backend is constructed either way and reports it
//! through `is_configured`, so the query engine never touches the
//! environment itself.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use dashboard_config::LlmSettings;

use crate::LlmError;

/// Hosted model interface
///
/// One awaited call per query, no retries: any failure makes the caller
/// fall through to the deterministic resolver.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    /// Generate a free-text answer for an utterance given the context summary
    async fn generate(&self, utterance: &str, system_prompt: &str) -> Result<String, LlmError>;

    /// Whether a credential is present
    fn is_configured(&self) -> bool;

    /// Model name for logging
    fn model_name(&self) -> &str;
}

/// Gemini backend
#[derive(Clone)]
pub struct GeminiBackend {
    client: Client,
    settings: LlmSettings,
}

impl GeminiBackend {
    pub fn new(settings: LlmSettings) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, settings })
    }

    fn api_url(&self, key: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.settings.endpoint, self.settings.model, key
        )
    }
}

#[async_trait]
impl LlmBackend for GeminiBackend {
    async fn generate(&self, utterance: &str, system_prompt: &str) -> Result<String, LlmError> {
        let key = self.settings.api_key.as_deref().ok_or(LlmError::Unconfigured)?;

        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_prompt.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: utterance.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.api_url(key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!("{}: {}", status, body)));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| LlmError::InvalidResponse("no candidates in response".to_string()))?;

        if text.trim().is_empty() {
            return Err(LlmError::InvalidResponse("empty candidate text".to_string()));
        }

        Ok(text)
    }

    fn is_configured(&self) -> bool {
        self.settings.api_key.is_some()
    }

    fn model_name(&self) -> &str {
        &self.settings.model
    }
}

// Gemini API types
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
