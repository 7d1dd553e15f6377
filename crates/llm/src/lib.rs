//! Hosted language model boundary
//!
//! The dashboard's chat first tries a hosted model (Gemini) and falls back
//! to the deterministic resolver in `dashboard-agent` on any failure. This
//! crate owns the outbound call only: backend trait, Gemini client, and the
//! fixed bilingual context summary sent with every request.

pub mod backend;
pub mod prompt;

pub use backend::{GeminiBackend, LlmBackend};
pub use prompt::{context_summary, system_prompt};

use thiserror::Error;

/// LLM errors
///
/// Every variant is treated identically by the caller: silent fallback to
/// the deterministic resolver.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("LLM is not configured (missing API key)")]
    Unconfigured,

    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Network(err.to_string())
    }
}

impl From<LlmError> for dashboard_core::Error {
    fn from(err: LlmError) -> Self {
        dashboard_core::Error::Llm(err.to_string())
    }
}
