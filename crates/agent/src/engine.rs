//! Query engine orchestration
//!
//! Hosted model first, deterministic resolver second. The public `answer`
//! never fails: any LLM outcome other than a non-empty string routes the
//! query to the rule chain, whose final rule always produces text.

use std::sync::Arc;

use dashboard_core::DashboardContext;
use dashboard_llm::{system_prompt, LlmBackend};

use crate::intent::resolve;

/// The single public entry point for dashboard questions
///
/// Holds no mutable state; snapshots are immutable after construction, so
/// any number of queries may run concurrently against independently
/// captured contexts.
pub struct QueryEngine {
    llm: Option<Arc<dyn LlmBackend>>,
}

impl QueryEngine {
    /// Engine with a hosted model as the first-attempt responder
    pub fn new(llm: Arc<dyn LlmBackend>) -> Self {
        Self { llm: Some(llm) }
    }

    /// Engine that only runs the deterministic resolver
    pub fn deterministic() -> Self {
        Self { llm: None }
    }

    /// Answer an utterance against a dashboard snapshot
    ///
    /// Always returns a non-empty string. An unconfigured or failing
    /// hosted model is not user-visible: the call silently falls through
    /// to the resolver, once, with no retries or backoff.
    pub async fn answer(&self, utterance: &str, context: &DashboardContext) -> String {
        if let Some(llm) = &self.llm {
            if llm.is_configured() {
                let prompt = system_prompt(context);
                match llm.generate(utterance, &prompt).await {
                    Ok(text) if !text.trim().is_empty() => return text,
                    Ok(_) => {
                        tracing::debug!(model = llm.model_name(), "empty LLM reply, using resolver")
                    }
                    Err(e) => {
                        tracing::debug!(model = llm.model_name(), error = %e, "LLM unavailable, using resolver")
                    }
                }
            } else {
                tracing::trace!("LLM unconfigured, using resolver");
            }
        }

        resolve(utterance, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use dashboard_core::{aggregate, Store, TransactionRecord};
    use dashboard_llm::LlmError;

    struct FailingLlm;

    #[async_trait]
    impl LlmBackend for FailingLlm {
        async fn generate(&self, _: &str, _: &str) -> Result<String, LlmError> {
            Err(LlmError::Network("connection refused".to_string()))
        }

        fn is_configured(&self) -> bool {
            true
        }

        fn model_name(&self) -> &str {
            "failing-llm"
        }
    }

    struct CannedLlm;

    #[async_trait]
    impl LlmBackend for CannedLlm {
        async fn generate(&self, _: &str, _: &str) -> Result<String, LlmError> {
            Ok("canned reply".to_string())
        }

        fn is_configured(&self) -> bool {
            true
        }

        fn model_name(&self) -> &str {
            "canned-llm"
        }
    }

    fn ctx() -> DashboardContext {
        let records = vec![TransactionRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            Store::Maadi,
            150,
            800_000.0,
        )];
        aggregate(&records, &[])
    }

    #[tokio::test]
    async fn test_llm_reply_wins_when_available() {
        let engine = QueryEngine::new(Arc::new(CannedLlm));
        assert_eq!(engine.answer("highest", &ctx()).await, "canned reply");
    }

    #[tokio::test]
    async fn test_llm_failure_falls_back_silently() {
        let engine = QueryEngine::new(Arc::new(FailingLlm));
        let reply = engine.answer("highest", &ctx()).await;
        assert_eq!(reply, "Highest sales branch: Maadi with 800000 EGP");
    }

    #[tokio::test]
    async fn test_deterministic_engine_never_empty() {
        let engine = QueryEngine::deterministic();
        for utterance in ["hi", "xyz123", "", "؟؟؟"] {
            let reply = engine.answer(utterance, &ctx()).await;
            assert!(!reply.is_empty(), "empty reply for {:?}", utterance);
        }
    }

    #[tokio::test]
    async fn test_answer_is_idempotent() {
        let engine = QueryEngine::deterministic();
        let ctx = ctx();
        let first = engine.answer("kam order fel maadi?", &ctx).await;
        let second = engine.answer("kam order fel maadi?", &ctx).await;
        assert_eq!(first, second);
    }
}
