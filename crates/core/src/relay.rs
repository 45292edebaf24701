//! The symptom relay: validate, ask the model, normalise, persist, respond.

use std::sync::Arc;

use crate::analysis::{AnalysisRequest, AnalysisResult, PersistedRecord};
use crate::completion::{ChatCompletionClient, CompletionClient};
use crate::config::RelayConfig;
use crate::constants::{SYSTEM_PROMPT, USER_PROMPT_PREFIX};
use crate::normalise::{normalise, ParseOutcome};
use crate::store::{dispatch, store_from_config, RecordStore};
use crate::RelayResult;

/// Stateless relay service shared by all request handlers.
///
/// Each call to [`RelayService::analyze`] is independent. The completion call is the
/// only awaited step; the record write is dispatched and not awaited.
#[derive(Clone)]
pub struct RelayService {
    completion: Arc<dyn CompletionClient>,
    store: Arc<dyn RecordStore>,
}

impl RelayService {
    pub fn new(completion: Arc<dyn CompletionClient>, store: Arc<dyn RecordStore>) -> Self {
        Self { completion, store }
    }

    /// Build the production relay from startup configuration.
    pub fn from_config(cfg: &RelayConfig) -> Self {
        if cfg.store().is_none() {
            tracing::warn!("No record store configured, symptom checks will not be persisted");
        }
        Self::new(
            Arc::new(ChatCompletionClient::new(cfg.completion().clone())),
            store_from_config(cfg.store()),
        )
    }

    /// Analyse free-text symptoms.
    ///
    /// # Errors
    /// - `InvalidInput` if `symptoms` is empty after trimming (no upstream call is made).
    /// - `RateLimited`, `ServiceUnavailable`, `UpstreamError` or `EmptyUpstreamResponse`
    ///   when the completion API fails.
    ///
    /// Unparseable model output and store failures are never returned as errors.
    pub async fn analyze(&self, symptoms: &str) -> RelayResult<AnalysisResult> {
        self.analyze_request(AnalysisRequest::new(symptoms)).await
    }

    pub async fn analyze_request(&self, request: AnalysisRequest) -> RelayResult<AnalysisResult> {
        let symptoms = request.validate()?;

        tracing::info!(chars = symptoms.as_str().chars().count(), "Analyzing symptoms");
        tracing::debug!(symptoms = %symptoms, "Symptom text");

        let user_prompt = format!("{USER_PROMPT_PREFIX}{symptoms}");
        let content = self.completion.complete(SYSTEM_PROMPT, &user_prompt).await?;

        tracing::debug!(content = %content, "AI response");

        let (result, outcome) = normalise(&content);
        if outcome == ParseOutcome::Fallback {
            tracing::info!("Returning fallback analysis");
        }

        dispatch(
            self.store.clone(),
            PersistedRecord::new(&symptoms, &result),
        );

        Ok(result)
    }
}
