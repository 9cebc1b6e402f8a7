//! Completion calls: build the chat message and drive the provider.
//!
//! This module is intentionally thin — all prompt text lives in
//! [`crate::prompts`] so it can be changed without touching the retry or
//! error-handling logic here.
//!
//! ## Retry Strategy
//!
//! HTTP 429 / 503 errors from LLM APIs are transient and frequent.
//! Exponential backoff (`retry_backoff_ms * 2^attempt`) avoids hammering a
//! recovering endpoint: with the 500 ms default and 3 retries the wait
//! sequence is 500 ms → 1 s → 2 s, under 4 s of back-off per call.

use crate::config::PlanConfig;
use crate::error::TripsmithError;
use crate::pipeline::PlanStage;
use edgequake_llm::{ChatMessage, CompletionOptions, LLMProvider};
use std::sync::Arc;
use std::time::Instant;
use tokio::time::{sleep, timeout, Duration};
use tracing::{debug, warn};

/// Outcome of one successful completion call.
#[derive(Debug, Clone)]
pub(crate) struct CallResult {
    pub content: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub duration_ms: u64,
    pub retries: u32,
}

/// Run one completion with retry, backoff, and a per-attempt timeout.
///
/// The request is a single user message — the templates carry all the
/// instructions, so there is no separate system turn. Failure after the
/// last retry is fatal for the whole generation: the budget follow-up
/// embeds the itinerary text, so there is no useful partial result.
pub(crate) async fn complete(
    provider: &Arc<dyn LLMProvider>,
    stage: PlanStage,
    prompt: &str,
    config: &PlanConfig,
) -> Result<CallResult, TripsmithError> {
    let start = Instant::now();
    let messages = vec![ChatMessage::user(prompt)];
    let options = build_options(config);
    let api_timeout = Duration::from_secs(config.api_timeout_secs);

    let mut last_err: Option<String> = None;

    for attempt in 0..=config.max_retries {
        if attempt > 0 {
            let backoff = config.retry_backoff_ms * 2u64.pow(attempt - 1);
            warn!(
                "{} call: retry {}/{} after {}ms",
                stage, attempt, config.max_retries, backoff
            );
            if let Some(ref cb) = config.progress_callback {
                cb.on_stage_retry(stage, attempt, config.max_retries);
            }
            sleep(Duration::from_millis(backoff)).await;
        }

        match timeout(api_timeout, provider.chat(&messages, Some(&options))).await {
            Ok(Ok(response)) => {
                let duration = start.elapsed();
                debug!(
                    "{} call: {} input tokens, {} output tokens, {:?}",
                    stage, response.prompt_tokens, response.completion_tokens, duration
                );
                return Ok(CallResult {
                    content: response.content,
                    input_tokens: response.prompt_tokens as u64,
                    output_tokens: response.completion_tokens as u64,
                    duration_ms: duration.as_millis() as u64,
                    retries: attempt,
                });
            }
            Ok(Err(e)) => {
                let err_msg = format!("{e}");
                warn!("{} call: attempt {} failed — {}", stage, attempt + 1, err_msg);
                last_err = Some(err_msg);
            }
            Err(_) => {
                let err_msg = format!("timed out after {}s", config.api_timeout_secs);
                warn!("{} call: attempt {} {}", stage, attempt + 1, err_msg);
                last_err = Some(err_msg);
            }
        }
    }

    Err(TripsmithError::CompletionFailed {
        stage: stage.to_string(),
        retries: config.max_retries,
        detail: last_err.unwrap_or_else(|| "Unknown error".to_string()),
    })
}

/// Build `CompletionOptions` from the plan config.
fn build_options(config: &PlanConfig) -> CompletionOptions {
    CompletionOptions {
        temperature: Some(config.temperature),
        max_tokens: Some(config.max_tokens),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_options_defaults() {
        let config = PlanConfig::default();
        let opts = build_options(&config);
        assert_eq!(opts.temperature, Some(0.7));
        assert_eq!(opts.max_tokens, Some(4096));
    }
}
