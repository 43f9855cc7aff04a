//! Model interaction: summarise one chunk with timeout and retries.
//!
//! Prompt construction lives in [`crate::prompts`] and the provider call in
//! [`crate::model`]; this module only owns the per-chunk policy.
//!
//! ## Retry Strategy
//!
//! HTTP 429 / 503 errors from LLM APIs are transient. Exponential backoff
//! (`retry_backoff_ms * 2^attempt`) gives a recovering endpoint room: with a
//! 500 ms base and 3 retries the wait sequence is 500 ms → 1 s → 2 s.

use crate::config::SummaryConfig;
use crate::error::ChunkError;
use crate::model::{SummaryModel, SummaryRequest};
use crate::output::ChunkSummary;
use crate::pipeline::postprocess;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::{sleep, timeout, Duration};
use tracing::{debug, warn};

/// Summarise chunk number `index` (1-indexed).
///
/// Each attempt is bounded by `config.api_timeout_secs`. A reply that is
/// empty after cleanup counts as a failed attempt. The chunk is sent on its
/// own: nothing from earlier chunks is included.
pub async fn summarize_chunk(
    model: &Arc<dyn SummaryModel>,
    index: usize,
    chunk: &str,
    config: &SummaryConfig,
) -> Result<ChunkSummary, ChunkError> {
    let start = Instant::now();
    let request = SummaryRequest {
        chunk,
        bounds: config.bounds(),
        system_prompt: config.system_prompt.as_deref(),
    };
    let limit = Duration::from_secs(config.api_timeout_secs);

    let mut last_err: Option<String> = None;
    let mut every_attempt_timed_out = true;

    for attempt in 0..=config.max_retries {
        if attempt > 0 {
            let backoff = backoff_ms(config.retry_backoff_ms, attempt);
            warn!(
                "Chunk {}: retry {}/{} after {}ms",
                index, attempt, config.max_retries, backoff
            );
            sleep(Duration::from_millis(backoff)).await;
        }

        match timeout(limit, model.summarize(request)).await {
            Ok(Ok(reply)) => {
                every_attempt_timed_out = false;
                let summary = postprocess::clean_summary(&reply.text);
                if summary.is_empty() {
                    warn!("Chunk {}: attempt {} returned only noise", index, attempt + 1);
                    last_err = Some("model reply was empty after cleanup".to_string());
                    continue;
                }

                let duration = start.elapsed();
                debug!(
                    "Chunk {}: {} → {} chars in {:?}",
                    index,
                    chunk.chars().count(),
                    summary.chars().count(),
                    duration
                );
                return Ok(ChunkSummary {
                    index,
                    chunk_chars: chunk.chars().count(),
                    summary,
                    input_tokens: reply.input_tokens,
                    output_tokens: reply.output_tokens,
                    duration_ms: duration.as_millis() as u64,
                    retries: attempt,
                });
            }
            Ok(Err(e)) => {
                every_attempt_timed_out = false;
                warn!("Chunk {}: attempt {} failed — {}", index, attempt + 1, e);
                last_err = Some(e.to_string());
            }
            Err(_) => {
                warn!(
                    "Chunk {}: attempt {} timed out after {}s",
                    index,
                    attempt + 1,
                    config.api_timeout_secs
                );
                last_err = Some(format!("timed out after {}s", config.api_timeout_secs));
            }
        }
    }

    if every_attempt_timed_out {
        Err(ChunkError::Timeout {
            chunk: index,
            secs: config.api_timeout_secs,
        })
    } else {
        Err(ChunkError::ModelFailed {
            chunk: index,
            retries: config.max_retries,
            detail: last_err.unwrap_or_else(|| "Unknown error".to_string()),
        })
    }
}

/// Delay before retry number `attempt` (1-based).
fn backoff_ms(base_ms: u64, attempt: u32) -> u64 {
    let exponent = attempt.saturating_sub(1).min(20);
    base_ms.saturating_mul(1u64 << exponent)
}
