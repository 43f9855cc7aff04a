//! Streaming summarisation API: emit chunk summaries as they complete.
//!
//! Large documents mean many model calls. A stream lets callers print each
//! chunk summary the moment it is ready instead of staring at a spinner
//! until the whole pass is done.
//!
//! Unlike the eager [`crate::summarize::summarize_text`], a failed chunk does
//! not end the stream: it is yielded as `Err(ChunkError)` and the next chunk
//! is attempted. Items always arrive in chunk order.

use crate::config::SummaryConfig;
use crate::error::{ChunkError, SummaryError};
use crate::model::shared_model;
use crate::output::ChunkSummary;
use crate::pipeline::{chunk, llm};
use futures::stream::{self, StreamExt};
use std::pin::Pin;
use std::sync::Arc;
use tokio_stream::Stream;
use tracing::info;

/// A boxed stream of chunk results.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<ChunkSummary, ChunkError>> + Send>>;

/// Split `text` and summarise it chunk by chunk, yielding each result.
///
/// # Returns
/// - `Ok(ChunkStream)` — one item per chunk, in chunk order
/// - `Err(SummaryError)` — the text is blank, or no model could be configured
pub async fn summarize_stream(
    text: &str,
    config: &SummaryConfig,
) -> Result<ChunkStream, SummaryError> {
    let chunks = chunk::split_text(text, config.chunk_size)?;
    if chunks.is_empty() {
        return Err(SummaryError::NoExtractableText {
            name: "text".to_string(),
            pages: 0,
        });
    }
    info!("Starting streaming summarisation of {} chunks", chunks.len());

    let model = shared_model(config)?;
    let config_clone = config.clone();

    let s = stream::iter(chunks.into_iter().enumerate()).then(move |(i, text)| {
        let model = Arc::clone(&model);
        let cfg = config_clone.clone();
        async move { llm::summarize_chunk(&model, i + 1, &text, &cfg).await }
    });

    Ok(Box::pin(s))
}
