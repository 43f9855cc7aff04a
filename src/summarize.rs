//! Eager (whole-document) summarisation entry points.
//!
//! These functions wait for every chunk, then return the joined summary.
//! Use [`crate::stream::summarize_stream`] instead to show chunk summaries
//! as they arrive.
//!
//! Chunks are summarised strictly in order, one model call at a time. A chunk
//! that still fails after all retries aborts the run: a summary with a hole
//! in the middle would read as if that part of the document did not exist.

use crate::config::SummaryConfig;
use crate::error::SummaryError;
use crate::model::{shared_model, SummaryModel};
use crate::output::{join_summaries, ChunkSummary, Document, ExtractedText, SummaryOutput, SummaryStats};
use crate::pipeline::{chunk, extract, input, llm};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Summarise a PDF file or URL.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `input` — Local file path or HTTP/HTTPS URL to a PDF
/// * `config` — Summarisation configuration
///
/// # Errors
/// - File not found / permission denied / download failed
/// - Text extraction failed or the PDF has no text
/// - No model could be configured
/// - A chunk failed after every retry
pub async fn summarize(
    input_str: impl AsRef<str>,
    config: &SummaryConfig,
) -> Result<SummaryOutput, SummaryError> {
    let input_str = input_str.as_ref();
    info!("Starting summarisation: {}", input_str);

    let document = input::resolve_input(input_str, config.download_timeout_secs).await?;
    summarize_document(&document, config).await
}

/// Summarise a PDF already held in memory.
pub async fn summarize_document(
    document: &Document,
    config: &SummaryConfig,
) -> Result<SummaryOutput, SummaryError> {
    if let Some(ref cb) = config.progress_callback {
        cb.on_extraction_start();
    }

    let content = extract::extract(document).await.into_result()?;

    if let Some(ref cb) = config.progress_callback {
        cb.on_extraction_complete(content.page_count, content.char_count());
    }

    if !content.has_text() {
        return Err(SummaryError::NoExtractableText {
            name: document.name.clone(),
            pages: content.page_count,
        });
    }

    summarize_extracted(&content, config).await
}

/// Summarise plain text that did not come from a PDF.
pub async fn summarize_text(
    text: impl Into<String>,
    config: &SummaryConfig,
) -> Result<SummaryOutput, SummaryError> {
    let content = ExtractedText {
        text: text.into(),
        page_count: 0,
    };
    summarize_extracted(&content, config).await
}

/// Chunk, summarise and join already-extracted text.
///
/// The model is resolved only once there is something to summarise, so an
/// empty document never needs provider credentials.
pub async fn summarize_extracted(
    content: &ExtractedText,
    config: &SummaryConfig,
) -> Result<SummaryOutput, SummaryError> {
    let start = Instant::now();

    let chunks = chunk::split_text(&content.text, config.chunk_size)?;
    if chunks.is_empty() {
        return Err(SummaryError::NoExtractableText {
            name: "text".to_string(),
            pages: content.page_count,
        });
    }
    info!(
        "Summarising {} chars in {} chunks ({})",
        content.char_count(),
        chunks.len(),
        config.bounds()
    );

    let model = shared_model(config)?;
    let results = process_sequential(&model, &chunks, config).await?;

    let summary = join_summaries(&results);
    let stats = SummaryStats {
        model: model.name().to_string(),
        page_count: content.page_count,
        source_chars: content.char_count(),
        chunk_count: results.len(),
        summary_chars: summary.chars().count(),
        total_input_tokens: results.iter().map(|c| c.input_tokens as u64).sum(),
        total_output_tokens: results.iter().map(|c| c.output_tokens as u64).sum(),
        duration_ms: start.elapsed().as_millis() as u64,
    };

    info!(
        "Summary complete: {} chunks → {} chars in {}ms",
        stats.chunk_count, stats.summary_chars, stats.duration_ms
    );

    Ok(SummaryOutput {
        summary,
        chunks: results,
        stats,
    })
}

/// Synchronous wrapper around [`summarize`].
///
/// Creates a temporary tokio runtime internally; do not call it from inside
/// an async context.
pub fn summarize_sync(
    input_str: impl AsRef<str>,
    config: &SummaryConfig,
) -> Result<SummaryOutput, SummaryError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| SummaryError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(summarize(input_str, config))
}

/// Summarise chunks one after another, stopping at the first failure.
async fn process_sequential(
    model: &Arc<dyn SummaryModel>,
    chunks: &[String],
    config: &SummaryConfig,
) -> Result<Vec<ChunkSummary>, SummaryError> {
    let total = chunks.len();
    let mut results = Vec::with_capacity(total);

    if let Some(ref cb) = config.progress_callback {
        cb.on_summary_start(total);
    }

    for (i, text) in chunks.iter().enumerate() {
        let index = i + 1;
        if let Some(ref cb) = config.progress_callback {
            cb.on_chunk_start(index, total);
        }

        match llm::summarize_chunk(model, index, text, config).await {
            Ok(result) => {
                debug!("Chunk {}/{} summarised", index, total);
                if let Some(ref cb) = config.progress_callback {
                    cb.on_chunk_complete(index, total, result.summary.len());
                }
                results.push(result);
            }
            Err(e) => {
                if let Some(ref cb) = config.progress_callback {
                    cb.on_chunk_error(index, total, &e.to_string());
                    cb.on_summary_complete(total, results.len());
                }
                return Err(SummaryError::ChunkFailed {
                    chunk: index,
                    total,
                    source: e,
                });
            }
        }
    }

    if let Some(ref cb) = config.progress_callback {
        cb.on_summary_complete(total, results.len());
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::model::{ModelReply, SummaryRequest};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Echoes the first word of each chunk and records what it saw.
    #[derive(Default)]
    struct FirstWordModel {
        seen: Mutex<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    #[async_trait]
    impl SummaryModel for FirstWordModel {
        fn name(&self) -> &str {
            "first-word"
        }

        async fn summarize(&self, request: SummaryRequest<'_>) -> Result<ModelReply, ModelError> {
            self.seen.lock().unwrap().push(request.chunk.to_string());
            let word = request.chunk.split_whitespace().next().unwrap_or_default();
            if Some(word) == self.fail_on {
                return Err(ModelError::Api("boom".into()));
            }
            Ok(ModelReply {
                text: format!("{word}."),
                input_tokens: request.chunk.len(),
                output_tokens: 1,
            })
        }
    }

    fn config_with(model: Arc<FirstWordModel>) -> SummaryConfig {
        SummaryConfig::builder()
            .summarizer(model)
            .chunk_size(20)
            .max_retries(0)
            .retry_backoff_ms(0)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn chunks_are_summarised_in_order_and_joined() {
        let model = Arc::new(FirstWordModel::default());
        let config = config_with(Arc::clone(&model));

        let output = summarize_text("Alpha one two.\n\nBeta three four.\n\nGamma five.", &config)
            .await
            .unwrap();

        assert_eq!(output.summary, "Alpha. Beta. Gamma.");
        assert_eq!(output.stats.chunk_count, 3);
        assert_eq!(output.stats.model, "first-word");
        assert_eq!(output.stats.total_output_tokens, 3);
        let seen = model.seen.lock().unwrap();
        assert_eq!(*seen, vec!["Alpha one two.", "Beta three four.", "Gamma five."]);
    }

    #[tokio::test]
    async fn failing_chunk_aborts_the_run() {
        let model = Arc::new(FirstWordModel {
            fail_on: Some("Beta"),
            ..Default::default()
        });
        let config = config_with(Arc::clone(&model));

        let err = summarize_text("Alpha one two.\n\nBeta three four.\n\nGamma five.", &config)
            .await
            .unwrap_err();

        assert!(
            matches!(err, SummaryError::ChunkFailed { chunk: 2, total: 3, .. }),
            "got: {err}"
        );
        assert_eq!(model.seen.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn blank_text_never_reaches_the_model() {
        let model = Arc::new(FirstWordModel::default());
        let config = config_with(Arc::clone(&model));

        let err = summarize_text("   \n\n  ", &config).await.unwrap_err();
        assert!(matches!(err, SummaryError::NoExtractableText { .. }));
        assert!(model.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_pdf_document_is_extraction_failure() {
        let model = Arc::new(FirstWordModel::default());
        let config = config_with(model);
        let doc = Document::new("notes.txt", b"just some text".to_vec());

        let err = summarize_document(&doc, &config).await.unwrap_err();
        assert!(matches!(err, SummaryError::ExtractionFailed(_)), "got: {err}");
    }
}
