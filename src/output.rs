//! Data types produced by the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// An uploaded PDF: raw bytes plus the name it was uploaded under.
///
/// The bytes are shared so handing a document to the blocking extraction
/// thread does not copy it.
#[derive(Clone)]
pub struct Document {
    pub name: String,
    pub bytes: Arc<[u8]>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: Arc::from(bytes.into()),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("name", &self.name)
            .field("bytes", &format_args!("<{} bytes>", self.bytes.len()))
            .finish()
    }
}

/// Plain text of a document: every page's text, in page order, with no
/// separator between pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
}

impl ExtractedText {
    /// Whether there is anything besides whitespace to summarise.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Result of summarising one chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSummary {
    /// 1-indexed position of the chunk.
    pub index: usize,
    /// Length of the source chunk in characters.
    pub chunk_chars: usize,
    /// Cleaned summary text.
    pub summary: String,
    pub input_tokens: usize,
    pub output_tokens: usize,
    pub duration_ms: u64,
    /// Retries needed before the call succeeded.
    pub retries: u32,
}

/// Counters for one summarisation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Model that produced the summaries.
    pub model: String,
    pub page_count: usize,
    pub source_chars: usize,
    pub chunk_count: usize,
    pub summary_chars: usize,
    pub total_input_tokens: u64,
    pub total_output_tokens: u64,
    pub duration_ms: u64,
}

/// Final output of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOutput {
    /// Chunk summaries joined with a single space, in chunk order.
    pub summary: String,
    pub chunks: Vec<ChunkSummary>,
    pub stats: SummaryStats,
}

/// Join chunk summaries into the final summary.
pub fn join_summaries(chunks: &[ChunkSummary]) -> String {
    chunks
        .iter()
        .map(|c| c.summary.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
