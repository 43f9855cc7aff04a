//! Error types for the edgequake-pdfsum library.
//!
//! Four error types, one per failure surface:
//!
//! * [`SummaryError`] — **Fatal**: the run cannot produce a summary at all
//!   (file not found, no extractable text, provider not configured, a chunk
//!   that kept failing). Returned as `Err(SummaryError)` from the top-level
//!   `summarize*` functions.
//!
//! * [`ExtractError`] — text extraction failed. [`crate::pipeline::extract::extract`]
//!   never propagates it; it travels inside [`crate::pipeline::extract::Extraction`]
//!   so the session can show it as a notice and return to its idle prompt.
//!
//! * [`ChunkError`] — **Non-fatal**: one chunk failed after all retries.
//!   Delivered to progress callbacks and streams so callers see exactly which
//!   chunk broke.
//!
//! * [`ModelError`] — what a [`crate::model::SummaryModel`] implementation
//!   reports for a single call. Retry policy lives above it.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the edgequake-pdfsum library.
#[derive(Debug, Error)]
pub enum SummaryError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The input string is empty or otherwise unusable.
    #[error("Invalid input '{input}': not a file path or a valid HTTP/HTTPS URL")]
    InvalidInput { input: String },

    /// HTTP URL was syntactically valid but download failed.
    #[error("Failed to download '{url}': {reason}\nCheck your internet connection.")]
    DownloadFailed { url: String, reason: String },

    /// Download exceeded the configured timeout.
    #[error("Download timed out after {secs}s for '{url}'\nIncrease --download-timeout.")]
    DownloadTimeout { url: String, secs: u64 },

    // ── Extraction errors ─────────────────────────────────────────────────
    /// Text extraction failed.
    #[error("Failed to extract text: {0}")]
    ExtractionFailed(#[from] ExtractError),

    /// The PDF parsed but contains no extractable text (e.g. scanned images).
    #[error("No text could be extracted from '{name}' ({pages} pages).\nThe PDF may contain only scanned images.")]
    NoExtractableText { name: String, pages: usize },

    // ── Model errors ──────────────────────────────────────────────────────
    /// The configured provider is not initialised (missing API key etc.).
    #[error("LLM provider '{provider}' is not configured.\n{hint}")]
    ProviderNotConfigured { provider: String, hint: String },

    /// A chunk still failed after every retry; the summary would be incomplete.
    #[error("Chunk {chunk}/{total} failed: {source}")]
    ChunkFailed {
        chunk: usize,
        total: usize,
        #[source]
        source: ChunkError,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Why text extraction failed.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
pub enum ExtractError {
    /// The upload was empty.
    #[error("the uploaded file is empty")]
    EmptyInput,

    /// The bytes do not start with the `%PDF` header.
    #[error("not a PDF file (first bytes: {magic:?})")]
    NotAPdf { magic: Vec<u8> },

    /// Header, xref table or trailer could not be parsed.
    #[error("PDF is corrupt or unsupported: {detail}")]
    Parse { detail: String },

    /// A single page's content stream could not be decoded.
    #[error("page {page}: {detail}")]
    PageFailed { page: u32, detail: String },

    /// The parser crashed or the worker thread died.
    #[error("internal extraction error: {0}")]
    Internal(String),
}

/// A non-fatal error for a single chunk.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
pub enum ChunkError {
    /// Model call failed after retries.
    #[error("chunk {chunk}: model call failed after {retries} retries: {detail}")]
    ModelFailed {
        chunk: usize,
        retries: u32,
        detail: String,
    },

    /// Model call timed out on every attempt.
    #[error("chunk {chunk}: model call timed out after {secs}s")]
    Timeout { chunk: usize, secs: u64 },
}

/// Error reported by a [`crate::model::SummaryModel`] for one call.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// The backend answered with an error.
    #[error("{0}")]
    Api(String),

    /// The backend answered but the reply was empty.
    #[error("model returned an empty summary")]
    EmptyReply,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_failed_display_names_position() {
        let e = SummaryError::ChunkFailed {
            chunk: 2,
            total: 5,
            source: ChunkError::Timeout { chunk: 2, secs: 60 },
        };
        let msg = e.to_string();
        assert!(msg.contains("2/5"), "got: {msg}");
        assert!(msg.contains("60s"), "got: {msg}");
    }

    #[test]
    fn extraction_failed_wraps_extract_error() {
        let e: SummaryError = ExtractError::NotAPdf {
            magic: b"GIF8".to_vec(),
        }
        .into();
        assert!(e.to_string().starts_with("Failed to extract text:"));
        assert!(e.to_string().contains("not a PDF"));
    }

    #[test]
    fn no_text_display() {
        let e = SummaryError::NoExtractableText {
            name: "scan.pdf".into(),
            pages: 3,
        };
        assert!(e.to_string().contains("scan.pdf"));
        assert!(e.to_string().contains("3 pages"));
    }

    #[test]
    fn model_failed_display() {
        let e = ChunkError::ModelFailed {
            chunk: 4,
            retries: 3,
            detail: "HTTP 503".into(),
        };
        assert!(e.to_string().contains("chunk 4"));
        assert!(e.to_string().contains("HTTP 503"));
    }
}
