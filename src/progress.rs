//! Progress-callback trait for extraction and per-chunk summary events.
//!
//! Inject an [`Arc<dyn SummaryProgressCallback>`] via
//! [`crate::config::SummaryConfigBuilder::progress_callback`] to receive
//! events as the pipeline extracts text and summarises each chunk.
//!
//! The callback is the only coupling between the pipeline and whatever is
//! showing progress: the CLI drives an `indicatif` spinner from it, a server
//! could forward the same events over a channel.
//!
//! # Example
//!
//! ```rust
//! use edgequake_pdfsum::{SummaryProgressCallback, SummaryConfig};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     completed: Arc<AtomicUsize>,
//! }
//!
//! impl SummaryProgressCallback for CountingCallback {
//!     fn on_chunk_complete(&self, chunk: usize, total_chunks: usize, summary_len: usize) {
//!         self.completed.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("Chunk {}/{} done ({} bytes)", chunk, total_chunks, summary_len);
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback {
//!     completed: Arc::new(AtomicUsize::new(0)),
//! });
//!
//! let config = SummaryConfig::builder()
//!     .progress_callback(counter as Arc<dyn SummaryProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use std::sync::Arc;

/// Called by the pipeline as it extracts text and summarises each chunk.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Chunks are processed one at a time, in order, but
/// implementations must still be `Send + Sync` because the pipeline runs on
/// a multi-threaded runtime.
pub trait SummaryProgressCallback: Send + Sync {
    /// Called before the PDF is parsed.
    fn on_extraction_start(&self) {}

    /// Called after a successful extraction.
    ///
    /// # Arguments
    /// * `pages` — pages read from the document
    /// * `chars` — characters of text extracted
    fn on_extraction_complete(&self, pages: usize, chars: usize) {
        let _ = (pages, chars);
    }

    /// Called once before the first chunk is sent to the model.
    fn on_summary_start(&self, total_chunks: usize) {
        let _ = total_chunks;
    }

    /// Called just before the model request is sent for a chunk.
    ///
    /// # Arguments
    /// * `chunk`        — 1-indexed chunk number
    /// * `total_chunks` — chunks in this run
    fn on_chunk_start(&self, chunk: usize, total_chunks: usize) {
        let _ = (chunk, total_chunks);
    }

    /// Called when a chunk is summarised.
    ///
    /// `summary_len` is the byte length of the cleaned summary.
    fn on_chunk_complete(&self, chunk: usize, total_chunks: usize, summary_len: usize) {
        let _ = (chunk, total_chunks, summary_len);
    }

    /// Called when a chunk fails after all retries are exhausted.
    fn on_chunk_error(&self, chunk: usize, total_chunks: usize, error: &str) {
        let _ = (chunk, total_chunks, error);
    }

    /// Called once after the run ends, successfully or not.
    ///
    /// # Arguments
    /// * `total_chunks`  — chunks in this run
    /// * `success_count` — chunks summarised without error
    fn on_summary_complete(&self, total_chunks: usize, success_count: usize) {
        let _ = (total_chunks, success_count);
    }
}

/// Convenience alias matching the type stored in [`crate::config::SummaryConfig`].
pub type ProgressCallback = Arc<dyn SummaryProgressCallback>;
