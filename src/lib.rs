//! # edgequake-pdfsum
//!
//! Summarise PDF documents with a language model.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input      resolve local file or download from URL
//!  ├─ 2. Extract    page text via lopdf (CPU-bound, spawn_blocking)
//!  ├─ 3. Chunk      size-bounded pieces split at paragraph → sentence → word
//!  ├─ 4. Summarise  one deterministic model call per chunk, in order
//!  ├─ 5. Polish     strip labels, fences and stray whitespace from replies
//!  └─ 6. Join       chunk summaries joined with a single space
//! ```
//!
//! The model is built once per process and shared by every later call, so a
//! long-running session pays the provider setup cost only on its first
//! summary.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edgequake_pdfsum::{summarize, SummaryConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Provider auto-detected from OPENAI_API_KEY / ANTHROPIC_API_KEY / GEMINI_API_KEY
//!     let config = SummaryConfig::builder().max_length(200).build()?;
//!     let output = summarize("report.pdf", &config).await?;
//!     println!("{}", output.summary);
//!     eprintln!("{} chunks, {} tokens in / {} out",
//!         output.stats.chunk_count,
//!         output.stats.total_input_tokens,
//!         output.stats.total_output_tokens);
//!     Ok(())
//! }
//! ```
//!
//! ## Interactive use
//!
//! [`Session`] wraps the pipeline in an upload → extract → summarise state
//! machine. Changing the summary length re-summarises the text it already
//! extracted; a failed summary leaves the text in place for a retry.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdfsum` binary (clap + anyhow + indicatif + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! edgequake-pdfsum = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod prompts;
pub mod session;
pub mod stream;
pub mod summarize;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{SummaryBounds, SummaryConfig, SummaryConfigBuilder};
pub use error::{ChunkError, ExtractError, ModelError, SummaryError};
pub use model::{shared_model, LlmSummaryModel, ModelReply, SummaryModel, SummaryRequest};
pub use output::{ChunkSummary, Document, ExtractedText, SummaryOutput, SummaryStats};
pub use pipeline::chunk::split_text;
pub use pipeline::extract::{extract, Extraction};
pub use progress::{ProgressCallback, SummaryProgressCallback};
pub use session::{Notice, Phase, Session, SessionEvent};
pub use stream::{summarize_stream, ChunkStream};
pub use summarize::{summarize, summarize_document, summarize_extracted, summarize_sync, summarize_text};
