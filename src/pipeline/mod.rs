//! Pipeline stages for PDF summarisation.
//!
//! Each submodule implements exactly one transformation step.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ extract ──▶ chunk ──▶ llm ──▶ postprocess
//! (URL/path)  (lopdf)  (text-splitter)  (model)   (cleanup)
//! ```
//!
//! 1. [`input`]   — read the user-supplied path or download the URL into memory
//! 2. [`extract`] — page text via lopdf; runs in `spawn_blocking` and never
//!    propagates an error
//! 3. [`chunk`]   — split into size-bounded chunks at the largest boundary
//!    that fits: paragraph, sentence, word, character
//! 4. [`llm`]     — one model call per chunk with timeout and retry/backoff;
//!    the only stage with network I/O
//! 5. [`postprocess`] — deterministic cleanup of model replies

pub mod chunk;
pub mod extract;
pub mod input;
pub mod llm;
pub mod postprocess;
