//! Configuration types for PDF summarisation.
//!
//! All run behaviour is controlled through [`SummaryConfig`], built via its
//! [`SummaryConfigBuilder`]. Keeping every knob in one struct makes it easy
//! to share a config between the one-shot CLI, the interactive session and
//! library callers, and to diff two runs to understand why their summaries
//! differ.

use crate::error::SummaryError;
use crate::model::SummaryModel;
use crate::progress::ProgressCallback;
use edgequake_llm::LLMProvider;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Allowed range for the maximum summary length, in model tokens.
pub const MAX_LENGTH_RANGE: RangeInclusive<u32> = 50..=500;
/// Allowed range for the minimum summary length, in model tokens.
pub const MIN_LENGTH_RANGE: RangeInclusive<u32> = 20..=100;
/// Default maximum summary length per chunk.
pub const DEFAULT_MAX_LENGTH: u32 = 150;
/// Default minimum summary length per chunk.
pub const DEFAULT_MIN_LENGTH: u32 = 50;
/// Default chunk size, in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;
/// Model used when nothing else is configured.
pub const DEFAULT_MODEL: &str = "gpt-4.1-nano";

/// Requested length of each chunk summary, in model tokens.
///
/// The model is asked to stay inside the range but generation is not
/// truncated to it; treat the bounds as guidance, not a guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBounds {
    pub min_length: u32,
    pub max_length: u32,
}

impl SummaryBounds {
    /// Clamp both values to their ranges; a minimum above the maximum is
    /// lowered to the maximum.
    pub fn new(min_length: u32, max_length: u32) -> Self {
        let max_length = max_length.clamp(*MAX_LENGTH_RANGE.start(), *MAX_LENGTH_RANGE.end());
        let min_length = min_length
            .clamp(*MIN_LENGTH_RANGE.start(), *MIN_LENGTH_RANGE.end())
            .min(max_length);
        Self {
            min_length,
            max_length,
        }
    }
}

impl Default for SummaryBounds {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH)
    }
}

impl fmt::Display for SummaryBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{} tokens", self.min_length, self.max_length)
    }
}

/// Configuration for a summarisation run.
///
/// Built via [`SummaryConfig::builder()`] or using
/// [`SummaryConfig::default()`].
///
/// # Example
/// ```rust
/// use edgequake_pdfsum::SummaryConfig;
///
/// let config = SummaryConfig::builder()
///     .max_length(200)
///     .min_length(60)
///     .chunk_size(2048)
///     .model("gpt-4.1-mini")
///     .build()
///     .unwrap();
/// assert_eq!(config.bounds().max_length, 200);
/// ```
#[derive(Clone)]
pub struct SummaryConfig {
    /// Maximum summary length per chunk, in tokens. Range: 50–500. Default: 150.
    pub max_length: u32,

    /// Minimum summary length per chunk, in tokens. Range: 20–100. Default: 50.
    pub min_length: u32,

    /// Maximum chunk size in characters. Default: 1024.
    ///
    /// 1 024 characters is roughly 250 tokens of English prose, small enough
    /// that even compact models summarise a chunk without losing its middle.
    pub chunk_size: usize,

    /// LLM model identifier, e.g. "gpt-4.1-nano", "claude-sonnet-4-20250514".
    /// If None, uses [`DEFAULT_MODEL`].
    pub model: Option<String>,

    /// LLM provider name (e.g. "openai", "anthropic", "ollama").
    /// If None along with `provider`, the provider is auto-detected.
    pub provider_name: Option<String>,

    /// Pre-constructed LLM provider. Takes precedence over `provider_name`.
    pub provider: Option<Arc<dyn LLMProvider>>,

    /// Pre-constructed summary model. Takes precedence over everything else
    /// and bypasses the process-wide model cache.
    pub summarizer: Option<Arc<dyn SummaryModel>>,

    /// Maximum retry attempts on a failed model call. Default: 3.
    pub max_retries: u32,

    /// Initial retry delay in milliseconds (exponential backoff). Default: 500.
    pub retry_backoff_ms: u64,

    /// Custom system prompt. If None, uses built-in default.
    pub system_prompt: Option<String>,

    /// Download timeout for URL inputs in seconds. Default: 120.
    pub download_timeout_secs: u64,

    /// Per-model-call timeout in seconds. Default: 60.
    pub api_timeout_secs: u64,

    /// Receives extraction and per-chunk events. Default: None.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            chunk_size: DEFAULT_CHUNK_SIZE,
            model: None,
            provider_name: None,
            provider: None,
            summarizer: None,
            max_retries: 3,
            retry_backoff_ms: 500,
            system_prompt: None,
            download_timeout_secs: 120,
            api_timeout_secs: 60,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for SummaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummaryConfig")
            .field("max_length", &self.max_length)
            .field("min_length", &self.min_length)
            .field("chunk_size", &self.chunk_size)
            .field("model", &self.model)
            .field("provider_name", &self.provider_name)
            .field("provider", &self.provider.as_ref().map(|_| "<dyn LLMProvider>"))
            .field(
                "summarizer",
                &self.summarizer.as_ref().map(|m| m.name().to_string()),
            )
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_ms", &self.retry_backoff_ms)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn SummaryProgressCallback>"),
            )
            .finish()
    }
}

impl SummaryConfig {
    /// Create a new builder for `SummaryConfig`.
    pub fn builder() -> SummaryConfigBuilder {
        SummaryConfigBuilder {
            config: Self::default(),
        }
    }

    /// The effective summary bounds for this config.
    pub fn bounds(&self) -> SummaryBounds {
        SummaryBounds::new(self.min_length, self.max_length)
    }

    /// Model id to request when building a provider.
    pub fn model_id(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}

/// Builder for [`SummaryConfig`].
pub struct SummaryConfigBuilder {
    config: SummaryConfig,
}

impl fmt::Debug for SummaryConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummaryConfigBuilder")
            .field("config", &self.config)
            .finish()
    }
}

impl SummaryConfigBuilder {
    pub fn max_length(mut self, n: u32) -> Self {
        self.config.max_length = n.clamp(*MAX_LENGTH_RANGE.start(), *MAX_LENGTH_RANGE.end());
        self
    }

    pub fn min_length(mut self, n: u32) -> Self {
        self.config.min_length = n.clamp(*MIN_LENGTH_RANGE.start(), *MIN_LENGTH_RANGE.end());
        self
    }

    pub fn chunk_size(mut self, n: usize) -> Self {
        self.config.chunk_size = n.max(1);
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = Some(model.into());
        self
    }

    pub fn provider_name(mut self, name: impl Into<String>) -> Self {
        self.config.provider_name = Some(name.into());
        self
    }

    pub fn provider(mut self, provider: Arc<dyn LLMProvider>) -> Self {
        self.config.provider = Some(provider);
        self
    }

    pub fn summarizer(mut self, model: Arc<dyn SummaryModel>) -> Self {
        self.config.summarizer = Some(model);
        self
    }

    pub fn max_retries(mut self, n: u32) -> Self {
        self.config.max_retries = n;
        self
    }

    pub fn retry_backoff_ms(mut self, ms: u64) -> Self {
        self.config.retry_backoff_ms = ms;
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = Some(prompt.into());
        self
    }

    pub fn download_timeout_secs(mut self, secs: u64) -> Self {
        self.config.download_timeout_secs = secs;
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<SummaryConfig, SummaryError> {
        let c = &self.config;
        if !MAX_LENGTH_RANGE.contains(&c.max_length) {
            return Err(SummaryError::InvalidConfig(format!(
                "max length must be 50–500, got {}",
                c.max_length
            )));
        }
        if !MIN_LENGTH_RANGE.contains(&c.min_length) {
            return Err(SummaryError::InvalidConfig(format!(
                "min length must be 20–100, got {}",
                c.min_length
            )));
        }
        if c.chunk_size == 0 {
            return Err(SummaryError::InvalidConfig(
                "Chunk size must be ≥ 1".into(),
            ));
        }
        if c.api_timeout_secs == 0 {
            return Err(SummaryError::InvalidConfig(
                "API timeout must be ≥ 1 second".into(),
            ));
        }
        Ok(self.config)
    }
}
