//! The summarisation model and its process-wide cache.
//!
//! [`SummaryModel`] is the seam between the pipeline and whatever produces
//! summaries. The shipped implementation, [`LlmSummaryModel`], drives any
//! `edgequake-llm` chat provider with deterministic decoding
//! (`temperature = 0`). Tests and embedders can plug in their own model via
//! [`crate::config::SummaryConfig::summarizer`].
//!
//! Building a provider is the expensive step (credential lookup, HTTP client
//! setup, for local backends a model load), so [`shared_model`] does it once
//! per process and hands out clones of the same `Arc` afterwards.

use crate::config::{SummaryBounds, SummaryConfig};
use crate::error::{ModelError, SummaryError};
use crate::prompts;
use async_trait::async_trait;
use edgequake_llm::{ChatMessage, CompletionOptions, LLMProvider, ProviderFactory};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One summarisation request.
#[derive(Debug, Clone, Copy)]
pub struct SummaryRequest<'a> {
    /// The chunk to summarise.
    pub chunk: &'a str,
    /// Requested summary length.
    pub bounds: SummaryBounds,
    /// System prompt override; `None` uses [`prompts::DEFAULT_SYSTEM_PROMPT`].
    pub system_prompt: Option<&'a str>,
}

/// A model's answer to one [`SummaryRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelReply {
    pub text: String,
    pub input_tokens: usize,
    pub output_tokens: usize,
}

/// Produces one abstractive summary per call.
///
/// Implementations must be deterministic for identical requests (no
/// sampling) and must not carry state from one call to the next.
#[async_trait]
pub trait SummaryModel: Send + Sync {
    /// Model identifier shown in logs and stats.
    fn name(&self) -> &str;

    /// Summarise one chunk.
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<ModelReply, ModelError>;
}

/// [`SummaryModel`] backed by an `edgequake-llm` chat provider.
pub struct LlmSummaryModel {
    provider: Arc<dyn LLMProvider>,
    name: String,
}

impl LlmSummaryModel {
    pub fn new(provider: Arc<dyn LLMProvider>, name: impl Into<String>) -> Self {
        Self {
            provider,
            name: name.into(),
        }
    }
}

#[async_trait]
impl SummaryModel for LlmSummaryModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<ModelReply, ModelError> {
        let messages = vec![
            ChatMessage::system(prompts::system_prompt(
                request.system_prompt,
                &request.bounds,
            )),
            ChatMessage::user(prompts::chunk_message(request.chunk)),
        ];
        let options = build_options(&request.bounds);

        let response = self
            .provider
            .chat(&messages, Some(&options))
            .await
            .map_err(|e| ModelError::Api(e.to_string()))?;

        debug!(
            "{}: {} input tokens, {} output tokens",
            self.name, response.prompt_tokens, response.completion_tokens
        );

        if response.content.trim().is_empty() {
            return Err(ModelError::EmptyReply);
        }

        Ok(ModelReply {
            text: response.content,
            input_tokens: response.prompt_tokens,
            output_tokens: response.completion_tokens,
        })
    }
}

/// Build `CompletionOptions` for a request.
///
/// Temperature is pinned to 0 so identical chunks give identical summaries.
/// `max_tokens` is a hard cap at twice the requested maximum; the prompt
/// carries the target range, the cap only stops runaway generations.
fn build_options(bounds: &SummaryBounds) -> CompletionOptions {
    CompletionOptions {
        temperature: Some(0.0),
        max_tokens: Some(generation_cap(bounds)),
        ..Default::default()
    }
}

fn generation_cap(bounds: &SummaryBounds) -> usize {
    bounds.max_length as usize * 2
}

// ── Process-wide cache ───────────────────────────────────────────────────

/// Lazily-initialised holder for one [`SummaryModel`].
///
/// Initialisation runs at most once even under concurrent callers; a failed
/// load leaves the cache empty so the next call tries again.
pub struct ModelCache {
    cell: OnceCell<Arc<dyn SummaryModel>>,
}

impl ModelCache {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the cached model, running `load` first if the cache is empty.
    pub fn get_or_load<F>(&self, load: F) -> Result<Arc<dyn SummaryModel>, SummaryError>
    where
        F: FnOnce() -> Result<Arc<dyn SummaryModel>, SummaryError>,
    {
        self.cell.get_or_try_init(load).map(Arc::clone)
    }

    /// The cached model, if one has been loaded.
    pub fn get(&self) -> Option<Arc<dyn SummaryModel>> {
        self.cell.get().map(Arc::clone)
    }
}

impl Default for ModelCache {
    fn default() -> Self {
        Self::new()
    }
}

static SHARED_MODEL: ModelCache = ModelCache::new();

/// The model to use for `config`.
///
/// An injected [`SummaryConfig::summarizer`] is returned as-is. Otherwise the
/// process-wide model is loaded on first use and reused for every later call,
/// whatever model those later configs name.
pub fn shared_model(config: &SummaryConfig) -> Result<Arc<dyn SummaryModel>, SummaryError> {
    if let Some(ref model) = config.summarizer {
        return Ok(Arc::clone(model));
    }
    cached_model(&SHARED_MODEL, config)
}

fn cached_model(
    cache: &ModelCache,
    config: &SummaryConfig,
) -> Result<Arc<dyn SummaryModel>, SummaryError> {
    let model = cache.get_or_load(|| load_model(config))?;
    if let Some(ref requested) = config.model {
        if requested != model.name() {
            warn!(
                "Model '{}' requested but '{}' is already loaded for this process; keeping it",
                requested,
                model.name()
            );
        }
    }
    Ok(model)
}

fn load_model(config: &SummaryConfig) -> Result<Arc<dyn SummaryModel>, SummaryError> {
    let (provider, name) = resolve_provider(config)?;
    info!("Loaded summarisation model: {}", name);
    Ok(Arc::new(LlmSummaryModel::new(provider, name)))
}

/// Resolve the LLM provider, from most-specific to least-specific.
///
/// 1. **Pre-built provider** (`config.provider`), used as-is.
/// 2. **Named provider + model** (`config.provider_name`).
/// 3. **Environment pair** (`EDGEQUAKE_LLM_PROVIDER` + `EDGEQUAKE_MODEL`).
/// 4. **OpenAI** when `OPENAI_API_KEY` is set.
/// 5. **Full auto-detection** (`ProviderFactory::from_env`).
fn resolve_provider(
    config: &SummaryConfig,
) -> Result<(Arc<dyn LLMProvider>, String), SummaryError> {
    if let Some(ref provider) = config.provider {
        return Ok((Arc::clone(provider), config.model_id().to_string()));
    }

    if let Some(ref name) = config.provider_name {
        let model = config.model_id();
        return create_provider(name, model).map(|p| (p, model.to_string()));
    }

    if let (Ok(prov), Ok(model)) = (
        std::env::var("EDGEQUAKE_LLM_PROVIDER"),
        std::env::var("EDGEQUAKE_MODEL"),
    ) {
        if !prov.is_empty() && !model.is_empty() {
            return create_provider(&prov, &model).map(|p| (p, model));
        }
    }

    if let Ok(openai_key) = std::env::var("OPENAI_API_KEY") {
        if !openai_key.is_empty() {
            let model = config.model_id();
            return create_provider("openai", model).map(|p| (p, model.to_string()));
        }
    }

    let (llm_provider, _embedding) =
        ProviderFactory::from_env().map_err(|e| SummaryError::ProviderNotConfigured {
            provider: "auto".to_string(),
            hint: format!(
                "No LLM provider could be auto-detected from environment.\n\
                Set OPENAI_API_KEY, ANTHROPIC_API_KEY, or pass --provider.\n\
                Error: {}",
                e
            ),
        })?;

    Ok((llm_provider, "auto".to_string()))
}

fn create_provider(provider_name: &str, model: &str) -> Result<Arc<dyn LLMProvider>, SummaryError> {
    ProviderFactory::create_llm_provider(provider_name, model).map_err(|e| {
        SummaryError::ProviderNotConfigured {
            provider: provider_name.to_string(),
            hint: format!("{e}"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedModel(&'static str);

    #[async_trait]
    impl SummaryModel for FixedModel {
        fn name(&self) -> &str {
            self.0
        }

        async fn summarize(&self, request: SummaryRequest<'_>) -> Result<ModelReply, ModelError> {
            Ok(ModelReply {
                text: format!("{}:{}", self.0, request.chunk.len()),
                input_tokens: 0,
                output_tokens: 0,
            })
        }
    }

    #[test]
    fn build_options_is_deterministic() {
        let opts = build_options(&SummaryBounds::default());
        assert_eq!(opts.temperature, Some(0.0));
        assert_eq!(opts.max_tokens, Some(300));
    }

    #[test]
    fn cache_loads_once() {
        let cache = ModelCache::new();
        let loads = AtomicUsize::new(0);
        let load = || {
            loads.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(FixedModel("fixed")) as Arc<dyn SummaryModel>)
        };

        let first = cache.get_or_load(load).unwrap();
        let second = cache.get_or_load(load).unwrap();

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn failed_load_is_retried() {
        let cache = ModelCache::new();
        let err = cache
            .get_or_load(|| Err(SummaryError::Internal("no backend".into())))
            .err()
            .unwrap();
        assert!(matches!(err, SummaryError::Internal(_)));
        assert!(cache.get().is_none());

        let model = cache
            .get_or_load(|| Ok(Arc::new(FixedModel("late")) as Arc<dyn SummaryModel>))
            .unwrap();
        assert_eq!(model.name(), "late");
    }

    #[test]
    fn cached_model_ignores_later_model_choice() {
        let cache = ModelCache::new();
        let _ = cache.get_or_load(|| Ok(Arc::new(FixedModel("first")) as Arc<dyn SummaryModel>));

        let config = SummaryConfig::builder().model("second").build().unwrap();
        let model = cached_model(&cache, &config).unwrap();
        assert_eq!(model.name(), "first");
    }

    #[test]
    fn injected_summarizer_bypasses_cache() {
        let config = SummaryConfig::builder()
            .summarizer(Arc::new(FixedModel("injected")))
            .build()
            .unwrap();
        assert_eq!(shared_model(&config).unwrap().name(), "injected");
    }

    #[tokio::test]
    async fn fixed_model_is_deterministic() {
        let model = FixedModel("f");
        let request = SummaryRequest {
            chunk: "some text",
            bounds: SummaryBounds::default(),
            system_prompt: None,
        };
        let a = model.summarize(request).await.unwrap();
        let b = model.summarize(request).await.unwrap();
        assert_eq!(a, b);
    }
}
