//! Configuration types for itinerary generation.
//!
//! All generation behaviour is controlled through [`PlanConfig`], built via
//! its [`PlanConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share configs across requests and to log the settings behind
//! a run when two outputs differ.

use crate::error::TripsmithError;
use crate::progress::ProgressCallback;
use edgequake_llm::LLMProvider;
use std::fmt;
use std::sync::Arc;

/// Configuration for plan generation.
///
/// Built via [`PlanConfig::builder()`] or [`PlanConfig::default()`].
///
/// # Example
/// ```rust
/// use tripsmith::PlanConfig;
///
/// let config = PlanConfig::builder()
///     .model("gpt-4o-mini")
///     .temperature(0.7)
///     .max_retries(2)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct PlanConfig {
    /// LLM model identifier, e.g. "gpt-4o-mini". If None, uses the
    /// provider default.
    pub model: Option<String>,

    /// LLM provider name (e.g. "openai", "anthropic", "ollama").
    /// If None along with `provider`, the provider is auto-detected from
    /// the environment.
    pub provider_name: Option<String>,

    /// Pre-constructed LLM provider. Takes precedence over `provider_name`.
    pub provider: Option<Arc<dyn LLMProvider>>,

    /// Sampling temperature. Default: 0.7.
    ///
    /// Itinerary text benefits from some variety — two plans for the same
    /// trip should not be word-identical — while staying low enough that
    /// the model keeps the prompted output format the parser depends on.
    pub temperature: f32,

    /// Maximum tokens per completion. Default: 4096.
    ///
    /// A multi-day itinerary with five table rows per day runs long;
    /// setting this too low truncates the table mid-row, which the parser
    /// absorbs as short-row warnings rather than an error.
    pub max_tokens: usize,

    /// Maximum retry attempts on a failed completion. Default: 3.
    pub max_retries: u32,

    /// Initial retry delay in milliseconds (exponential backoff). Default: 500.
    ///
    /// Doubles after each attempt: 500 ms → 1 s → 2 s.
    pub retry_backoff_ms: u64,

    /// Per-completion timeout in seconds. Default: 120.
    ///
    /// Full itineraries are slow completions; 120 s covers multi-day trips
    /// on the cheaper models without letting a hung connection pin the
    /// request forever.
    pub api_timeout_secs: u64,

    /// Progress callback invoked around each completion call.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            model: None,
            provider_name: None,
            provider: None,
            temperature: 0.7,
            max_tokens: 4096,
            max_retries: 3,
            retry_backoff_ms: 500,
            api_timeout_secs: 120,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for PlanConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanConfig")
            .field("model", &self.model)
            .field("provider_name", &self.provider_name)
            .field("provider", &self.provider.as_ref().map(|_| "<dyn LLMProvider>"))
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_ms", &self.retry_backoff_ms)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn PlanProgressCallback>"),
            )
            .finish()
    }
}

impl PlanConfig {
    /// Create a new builder for `PlanConfig`.
    pub fn builder() -> PlanConfigBuilder {
        PlanConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`PlanConfig`].
#[derive(Debug)]
pub struct PlanConfigBuilder {
    config: PlanConfig,
}

impl PlanConfigBuilder {
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

    pub fn temperature(mut self, t: f32) -> Self {
        self.config.temperature = t.clamp(0.0, 2.0);
        self
    }

    pub fn max_tokens(mut self, n: usize) -> Self {
        self.config.max_tokens = n;
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

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs.max(1);
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<PlanConfig, TripsmithError> {
        let c = &self.config;
        if c.max_tokens == 0 {
            return Err(TripsmithError::InvalidConfig(
                "max_tokens must be ≥ 1".into(),
            ));
        }
        if !(0.0..=2.0).contains(&c.temperature) {
            return Err(TripsmithError::InvalidConfig(format!(
                "temperature must be 0.0–2.0, got {}",
                c.temperature
            )));
        }
        Ok(self.config)
    }
}
