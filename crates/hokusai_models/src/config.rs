//! Configuration for the Gemini backend.

use hokusai_error::{GeminiError, GeminiErrorKind};

/// Configuration for the Gemini backend.
///
/// The credential is read once at process start and carried in this explicit
/// object rather than consulted from the environment on every call, so
/// differently-configured clients can coexist (and tests never touch the
/// environment).
///
/// # Examples
///
/// ```
/// use hokusai_models::GeminiConfig;
///
/// let config = GeminiConfig::new("test-key").with_model("gemini-2.5-flash");
/// assert_eq!(config.model(), "gemini-2.5-flash");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct GeminiConfig {
    /// API credential for the Gemini service
    api_key: String,
    /// Model identifier used when a request does not override it
    model: String,
    /// Disable automatic retry of transient failures
    no_retry: bool,
    /// Override the per-error maximum retry attempts
    max_retries: Option<usize>,
    /// Override the per-error initial backoff delay
    retry_backoff_ms: Option<u64>,
}

impl GeminiConfig {
    /// Default model when neither the environment nor the caller chooses one.
    pub const DEFAULT_MODEL: &'static str = "gemini-2.0-flash-lite";

    /// Create a configuration with the given credential and default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: Self::DEFAULT_MODEL.to_string(),
            no_retry: false,
            max_retries: None,
            retry_backoff_ms: None,
        }
    }

    /// Create a configuration from environment variables.
    ///
    /// Reads:
    /// - `GEMINI_API_KEY` (required)
    /// - `GEMINI_MODEL` (optional, defaults to [`Self::DEFAULT_MODEL`])
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] when the credential is
    /// absent or blank.
    pub fn from_env() -> Result<Self, GeminiError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            if !model.trim().is_empty() {
                config.model = model;
            }
        }
        Ok(config)
    }

    /// Set the default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Disable automatic retry.
    pub fn without_retry(mut self) -> Self {
        self.no_retry = true;
        self
    }

    /// Override the maximum retry attempts.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Override the initial retry backoff delay in milliseconds.
    pub fn with_retry_backoff_ms(mut self, backoff_ms: u64) -> Self {
        self.retry_backoff_ms = Some(backoff_ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_applied() {
        let config = GeminiConfig::new("key");
        assert_eq!(config.model(), GeminiConfig::DEFAULT_MODEL);
        assert!(!config.no_retry());
        assert_eq!(*config.max_retries(), None);
    }

    #[test]
    fn builder_style_overrides() {
        let config = GeminiConfig::new("key")
            .with_model("gemini-2.5-pro")
            .without_retry()
            .with_max_retries(2)
            .with_retry_backoff_ms(100);
        assert_eq!(config.model(), "gemini-2.5-pro");
        assert!(config.no_retry());
        assert_eq!(*config.max_retries(), Some(2));
        assert_eq!(*config.retry_backoff_ms(), Some(100));
    }
}
