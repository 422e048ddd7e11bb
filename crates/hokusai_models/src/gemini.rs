//! Google Gemini API implementation.
//!
//! Wraps the `gemini-rust` SDK behind [`HokusaiDriver`]. Clients are pooled
//! per model so a request overriding the default model reuses an existing SDK
//! client on subsequent calls. Transient HTTP failures are retried with
//! exponential backoff and jitter; auth and malformed-request rejections fail
//! immediately.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::instrument;

use gemini_rust::{Gemini, client::Model};

use hokusai_core::{GenerateRequest, GenerateResponse, Role};
use hokusai_error::{GeminiError, GeminiErrorKind, HokusaiResult};
use hokusai_interface::HokusaiDriver;

use crate::GeminiConfig;

type GeminiResult<T> = std::result::Result<T, GeminiError>;

/// Client for the Google Gemini API.
///
/// # Examples
///
/// ```no_run
/// use hokusai_core::{GenerateRequest, Message};
/// use hokusai_interface::HokusaiDriver;
/// use hokusai_models::{GeminiClient, GeminiConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::new(GeminiConfig::from_env()?);
///
/// let request = GenerateRequest {
///     messages: vec![Message::user("Hello")],
///     ..Default::default()
/// };
/// let response = client.generate(&request).await?;
/// println!("{}", response.text);
/// # Ok(())
/// # }
/// ```
pub struct GeminiClient {
    /// Cache of model-specific SDK clients
    clients: Arc<Mutex<HashMap<String, Gemini>>>,
    config: GeminiConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let client_count = self.clients.lock().map(|c| c.len()).unwrap_or(0);
        f.debug_struct("GeminiClient")
            .field("model", self.config.model())
            .field("cached_clients", &client_count)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client from an explicit configuration.
    #[instrument(name = "gemini_client_new", skip(config), fields(model = %config.model()))]
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
            config,
        }
    }

    /// Create a new Gemini client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] when `GEMINI_API_KEY` is
    /// absent or blank.
    pub fn from_env() -> GeminiResult<Self> {
        Ok(Self::new(GeminiConfig::from_env()?))
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Uses Model::Custom for unrecognized model names, adding the "models/"
    /// prefix the Gemini API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Get or create the SDK client for a model.
    fn client_for(&self, model_name: &str) -> GeminiResult<Gemini> {
        let mut clients = self
            .clients
            .lock()
            .map_err(|_| GeminiError::new(GeminiErrorKind::ClientCreation("poisoned client cache".to_string())))?;

        if let Some(client) = clients.get(model_name) {
            return Ok(client.clone());
        }

        let model_enum = Self::model_name_to_enum(model_name);
        let client = Gemini::with_model(self.config.api_key(), model_enum)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;
        clients.insert(model_name.to_string(), client.clone());
        Ok(client)
    }

    /// One attempt at the request, no retry.
    async fn attempt(&self, req: &GenerateRequest, model_name: &str) -> GeminiResult<GenerateResponse> {
        let client = self.client_for(model_name)?;

        let mut builder = client.generate_content();
        let mut system_prompt = None;

        for msg in &req.messages {
            match msg.role {
                Role::System => {
                    // Gemini carries the system prompt out of band
                    system_prompt = Some(msg.content.clone());
                }
                Role::User => {
                    builder = builder.with_user_message(&msg.content);
                }
                Role::Assistant => {
                    builder = builder.with_model_message(&msg.content);
                }
            }
        }

        if let Some(prompt) = system_prompt {
            builder = builder.with_system_prompt(&prompt);
        }

        if let Some(temp) = req.temperature {
            builder = builder.with_temperature(temp);
        }

        if let Some(max_tokens) = req.max_tokens {
            builder = builder.with_max_output_tokens(max_tokens as i32);
        }

        let response = builder.execute().await.map_err(Self::parse_gemini_error)?;

        Ok(GenerateResponse {
            text: response.text(),
        })
    }

    /// Internal generate method that returns Gemini-specific errors.
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};
        use tracing::{info, warn};

        let model_name = req.model.as_deref().unwrap_or(self.config.model());

        let first = self.attempt(req, model_name).await;
        let err = match first {
            Ok(response) => return Ok(response),
            Err(e) => e,
        };

        if *self.config.no_retry() || !err.kind.is_retryable() {
            if err.kind.is_retryable() {
                warn!(error = %err, "Transient Gemini error, retry disabled");
            } else {
                warn!(error = %err, "Permanent Gemini error, failing immediately");
            }
            return Err(err);
        }

        let (mut initial_ms, mut max_retries, max_delay_secs) = err.kind.retry_strategy_params();
        if let Some(override_backoff) = *self.config.retry_backoff_ms() {
            initial_ms = override_backoff;
        }
        if let Some(override_retries) = *self.config.max_retries() {
            max_retries = override_retries;
        }

        info!(
            error = %err,
            model = model_name,
            initial_backoff_ms = initial_ms,
            max_retries,
            max_delay_secs,
            "Gemini request failed, will retry with configured strategy"
        );

        let retry_strategy = ExponentialBackoff::from_millis(initial_ms)
            .factor(2)
            .max_delay(std::time::Duration::from_secs(max_delay_secs))
            .map(jitter)
            .take(max_retries);

        Retry::spawn(retry_strategy, move || async move {
            match self.attempt(req, model_name).await {
                Ok(response) => Ok(response),
                Err(e) if e.kind.is_retryable() => {
                    warn!(error = %e, "Gemini request failed, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(error = %e, "Permanent Gemini error, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        })
        .await
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into structured [`GeminiError`]
    /// values with HTTP status codes when available, so the retry policy can
    /// distinguish transient from permanent failures.
    fn parse_gemini_error(err: impl std::fmt::Display) -> GeminiError {
        let err_msg = err.to_string();

        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            GeminiError::new(GeminiErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract an HTTP status code from an error message string.
    ///
    /// Parses strings like "bad response from server; code 503; description: ..."
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            let end = code_str
                .find(|c: char| !c.is_numeric())
                .unwrap_or(code_str.len());
            if end > 0 {
                return code_str[..end].parse().ok();
            }
        }
        None
    }
}

#[async_trait]
impl HokusaiDriver for GeminiClient {
    #[instrument(name = "gemini_generate", skip(self, req))]
    async fn generate(&self, req: &GenerateRequest) -> HokusaiResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    /// Returns the default model name used when `GenerateRequest.model` is None.
    fn model_name(&self) -> &str {
        self.config.model()
    }
}
