//! Mock driver for testing the comic generator without network calls.

use async_trait::async_trait;
use hokusai_core::{GenerateRequest, GenerateResponse, Role};
use hokusai_error::{GeminiError, GeminiErrorKind, HokusaiResult};
use hokusai_interface::HokusaiDriver;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(GeminiErrorKind),
}

/// Deterministic driver standing in for the Gemini backend.
///
/// Records every prompt it receives and counts calls, so tests can assert
/// that validation failures never reach the network and that the prompt
/// carries the clamped panel bound.
pub struct MockDriver {
    behavior: MockBehavior,
    delay: Option<Duration>,
    call_count: Arc<Mutex<usize>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockDriver {
    /// Create a mock driver that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Success(text.into()),
            delay: None,
            call_count: Arc::new(Mutex::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock driver that always fails with the given error.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self {
            behavior: MockBehavior::Error(error),
            delay: None,
            call_count: Arc::new(Mutex::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Delay every response, for timeout tests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the number of times generate() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Get the prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl HokusaiDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> HokusaiResult<GenerateResponse> {
        *self.call_count.lock().unwrap() += 1;

        let prompt = req
            .messages
            .iter()
            .filter(|msg| msg.role == Role::User)
            .map(|msg| msg.content.clone())
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().unwrap().push(prompt);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse { text: text.clone() }),
            MockBehavior::Error(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
