//! The service boundary: validation, one model round trip, parsing.

use crate::{ComicStrip, build_prompt, parse_response};
use hokusai_core::{GenerateRequest, Message};
use hokusai_error::{
    GeminiError, GeminiErrorKind, HokusaiResult, ValidationError, ValidationErrorKind,
};
use hokusai_interface::HokusaiDriver;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Minimum accepted story length in characters.
pub const MIN_STORY_LENGTH: usize = 10;

/// Smallest supported panel bound; lower requests are clamped up.
pub const MIN_PANELS: u32 = 3;

/// Largest supported panel bound; higher requests are clamped down.
pub const MAX_PANELS: u32 = 15;

/// Panel bound used when the caller does not choose one.
pub const DEFAULT_PANELS: u32 = 10;

/// Tunables for a [`ComicGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Ceiling on one model round trip, including driver-internal retries
    pub timeout: Duration,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
        }
    }
}

impl GeneratorOptions {
    /// Set the round-trip ceiling.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Turns a story into a comic strip through a single driver round trip.
///
/// The generator holds no request-scoped state, so one instance can serve
/// concurrent callers behind an `Arc`.
///
/// # Examples
///
/// ```no_run
/// use hokusai_comic::ComicGenerator;
/// use hokusai_models::GeminiClient;
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let generator = ComicGenerator::new(Arc::new(GeminiClient::from_env()?));
/// let strip = generator.generate("A mouse set out to move a mountain.", 5).await?;
/// assert!(strip.len() <= 5);
/// # Ok(())
/// # }
/// ```
pub struct ComicGenerator {
    driver: Arc<dyn HokusaiDriver>,
    options: GeneratorOptions,
}

impl ComicGenerator {
    /// Create a generator with default options.
    pub fn new(driver: Arc<dyn HokusaiDriver>) -> Self {
        Self::with_options(driver, GeneratorOptions::default())
    }

    /// Create a generator with explicit options.
    pub fn with_options(driver: Arc<dyn HokusaiDriver>, options: GeneratorOptions) -> Self {
        Self { driver, options }
    }

    /// Generate a comic strip from a story.
    ///
    /// Validation runs before anything touches the network: the trimmed story
    /// must be non-empty and at least [`MIN_STORY_LENGTH`] characters, and
    /// `max_panels` is clamped into `[MIN_PANELS, MAX_PANELS]`. The driver
    /// call is bounded by the configured timeout; its reply is parsed
    /// leniently and never fails the request.
    ///
    /// # Errors
    ///
    /// Returns a validation error for unusable stories, or the driver's
    /// upstream error (network, auth, rate limit, timeout) unchanged.
    #[instrument(skip(self, story), fields(story_len = story.len(), max_panels))]
    pub async fn generate(&self, story: &str, max_panels: u32) -> HokusaiResult<ComicStrip> {
        let story = story.trim();
        if story.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::StoryEmpty).into());
        }

        let length = story.chars().count();
        if length < MIN_STORY_LENGTH {
            return Err(ValidationError::new(ValidationErrorKind::StoryTooShort {
                length,
                minimum: MIN_STORY_LENGTH,
            })
            .into());
        }

        let bound = max_panels.clamp(MIN_PANELS, MAX_PANELS);
        let prompt = build_prompt(story, bound);
        let request = GenerateRequest {
            messages: vec![Message::user(prompt)],
            ..Default::default()
        };

        let response = tokio::time::timeout(self.options.timeout, self.driver.generate(&request))
            .await
            .map_err(|_| {
                GeminiError::new(GeminiErrorKind::Timeout(self.options.timeout.as_secs()))
            })??;

        let panels = parse_response(&response.text, bound);
        debug!(
            provider = self.driver.provider_name(),
            panel_count = panels.len(),
            "Parsed panels from model reply"
        );

        Ok(ComicStrip::new(panels))
    }

    /// Generate a comic strip and render it as a plain-text transcript.
    pub async fn generate_transcript(
        &self,
        story: &str,
        max_panels: u32,
    ) -> HokusaiResult<String> {
        let strip = self.generate(story, max_panels).await?;
        Ok(strip.to_string())
    }
}
