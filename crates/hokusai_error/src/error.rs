//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, ServerError, ValidationError};

/// This is the foundation error enum. Each workspace crate contributes the
/// variant covering its own failure domain.
///
/// # Examples
///
/// ```
/// use hokusai_error::{HokusaiError, GeminiError, GeminiErrorKind};
///
/// let gemini_err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// let err: HokusaiError = gemini_err.into();
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum HokusaiErrorKind {
    /// Input validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini upstream error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Hokusai error with kind discrimination.
///
/// # Examples
///
/// ```
/// use hokusai_error::{HokusaiResult, ValidationError, ValidationErrorKind};
///
/// fn might_fail() -> HokusaiResult<()> {
///     Err(ValidationError::new(ValidationErrorKind::StoryEmpty))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Hokusai Error: {}", _0)]
pub struct HokusaiError(Box<HokusaiErrorKind>);

impl HokusaiError {
    /// Create a new error from a kind.
    pub fn new(kind: HokusaiErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HokusaiErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to HokusaiErrorKind
impl<T> From<T> for HokusaiError
where
    T: Into<HokusaiErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Hokusai operations.
///
/// # Examples
///
/// ```
/// use hokusai_error::{HokusaiResult, ConfigError};
///
/// fn load() -> HokusaiResult<String> {
///     Err(ConfigError::new("missing credential"))?
/// }
/// ```
pub type HokusaiResult<T> = std::result::Result<T, HokusaiError>;
