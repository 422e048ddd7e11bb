//! Input validation error types.

/// Specific validation failures for incoming story requests.
///
/// Validation runs before any network call, so a request that fails here
/// never reaches the remote inference service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Story text is empty or whitespace-only
    #[display("Story text is required")]
    StoryEmpty,
    /// Story text is below the minimum length
    #[display("Story is too short ({} of {} required characters)", length, minimum)]
    StoryTooShort {
        /// Length of the submitted story in bytes
        length: usize,
        /// Minimum accepted length in bytes
        minimum: usize,
    },
}

/// Validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use hokusai_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::StoryEmpty);
/// assert!(format!("{}", err).contains("required"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific validation failure
    pub kind: ValidationErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
