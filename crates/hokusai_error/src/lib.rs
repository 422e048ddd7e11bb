//! Error types for the Hokusai comic generation service.
//!
//! This crate provides the foundation error types used throughout the Hokusai
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use hokusai_error::{HokusaiResult, ConfigError};
//!
//! fn load_credential() -> HokusaiResult<String> {
//!     Err(ConfigError::new("GEMINI_API_KEY not set"))?
//! }
//!
//! match load_credential() {
//!     Ok(key) => println!("Got: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod server;
mod validation;

pub use config::ConfigError;
pub use error::{HokusaiError, HokusaiErrorKind, HokusaiResult};
pub use gemini::{GeminiError, GeminiErrorKind, RetryableError};
pub use server::{ServerError, ServerErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
