//! Story-to-comic-panel adapter for the Hokusai comic generation service.
//!
//! This crate turns free-form narrative text into an ordered sequence of
//! comic panel records by delegating story understanding to an LLM backend:
//! a deterministic prompt asks the model to segment the story into labeled
//! panel blocks, and a lenient parser converts whatever comes back into
//! [`Panel`] values, degrading to a paragraph split when the reply ignores
//! the requested format.
//!
//! # Examples
//!
//! ```no_run
//! use hokusai_comic::ComicGenerator;
//! use hokusai_models::GeminiClient;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = Arc::new(GeminiClient::from_env()?);
//! let generator = ComicGenerator::new(driver);
//!
//! let strip = generator
//!     .generate("A fox found a map and followed it to the sea.", 6)
//!     .await?;
//! println!("{}", strip);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod comic;
mod generator;
mod panel;
mod parse;
mod prompt;

pub use comic::ComicStrip;
pub use generator::{
    ComicGenerator, GeneratorOptions, DEFAULT_PANELS, MAX_PANELS, MIN_PANELS, MIN_STORY_LENGTH,
};
pub use panel::Panel;
pub use parse::parse_response;
pub use prompt::build_prompt;
