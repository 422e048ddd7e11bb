//! LLM provider integration for the Hokusai comic generation service.
//!
//! One backend is supported: Google Gemini via the `gemini-rust` SDK. The
//! client implements [`hokusai_interface::HokusaiDriver`], so everything above
//! this crate is provider-agnostic.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod gemini;

pub use config::GeminiConfig;
pub use gemini::GeminiClient;
