//! Core data types for the Hokusai comic generation service.
//!
//! This crate provides the provider-neutral request and response types shared
//! by the driver interface, the Gemini backend, and the comic adapter.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod request;
mod role;
mod telemetry;

pub use message::{Message, MessageBuilder};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use telemetry::init_tracing;
