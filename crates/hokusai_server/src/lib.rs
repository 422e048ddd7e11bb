//! HTTP boundary for the Hokusai comic generation service.
//!
//! Exposes the comic generator over a small axum API plus an embedded
//! single-page front end. The server holds no per-request state; a missing
//! credential degrades the generate endpoints to 503 instead of preventing
//! startup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod request;
mod response;
mod routes;

pub use config::ServerConfig;
pub use request::ComicRequest;
pub use response::{ComicResponse, ConfigResponse, ErrorResponse};
pub use routes::{AppState, router};
