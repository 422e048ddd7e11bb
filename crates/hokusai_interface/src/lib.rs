//! Trait definitions for the Hokusai comic generation service.
//!
//! The driver trait is the seam between the comic adapter and the remote
//! inference service: production code plugs in the Gemini backend, tests plug
//! in a deterministic mock.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::HokusaiDriver;
