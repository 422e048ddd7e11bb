//! Trait definitions for LLM backends.

use async_trait::async_trait;
use hokusai_core::{GenerateRequest, GenerateResponse};
use hokusai_error::HokusaiResult;

/// Core trait that all LLM backends must implement.
///
/// This is the single capability the comic adapter needs: one prompt in, one
/// text response out. The trait is object-safe so callers can hold a
/// `Arc<dyn HokusaiDriver>` and swap backends without recompiling.
#[async_trait]
pub trait HokusaiDriver: Send + Sync {
    /// Generate model output given a request.
    async fn generate(&self, req: &GenerateRequest) -> HokusaiResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.0-flash-lite").
    fn model_name(&self) -> &str;
}
