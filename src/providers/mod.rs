//! ReviewProvider trait and LLM integration.
//!
//! Provides an abstraction layer over rig-core so the pipeline can be
//! exercised with a mock provider and never touches the SDK directly.

pub mod rig;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the review provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("LLM API error: {0}")]
    ApiError(String),

    #[error("provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for the two LLM stages.
///
/// Both calls are synchronous request/response: exactly one round-trip,
/// no streaming. Implementations own the fixed system prompts; callers
/// supply only the per-call payload.
#[async_trait]
pub trait ReviewProvider: Send + Sync {
    /// Produce a free-text markdown review from the review-stage user
    /// prompt (file content + filename + directory tree).
    async fn review(&self, user_prompt: &str) -> Result<String, ProviderError>;

    /// Produce the JSON-constrained extraction completion for a review
    /// document. Returns the raw completion text; parsing is the
    /// extraction module's job.
    async fn extract(&self, review_text: &str) -> Result<String, ProviderError>;
}
