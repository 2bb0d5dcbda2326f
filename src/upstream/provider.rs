//! Provider trait for chat-completion backends

use async_trait::async_trait;

use super::error::UpstreamError;

/// Anything that can turn a question into an answer
///
/// The production implementation is [`OpenRouterClient`](super::OpenRouterClient);
/// tests substitute a simulated upstream.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Ask a single question and return the answer text
    ///
    /// Implementations never return an empty answer: an empty completion is
    /// replaced with [`EMPTY_ANSWER_FALLBACK`](super::EMPTY_ANSWER_FALLBACK).
    async fn ask(&self, question: &str) -> Result<String, UpstreamError>;
}
