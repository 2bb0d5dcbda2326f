//! Upstream chat-completion client
//!
//! Sends a single question to the OpenRouter chat-completion API and maps the
//! outcome onto [`UpstreamError`].

pub mod client;
pub mod error;
pub mod provider;
pub mod types;

// Re-export commonly used types
pub use client::{OpenRouterClient, EMPTY_ANSWER_FALLBACK, MISSING_KEY_MESSAGE};
pub use error::UpstreamError;
pub use provider::ChatCompletion;
