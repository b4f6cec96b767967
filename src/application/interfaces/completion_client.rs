use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending a single prompt to a chat-completion API and
/// receiving the generated text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (e.g. [`crate::application::GenerateReplyUseCase`])
/// remain decoupled from any particular provider or HTTP client library,
/// which also lets tests substitute a canned implementation.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a user prompt and return the assistant's response text.
    ///
    /// Performs at most one upstream round-trip per call; failures are
    /// classified, never retried.
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;
}
