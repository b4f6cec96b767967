use std::sync::Arc;

use tracing::{debug, error};

use crate::application::CompletionClient;
use crate::domain::{ChatPrompt, ChatReply, DomainError};

/// Validates an inbound prompt and relays it to the completion client.
///
/// Each execution is an independent run of validate → call → wrap; nothing
/// is cached or shared between calls beyond the client itself.
pub struct GenerateReplyUseCase {
    client: Arc<dyn CompletionClient>,
}

impl GenerateReplyUseCase {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, request: ChatPrompt) -> Result<ChatReply, DomainError> {
        request.validate()?;

        debug!("Received prompt: {}", request.prompt());

        match self.client.complete(request.prompt()).await {
            Ok(text) => Ok(ChatReply::new(text)),
            Err(e) => {
                error!("Error generating response: {e}");
                Err(e)
            }
        }
    }
}
