use std::sync::Arc;

use tracing::debug;

use crate::application::{CompletionClient, GenerateReplyUseCase};
use crate::connector::{GroqClient, MockCompletion};

pub struct ContainerConfig {
    /// Wire the canned completion adapter instead of the real Groq client.
    /// Useful for local smoke runs without an API key.
    pub mock_completion: bool,
}

/// Wires the completion client and the use case consumed by the HTTP layer.
pub struct Container {
    generate_reply: GenerateReplyUseCase,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let client: Arc<dyn CompletionClient> = if config.mock_completion {
            debug!("Using mock completion client");
            Arc::new(MockCompletion::replying(
                "This is a canned reply from the mock completion client.",
            ))
        } else {
            Arc::new(GroqClient::from_env())
        };
        Self::with_client(client)
    }

    /// Build a container around an explicit client. Tests use this to inject
    /// canned success and failure outcomes.
    pub fn with_client(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            generate_reply: GenerateReplyUseCase::new(client),
        }
    }

    pub fn generate_reply_use_case(&self) -> &GenerateReplyUseCase {
        &self.generate_reply
    }
}
