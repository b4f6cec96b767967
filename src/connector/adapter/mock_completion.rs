use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::CompletionClient;
use crate::domain::DomainError;

/// A [`CompletionClient`] that returns a canned reply (or a canned failure)
/// without touching the network. Used by tests and by the `--mock-completion`
/// flag for local smoke runs without an API key.
///
/// Counts invocations so tests can assert that each request performs its own
/// independent upstream call.
pub struct MockCompletion {
    reply: Mutex<Result<String, DomainError>>,
    calls: AtomicUsize,
}

impl MockCompletion {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Mutex::new(Ok(text.into())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            reply: Mutex::new(Err(error)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn clone_outcome(&self) -> Result<String, DomainError> {
        match &*self.reply.lock().unwrap() {
            Ok(text) => Ok(text.clone()),
            Err(DomainError::InvalidInput(m)) => Err(DomainError::InvalidInput(m.clone())),
            Err(DomainError::Configuration(m)) => Err(DomainError::Configuration(m.clone())),
            Err(DomainError::Upstream { status, body }) => Err(DomainError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            Err(DomainError::ResponseFormat(m)) => Err(DomainError::ResponseFormat(m.clone())),
            Err(DomainError::Http(m)) => Err(DomainError::Http(m.clone())),
        }
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        debug!("MockCompletion invoked with {} chars", prompt.chars().count());
        self.clone_outcome()
    }
}
