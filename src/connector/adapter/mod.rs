mod groq_client;
mod mock_completion;

pub use groq_client::{GroqClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use mock_completion::MockCompletion;
