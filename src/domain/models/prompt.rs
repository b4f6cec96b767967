use serde::Deserialize;

use crate::domain::DomainError;

/// Maximum prompt length, counted in characters rather than bytes so that
/// multibyte input is not penalized.
pub const MAX_PROMPT_CHARS: usize = 500;

pub const ERR_PROMPT_REQUIRED: &str = "Prompt is required";
pub const ERR_PROMPT_TOO_LONG: &str = "Prompt is too long (max 500 characters)";

/// The inbound chat request body.
///
/// `prompt` defaults to the empty string when the field is absent, so a
/// missing field and an empty field fail validation identically.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatPrompt {
    #[serde(default)]
    prompt: String,
}

impl ChatPrompt {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Validate presence and length. Checks short-circuit in order: a prompt
    /// must be non-empty before its length is considered.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.prompt.is_empty() {
            return Err(DomainError::invalid_input(ERR_PROMPT_REQUIRED));
        }
        if self.prompt.chars().count() > MAX_PROMPT_CHARS {
            return Err(DomainError::invalid_input(ERR_PROMPT_TOO_LONG));
        }
        Ok(())
    }
}
