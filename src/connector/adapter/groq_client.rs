use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::CompletionClient;
use crate::domain::DomainError;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com";
const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 500;
const TOP_P: f32 = 1.0;
/// The upstream call is otherwise unbounded; cap it so a stalled request
/// cannot hold an inbound connection open indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const ERR_MISSING_KEY: &str = "GROQ_API_KEY not found in environment variables";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stream: bool,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat-completion response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for the Groq chat-completion API (OpenAI-compatible endpoint).
///
/// Implements [`CompletionClient`] so the request handler stays decoupled from
/// transport and serialization details.
///
/// **API key**: read from `GROQ_API_KEY`. An absent key is not an error at
/// construction time — the deployment misconfiguration surfaces as a
/// [`DomainError::Configuration`] when a completion is first requested, and
/// no network I/O is attempted for that call.
///
/// **Base URL**: defaults to `https://api.groq.com`. Override with
/// `GROQ_BASE_URL` to target any OpenAI-compatible server in tests or local
/// setups.
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl GroqClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    /// Construct from environment variables:
    ///
    /// | Variable        | Default                   | Purpose                 |
    /// |-----------------|---------------------------|-------------------------|
    /// | `GROQ_API_KEY`  | `""` (checked at call)    | Bearer token            |
    /// | `GROQ_MODEL`    | `llama-3.3-70b-versatile` | Target model            |
    /// | `GROQ_BASE_URL` | `https://api.groq.com`    | Any compatible server   |
    pub fn from_env() -> Self {
        let key = std::env::var("GROQ_API_KEY").unwrap_or_default();
        let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base =
            std::env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(key, model, base)
    }

    /// Pull the generated text out of the first completion choice.
    fn extract_text(response: ApiResponse) -> Result<String, DomainError> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                DomainError::response_format("missing choices[0].message.content")
            })
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        if self.api_key.is_empty() {
            return Err(DomainError::configuration(ERR_MISSING_KEY));
        }

        let request = ApiRequest {
            model: &self.model,
            messages: vec![ApiMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
            stream: false,
        };

        debug!("Calling Groq API at {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!("Groq API returned {status}: {body}");
            return Err(DomainError::Upstream { status, body });
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::response_format(format!("failed to parse response: {e}"))
        })?;

        Self::extract_text(api_response)
    }
}
