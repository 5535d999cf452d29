use anyhow::Context;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{AppConfig, ModelProfile};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed backend response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("backend returned an empty completion")]
    EmptyResponse,
}

/// Anything that can turn a prompt into text. The pipeline only sees this
/// trait, so tests drive it with a scripted stub.
pub trait GenerationBackend {
    fn generate(&self, prompt: &str, profile: &ModelProfile) -> Result<String, BackendError>;

    /// Cheap reachability check, shown to the user as a status line.
    fn test_connection(&self) -> anyhow::Result<String>;
}

impl<T: GenerationBackend + ?Sized> GenerationBackend for &T {
    fn generate(&self, prompt: &str, profile: &ModelProfile) -> Result<String, BackendError> {
        (**self).generate(prompt, profile)
    }

    fn test_connection(&self) -> anyhow::Result<String> {
        (**self).test_connection()
    }
}

#[derive(Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_completion_tokens: u32,
}

#[derive(Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub struct Choice {
    pub message: ChatMessageResponse,
}

#[derive(Deserialize)]
pub struct ChatMessageResponse {
    #[serde(default)]
    pub content: Option<String>,
}

/// OpenAI compatible `/chat/completions` client (Groq by default).
pub struct ChatCompletionsBackend {
    client: Client,
    api_base: String,
    api_key: String,
}

impl ChatCompletionsBackend {
    pub fn new(config: &AppConfig) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

impl GenerationBackend for ChatCompletionsBackend {
    fn generate(&self, prompt: &str, profile: &ModelProfile) -> Result<String, BackendError> {
        let req = ChatCompletionRequest {
            model: &profile.model_id,
            temperature: profile.temperature,
            max_completion_tokens: profile.max_output_tokens,
            messages: vec![ChatMessage {
                role: "system",
                content: prompt,
            }],
        };

        tracing::debug!(
            model = %profile.model_id,
            prompt_chars = prompt.len(),
            "sending chat completion"
        );

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()?;

        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        extract_content(&body)
    }

    fn test_connection(&self) -> anyhow::Result<String> {
        let resp: serde_json::Value = self
            .client
            .get(format!("{}/models", self.api_base))
            .bearer_auth(&self.api_key)
            .send()
            .context("could not reach backend")?
            .error_for_status()
            .context("backend rejected the request")?
            .json()
            .context("backend sent an unreadable model list")?;

        Ok(format!(
            "Connected ({} models available)",
            resp["data"].as_array().map(|a| a.len()).unwrap_or(0)
        ))
    }
}

/// Pulls the first choice's text out of a completion body. A reply with no
/// choices or only whitespace is treated as a failure.
pub fn extract_content(body: &str) -> Result<String, BackendError> {
    let resp: ChatCompletionResponse = serde_json::from_str(body)?;

    resp.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(BackendError::EmptyResponse)
}
