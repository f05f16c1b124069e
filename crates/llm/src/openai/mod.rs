//! Chat completions over the OpenAI-compatible HTTP API
//!
//! Speaks the `/chat/completions` wire format with bearer auth, so any
//! compatible endpoint works by pointing `base_url` elsewhere.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, trace, warn};

use crate::{ChatProvider, LlmError, Message, Result};

/// Configuration for the OpenAI provider
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
  /// Bearer token. `None` leaves the provider unavailable.
  pub api_key: Option<String>,
  /// Model name sent with every request
  pub model: String,
  /// API root, e.g. `https://api.openai.com/v1`
  pub base_url: String,
  /// Sampling temperature
  pub temperature: f32,
  /// Deadline for a single completion request
  pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
  fn default() -> Self {
    Self {
      api_key: None,
      model: "gpt-4".to_string(),
      base_url: "https://api.openai.com/v1".to_string(),
      temperature: 0.3,
      timeout_secs: 60,
    }
  }
}

/// OpenAI-compatible chat completion provider
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
  config: OpenAiConfig,
  client: reqwest::Client,
}

impl OpenAiProvider {
  pub fn new(config: OpenAiConfig) -> Self {
    Self {
      config,
      client: reqwest::Client::new(),
    }
  }
}

// Wire types for the chat-completions endpoint

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
  model: &'a str,
  messages: &'a [Message],
  temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
  choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
  message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
  content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
  error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
  message: String,
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
  fn name(&self) -> &str {
    "openai"
  }

  fn is_available(&self) -> bool {
    self.config.api_key.as_deref().is_some_and(|k| !k.is_empty())
  }

  async fn complete(&self, messages: &[Message]) -> Result<String> {
    let api_key = self
      .config
      .api_key
      .as_deref()
      .filter(|k| !k.is_empty())
      .ok_or(LlmError::MissingApiKey)?;

    let start = Instant::now();
    let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));
    let body = CompletionRequest {
      model: &self.config.model,
      messages,
      temperature: self.config.temperature,
    };

    debug!(
      model = %self.config.model,
      message_count = messages.len(),
      timeout_secs = self.config.timeout_secs,
      "Starting completion request"
    );

    let request = self.client.post(&url).bearer_auth(api_key).json(&body).send();

    let response = match timeout(Duration::from_secs(self.config.timeout_secs), request).await {
      Ok(Ok(response)) => response,
      Ok(Err(e)) => return Err(e.into()),
      Err(_) => {
        warn!(
          timeout_secs = self.config.timeout_secs,
          elapsed_ms = start.elapsed().as_millis() as u64,
          "Completion request timed out"
        );
        return Err(LlmError::Timeout(self.config.timeout_secs));
      }
    };

    let status = response.status();
    if !status.is_success() {
      let text = response.text().await.unwrap_or_default();
      let message = serde_json::from_str::<ApiErrorBody>(&text)
        .ok()
        .and_then(|b| b.error)
        .map(|e| e.message)
        .unwrap_or(text);
      warn!(status = status.as_u16(), message = %message, "Completion request rejected");
      return Err(LlmError::Api {
        status: status.as_u16(),
        message,
      });
    }

    let parsed: CompletionResponse = response.json().await?;
    let reply = parsed
      .choices
      .into_iter()
      .next()
      .and_then(|c| c.message.content)
      .ok_or(LlmError::EmptyResponse)?;

    trace!(
      reply_len = reply.len(),
      elapsed_ms = start.elapsed().as_millis() as u64,
      "Completion request finished"
    );

    Ok(reply)
  }
}
