use serde::{Deserialize, Serialize};

pub mod extraction;
mod prompts;
mod provider;

#[cfg(feature = "openai")]
mod openai;

pub use prompts::{SUMMARY_DIRECTIVE, system_prompt};
pub use provider::{ChatProvider, Result};

#[cfg(feature = "openai")]
pub use openai::{OpenAiConfig, OpenAiProvider};

/// Role of a chat message
///
/// Serialized with the lowercase names the chat-completions wire format uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  System,
  User,
  Assistant,
}

/// One entry of a conversation history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
  pub role: Role,
  pub content: String,
}

impl Message {
  pub fn system(content: impl Into<String>) -> Self {
    Self {
      role: Role::System,
      content: content.into(),
    }
  }

  pub fn user(content: impl Into<String>) -> Self {
    Self {
      role: Role::User,
      content: content.into(),
    }
  }

  pub fn assistant(content: impl Into<String>) -> Self {
    Self {
      role: Role::Assistant,
      content: content.into(),
    }
  }
}

/// Errors that can occur during a chat completion
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
  #[error("No API key configured. Set llm.api_key in finagent.toml or the OPENAI_API_KEY env var.")]
  MissingApiKey,
  #[error("HTTP request failed: {0}")]
  Http(#[from] reqwest::Error),
  #[error("API returned status {status}: {message}")]
  Api { status: u16, message: String },
  #[error("response contained no choices")]
  EmptyResponse,
  #[error("request timed out after {0} seconds")]
  Timeout(u64),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn roles_serialize_to_wire_names() {
    let message = Message::system("be helpful");
    let json = serde_json::to_string(&message).unwrap();
    assert_eq!(json, r#"{"role":"system","content":"be helpful"}"#);

    let parsed: Message = serde_json::from_str(r#"{"role":"assistant","content":"hi"}"#).unwrap();
    assert_eq!(parsed.role, Role::Assistant);
  }
}
