//! Chat provider trait
//!
//! The orchestrator only sees this trait; concrete backends (the OpenAI
//! HTTP provider, scripted providers in tests) implement it.

use async_trait::async_trait;
use dyn_clone::DynClone;

use crate::{LlmError, Message};

/// Result type for LLM operations
pub type Result<T> = std::result::Result<T, LlmError>;

/// Trait for chat completion providers
#[async_trait]
pub trait ChatProvider: Send + Sync + DynClone {
  /// The name of this provider (for logging/identification)
  fn name(&self) -> &str;

  /// Check if this provider is available/configured
  ///
  /// Returns `true` if the provider can be used for completions.
  /// This might check for API keys, endpoint reachability, etc.
  fn is_available(&self) -> bool;

  /// Request one completion for the given conversation history
  ///
  /// Returns the assistant reply as a single text blob, which may contain
  /// embedded tool blocks (see [`crate::extraction`]).
  async fn complete(&self, messages: &[Message]) -> Result<String>;
}

dyn_clone::clone_trait_object!(ChatProvider);
