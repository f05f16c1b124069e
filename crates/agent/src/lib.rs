//! Conversation orchestration: configuration, the worker RPC client, and the
//! turn state machine that ties the LLM to the worker process.

mod client;
mod config;
mod orchestrator;

pub use client::{ToolExecutor, WorkerClient};
pub use config::{Config, ConfigError, FailurePolicy, LlmConfig, ToolsConfig, WorkerConfig};
pub use orchestrator::{Orchestrator, ToolFailure, Turn};

use llm::LlmError;
use proto::RpcError;

/// Errors surfaced from a conversation turn
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
  #[error(transparent)]
  Llm(#[from] LlmError),
  #[error(transparent)]
  Rpc(#[from] RpcError),
}
