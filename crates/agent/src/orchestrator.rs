//! Conversation turn state machine
//!
//! AwaitingInput → ModelCall → (no tools → AwaitingInput)
//!                           | (tools → ToolExecution → SummaryCall → AwaitingInput)
//!
//! The history is owned here exclusively, append-only for the session.

use llm::extraction::{ToolBlock, extract_tool_blocks, render_result_block};
use llm::{ChatProvider, Message, SUMMARY_DIRECTIVE, system_prompt};
use tracing::{debug, info, warn};

use crate::client::ToolExecutor;
use crate::config::{Config, FailurePolicy};
use crate::AgentError;

/// Words that end the session at the prompt
const EXIT_WORDS: [&str; 3] = ["exit", "quit", "bye"];

/// One tool invocation that failed at the transport/protocol level.
///
/// Capability failures are not listed here — those come back as well-formed
/// responses and are spliced into the reply like any result.
#[derive(Debug, Clone)]
pub struct ToolFailure {
  pub name: String,
  pub error: String,
}

/// Outcome of one conversation turn
#[derive(Debug, Clone)]
pub struct Turn {
  /// Assistant reply, with tool results spliced in when tools ran
  pub reply: String,
  /// Second-pass summary; present only when tools ran
  pub summary: Option<String>,
  /// Invocations that failed without producing a response
  pub tool_failures: Vec<ToolFailure>,
}

/// Drives the LLM and the worker for one interactive session
pub struct Orchestrator {
  provider: Box<dyn ChatProvider>,
  executor: Box<dyn ToolExecutor>,
  history: Vec<Message>,
  failure_policy: FailurePolicy,
}

impl Orchestrator {
  pub fn new(config: &Config, provider: Box<dyn ChatProvider>, executor: Box<dyn ToolExecutor>) -> Self {
    Self {
      provider,
      executor,
      history: vec![Message::system(system_prompt())],
      failure_policy: config.tools.failure_policy,
    }
  }

  /// Whether `input` requests session termination.
  pub fn is_exit_command(input: &str) -> bool {
    let trimmed = input.trim().to_lowercase();
    EXIT_WORDS.contains(&trimmed.as_str())
  }

  /// The conversation so far (system prompt included).
  pub fn history(&self) -> &[Message] {
    &self.history
  }

  /// Run one turn: model call, tool execution if requested, summary call.
  pub async fn handle_turn(&mut self, input: &str) -> Result<Turn, AgentError> {
    self.history.push(Message::user(input));

    let reply = self.provider.complete(&self.history).await?;
    let blocks = extract_tool_blocks(&reply);

    if blocks.is_empty() {
      debug!("No tool blocks in reply");
      self.history.push(Message::assistant(reply.clone()));
      return Ok(Turn {
        reply,
        summary: None,
        tool_failures: Vec::new(),
      });
    }

    info!(count = blocks.len(), "Executing tool calls");
    let (reply, tool_failures) = self.execute_tools(&reply, &blocks).await;

    self.history.push(Message::assistant(reply.clone()));
    self.history.push(Message::system(SUMMARY_DIRECTIVE));

    let summary = self.provider.complete(&self.history).await?;
    self.history.push(Message::assistant(summary.clone()));

    Ok(Turn {
      reply,
      summary: Some(summary),
      tool_failures,
    })
  }

  /// Invoke each block in extraction order and splice results back in.
  ///
  /// Substitutions are applied back-to-front so earlier spans stay valid.
  /// A failed invocation keeps its original block text; under
  /// `FailurePolicy::Abort` it also ends the batch.
  async fn execute_tools(&mut self, reply: &str, blocks: &[ToolBlock]) -> (String, Vec<ToolFailure>) {
    let mut replacements = Vec::with_capacity(blocks.len());
    let mut failures = Vec::new();

    for block in blocks {
      match self.executor.call(&block.invocation).await {
        Ok(response) => {
          let payload = match (response.result, response.error) {
            (Some(result), _) => result,
            (None, Some(error)) => serde_json::Value::String(error),
            (None, None) => serde_json::Value::Null,
          };
          replacements.push((block.span.clone(), render_result_block(&payload)));
        }
        Err(e) => {
          warn!(tool = %block.invocation.name, err = %e, "Tool invocation failed");
          failures.push(ToolFailure {
            name: block.invocation.name.clone(),
            error: e.to_string(),
          });
          if self.failure_policy == FailurePolicy::Abort {
            debug!("Abort policy: skipping remaining tool calls");
            break;
          }
        }
      }
    }

    let mut substituted = reply.to_string();
    for (span, replacement) in replacements.into_iter().rev() {
      substituted.replace_range(span, &replacement);
    }
    (substituted, failures)
  }

  /// Terminate the worker and wait for it to exit.
  pub async fn shutdown(&mut self) -> Result<(), AgentError> {
    self.executor.shutdown().await?;
    Ok(())
  }
}
