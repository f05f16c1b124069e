//! RPC client for the worker subprocess
//!
//! One request line out, one response line back, strictly half-duplex.
//! The request is flushed immediately — the worker is blocked on a line
//! read — and the response read is bounded by the configured deadline.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use proto::{Request, Response, RpcError, ToolInvocation};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::WorkerConfig;

/// Seam between the orchestrator and the worker transport.
///
/// `WorkerClient` is the production implementation; tests script this trait
/// directly instead of spawning a process.
#[async_trait]
pub trait ToolExecutor: Send {
  async fn call(&mut self, invocation: &ToolInvocation) -> Result<Response, RpcError>;

  /// Terminate the worker and wait for it to exit.
  async fn shutdown(&mut self) -> Result<(), RpcError>;
}

/// Client owning the worker subprocess and its pipe handles
pub struct WorkerClient {
  child: Child,
  stdin: ChildStdin,
  stdout: Lines<BufReader<ChildStdout>>,
  call_timeout_secs: u64,
}

impl WorkerClient {
  /// Spawn the worker described by `config`.
  ///
  /// stderr is inherited so worker logs reach the operator's terminal
  /// without touching the protocol stream.
  pub fn spawn(config: &WorkerConfig) -> Result<Self, RpcError> {
    let (command, args) = config
      .resolve_command()
      .map_err(|e| RpcError::Transport(format!("failed to resolve worker command: {}", e)))?;

    debug!(command = %command.display(), "Spawning worker process");
    let child = Command::new(&command)
      .args(&args)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::inherit())
      .spawn()
      .map_err(|e| RpcError::Transport(format!("failed to spawn worker {}: {}", command.display(), e)))?;

    info!(pid = child.id(), command = %command.display(), "Worker process started");
    Self::from_child(child, Duration::from_secs(config.call_timeout_secs))
  }

  /// Wrap an already-spawned child whose stdin/stdout are piped.
  pub fn from_child(mut child: Child, call_timeout: Duration) -> Result<Self, RpcError> {
    let stdin = child
      .stdin
      .take()
      .ok_or_else(|| RpcError::Transport("worker stdin not piped".to_string()))?;
    let stdout = child
      .stdout
      .take()
      .ok_or_else(|| RpcError::Transport("worker stdout not piped".to_string()))?;

    Ok(Self {
      child,
      stdin,
      stdout: BufReader::new(stdout).lines(),
      call_timeout_secs: call_timeout.as_secs(),
    })
  }

  /// Send one request and block for exactly one response line.
  pub async fn call(&mut self, method: &str, params: &serde_json::Value) -> Result<Response, RpcError> {
    // Liveness check before any I/O
    if let Ok(Some(status)) = self.child.try_wait() {
      warn!(%status, "Worker exited before the request could be sent");
      return Err(RpcError::ProcessTerminated);
    }

    let mut line = serde_json::to_string(&Request::new(method, params.clone()))?;
    line.push('\n');

    debug!(method = %method, "Calling worker tool");
    self.write_line(&line).await?;

    let read = self.stdout.next_line();
    let line = match timeout(Duration::from_secs(self.call_timeout_secs), read).await {
      Err(_) => {
        warn!(method = %method, timeout_secs = self.call_timeout_secs, "Worker call timed out");
        return Err(RpcError::Timeout(self.call_timeout_secs));
      }
      Ok(Err(e)) => return Err(RpcError::Transport(format!("failed to read response: {}", e))),
      Ok(Ok(None)) => {
        warn!(method = %method, "Worker closed its output stream");
        return Err(RpcError::ProcessTerminated);
      }
      Ok(Ok(Some(line))) => line,
    };

    if line.trim().is_empty() {
      return Err(RpcError::Protocol { line });
    }
    Response::from_line(&line).map_err(|e| {
      warn!(err = %e, line_preview = %line.chars().take(120).collect::<String>(), "Unparseable response line");
      RpcError::Protocol { line }
    })
  }

  async fn write_line(&mut self, line: &str) -> Result<(), RpcError> {
    let map_err = |e: std::io::Error| {
      if e.kind() == std::io::ErrorKind::BrokenPipe {
        RpcError::Transport("broken pipe".to_string())
      } else {
        RpcError::Transport(e.to_string())
      }
    };

    self.stdin.write_all(line.as_bytes()).await.map_err(map_err)?;
    self.stdin.flush().await.map_err(map_err)
  }

  /// Kill the worker and reap it.
  pub async fn terminate(&mut self) -> Result<(), RpcError> {
    // start_kill is a no-op failure if the process already exited
    if let Err(e) = self.child.start_kill()
      && e.kind() != std::io::ErrorKind::InvalidInput
    {
      return Err(RpcError::Transport(format!("failed to kill worker: {}", e)));
    }

    match self.child.wait().await {
      Ok(status) => {
        info!(%status, "Worker process terminated");
        Ok(())
      }
      Err(e) => Err(RpcError::Transport(format!("failed to reap worker: {}", e))),
    }
  }

}

#[async_trait]
impl ToolExecutor for WorkerClient {
  async fn call(&mut self, invocation: &ToolInvocation) -> Result<Response, RpcError> {
    WorkerClient::call(self, &invocation.name, &invocation.parameters).await
  }

  async fn shutdown(&mut self) -> Result<(), RpcError> {
    self.terminate().await
  }
}

#[cfg(all(test, unix))]
mod tests {
  use super::*;
  use serde_json::json;

  fn sh(script: &str) -> Child {
    Command::new("sh")
      .arg("-c")
      .arg(script)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::null())
      .spawn()
      .expect("sh should spawn")
  }

  #[tokio::test]
  async fn call_round_trips_against_a_scripted_worker() {
    let child = sh(r#"while read line; do printf '{"result":"ok","error":null}\n'; done"#);
    let mut client = WorkerClient::from_child(child, Duration::from_secs(5)).unwrap();

    let response = client.call("get_ticker_info", &json!({"symbol": "AAPL"})).await.unwrap();
    assert_eq!(response.result, Some(json!("ok")));
    assert!(response.error.is_none());

    // Second call on the same pipe still gets exactly one line
    let response = client.call("get_ticker_news", &json!({"symbol": "AAPL"})).await.unwrap();
    assert_eq!(response.result, Some(json!("ok")));

    client.terminate().await.unwrap();
  }

  #[tokio::test]
  async fn dead_worker_fails_before_io() {
    let child = sh("exit 0");
    let mut client = WorkerClient::from_child(child, Duration::from_secs(5)).unwrap();

    // Give the child time to exit so try_wait observes it
    tokio::time::sleep(Duration::from_millis(200)).await;

    let err = client.call("get_ticker_info", &json!({"symbol": "AAPL"})).await.unwrap_err();
    assert!(matches!(err, RpcError::ProcessTerminated));
  }

  #[tokio::test]
  async fn non_json_response_is_a_protocol_error_carrying_the_line() {
    let child = sh("read line; echo not-a-response");
    let mut client = WorkerClient::from_child(child, Duration::from_secs(5)).unwrap();

    let err = client.call("search_quote", &json!({"query": "apple"})).await.unwrap_err();
    match err {
      RpcError::Protocol { line } => assert_eq!(line, "not-a-response"),
      other => panic!("expected protocol error, got {:?}", other),
    }

    client.terminate().await.unwrap();
  }

  #[tokio::test]
  async fn eof_mid_call_reports_termination() {
    let child = sh("read line; exit 0");
    let mut client = WorkerClient::from_child(child, Duration::from_secs(5)).unwrap();

    let err = client.call("get_top_etfs", &json!({"sector": "tech"})).await.unwrap_err();
    assert!(matches!(err, RpcError::ProcessTerminated));
  }
}
