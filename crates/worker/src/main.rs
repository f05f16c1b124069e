//! finagent-worker — executes financial-data capabilities over stdin/stdout
//!
//! stdout carries protocol frames only; all logging goes to stderr.

use tokio::io::BufReader;
use worker::{Registry, serve};

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
    .with_writer(std::io::stderr)
    .with_ansi(false)
    .init();

  let registry = Registry::new();
  let stdin = BufReader::new(tokio::io::stdin());
  let stdout = tokio::io::stdout();

  serve(&registry, stdin, stdout).await
}
