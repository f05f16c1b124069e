//! Interactive chat session

use std::io::Write;
use std::path::Path;

use agent::{Config, Orchestrator, WorkerClient};
use anyhow::{Context, Result, bail};
use llm::{ChatProvider, OpenAiProvider};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::warn;

/// Run the interactive loop until exit word, ctrl-c, or end of input.
pub async fn cmd_chat(config_path: Option<&Path>) -> Result<()> {
  let config = Config::load(config_path).context("Failed to load configuration")?;

  let provider = OpenAiProvider::new((&config.llm).into());
  if !provider.is_available() {
    bail!(
      "No API key configured. Set llm.api_key in finagent.toml or the OPENAI_API_KEY env var \
       (see `finagent config init`)."
    );
  }

  let worker = WorkerClient::spawn(&config.worker).context("Failed to start worker process")?;
  let mut orchestrator = Orchestrator::new(&config, Box::new(provider), Box::new(worker));

  println!("Finance assistant (type 'exit' to quit)");
  println!("----------------------------------------");

  let stdin = BufReader::new(tokio::io::stdin());
  let mut lines = stdin.lines();

  loop {
    print!("\nyou: ");
    std::io::stdout().flush().context("Failed to flush prompt")?;

    let line = tokio::select! {
      _ = signal::ctrl_c() => {
        println!("\nInterrupted.");
        break;
      }
      line = lines.next_line() => line.context("Failed to read input")?,
    };

    // None means end of input (e.g. piped stdin ran out)
    let Some(line) = line else { break };
    let input = line.trim();
    if input.is_empty() {
      continue;
    }
    if Orchestrator::is_exit_command(input) {
      break;
    }

    match orchestrator.handle_turn(input).await {
      Ok(turn) => {
        println!("\nassistant: {}", turn.reply);
        for failure in &turn.tool_failures {
          eprintln!("tool call '{}' failed: {}", failure.name, failure.error);
        }
        if let Some(summary) = turn.summary {
          println!("\nsummary: {}", summary);
        }
      }
      // A failed turn is not fatal to the session
      Err(e) => eprintln!("error: {}", e),
    }
  }

  if let Err(e) = orchestrator.shutdown().await {
    warn!(err = %e, "Worker shutdown reported an error");
  } else {
    println!("Worker terminated.");
  }

  Ok(())
}
