//! finagent CLI - conversational financial-data assistant

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod logging;

use commands::{cmd_chat, cmd_config};
use logging::init_cli_logging;

#[derive(Parser)]
#[command(name = "finagent")]
#[command(about = "Conversational financial-data assistant")]
#[command(after_help = "\
QUICK START:
  finagent config init            # Write a default finagent.toml
  export OPENAI_API_KEY=sk-...    # Or set llm.api_key in the config
  finagent                        # Start chatting (type 'exit' to quit)")]
struct Cli {
  /// Config file to use instead of the default search order
  #[arg(short, long, global = true, value_name = "FILE")]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Interactive chat session (default)
  Chat,
  /// Manage configuration
  Config {
    #[command(subcommand)]
    command: ConfigCommand,
  },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
  /// Write a default finagent.toml in the current directory
  Init,
  /// Print the effective configuration
  Show,
  /// Print the config file search locations
  Path,
}

#[tokio::main]
async fn main() -> Result<()> {
  init_cli_logging();

  let cli = Cli::parse();
  match cli.command.unwrap_or(Commands::Chat) {
    Commands::Chat => cmd_chat(cli.config.as_deref()).await,
    Commands::Config { command } => cmd_config(command, cli.config.as_deref()),
  }
}
