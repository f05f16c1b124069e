//! Config subcommands

use std::path::Path;

use agent::Config;
use anyhow::{Context, Result, bail};

use crate::ConfigCommand;

pub fn cmd_config(command: ConfigCommand, config_path: Option<&Path>) -> Result<()> {
  match command {
    ConfigCommand::Init => {
      let target = Path::new("finagent.toml");
      if target.exists() {
        bail!("{} already exists, not overwriting", target.display());
      }
      std::fs::write(target, Config::generate_template())
        .with_context(|| format!("Failed to write {}", target.display()))?;
      println!("Wrote {}", target.display());
      Ok(())
    }
    ConfigCommand::Show => {
      let mut config = Config::load(config_path).context("Failed to load configuration")?;
      // Never print the credential itself
      if config.llm.api_key.is_some() {
        config.llm.api_key = Some("<set>".to_string());
      }
      print!("{}", toml::to_string_pretty(&config).context("Failed to render configuration")?);
      Ok(())
    }
    ConfigCommand::Path => {
      if let Some(path) = config_path {
        println!("{} (explicit)", path.display());
        return Ok(());
      }
      println!("./finagent.toml (project)");
      if let Some(user) = Config::user_config_path() {
        println!("{} (user)", user.display());
      }
      Ok(())
    }
  }
}
