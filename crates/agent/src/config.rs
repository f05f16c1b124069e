//! Configuration for the assistant
//!
//! Loaded once at startup and passed into the orchestrator's constructor;
//! nothing reads credentials from the environment after `Config::load`.

use std::path::{Path, PathBuf};

use llm::OpenAiConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Project-relative config file name
const PROJECT_CONFIG: &str = "finagent.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("failed to parse config file {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },
}

/// LLM endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
  /// API key. Falls back to the OPENAI_API_KEY env var during load.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub api_key: Option<String>,

  /// Model name
  pub model: String,

  /// API root URL (any chat-completions compatible endpoint)
  pub base_url: String,

  /// Sampling temperature
  pub temperature: f32,

  /// Deadline for a single completion request, in seconds
  pub timeout_secs: u64,
}

impl Default for LlmConfig {
  fn default() -> Self {
    let defaults = OpenAiConfig::default();
    Self {
      api_key: None,
      model: defaults.model,
      base_url: defaults.base_url,
      temperature: defaults.temperature,
      timeout_secs: defaults.timeout_secs,
    }
  }
}

impl From<&LlmConfig> for OpenAiConfig {
  fn from(config: &LlmConfig) -> Self {
    Self {
      api_key: config.api_key.clone(),
      model: config.model.clone(),
      base_url: config.base_url.clone(),
      temperature: config.temperature,
      timeout_secs: config.timeout_secs,
    }
  }
}

/// Worker subprocess settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
  /// Worker executable. When unset, `finagent-worker` is resolved next to
  /// the current executable.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub command: Option<String>,

  /// Extra arguments passed to the worker
  pub args: Vec<String>,

  /// Deadline for a single worker call, in seconds
  pub call_timeout_secs: u64,
}

impl Default for WorkerConfig {
  fn default() -> Self {
    Self {
      command: None,
      args: Vec::new(),
      call_timeout_secs: 30,
    }
  }
}

impl WorkerConfig {
  /// Resolve the worker command to launch.
  pub fn resolve_command(&self) -> std::io::Result<(PathBuf, Vec<String>)> {
    if let Some(ref command) = self.command {
      return Ok((PathBuf::from(command), self.args.clone()));
    }

    let exe = std::env::current_exe()?;
    let sibling = exe.with_file_name(if cfg!(windows) {
      "finagent-worker.exe"
    } else {
      "finagent-worker"
    });
    Ok((sibling, self.args.clone()))
  }
}

/// What to do with the rest of a reply's tool calls after one fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
  /// Attempt the remaining invocations; the failed block keeps its text.
  #[default]
  Continue,
  /// Stop the batch at the first failed invocation.
  Abort,
}

/// Tool execution settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
  pub failure_policy: FailurePolicy,
}

/// Assistant configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  #[serde(default)]
  pub llm: LlmConfig,

  #[serde(default)]
  pub worker: WorkerConfig,

  #[serde(default)]
  pub tools: ToolsConfig,
}

impl Config {
  /// Load configuration.
  ///
  /// An explicit path must exist and parse; otherwise the search order is a
  /// project-relative `finagent.toml`, then the user config file. The API
  /// key env fallback happens here, once, so the rest of the program only
  /// ever sees the struct.
  pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
    let mut config = match explicit {
      Some(path) => Self::read_file(path)?,
      None => Self::discover(),
    };

    if config.llm.api_key.is_none()
      && let Ok(key) = std::env::var("OPENAI_API_KEY")
      && !key.is_empty()
    {
      debug!("Using API key from OPENAI_API_KEY");
      config.llm.api_key = Some(key);
    }

    Ok(config)
  }

  fn discover() -> Self {
    let project = PathBuf::from(PROJECT_CONFIG);
    if project.exists()
      && let Ok(config) = Self::read_file(&project)
    {
      debug!(path = %project.display(), "Loaded project config");
      return config;
    }

    if let Some(user) = Self::user_config_path()
      && user.exists()
      && let Ok(config) = Self::read_file(&user)
    {
      debug!(path = %user.display(), "Loaded user config");
      return config;
    }

    Self::default()
  }

  fn read_file(path: &Path) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  /// User-level config path
  pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
      return Some(PathBuf::from(path).join("finagent").join("config.toml"));
    }
    dirs::config_dir().map(|p| p.join("finagent").join("config.toml"))
  }

  /// Generate a commented default config file as a string
  pub fn generate_template() -> String {
    let defaults = Self::default();
    format!(
      r#"# finagent configuration
# Place as ./finagent.toml (project) or ~/.config/finagent/config.toml (user)

[llm]
# API key for the chat-completions endpoint.
# Can also be set via the OPENAI_API_KEY env var.
# api_key = "sk-..."

# Model used for both the reply and the summary call
model = "{model}"

# Any OpenAI-compatible API root works here
base_url = "{base_url}"

temperature = {temperature}

# Per-request deadline in seconds
timeout_secs = {timeout_secs}

[worker]
# Worker executable; defaults to finagent-worker next to the finagent binary
# command = "/usr/local/bin/finagent-worker"

# Per-call deadline in seconds
call_timeout_secs = {call_timeout_secs}

[tools]
# continue = keep running the remaining tool calls in a reply after one fails
# abort    = stop the batch at the first failure
failure_policy = "continue"
"#,
      model = defaults.llm.model,
      base_url = defaults.llm.base_url,
      temperature = defaults.llm.temperature,
      timeout_secs = defaults.llm.timeout_secs,
      call_timeout_secs = defaults.worker.call_timeout_secs,
    )
  }
}
