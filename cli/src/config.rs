//! Layered configuration: defaults, optional TOML file, then `FIGMA_MCP_*`
//! environment variables. Command-line flags are applied on top in `cli.rs`.

use config::{Config, ConfigError, Environment, File, FileFormat};
use figma_mcp_llm_sdk::{claude::client::DEFAULT_BASE_URL, models};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_PREFIX: &str = "FIGMA_MCP";
pub const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Where the instruction gets sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Run the Claude Code CLI, which has the figma MCP server configured
    #[default]
    ClaudeCode,
    /// Call the Anthropic Messages API directly
    Anthropic,
    /// Print the instruction without sending it
    Print,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub assistant: AssistantConfig,
    pub claude_code: ClaudeCodeConfig,
    pub anthropic: AnthropicConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub backend: Backend,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClaudeCodeConfig {
    pub binary: String,
    pub args: Vec<String>,
}

impl Default for ClaudeCodeConfig {
    fn default() -> Self {
        Self {
            binary: "claude".to_string(),
            args: vec!["--print".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnthropicConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub base_url: String,
    pub system: Option<String>,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: models::claude::DEFAULT_ID.to_string(),
            max_tokens: 4096,
            base_url: DEFAULT_BASE_URL.to_string(),
            system: None,
        }
    }
}

impl AppConfig {
    /// Load from `path` (or the default location) and the process environment.
    /// A missing file is fine.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);
        Self::load_from(
            &path,
            environment(),
            std::env::var(ANTHROPIC_API_KEY_ENV).ok(),
        )
    }

    fn load_from(
        path: &Path,
        env: Environment,
        anthropic_api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        debug!("Loading configuration from {}", path.display());

        let builder = Config::builder()
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(false))
            .add_source(env)
            .build()?;

        let mut config: AppConfig = builder.try_deserialize()?;

        if config.anthropic.api_key.is_none() {
            config.anthropic.api_key = anthropic_api_key.filter(|key| !key.is_empty());
        }

        Ok(config)
    }
}

/// `FIGMA_MCP_<SECTION>__<KEY>`, e.g. `FIGMA_MCP_ASSISTANT__BACKEND=print`
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("figma-mcp/config.toml")
    } else {
        PathBuf::from("figma-mcp.toml")
    }
}
