use clap::Parser;
use figma_mcp_llm_sdk::claude::ClaudeClient;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::{
    assistant::{
        AssistantClient, AssistantReply, ClaudeCodeAssistant, LlmAssistant, PrintAssistant,
        NO_MCP_SERVER_NOTICE,
    },
    commands::{self, Invocation, FIGMA_MCP},
    config::{AppConfig, Backend, ANTHROPIC_API_KEY_ENV},
    error::CliError,
};

#[derive(Debug, Parser)]
#[command(name = FIGMA_MCP.name)]
#[command(about = FIGMA_MCP.description)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where to send the instruction (overrides configuration)
    #[arg(long, value_enum)]
    pub backend: Option<Backend>,

    /// Model for the anthropic backend
    #[arg(long)]
    pub model: Option<String>,

    /// Print the instruction instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Figma file key, then an optional action
    /// (analyze, components, variables, tokens, or any other verb)
    #[arg(
        value_name = "FILE_KEY [ACTION]",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Run the command and return the exit code to finish with
    pub async fn run(&self) -> Result<i32, CliError> {
        let config = self.resolve_config()?;
        let invocation = Invocation::new(self.args.iter().cloned());
        debug!("Invocation: {:?}", invocation.args());

        match config.assistant.backend {
            Backend::Print => dispatch(&invocation, &PrintAssistant).await,
            Backend::ClaudeCode => {
                let assistant = ClaudeCodeAssistant::new(
                    config.claude_code.binary.clone(),
                    config.claude_code.args.clone(),
                );
                dispatch(&invocation, &assistant).await
            }
            Backend::Anthropic => {
                let anthropic = config.anthropic;
                let api_key = anthropic.api_key.ok_or_else(|| {
                    CliError::Config(format!(
                        "No Anthropic API key: set {} or anthropic.api_key",
                        ANTHROPIC_API_KEY_ENV
                    ))
                })?;
                let client = ClaudeClient::new(api_key)
                    .map_err(CliError::assistant)?
                    .with_base_url(anthropic.base_url)
                    .with_model(anthropic.model);
                let assistant =
                    LlmAssistant::new(client, anthropic.max_tokens).with_system(anthropic.system);
                warn!("{}", NO_MCP_SERVER_NOTICE);
                dispatch(&invocation, &assistant).await
            }
        }
    }

    fn resolve_config(&self) -> Result<AppConfig, CliError> {
        let mut config = AppConfig::load(self.config.as_deref())?;

        if let Some(backend) = self.backend {
            config.assistant.backend = backend;
        }
        if let Some(model) = &self.model {
            config.anthropic.model = model.clone();
        }
        if self.dry_run {
            config.assistant.backend = Backend::Print;
        }

        info!("Using {:?} backend", config.assistant.backend);
        Ok(config)
    }
}

async fn dispatch<A>(invocation: &Invocation, assistant: &A) -> Result<i32, CliError>
where
    A: AssistantClient,
    A::Output: AssistantReply,
    A::Error: std::error::Error + Send + Sync + 'static,
{
    let reply = commands::execute(invocation, assistant)
        .await
        .map_err(CliError::assistant)?;

    let text = reply.text();
    if !text.is_empty() {
        println!("{}", text.trim_end());
    }
    if let Some(diagnostics) = reply.diagnostics() {
        eprintln!("{}", diagnostics.trim_end());
    }

    Ok(reply.exit_code())
}
