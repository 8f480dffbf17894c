use async_trait::async_trait;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

use super::{AssistantClient, AssistantReply};

#[derive(Debug, Error)]
pub enum ClaudeCodeError {
    #[error("AI tool '{0}' not found. Please ensure it's installed and in your PATH.")]
    NotFound(String),

    #[error("Failed to execute {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
}

/// Captured result of one assistant CLI run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRun {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
    pub success: bool,
}

impl AssistantReply for ToolRun {
    fn text(&self) -> String {
        self.stdout.clone()
    }

    fn diagnostics(&self) -> Option<&str> {
        Some(self.stderr.as_str()).filter(|s| !s.trim().is_empty())
    }

    fn exit_code(&self) -> i32 {
        if self.success {
            0
        } else {
            self.exit_code.unwrap_or(1)
        }
    }
}

/// Runs an assistant CLI (Claude Code by default) in non-interactive mode.
///
/// The figma MCP server is expected to be configured in that assistant, so
/// the instruction is all it needs.
#[derive(Debug, Clone)]
pub struct ClaudeCodeAssistant {
    binary: String,
    args: Vec<String>,
}

impl ClaudeCodeAssistant {
    pub fn new(binary: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            binary: binary.into(),
            args,
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Whether the binary resolves to an executable, either as an explicit
    /// path or through `PATH` (and `PATHEXT` on Windows)
    fn is_available(&self) -> bool {
        which::which(&self.binary).is_ok()
    }
}

impl Default for ClaudeCodeAssistant {
    fn default() -> Self {
        Self::new("claude", vec!["--print".to_string()])
    }
}

#[async_trait]
impl AssistantClient for ClaudeCodeAssistant {
    type Output = ToolRun;
    type Error = ClaudeCodeError;

    async fn send_message(&self, text: &str) -> Result<ToolRun, ClaudeCodeError> {
        if !self.is_available() {
            return Err(ClaudeCodeError::NotFound(self.binary.clone()));
        }

        info!("Executing command: {}", self.binary);
        debug!("Instruction length: {} characters", text.len());

        let output = Command::new(&self.binary)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ClaudeCodeError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        let success = output.status.success();
        let exit_code = output.status.code();

        if success {
            info!("AI tool completed successfully");
        } else {
            info!("AI tool completed with non-zero exit: {}", exit_code.unwrap_or(-1));
        }

        Ok(ToolRun {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code,
            success,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_instruction_is_passed_as_last_argument() {
        let assistant = ClaudeCodeAssistant::new("echo", vec!["--print".to_string()]);
        let run = assistant.send_message("analyze abc123").await.unwrap();

        assert!(run.success);
        assert_eq!(run.stdout.trim_end(), "--print analyze abc123");
        assert_eq!(run.exit_code(), 0);
    }

    #[tokio::test]
    async fn test_missing_binary() {
        let assistant = ClaudeCodeAssistant::new("figma-mcp-no-such-assistant", vec![]);
        let err = assistant.send_message("hello").await.unwrap_err();
        assert!(matches!(err, ClaudeCodeError::NotFound(name) if name == "figma-mcp-no-such-assistant"));
    }

    #[tokio::test]
    async fn test_explicit_path_is_resolved() {
        let echo = which::which("echo").unwrap();
        let assistant = ClaudeCodeAssistant::new(echo.to_string_lossy(), vec![]);
        assert!(assistant.is_available());

        let run = assistant.send_message("tokens abc123").await.unwrap();
        assert_eq!(run.stdout.trim_end(), "tokens abc123");
    }

    #[test]
    fn test_missing_explicit_path_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("claude");
        let assistant = ClaudeCodeAssistant::new(missing.to_string_lossy(), vec![]);
        assert!(!assistant.is_available());
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_reported() {
        let assistant = ClaudeCodeAssistant::new("false", vec![]);
        let run = assistant.send_message("ignored").await.unwrap();
        assert!(!run.success);
        assert_eq!(run.exit_code(), 1);
    }

    #[test]
    fn test_default_runs_claude_print() {
        let assistant = ClaudeCodeAssistant::default();
        assert_eq!(assistant.binary(), "claude");
        assert_eq!(assistant.args, vec!["--print".to_string()]);
    }
}
