//! Assistant backends the `figma-mcp` command hands its instruction to
//!
//! The command handler only knows the [`AssistantClient`] capability. Which
//! backend sits behind it is decided by the host from configuration.

pub mod claude_code;
pub mod llm;
pub mod print;

use async_trait::async_trait;

pub use claude_code::{ClaudeCodeAssistant, ClaudeCodeError, ToolRun};
pub use llm::{LlmAssistant, NO_MCP_SERVER_NOTICE};
pub use print::PrintAssistant;

/// Something that can execute a natural-language instruction
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Whatever the backend produces; passed through the handler untouched
    type Output: Send;
    type Error: Send;

    async fn send_message(&self, text: &str) -> Result<Self::Output, Self::Error>;
}

/// How the host prints a backend's output
pub trait AssistantReply {
    fn text(&self) -> String;

    /// Extra output meant for stderr
    fn diagnostics(&self) -> Option<&str> {
        None
    }

    /// Process exit code the host should finish with
    fn exit_code(&self) -> i32 {
        0
    }
}

impl AssistantReply for String {
    fn text(&self) -> String {
        self.clone()
    }
}

impl AssistantReply for figma_mcp_llm_sdk::types::CompletionResponse {
    fn text(&self) -> String {
        figma_mcp_llm_sdk::types::CompletionResponse::text(self)
    }
}
