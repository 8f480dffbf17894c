use async_trait::async_trait;
use figma_mcp_llm_sdk::{
    client::LlmClient,
    error::LlmError,
    types::{CompletionRequest, CompletionResponse},
};
use tracing::info;

use super::AssistantClient;

/// Logged when an instruction goes to a bare model: the request carries no
/// MCP server, so the model can only draft an answer.
pub const NO_MCP_SERVER_NOTICE: &str = concat!(
    "The anthropic backend has no figma MCP server attached; ",
    "the reply is a draft, not the result of running the instruction"
);

/// Sends the instruction straight to a model through an [`LlmClient`]
pub struct LlmAssistant<C> {
    client: C,
    max_tokens: u32,
    system: Option<String>,
}

impl<C: LlmClient> LlmAssistant<C> {
    pub fn new(client: C, max_tokens: u32) -> Self {
        Self {
            client,
            max_tokens,
            system: None,
        }
    }

    pub fn with_system(mut self, system: Option<String>) -> Self {
        self.system = system;
        self
    }

    fn request(&self, text: &str) -> CompletionRequest {
        let mut request =
            CompletionRequest::single_user_message(self.client.model_name(), self.max_tokens, text);
        request.system = self.system.clone();
        request
    }
}

#[async_trait]
impl<C: LlmClient> AssistantClient for LlmAssistant<C> {
    type Output = CompletionResponse;
    type Error = LlmError;

    async fn send_message(&self, text: &str) -> Result<CompletionResponse, LlmError> {
        info!(
            "Sending instruction to {} ({})",
            self.client.provider_name(),
            self.client.model_name()
        );
        self.client.complete(self.request(text)).await
    }
}
