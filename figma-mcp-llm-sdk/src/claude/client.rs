use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::debug;

use crate::{
    claude::types::{
        ClaudeContentBlock, ClaudeErrorResponse, ClaudeMessage, ClaudeMessageRequest,
        ClaudeMessageResponse, ClaudeRole,
    },
    error::LlmError,
    types::{CompletionRequest, CompletionResponse, ContentBlock, Role, Usage},
};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Claude (Anthropic) LLM client
pub struct ClaudeClient {
    api_key: String,
    base_url: String,
    model: String,
    http_client: reqwest::Client,
}

impl ClaudeClient {
    /// Create a new Claude client with the given API key
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::authentication("API key cannot be empty"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(300)) // 5 minute timeout
            .build()
            .map_err(|e| LlmError::Network { source: e })?;

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: crate::models::claude::DEFAULT_ID.to_string(),
            http_client,
        })
    }

    /// Set a custom base URL for the API
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model reported by [`LlmClient::model_name`](crate::client::LlmClient::model_name)
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Create a message using the Claude Messages API
    pub async fn create_message(
        &self,
        request: ClaudeMessageRequest,
    ) -> Result<ClaudeMessageResponse, LlmError> {
        let url = format!("{}/v1/messages", self.base_url.trim_end_matches('/'));
        debug!("POST {} (model {})", url, request.model);

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|_| LlmError::authentication("Invalid API key format"))?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(ANTHROPIC_VERSION));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            let claude_response: ClaudeMessageResponse = serde_json::from_str(&body)?;
            return Ok(claude_response);
        }

        // Read retry-after before the body consumes the response
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse().ok());

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let message = match serde_json::from_str::<ClaudeErrorResponse>(&error_text) {
            Ok(error_response) => error_response.error.message,
            Err(_) => error_text,
        };

        Err(LlmError::from_status(status.as_u16(), message, retry_after))
    }
}

#[async_trait]
impl crate::client::LlmClient for ClaudeClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let messages = request
            .messages
            .into_iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => ClaudeRole::User,
                    Role::Assistant => ClaudeRole::Assistant,
                    Role::System => {
                        return Err(LlmError::invalid_request(
                            "System messages should be provided via the system parameter",
                        ));
                    }
                };
                let content = msg
                    .content
                    .into_iter()
                    .map(|block| match block {
                        ContentBlock::Text { text } => ClaudeContentBlock::Text { text },
                    })
                    .collect();
                Ok(ClaudeMessage { role, content })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let claude_request = ClaudeMessageRequest {
            model: request.model,
            max_tokens: request.max_tokens,
            messages,
            system: request.system,
            temperature: request.temperature,
            top_p: request.top_p,
            stop_sequences: request.stop_sequences,
        };

        let claude_response = self.create_message(claude_request).await?;

        let content = claude_response
            .content
            .into_iter()
            .filter_map(|block| match block {
                ClaudeContentBlock::Text { text } => Some(ContentBlock::Text { text }),
                ClaudeContentBlock::Unsupported => None,
            })
            .collect();

        Ok(CompletionResponse {
            content,
            role: match claude_response.role {
                ClaudeRole::User => Role::User,
                ClaudeRole::Assistant => Role::Assistant,
            },
            usage: Usage {
                input_tokens: claude_response.usage.input_tokens,
                output_tokens: claude_response.usage.output_tokens,
            },
            stop_reason: claude_response.stop_reason,
        })
    }

    fn provider_name(&self) -> &str {
        crate::providers::ANTHROPIC
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
