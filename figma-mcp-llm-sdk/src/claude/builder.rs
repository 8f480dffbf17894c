use crate::{
    claude::{
        client::ClaudeClient,
        types::{ClaudeMessage, ClaudeMessageRequest, ClaudeMessageResponse, ClaudeRole},
    },
    error::LlmError,
};

/// Builder for creating Claude message requests
pub struct MessageBuilder<'a> {
    client: &'a ClaudeClient,
    model: Option<String>,
    max_tokens: Option<u32>,
    messages: Vec<ClaudeMessage>,
    system: Option<String>,
    temperature: Option<f32>,
    top_p: Option<f32>,
    stop_sequences: Option<Vec<String>>,
}

impl<'a> MessageBuilder<'a> {
    pub fn new(client: &'a ClaudeClient) -> Self {
        Self {
            client,
            model: None,
            max_tokens: None,
            messages: Vec::new(),
            system: None,
            temperature: None,
            top_p: None,
            stop_sequences: None,
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Add a message to the conversation
    ///
    /// Only "user" and "assistant" are valid roles; anything else is sent as "user".
    /// System prompts go through [`MessageBuilder::system`].
    pub fn message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        let role_str = role.into();
        let role = match role_str.as_str() {
            "user" => ClaudeRole::User,
            "assistant" => ClaudeRole::Assistant,
            _ => {
                tracing::warn!("Invalid role '{}', defaulting to 'user'", role_str);
                ClaudeRole::User
            }
        };

        self.messages.push(ClaudeMessage::text(role, content));
        self
    }

    pub fn user_message(self, content: impl Into<String>) -> Self {
        self.message("user", content)
    }

    pub fn assistant_message(self, content: impl Into<String>) -> Self {
        self.message("assistant", content)
    }

    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn stop_sequences(mut self, stop_sequences: Vec<String>) -> Self {
        self.stop_sequences = Some(stop_sequences);
        self
    }

    /// Finish the request without sending it
    pub fn build(self) -> Result<ClaudeMessageRequest, LlmError> {
        Ok(ClaudeMessageRequest {
            model: self
                .model
                .ok_or_else(|| LlmError::invalid_request("Model must be specified"))?,
            max_tokens: self
                .max_tokens
                .ok_or_else(|| LlmError::invalid_request("max_tokens must be specified"))?,
            messages: self.messages,
            system: self.system,
            temperature: self.temperature,
            top_p: self.top_p,
            stop_sequences: self.stop_sequences,
        })
    }

    /// Send the request and get the response
    pub async fn send(self) -> Result<ClaudeMessageResponse, LlmError> {
        let client = self.client;
        let request = self.build()?;
        client.create_message(request).await
    }
}

impl ClaudeClient {
    /// Start building a message request
    pub fn message_builder(&self) -> MessageBuilder<'_> {
        MessageBuilder::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claude::types::ClaudeContentBlock;

    #[test]
    fn test_build_collects_messages() {
        let client = ClaudeClient::new("test-key").unwrap();
        let request = client
            .message_builder()
            .model("test-model")
            .max_tokens(100)
            .system("be brief")
            .user_message("Hello")
            .assistant_message("Hi")
            .message("tool", "treated as user")
            .build()
            .unwrap();

        assert_eq!(request.model, "test-model");
        assert_eq!(request.system.as_deref(), Some("be brief"));
        assert_eq!(request.messages.len(), 3);
        assert_eq!(request.messages[1].role, ClaudeRole::Assistant);
        assert_eq!(request.messages[2].role, ClaudeRole::User);
        match &request.messages[0].content[0] {
            ClaudeContentBlock::Text { text } => assert_eq!(text, "Hello"),
            other => panic!("unexpected block {other:?}"),
        }
    }

    #[test]
    fn test_build_requires_model_and_max_tokens() {
        let client = ClaudeClient::new("test-key").unwrap();
        let missing_model = client.message_builder().max_tokens(10).build();
        assert!(matches!(missing_model, Err(LlmError::InvalidRequest { .. })));

        let missing_tokens = client.message_builder().model("m").build();
        assert!(matches!(missing_tokens, Err(LlmError::InvalidRequest { .. })));
    }
}
