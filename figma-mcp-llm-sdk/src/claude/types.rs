use serde::{Deserialize, Serialize};

/// Claude message request for the Messages API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeMessageRequest {
    /// The model to use for generation
    pub model: String,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Input messages
    pub messages: Vec<ClaudeMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
}

/// A message in the Claude conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeMessage {
    pub role: ClaudeRole,
    pub content: Vec<ClaudeContentBlock>,
}

/// Role of a Claude message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaudeRole {
    User,
    Assistant,
}

/// Content block in a Claude message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClaudeContentBlock {
    Text {
        text: String,
    },
    /// Server-side tool activity (e.g. MCP tool use); kept opaque
    #[serde(other)]
    Unsupported,
}

/// Claude message response from the Messages API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeMessageResponse {
    pub id: String,
    /// Always "message"
    #[serde(rename = "type")]
    pub response_type: String,
    pub role: ClaudeRole,
    pub model: String,
    pub content: Vec<ClaudeContentBlock>,
    pub stop_reason: Option<String>,
    pub stop_sequence: Option<String>,
    pub usage: ClaudeUsage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Claude API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeErrorResponse {
    /// Always "error"
    #[serde(rename = "type")]
    pub response_type: String,
    pub error: ClaudeError,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeError {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

impl ClaudeMessage {
    /// Create a new text message
    pub fn text<S: Into<String>>(role: ClaudeRole, text: S) -> Self {
        Self {
            role,
            content: vec![ClaudeContentBlock::Text { text: text.into() }],
        }
    }

    pub fn user<S: Into<String>>(text: S) -> Self {
        Self::text(ClaudeRole::User, text)
    }

    pub fn assistant<S: Into<String>>(text: S) -> Self {
        Self::text(ClaudeRole::Assistant, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_skips_unset_options() {
        let request = ClaudeMessageRequest {
            model: "m".to_string(),
            max_tokens: 5,
            messages: vec![ClaudeMessage::user("hi")],
            system: None,
            temperature: None,
            top_p: None,
            stop_sequences: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "model": "m",
                "max_tokens": 5,
                "messages": [{"role": "user", "content": [{"type": "text", "text": "hi"}]}]
            })
        );
    }

    #[test]
    fn test_unknown_content_blocks_are_tolerated() {
        let blocks: Vec<ClaudeContentBlock> = serde_json::from_value(serde_json::json!([
            {"type": "mcp_tool_use", "id": "x", "name": "get_file", "input": {}},
            {"type": "text", "text": "done"}
        ]))
        .unwrap();
        assert!(matches!(blocks[0], ClaudeContentBlock::Unsupported));
        assert!(matches!(&blocks[1], ClaudeContentBlock::Text { text } if text == "done"));
    }
}
