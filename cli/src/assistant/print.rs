use async_trait::async_trait;
use std::convert::Infallible;

use super::AssistantClient;

/// Dry-run backend: the instruction itself is the reply
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintAssistant;

#[async_trait]
impl AssistantClient for PrintAssistant {
    type Output = String;
    type Error = Infallible;

    async fn send_message(&self, text: &str) -> Result<String, Infallible> {
        Ok(text.to_string())
    }
}
