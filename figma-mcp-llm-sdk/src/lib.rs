//! # figma-mcp LLM SDK
//!
//! Provider-agnostic LLM client trait plus the Anthropic Messages API client
//! used by the `figma-mcp` command when it talks to the API directly.
//!
//! ## Example
//!
//! ```rust,no_run
//! use figma_mcp_llm_sdk::claude::ClaudeClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ClaudeClient::new("your-api-key")?;
//!     let response = client
//!         .message_builder()
//!         .model("claude-sonnet-4-5-20250929")
//!         .max_tokens(1024)
//!         .user_message("Hello, Claude!")
//!         .send()
//!         .await?;
//!
//!     println!("Response: {:?}", response.content);
//!     Ok(())
//! }
//! ```

pub mod claude;
pub mod client;
pub mod error;
pub mod models;
pub mod providers;
pub mod types;
