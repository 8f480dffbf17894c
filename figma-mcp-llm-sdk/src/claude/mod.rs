//! Claude (Anthropic) LLM client implementation

pub mod builder;
pub mod client;
pub mod types;

pub use builder::MessageBuilder;
pub use client::ClaudeClient;
