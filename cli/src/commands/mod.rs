//! Command implementations for the figma-mcp CLI

pub mod figma_mcp;

pub use figma_mcp::{execute, instruction, Action, Invocation, FIGMA_MCP, USAGE_MESSAGE};

/// Metadata a hosting CLI needs to register a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
}
