//! figma-mcp: turns `figma-mcp <fileKey> [action]` into an instruction for an
//! AI assistant that has the figma MCP server available.

pub mod assistant;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
