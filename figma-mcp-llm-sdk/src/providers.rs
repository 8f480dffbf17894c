//! Provider name constants

/// Anthropic (Claude) provider
pub const ANTHROPIC: &str = "anthropic";
