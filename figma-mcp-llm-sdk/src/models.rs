//! Model constants for supported LLM providers

/// Claude model constants
pub mod claude {
    /// Claude Sonnet 4.5 - Smart model for complex agents and coding
    pub const SONNET_4_5_ID: &str = "claude-sonnet-4-5-20250929";
    pub const SONNET_4_5_NAME: &str = "Claude Sonnet 4.5";

    /// Claude Haiku 4.5 - Fastest model with near-frontier intelligence
    pub const HAIKU_4_5_ID: &str = "claude-haiku-4-5-20251001";
    pub const HAIKU_4_5_NAME: &str = "Claude Haiku 4.5";

    /// Claude Opus 4.5
    pub const OPUS_4_5_ID: &str = "claude-opus-4-5-20251101";
    pub const OPUS_4_5_NAME: &str = "Claude Opus 4.5";

    /// Model used when none is configured
    pub const DEFAULT_ID: &str = SONNET_4_5_ID;
}
