//! The `figma-mcp` command
//!
//! Turns `figma-mcp <fileKey> [action]` into a natural-language instruction
//! telling the assistant to use the figma MCP server, then hands that
//! instruction to the assistant. Nothing here talks to Figma.

use tracing::debug;

use super::CommandSpec;
use crate::assistant::AssistantClient;

/// Registration metadata for the command
pub const FIGMA_MCP: CommandSpec = CommandSpec {
    name: "figma-mcp",
    description: "Interact with Figma using the unified MCP server",
    usage: "/figma-mcp [fileKey] [action]",
};

/// Sent instead of an instruction when no file key was given
pub const USAGE_MESSAGE: &str = "Please provide a Figma file key: /figma-mcp [fileKey] [action]";

/// Action used when the second argument is missing
pub const DEFAULT_ACTION: &str = "analyze";

/// What the command was asked to do with the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    Analyze,
    Components,
    Variables,
    Tokens,
    /// Any other keyword; forwarded literally
    Other(&'a str),
}

/// Actions with a hand-written template
pub const KNOWN_ACTIONS: [Action<'static>; 4] = [
    Action::Analyze,
    Action::Components,
    Action::Variables,
    Action::Tokens,
];

impl<'a> Action<'a> {
    /// Exact, case-sensitive match. Never fails.
    pub fn parse(keyword: &'a str) -> Self {
        match keyword {
            "analyze" => Action::Analyze,
            "components" => Action::Components,
            "variables" => Action::Variables,
            "tokens" => Action::Tokens,
            other => Action::Other(other),
        }
    }

    pub fn keyword(&self) -> &'a str {
        match *self {
            Action::Analyze => "analyze",
            Action::Components => "components",
            Action::Variables => "variables",
            Action::Tokens => "tokens",
            Action::Other(keyword) => keyword,
        }
    }

    /// Render the instruction for `file_key`. The key is inserted verbatim.
    pub fn render(&self, file_key: &str) -> String {
        match self {
            Action::Analyze => format!(
                "Using the figma MCP server, analyze the Figma file with key \"{file_key}\".\n\
                 Get file details, extract components, and provide insights about the design system."
            ),
            Action::Components => format!(
                "Using the figma MCP server, get all components from the Figma file with key \"{file_key}\".\n\
                 Analyze their structure and provide detailed information."
            ),
            Action::Variables => format!(
                "Using the figma MCP server, extract all variables and design tokens from the Figma file with key \"{file_key}\".\n\
                 Analyze their usage and convert them to useful formats."
            ),
            Action::Tokens => format!(
                "Using the figma MCP server, extract design tokens from the Figma file with key \"{file_key}\"\n\
                 and convert them to CSS variables."
            ),
            Action::Other(action) => format!(
                "Using the figma MCP server, {action} the Figma file with key \"{file_key}\"."
            ),
        }
    }
}

/// Positional arguments of one command call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// First argument, unless missing or empty
    pub fn file_key(&self) -> Option<&str> {
        self.args.first().map(String::as_str).filter(|s| !s.is_empty())
    }

    /// Second argument, defaulting to `analyze` when missing or empty
    pub fn action(&self) -> Action<'_> {
        let keyword = self
            .args
            .get(1)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_ACTION);
        Action::parse(keyword)
    }
}

/// The text `execute` sends for this invocation
pub fn instruction(invocation: &Invocation) -> String {
    match invocation.file_key() {
        None => USAGE_MESSAGE.to_string(),
        Some(file_key) => invocation.action().render(file_key),
    }
}

/// Run the command: exactly one `send_message` call, whose result (or error)
/// is returned unchanged.
pub async fn execute<A>(invocation: &Invocation, assistant: &A) -> Result<A::Output, A::Error>
where
    A: AssistantClient + ?Sized,
{
    match invocation.file_key() {
        None => debug!("No file key given, sending usage"),
        Some(file_key) => debug!(
            "Dispatching '{}' for file {}",
            invocation.action().keyword(),
            file_key
        ),
    }

    assistant.send_message(&instruction(invocation)).await
}
