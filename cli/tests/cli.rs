use assert_cmd::Command;
use predicates::str::{contains, starts_with};
use std::path::{Path, PathBuf};

const USAGE: &str = "Please provide a Figma file key: /figma-mcp [fileKey] [action]\n";

fn cmd(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("figma-mcp").unwrap();
    cmd.arg("--config")
        .arg(config)
        .env_remove("ANTHROPIC_API_KEY")
        .env_remove("FIGMA_MCP_ASSISTANT__BACKEND")
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn dry_run_prints_tokens_instruction() {
    let dir = tempfile::tempdir().unwrap();
    cmd(&dir.path().join("none.toml"))
        .args(["--dry-run", "abc123", "tokens"])
        .assert()
        .success()
        .stdout(
            "Using the figma MCP server, extract design tokens from the Figma file with key \"abc123\"\n\
             and convert them to CSS variables.\n",
        );
}

#[test]
fn dry_run_defaults_to_analyze() {
    let dir = tempfile::tempdir().unwrap();
    cmd(&dir.path().join("none.toml"))
        .args(["--dry-run", "abc123"])
        .assert()
        .success()
        .stdout(starts_with(
            "Using the figma MCP server, analyze the Figma file with key \"abc123\".",
        ));
}

#[test]
fn missing_file_key_sends_usage() {
    let dir = tempfile::tempdir().unwrap();
    cmd(&dir.path().join("none.toml"))
        .args(["--backend", "print"])
        .assert()
        .success()
        .stdout(USAGE);
}

#[test]
fn unknown_action_uses_generic_instruction() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "[assistant]\nbackend = \"print\"\n");
    cmd(&config)
        .args(["abc123", "rename-layers"])
        .assert()
        .success()
        .stdout("Using the figma MCP server, rename-layers the Figma file with key \"abc123\".\n");
}

#[test]
fn hyphenated_action_uses_generic_instruction() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "");
    cmd(&config)
        .args(["--dry-run", "abc123", "-rename"])
        .assert()
        .success()
        .stdout("Using the figma MCP server, -rename the Figma file with key \"abc123\".\n");
}

#[test]
fn invalid_config_exits_with_config_code() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "[assistant]\nbackend = \"carrier-pigeon\"\n");
    cmd(&config).arg("abc123").assert().code(2);
}

#[test]
fn anthropic_backend_needs_api_key() {
    let dir = tempfile::tempdir().unwrap();
    cmd(&dir.path().join("none.toml"))
        .args(["--backend", "anthropic", "abc123"])
        .assert()
        .code(2)
        .stderr(contains("ANTHROPIC_API_KEY"));
}

#[test]
fn anthropic_backend_warns_it_only_drafts() {
    let dir = tempfile::tempdir().unwrap();
    // Nothing listens on the discard port, so the request fails fast
    let config = write_config(
        &dir,
        "[assistant]\nbackend = \"anthropic\"\n\n[anthropic]\napi_key = \"test-key\"\nbase_url = \"http://127.0.0.1:9\"\n",
    );
    cmd(&config)
        .arg("abc123")
        .assert()
        .code(6)
        .stdout("")
        .stderr(contains("no figma MCP server attached"));
}

#[cfg(unix)]
#[test]
fn claude_code_backend_runs_configured_binary() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        &dir,
        "[assistant]\nbackend = \"claude-code\"\n\n[claude_code]\nbinary = \"echo\"\nargs = []\n",
    );
    cmd(&config)
        .args(["abc123", "components"])
        .assert()
        .success()
        .stdout(
            "Using the figma MCP server, get all components from the Figma file with key \"abc123\".\n\
             Analyze their structure and provide detailed information.\n",
        );
}

#[cfg(unix)]
#[test]
fn claude_code_exit_code_is_forwarded() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "[claude_code]\nbinary = \"false\"\nargs = []\n");
    cmd(&config).arg("abc123").assert().code(1);
}

#[test]
fn missing_assistant_binary_exits_with_assistant_code() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "[claude_code]\nbinary = \"figma-mcp-no-such-assistant\"\n");
    cmd(&config)
        .arg("abc123")
        .assert()
        .code(6)
        .stderr(contains("figma-mcp-no-such-assistant"));
}
