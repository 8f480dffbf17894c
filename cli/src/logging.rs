use crate::error::CliError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging with environment-based log level filtering.
///
/// Logs go to stderr; stdout is reserved for the assistant's reply.
pub fn init_logging(verbose: bool) -> Result<(), CliError> {
    let default_level = if verbose { "debug" } else { "warn" };

    // RUST_LOG wins over the default level
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| CliError::Config(format!("Failed to create log filter: {}", e)))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::Error::new(e).context("Failed to initialize logging"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_only_once() {
        // The global subscriber can be installed a single time per process
        assert!(init_logging(false).is_ok());

        let err = init_logging(true).unwrap_err();
        assert!(matches!(err, CliError::Other(_)));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().starts_with("Error: Failed to initialize logging"));
    }
}
