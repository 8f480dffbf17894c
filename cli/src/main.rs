use clap::Parser;
use tracing::{debug, error, info};

use figma_mcp_cli::{cli::Cli, error::CliError, logging::init_logging};

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    info!("figma-mcp starting");
    debug!("CLI arguments: {:?}", cli);

    match cli.run().await {
        Ok(0) => {
            info!("figma-mcp completed successfully");
            Ok(())
        }
        Ok(code) => {
            info!("Assistant finished with exit code {}", code);
            std::process::exit(code);
        }
        Err(e) => {
            error!("{}", e);
            debug!("{:?}", e);
            std::process::exit(e.exit_code());
        }
    }
}
