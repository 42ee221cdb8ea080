use std::process::ExitCode;

use clap::Parser;
use skill_icons_server::cli::Cli;
use skill_icons_server::logging::{self, DEFAULT_LOG_LEVEL, targets};
use skill_icons_server::server;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init(DEFAULT_LOG_LEVEL);
            tracing::error!(target: targets::CONFIG, "{e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.log_level);

    match server::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(target: targets::SERVER, "{e}");
            ExitCode::FAILURE
        }
    }
}
