//! Main entry point for the phonebook server.
//!
//! Loads the `.env` file, parses configuration, initializes logging and
//! serves the HTTP API until interrupted.

use clap::Parser;
use phonebook::{api, cli, utils};
use std::process::ExitCode;
use tracing::{error, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    let cli = cli::Cli::parse();
    utils::init_logging(&cli.logging_level, cli.log_dir.as_deref());

    if let Err(e) = dotenv {
        warn!("Failed to load .env file: {}", e);
    }

    match api::server::launch_server(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to start server: {}", e);
            ExitCode::FAILURE
        }
    }
}
