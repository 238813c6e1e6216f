mod cli;

use std::process::ExitCode;

use clap::Parser;
use dioxus_logger::tracing::Level;
use fleetdesk::client::{
    error::{api::ApiError, Error},
    Config,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config.log_level
    };
    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    match cli::run(cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &Error) {
    eprintln!("Error: {}", err);

    match err {
        Error::ApiError(ApiError::SessionExpired) => {
            eprintln!("Run `fleetdesk login` to start a new session.");
        }
        Error::ApiError(ApiError::Validation { errors, .. }) => {
            for (field, messages) in errors {
                eprintln!("  {}: {}", field, messages.join(" "));
            }
        }
        _ => (),
    }
}
