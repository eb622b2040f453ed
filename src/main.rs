use std::process::ExitCode;
use std::sync::Arc;

use bank_backoffice::cli::commands;
use bank_backoffice::cli::terminal::TerminalDialog;
use bank_backoffice::cli::{Cli, CliError};
use bank_backoffice::config::AppConfig;
use bank_backoffice::container::Container;
use bank_backoffice::telemetry::{self, TelemetryError};

use clap::Parser;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Client(#[from] reqwest::Error),
    #[error(transparent)]
    Command(#[from] CliError),
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let provider = telemetry::configure(&config.service, &config.logging)?;

    let container = Container::new(&config)?;
    let context = container.context(Arc::new(TerminalDialog::new(cli.yes)));

    let result = commands::execute(context, &config.login, cli.command).await;

    telemetry::shutdown(provider)?;

    Ok(result?)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
