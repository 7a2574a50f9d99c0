use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::error;
use thiserror::Error;

use travel_expense::{BillingConfig, BillingEngine, ConfigError, Receipt, Session, SessionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Interactive travel expense calculator.
#[derive(Parser, Debug)]
#[command(name = "travel-expense", version, about = "Computes an itemised bill for a traveler or family trip")]
struct Cli {
    /// Currency label printed next to every amount.
    #[arg(long, env = "TRAVEL_CURRENCY")]
    currency: Option<String>,

    /// Destination offered in the city menu. Repeat to replace the default list.
    #[arg(short, long = "destination")]
    destinations: Vec<String>,

    /// How the final bill is printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error). Falls back to RUST_LOG.
    #[arg(short, long)]
    log_level: Option<String>,
}

#[derive(Debug, Error)]
enum RunError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Could not encode bill: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = cli.log_level.clone().unwrap_or_else(|| "warn".to_string());
    env_logger::init_from_env(Env::default().default_filter_or(level));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), RunError> {
    let config = BillingConfig::default().with_overrides(cli.currency, cli.destinations);
    config.validate()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let request = Session::new(&config, stdin.lock(), stdout.lock()).run()?;
    let bill = BillingEngine::quote(&request);

    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => {
            let receipt = Receipt {
                bill: &bill,
                traveler: &request.traveler,
                destination: &request.destination,
                currency: &config.currency,
            };
            writeln!(out, "\n{}", receipt)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &bill.summary())?;
            writeln!(out)?;
        }
    }
    Ok(())
}
