//! `cep-race`: resolve one postal code with whichever provider answers first.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use cep_race::config::{load_config, validate_config, AppConfig, ConfigError};
use cep_race::observability::init_logging;
use cep_race::{providers, LookupRequest, RaceCoordinator, RaceError, Resolved};

#[derive(Parser)]
#[command(name = "cep-race")]
#[command(
    about = "Look up a Brazilian postal code on BrasilAPI and ViaCEP, keeping the fastest answer",
    long_about = None
)]
struct Cli {
    /// Postal code to look up (defaults to race.default_cep)
    cep: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Race deadline in milliseconds
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn resolve_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    if let Some(timeout_ms) = cli.timeout_ms {
        config.race.timeout_ms = timeout_ms;
    }
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = resolve_config(cli)?;

    init_logging(&config.observability.log_level);

    let request = LookupRequest::new(cli.cep.as_deref().unwrap_or(&config.race.default_cep))?;
    let timeout = Duration::from_millis(config.race.timeout_ms);

    tracing::info!(
        cep = %request,
        timeout_ms = config.race.timeout_ms,
        "Looking up postal code on both providers"
    );

    let adapters = providers::from_config(&config.providers)?;
    let coordinator = RaceCoordinator::new(adapters, timeout);
    let result = coordinator.race(&request).await.into_result();

    if cli.json {
        print_json(&result)?;
    } else {
        print_text(&result);
    }

    Ok(match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    })
}

fn print_text(result: &Result<Resolved, RaceError>) {
    match result {
        Ok(resolved) => {
            println!("================================================");
            println!("Fastest response");
            println!("Source:  {}", resolved.source);
            let address = &resolved.address;
            println!("Address: {}, {} - {}", address.street, address.city, address.region);
            println!("================================================");
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn print_json(result: &Result<Resolved, RaceError>) -> Result<(), serde_json::Error> {
    let value = match result {
        Ok(resolved) => serde_json::to_value(resolved)?,
        Err(e) => serde_json::json!({ "error": e.to_string() }),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(cep: &str) -> Cli {
        Cli {
            cep: Some(cep.to_string()),
            config: None,
            timeout_ms: None,
            log_level: None,
            json: false,
        }
    }

    #[tokio::test]
    async fn test_empty_cep_reports_message() {
        let err = run(&cli("  ")).await.unwrap_err();
        assert_eq!(err.to_string(), "postal code must not be empty");
    }

    #[tokio::test]
    async fn test_zero_timeout_reports_validation() {
        let mut args = cli("07263725");
        args.timeout_ms = Some(0);
        let err = run(&args).await.unwrap_err();
        assert!(err.to_string().starts_with("Validation failed:"));
    }
}
