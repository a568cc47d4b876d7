//! ruinflect - print Russian case forms fetched from the inflection service
//!
//! Inflects every word given on the command line with one client, so repeated
//! words are served from the cache.

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use ruinflect::cli::{Cli, RunConfig};
use ruinflect::{GrammaticalCase, Inflector, InflectorConfig};

/// One word's result in `--json` mode
#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    original: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    case: Option<GrammaticalCase>,
    inflections: Vec<&'a str>,
}

/// Installs the stderr log subscriber; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Renders the current word of `inflector` according to the run settings
fn render(inflector: &Inflector, config: &RunConfig) -> String {
    if config.json {
        let inflections = match config.case {
            Some(case) => vec![inflector.inflection(case)],
            None => GrammaticalCase::ALL
                .iter()
                .map(|case| inflector.inflection(*case))
                .collect(),
        };
        let output = JsonOutput {
            original: inflector.original(),
            case: config.case,
            inflections,
        };
        return serde_json::to_string(&output).unwrap_or_default();
    }

    match config.case {
        Some(case) => inflector.inflection(case).to_string(),
        None => GrammaticalCase::ALL
            .iter()
            .map(|case| format!("{:<14}{}", case.english_name(), inflector.inflection(*case)))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    init_logging(cli.verbose);

    if dotenv_loaded {
        debug!("Loaded environment variables from .env file");
    }

    let config = match RunConfig::from_cli(&cli, InflectorConfig::from_env()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut inflector = match Inflector::new(config.inflector.clone()) {
        Ok(inflector) => inflector,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;
    for (i, word) in cli.words.iter().enumerate() {
        match inflector.inflect(word).await {
            Ok(_) => {
                if i > 0 && !config.json && config.case.is_none() {
                    println!();
                }
                println!("{}", render(&inflector, &config));
            }
            Err(e) => {
                error!(%word, error = %e, "Inflection failed");
                eprintln!("Error: {}: {}", word, e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
