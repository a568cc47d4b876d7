//! Command-line interface parsing for ruinflect
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! an [`InflectorConfig`] plus output settings.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::case::GrammaticalCase;
use crate::config::InflectorConfig;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified case name is not recognized
    #[error(
        "Invalid case: '{0}'. Valid cases: nominative, genitive, dative, accusative, instrumental, prepositional (or 0-5, or the Russian names)"
    )]
    InvalidCase(String),
}

/// ruinflect - Russian case forms from the inflection service
#[derive(Parser, Debug)]
#[command(name = "ruinflect")]
#[command(about = "Fetch the six Russian case forms of a word")]
#[command(version)]
pub struct Cli {
    /// Words to inflect
    #[arg(required = true, value_name = "WORD")]
    pub words: Vec<String>,

    /// Print only one case (e.g. genitive, родительный, 1)
    #[arg(long, value_name = "CASE")]
    pub case: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Cache variant: session, file, null
    #[arg(long, value_name = "NAME")]
    pub cache: Option<String>,

    /// Cache namespace
    #[arg(long, value_name = "KEY")]
    pub cache_key: Option<String>,

    /// Directory for the file cache
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Inflection service base address
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses a case argument into a GrammaticalCase.
///
/// Unlike the library accessors, the CLI rejects unknown cases instead of
/// falling back to the nominative.
///
/// # Returns
/// * `Ok(GrammaticalCase)` if the string names a case or an index 0-5
/// * `Err(CliError::InvalidCase)` otherwise
pub fn parse_case_arg(s: &str) -> Result<GrammaticalCase, CliError> {
    crate::case::CaseSelector::from(s)
        .try_resolve()
        .ok_or_else(|| CliError::InvalidCase(s.to_string()))
}

/// Settings derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Inflector settings after CLI overrides
    pub inflector: InflectorConfig,
    /// Single case to print, if requested
    pub case: Option<GrammaticalCase>,
    /// Whether to print JSON
    pub json: bool,
}

impl RunConfig {
    /// Applies CLI arguments on top of `base`
    ///
    /// # Returns
    /// * `Ok(RunConfig)` with overrides applied
    /// * `Err(CliError)` if an invalid case was specified
    pub fn from_cli(cli: &Cli, base: InflectorConfig) -> Result<Self, CliError> {
        let case = cli.case.as_deref().map(parse_case_arg).transpose()?;

        let mut inflector = base;
        if let Some(cache) = &cli.cache {
            inflector.cache_variant = cache.clone();
        }
        if let Some(key) = &cli.cache_key {
            inflector.cache_options.insert("key".to_string(), key.clone());
        }
        if let Some(dir) = &cli.cache_dir {
            inflector
                .cache_options
                .insert("dir".to_string(), dir.display().to_string());
        }
        if let Some(base_url) = &cli.base_url {
            inflector.base_url = base_url.clone();
        }
        if let Some(timeout) = cli.timeout {
            inflector.timeout_secs = timeout;
        }

        Ok(RunConfig {
            inflector,
            case,
            json: cli.json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_arg_english() {
        assert_eq!(parse_case_arg("dative").unwrap(), GrammaticalCase::Dative);
        assert_eq!(parse_case_arg("Accusative").unwrap(), GrammaticalCase::Accusative);
    }

    #[test]
    fn test_parse_case_arg_russian_and_index() {
        assert_eq!(parse_case_arg("предложный").unwrap(), GrammaticalCase::Prepositional);
        assert_eq!(parse_case_arg("4").unwrap(), GrammaticalCase::Instrumental);
    }

    #[test]
    fn test_parse_case_arg_invalid() {
        let err = parse_case_arg("vocative").unwrap_err();
        assert!(err.to_string().contains("Invalid case"));
        assert!(err.to_string().contains("vocative"));
        assert!(parse_case_arg("6").is_err());
    }

    #[test]
    fn test_cli_parse_words() {
        let cli = Cli::parse_from(["ruinflect", "книга", "стол"]);
        assert_eq!(cli.words, vec!["книга", "стол"]);
        assert!(cli.case.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_requires_a_word() {
        assert!(Cli::try_parse_from(["ruinflect"]).is_err());
    }

    #[test]
    fn test_run_config_keeps_base_without_flags() {
        let cli = Cli::parse_from(["ruinflect", "книга"]);
        let config = RunConfig::from_cli(&cli, InflectorConfig::default()).unwrap();
        assert_eq!(config.inflector, InflectorConfig::default());
        assert!(config.case.is_none());
    }

    #[test]
    fn test_run_config_applies_overrides() {
        let cli = Cli::parse_from([
            "ruinflect",
            "--case",
            "genitive",
            "--json",
            "--cache",
            "file",
            "--cache-key",
            "NS",
            "--cache-dir",
            "/tmp/ruinflect",
            "--base-url",
            "http://localhost:8080/",
            "--timeout",
            "7",
            "книга",
        ]);
        let config = RunConfig::from_cli(&cli, InflectorConfig::default()).unwrap();
        assert_eq!(config.case, Some(GrammaticalCase::Genitive));
        assert!(config.json);
        assert_eq!(config.inflector.cache_variant, "file");
        assert_eq!(
            config.inflector.cache_options.get("key").map(String::as_str),
            Some("NS")
        );
        assert_eq!(
            config.inflector.cache_options.get("dir").map(String::as_str),
            Some("/tmp/ruinflect")
        );
        assert_eq!(config.inflector.base_url, "http://localhost:8080/");
        assert_eq!(config.inflector.timeout_secs, 7);
    }

    #[test]
    fn test_run_config_invalid_case() {
        let cli = Cli::parse_from(["ruinflect", "--case", "nope", "книга"]);
        assert!(RunConfig::from_cli(&cli, InflectorConfig::default()).is_err());
    }
}
