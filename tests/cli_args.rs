//! Integration tests for CLI argument handling
//!
//! Tests argument validation that fails before any request is made.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_ruinflect"))
        .args(args)
        .output()
        .expect("Failed to execute ruinflect")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ruinflect"), "Help should mention ruinflect");
    assert!(stdout.contains("--case"), "Help should mention --case flag");
}

#[test]
fn test_missing_word_fails() {
    let output = run_cli(&[]);
    assert!(!output.status.success(), "Expected missing word to fail");
}

#[test]
fn test_invalid_case_prints_error_and_exits() {
    let output = run_cli(&["--case", "vocative", "книга"]);
    assert!(!output.status.success(), "Expected invalid case to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid case"),
        "Should print error message about invalid case: {}",
        stderr
    );
}

#[test]
fn test_blank_word_is_reported() {
    let output = run_cli(&["--cache", "null", "   "]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not valid"),
        "Should report the invalid word: {}",
        stderr
    );
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use ruinflect::cli::{parse_case_arg, Cli, RunConfig};
    use ruinflect::{GrammaticalCase, InflectorConfig};

    #[test]
    fn test_cli_case_flag() {
        let cli = Cli::parse_from(["ruinflect", "--case", "родительный", "книга"]);
        assert_eq!(cli.case.as_deref(), Some("родительный"));
        assert_eq!(cli.words, vec!["книга"]);
    }

    #[test]
    fn test_parse_case_arg_round_trips_all_cases() {
        for case in GrammaticalCase::ALL {
            assert_eq!(parse_case_arg(case.english_name()).unwrap(), case);
            assert_eq!(parse_case_arg(case.russian_name()).unwrap(), case);
            assert_eq!(parse_case_arg(&case.index().to_string()).unwrap(), case);
        }
    }

    #[test]
    fn test_run_config_uses_given_base() {
        let base = InflectorConfig {
            cache_variant: "file".to_string(),
            ..InflectorConfig::default()
        };
        let cli = Cli::parse_from(["ruinflect", "книга"]);
        let config = RunConfig::from_cli(&cli, base).unwrap();
        assert_eq!(config.inflector.cache_variant, "file");
    }

    #[test]
    fn test_run_config_flag_beats_base() {
        let base = InflectorConfig {
            cache_variant: "file".to_string(),
            ..InflectorConfig::default()
        };
        let cli = Cli::parse_from(["ruinflect", "--cache", "null", "книга"]);
        let config = RunConfig::from_cli(&cli, base).unwrap();
        assert_eq!(config.inflector.cache_variant, "null");
    }
}
