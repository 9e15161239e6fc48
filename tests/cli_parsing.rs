//! Tests for CLI subcommand and option parsing.

use clap::Parser;
use strum::IntoEnumIterator;
use syndicate::{Cli, Config, LogFormat, LogLevel, QueryKind};

#[test]
fn test_every_subcommand_parses_by_name() {
    for kind in QueryKind::iter() {
        let name = kind.to_string();
        let cli = Cli::try_parse_from(["syndicate", name.as_str()])
            .unwrap_or_else(|e| panic!("Should parse {name}: {e}"));
        assert_eq!(cli.command, Some(kind));
    }
}

#[test]
fn test_host_defaults_to_google() {
    let cli = Cli::try_parse_from(["syndicate", "ns"]).expect("Should parse ns");
    assert_eq!(cli.host, "google.com");
    assert_eq!(
        log::LevelFilter::from(cli.log_level.clone()),
        log::LevelFilter::from(LogLevel::Warn)
    );
    match cli.log_format {
        LogFormat::Plain => {}
        _ => panic!("Should be Plain format"),
    }
}

#[test]
fn test_host_after_subcommand() {
    let cli = Cli::try_parse_from(["syndicate", "mx", "--host", "example.com"])
        .expect("Should parse --host after the subcommand");
    assert_eq!(cli.host, "example.com");
    assert_eq!(cli.command, Some(QueryKind::Mx));
}

#[test]
fn test_host_before_subcommand() {
    let cli = Cli::try_parse_from(["syndicate", "--host", "example.com", "txt"])
        .expect("Should parse --host before the subcommand");
    assert_eq!(cli.host, "example.com");
    assert_eq!(cli.command, Some(QueryKind::Txt));
}

#[test]
fn test_empty_host_is_rejected() {
    let result = Cli::try_parse_from(["syndicate", "ns", "--host", ""]);
    assert!(result.is_err(), "An empty host should be a usage error");
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    let result = Cli::try_parse_from(["syndicate", "aaaa"]);
    assert!(result.is_err());
}

#[test]
fn test_missing_subcommand_is_allowed() {
    let cli = Cli::try_parse_from(["syndicate"]).expect("No subcommand should parse");
    assert!(cli.command.is_none());
}

#[test]
fn test_log_options_flow_into_config() {
    let cli = Cli::try_parse_from([
        "syndicate",
        "all",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Should parse log options");
    let config = Config::from(&cli);
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Debug
    );
    assert!(matches!(config.log_format, LogFormat::Json));
    assert_eq!(config.host, "google.com");
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let result = Cli::try_parse_from(["syndicate", "ns", "--log-level", "verbose"]);
    assert!(result.is_err());
}
