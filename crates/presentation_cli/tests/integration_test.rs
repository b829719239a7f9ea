//! Integration tests for CLI
//!
//! These tests verify command parsing without running the commands.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::Path;

use clap::Parser;
use domain::{Theme, UnitPreference};
use presentation_cli::{Cli, Commands};

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_cities_command() {
    let cli = parse_args(&["nimbus-cli", "cities"]).unwrap();
    assert!(matches!(cli.command, Commands::Cities));
}

#[test]
fn cli_parses_show_defaults() {
    let cli = parse_args(&["nimbus-cli", "show"]).unwrap();
    if let Commands::Show {
        selection,
        theme,
        json,
    } = cli.command
    {
        assert!(selection.city.is_none());
        assert!(selection.unit.is_none());
        assert!(theme.is_none());
        assert!(!json);
    } else {
        panic!("Expected Show command");
    }
}

#[test]
fn cli_parses_show_with_overrides() {
    let cli = parse_args(&[
        "nimbus-cli",
        "show",
        "--city",
        "New York",
        "--unit",
        "fahrenheit",
        "--theme",
        "dark",
        "--json",
    ])
    .unwrap();
    if let Commands::Show {
        selection,
        theme,
        json,
    } = cli.command
    {
        assert_eq!(selection.city.as_deref(), Some("New York"));
        assert_eq!(selection.unit, Some(UnitPreference::Imperial));
        assert_eq!(theme, Some(Theme::Dark));
        assert!(json);
    } else {
        panic!("Expected Show command");
    }
}

#[test]
fn cli_rejects_unknown_unit() {
    assert!(parse_args(&["nimbus-cli", "show", "--unit", "kelvin"]).is_err());
}

#[test]
fn cli_rejects_unknown_theme() {
    assert!(parse_args(&["nimbus-cli", "show", "-t", "sepia"]).is_err());
}

#[test]
fn cli_parses_outfit_command() {
    let cli = parse_args(&["nimbus-cli", "outfit", "--city", "Paris", "-u", "metric"]).unwrap();
    if let Commands::Outfit { selection } = cli.command {
        assert_eq!(selection.city.as_deref(), Some("Paris"));
        assert_eq!(selection.unit, Some(UnitPreference::Metric));
    } else {
        panic!("Expected Outfit command");
    }
}

#[test]
fn cli_parses_interactive_status_and_config() {
    assert!(matches!(
        parse_args(&["nimbus-cli", "interactive"]).unwrap().command,
        Commands::Interactive
    ));
    assert!(matches!(
        parse_args(&["nimbus-cli", "status"]).unwrap().command,
        Commands::Status
    ));
    assert!(matches!(
        parse_args(&["nimbus-cli", "config"]).unwrap().command,
        Commands::Config
    ));
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["nimbus-cli"]).is_err());
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(parse_args(&["nimbus-cli", "forecast"]).is_err());
}

#[test]
fn verbose_flag_counts() {
    let cli = parse_args(&["nimbus-cli", "-vvv", "status"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn global_flags_after_subcommand() {
    let cli = parse_args(&[
        "nimbus-cli",
        "show",
        "--config",
        "/etc/nimbus.toml",
        "--json-logs",
        "-v",
    ])
    .unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/nimbus.toml")));
    assert!(cli.json_logs);
    assert_eq!(cli.verbose, 1);
}

#[test]
fn help_flag_returns_error() {
    let result = parse_args(&["nimbus-cli", "--help"]);
    assert!(result.is_err());
}

#[test]
fn version_flag_returns_error() {
    let result = parse_args(&["nimbus-cli", "--version"]);
    assert!(result.is_err());
}
