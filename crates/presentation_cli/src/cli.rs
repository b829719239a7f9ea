//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use domain::{Theme, UnitPreference};

/// Nimbus terminal weather dashboard
#[derive(Debug, Parser)]
#[command(name = "nimbus-cli")]
#[command(author, version, about = "Nimbus weather dashboard", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./nimbus.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Selection overrides shared by the one-shot commands
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SelectionArgs {
    /// City from the catalog (case-insensitive)
    #[arg(long)]
    pub city: Option<String>,

    /// Unit system: metric or imperial
    #[arg(short, long)]
    pub unit: Option<UnitPreference>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the available cities
    Cities,

    /// Fetch the weather once and print the dashboard
    Show {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Color theme: light or dark
        #[arg(short, long)]
        theme: Option<Theme>,

        /// Print the dashboard as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Fetch the weather and ask for an outfit suggestion
    Outfit {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Start an interactive session
    Interactive,

    /// Check that the weather and outfit providers respond
    Status,

    /// Print the effective configuration (secrets are omitted)
    Config,
}

/// Determine log filter level from verbosity count
///
/// Returns `None` at zero so the configured filter applies.
pub const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
