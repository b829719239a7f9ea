//! Line-oriented interactive session driving the controller

use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

use application::{DashboardView, FetchOutcome, FetchTicket, RainAlert, WeatherController};
use domain::{Theme, UnitPreference};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::debug;

use crate::render;

const PROMPT: &str = "nimbus> ";

const HELP: &str = "\
Commands:
  city <name>     select a city from the catalog
  unit <unit>     metric or imperial
  theme <theme>   light or dark
  rain            toggle rain alerts
  outfit          ask for an outfit suggestion
  show            print the dashboard
  refresh         fetch the weather again
  cities          list the available cities
  help            show this help
  quit            leave the session";

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    City(String),
    Unit(UnitPreference),
    Theme(Theme),
    Rain,
    Outfit,
    Show,
    Refresh,
    Cities,
    Help,
    Quit,
}

/// Errors parsing a session command
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    #[error("{0}")]
    Invalid(String),
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        let argument = |usage: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(usage))
            } else {
                Ok(rest)
            }
        };

        match verb.to_lowercase().as_str() {
            "city" => Ok(Self::City(argument("city <name>")?.to_string())),
            "unit" | "units" => argument("unit <metric|imperial>")?
                .parse()
                .map(Self::Unit)
                .map_err(|e: domain::DomainError| CommandError::Invalid(e.to_string())),
            "theme" => argument("theme <light|dark>")?
                .parse()
                .map(Self::Theme)
                .map_err(|e: domain::DomainError| CommandError::Invalid(e.to_string())),
            "rain" => Ok(Self::Rain),
            "outfit" => Ok(Self::Outfit),
            "show" => Ok(Self::Show),
            "refresh" | "reload" => Ok(Self::Refresh),
            "cities" => Ok(Self::Cities),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}

/// Interactive session over a controller
pub struct Session<W> {
    controller: Arc<WeatherController>,
    alerts: mpsc::Receiver<RainAlert>,
    out: W,
}

impl<W> std::fmt::Debug for Session<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

impl<W: Write> Session<W> {
    pub fn new(
        controller: Arc<WeatherController>,
        alerts: mpsc::Receiver<RainAlert>,
        out: W,
    ) -> Self {
        Self {
            controller,
            alerts,
            out,
        }
    }

    /// Load the initial forecast, then execute commands until `quit` or EOF
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub async fn run<R>(&mut self, input: R) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        writeln!(self.out, "Type 'help' for a list of commands.")?;
        let ticket = self.controller.refresh();
        self.fetch(ticket).await?;

        let mut lines = input.lines();
        self.prompt()?;
        while let Some(line) = lines.next_line().await? {
            if !line.trim().is_empty() {
                match line.parse::<SessionCommand>() {
                    Ok(SessionCommand::Quit) => break,
                    Ok(command) => self.execute(command).await?,
                    Err(e) => writeln!(self.out, "{e}")?,
                }
            }
            self.prompt()?;
        }

        writeln!(self.out)?;
        Ok(())
    }

    /// Execute a single command
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails or a fetch task panics.
    pub async fn execute(&mut self, command: SessionCommand) -> anyhow::Result<()> {
        debug!(?command, "Executing session command");
        match command {
            SessionCommand::City(name) => match self.controller.select_city_by_name(&name) {
                Ok(Some(ticket)) => self.fetch(ticket).await?,
                Ok(None) => writeln!(
                    self.out,
                    "{} is already selected.",
                    self.controller.selected_city().name
                )?,
                Err(e) => writeln!(self.out, "{e}")?,
            },
            SessionCommand::Unit(unit) => match self.controller.set_unit(unit) {
                Some(ticket) => self.fetch(ticket).await?,
                None => writeln!(self.out, "Units are already {unit}.")?,
            },
            SessionCommand::Theme(theme) => {
                self.controller.set_theme(theme);
                self.show()?;
            },
            SessionCommand::Rain => {
                let enabled = self.controller.toggle_rain_notification();
                writeln!(
                    self.out,
                    "Rain alerts {}.",
                    if enabled { "enabled" } else { "disabled" }
                )?;
            },
            SessionCommand::Outfit => {
                writeln!(self.out, "Asking the stylist...")?;
                match self.controller.request_outfit().await {
                    Some(suggestion) => writeln!(self.out, "👗 {suggestion}")?,
                    None => writeln!(self.out, "No weather data yet. Try 'refresh' first.")?,
                }
            },
            SessionCommand::Show => self.show()?,
            SessionCommand::Refresh => {
                let ticket = self.controller.refresh();
                self.fetch(ticket).await?;
            },
            SessionCommand::Cities => {
                let selected = self.controller.selected_city();
                writeln!(self.out, "{}", render::cities(Some(selected.name)))?;
            },
            SessionCommand::Help => writeln!(self.out, "{HELP}")?,
            SessionCommand::Quit => {},
        }
        Ok(())
    }

    async fn fetch(&mut self, ticket: FetchTicket) -> anyhow::Result<()> {
        writeln!(self.out, "Loading {}...", ticket.city().name)?;
        match self.controller.spawn(ticket).await? {
            FetchOutcome::Applied | FetchOutcome::Failed(_) => self.show()?,
            FetchOutcome::Superseded => debug!("Fetch superseded, not rendering"),
        }
        self.drain_alerts()?;
        Ok(())
    }

    fn show(&mut self) -> std::io::Result<()> {
        let view = DashboardView::from_state(&self.controller.state());
        writeln!(self.out, "{}", render::dashboard(&view))
    }

    fn drain_alerts(&mut self) -> std::io::Result<()> {
        while let Ok(alert) = self.alerts.try_recv() {
            writeln!(self.out, "{}", render::rain_alert(&alert))?;
        }
        Ok(())
    }

    fn prompt(&mut self) -> std::io::Result<()> {
        write!(self.out, "{PROMPT}")?;
        self.out.flush()
    }
}
