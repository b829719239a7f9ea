//! Terminal rendering of the dashboard
//!
//! Pure functions from view models to strings; printing is left to the
//! caller.

use application::{DailyRow, DashboardView, RainAlert};
use domain::{CITIES, Percentage, Theme};

const RESET: &str = "\x1b[0m";
const BAR_WIDTH: usize = 10;

/// ANSI styles for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub heading: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub warning: &'static str,
}

impl Palette {
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                heading: "\x1b[1;34m",
                text: "\x1b[39m",
                muted: "\x1b[90m",
                warning: "\x1b[33m",
            },
            Theme::Dark => Self {
                heading: "\x1b[1;96m",
                text: "\x1b[97m",
                muted: "\x1b[37m",
                warning: "\x1b[93m",
            },
        }
    }

    fn paint(style: &str, text: &str) -> String {
        format!("{style}{text}{RESET}")
    }

    fn heading(&self, text: &str) -> String {
        Self::paint(self.heading, text)
    }

    fn text(&self, text: &str) -> String {
        Self::paint(self.text, text)
    }

    fn muted(&self, text: &str) -> String {
        Self::paint(self.muted, text)
    }

    fn warning(&self, text: &str) -> String {
        Self::paint(self.warning, text)
    }
}

/// Render the full dashboard
#[must_use]
pub fn dashboard(view: &DashboardView) -> String {
    let palette = Palette::for_theme(view.theme);
    let mut lines = Vec::new();

    lines.push(format!(
        "{} {}",
        palette.heading(&format!("📍 {}, {}", view.city, view.country)),
        palette.muted(&format!(
            "[{} · {} · rain alerts {}]",
            view.unit,
            view.theme,
            if view.rain_notification { "on" } else { "off" }
        )),
    ));

    if view.loading {
        lines.push(palette.muted("   Loading..."));
    }

    match &view.current {
        Some(current) => {
            lines.push(format!(
                "{}  {}",
                palette.heading(&format!(
                    "{} {}{}",
                    current.icon.emoji(),
                    current.temperature,
                    current.temperature_unit
                )),
                palette.text(current.description),
            ));
            lines.push(palette.text(&format!(
                "   Humidity {} · Wind {} {} · Precipitation {}",
                current.humidity,
                current.wind_speed,
                current.wind_unit,
                current.precipitation_probability
            )));
        },
        None if !view.loading => lines.push(palette.muted("   No weather data yet.")),
        None => {},
    }

    if let (Some(other), Some(_)) = (&view.forecast_city, &view.current) {
        lines.push(palette.warning(&format!("   Showing the forecast for {other}")));
    }
    if view.stale {
        lines.push(palette.warning("   ⚠ Stale: showing the last successful forecast"));
    }
    if let Some(error) = &view.error {
        lines.push(palette.warning(&format!("   Error: {error}")));
    }

    if !view.daily.is_empty() {
        lines.push(String::new());
        lines.push(palette.heading("Next 7 Days"));
        for row in &view.daily {
            lines.push(daily_row(&palette, row));
        }
    }

    if view.outfit_loading {
        lines.push(String::new());
        lines.push(palette.muted("Asking the stylist..."));
    } else if let Some(outfit) = &view.outfit {
        lines.push(String::new());
        lines.push(format!("{} {}", palette.heading("👗 Outfit:"), palette.text(outfit)));
    }

    lines.join("\n")
}

fn daily_row(palette: &Palette, row: &DailyRow) -> String {
    let precipitation = row.precipitation_probability.map_or_else(
        || format!("{:<width$} --", "", width = BAR_WIDTH),
        |p| format!("{} {p}", precipitation_bar(p)),
    );

    format!(
        "  {} {} {} {}",
        palette.text(&format!("{:<10}", row.label)),
        palette.text(&format!("{} {:<13}", row.icon.emoji(), row.description)),
        palette.muted(&format!("{precipitation:<15}")),
        format_args!(
            "{} / {}",
            palette.text(&format!("{}°", row.high)),
            palette.muted(&format!("{}°", row.low))
        ),
    )
}

/// Fixed-width bar for a precipitation probability
#[must_use]
pub fn precipitation_bar(probability: Percentage) -> String {
    let filled = usize::from(probability.value()) * BAR_WIDTH / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Catalog listing with the current selection marked
#[must_use]
pub fn cities(selected: Option<&str>) -> String {
    CITIES
        .iter()
        .map(|city| {
            let marker = if selected == Some(city.name) { "*" } else { " " };
            format!(
                "{marker} {:<10} {}  ({})",
                city.name, city.country, city.location
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn rain_alert(alert: &RainAlert) -> String {
    format!("☔ {alert}")
}
