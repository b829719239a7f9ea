//! Nimbus CLI
//!
//! Terminal weather dashboard with outfit suggestions.

#![allow(clippy::print_stdout)]

use anyhow::Context;
use application::{DashboardView, FetchOutcome, InferencePort, RainAlert, WeatherPort};
use clap::Parser;
use infrastructure::{AppConfig, GeminiInferenceAdapter, WeatherAdapter, init_telemetry};
use presentation_cli::{
    Cli, Commands, Overrides, SelectionArgs, Session, build_controller, load_weather,
    log_filter_from_verbosity, render,
};
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::info;

fn overrides(selection: SelectionArgs) -> Overrides {
    Overrides {
        city: selection.city,
        unit: selection.unit,
        theme: None,
    }
}

fn print_alerts(alerts: &mut mpsc::Receiver<RainAlert>) {
    while let Ok(alert) = alerts.try_recv() {
        println!("{}", render::rain_alert(&alert));
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.telemetry.log_filter = filter.to_string();
    }
    if cli.json_logs {
        config.telemetry.json = true;
    }
    init_telemetry(&config.telemetry)?;
    info!(command = ?cli.command, "Starting nimbus-cli");

    match cli.command {
        Commands::Cities => {
            let selected = config.preferences.resolve_city().ok();
            println!("🌍 Cities:");
            println!("{}", render::cities(selected.map(|c| c.name)));
        },

        Commands::Show {
            selection,
            theme,
            json,
        } => {
            let overrides = Overrides {
                theme,
                ..overrides(selection)
            };
            let (controller, mut alerts) = build_controller(&config, &overrides)?;
            let ticket = controller.refresh();
            let outcome = controller.spawn(ticket).await?;

            let view = DashboardView::from_state(&controller.state());
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", render::dashboard(&view));
                print_alerts(&mut alerts);
            }

            if let FetchOutcome::Failed(error) = outcome {
                anyhow::bail!("Weather fetch failed: {error}");
            }
        },

        Commands::Outfit { selection } => {
            let (controller, mut alerts) = build_controller(&config, &overrides(selection))?;
            load_weather(&controller).await?;
            print_alerts(&mut alerts);

            let city = controller.selected_city();
            println!("👗 Outfit for {}:", city.name);
            if let Some(suggestion) = controller.request_outfit().await {
                println!("{suggestion}");
            }
        },

        Commands::Interactive => {
            let (controller, alerts) = build_controller(&config, &Overrides::default())?;
            let mut session = Session::new(controller, alerts, std::io::stdout());
            session.run(BufReader::new(tokio::io::stdin())).await?;
        },

        Commands::Status => {
            let weather = WeatherAdapter::with_config(config.weather.clone())?;
            let weather_ok = weather.is_available().await;
            if weather_ok {
                println!("✅ Weather provider: reachable ({})", config.weather.base_url);
            } else {
                println!("❌ Weather provider: unreachable ({})", config.weather.base_url);
            }

            match GeminiInferenceAdapter::from_config(&config)? {
                None => println!("⚪ Outfit provider: not configured"),
                Some(inference) => {
                    let model = inference.current_model();
                    if inference.is_healthy().await {
                        println!("✅ Outfit provider: reachable (model {model})");
                    } else {
                        println!("❌ Outfit provider: unreachable (model {model})");
                    }
                },
            }

            if !weather_ok {
                anyhow::bail!("Weather provider is unreachable");
            }
        },

        Commands::Config => {
            print!("{}", config.to_toml()?);
        },
    }

    Ok(())
}
