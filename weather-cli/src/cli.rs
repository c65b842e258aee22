use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use weather_dash_core::{
    Config, Coordinates, Dashboard, FileLocationStore, UnitPreference, provider_from_config,
};

use crate::{geo::ArgGeolocator, render::TerminalSink};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dash", version, about = "Terminal weather dashboard")]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather and the 5-day forecast once.
    ///
    /// Without a city or coordinates, the last searched city is used.
    Show {
        /// City name, e.g. "Oslo" or "Paris,FR".
        city: Option<String>,

        #[command(flatten)]
        position: PositionArgs,

        /// Display °F and mph instead of °C and km/h.
        #[arg(long)]
        imperial: bool,
    },

    /// Search repeatedly from a prompt.
    Interactive {
        #[command(flatten)]
        position: PositionArgs,

        /// Start in °F and mph.
        #[arg(long)]
        imperial: bool,
    },
}

#[derive(Debug, Clone, Copy, Args)]
pub struct PositionArgs {
    /// Latitude of "my location" (also used by `:here`).
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of "my location".
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,
}

impl PositionArgs {
    fn coordinates(self) -> Option<Coordinates> {
        self.lat.zip(self.lon).map(|(lat, lon)| Coordinates::new(lat, lon))
    }

    fn geolocator(self) -> ArgGeolocator {
        ArgGeolocator::new(self.lat, self.lon)
    }
}

fn unit_preference(imperial: bool) -> UnitPreference {
    if imperial {
        UnitPreference::Imperial
    } else {
        UnitPreference::Metric
    }
}

/// A line typed at the interactive prompt.
#[derive(Debug, PartialEq)]
enum PromptAction<'a> {
    Search(&'a str),
    ToggleUnits,
    Here,
    Quit,
}

fn parse_prompt(line: &str) -> PromptAction<'_> {
    match line.trim() {
        ":units" | ":u" => PromptAction::ToggleUnits,
        ":here" | ":h" => PromptAction::Here,
        ":quit" | ":q" => PromptAction::Quit,
        city => PromptAction::Search(city),
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => configure(),
            Command::Show {
                city,
                position,
                imperial,
            } => show(city, position, unit_preference(imperial)).await,
            Command::Interactive { position, imperial } => {
                interactive(position, unit_preference(imperial)).await
            }
        }
    }
}

type TerminalDashboard = Dashboard<TerminalSink<std::io::Stdout>>;

fn build_dashboard(units: UnitPreference) -> anyhow::Result<TerminalDashboard> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;
    let store = FileLocationStore::open_default()?;
    tracing::debug!(store = %store.path().display(), "using last-location store");

    Ok(Dashboard::new(
        provider,
        Box::new(store),
        TerminalSink::stdout(),
        units,
    ))
}

fn configure() -> anyhow::Result<ExitCode> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_help_message("https://home.openweathermap.org/api_keys")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    let path = config.save()?;

    println!("Saved configuration to {}", path.display());
    Ok(ExitCode::SUCCESS)
}

async fn show(
    city: Option<String>,
    position: PositionArgs,
    units: UnitPreference,
) -> anyhow::Result<ExitCode> {
    let mut dashboard = build_dashboard(units)?;

    let result = match (city, position.coordinates()) {
        (Some(city), _) => dashboard.search_city(&city).await,
        (None, Some(coords)) => dashboard.search_coords(coords).await,
        (None, None) => match dashboard.restore_last().await {
            Ok(true) => Ok(()),
            Ok(false) => dashboard.search_city("").await,
            Err(e) => Err(e),
        },
    };

    // The sink has already printed the error.
    Ok(match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    })
}

async fn interactive(position: PositionArgs, units: UnitPreference) -> anyhow::Result<ExitCode> {
    let mut dashboard = build_dashboard(units)?;
    let geo = position.geolocator();

    // Errors are shown by the sink; the loop keeps going.
    let _ = dashboard.restore_last().await;

    loop {
        let line = match Text::new("City:")
            .with_help_message(":units toggles °C/°F, :here uses --lat/--lon, :quit exits")
            .prompt()
        {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        };

        match parse_prompt(&line) {
            PromptAction::Quit => break,
            PromptAction::ToggleUnits => {
                let units = dashboard.toggle_units();
                if dashboard.snapshot().is_none() {
                    println!("Units: {} / {}", units.temp_label(), units.speed_label());
                }
            }
            PromptAction::Here => {
                let _ = dashboard.use_my_location(&geo).await;
            }
            PromptAction::Search(city) => {
                let _ = dashboard.search_city(city).await;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
