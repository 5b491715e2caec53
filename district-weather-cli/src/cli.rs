use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use district_weather_core::{Config, ReferenceData, provider, report, resolver};
use std::{io, path::PathBuf};
use tracing::{info, warn};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "district-weather",
    version,
    about = "Current weather for every district of a division"
)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and default division.
    Configure,

    /// Show current weather for each district of a division.
    Show {
        /// Division name, matched case-insensitively. Defaults to the configured division.
        division: Option<String>,

        #[command(flatten)]
        data: DataArgs,

        /// OpenWeather API key.
        #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Weather provider base URL.
        #[arg(long)]
        base_url: Option<String>,
    },

    /// List known divisions.
    Divisions {
        #[command(flatten)]
        data: DataArgs,
    },
}

#[derive(Debug, Args)]
pub struct DataArgs {
    /// Path to the divisions JSON file (default: `divisions.json` in the working
    /// directory). The bundled data lives at `data/divisions.json`.
    #[arg(long)]
    divisions: Option<PathBuf>,

    /// Path to the districts JSON file (default: `districts.json` in the working
    /// directory). The bundled data lives at `data/districts.json`.
    #[arg(long)]
    districts: Option<PathBuf>,
}

impl DataArgs {
    fn apply(self, config: &mut Config) {
        if let Some(path) = self.divisions {
            config.divisions_path = path;
        }
        if let Some(path) = self.districts {
            config.districts_path = path;
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        match self.command {
            Command::Configure => configure(config),
            Command::Show {
                division,
                data,
                api_key,
                base_url,
            } => {
                data.apply(&mut config);
                if let Some(key) = api_key {
                    config.set_api_key(key);
                }
                if let Some(url) = base_url {
                    config.base_url = url;
                }
                let division = division.unwrap_or_else(|| config.default_division.clone());

                show(&config, &division).await
            }
            Command::Divisions { data } => {
                data.apply(&mut config);
                let data = load_reference(&config)?;
                output::print_divisions(&mut io::stdout().lock(), &data.divisions)?;
                Ok(())
            }
        }
    }
}

fn load_reference(config: &Config) -> anyhow::Result<ReferenceData> {
    ReferenceData::load(&config.divisions_path, &config.districts_path)
}

/// An unknown division is not an error; it just resolves to no districts.
fn division_known(division: &str, data: &ReferenceData) -> bool {
    let known = resolver::find_division(division, &data.divisions).is_some();
    if !known {
        warn!(division, "Unknown division");
    }
    known
}

async fn show(config: &Config, division: &str) -> anyhow::Result<()> {
    let data = load_reference(config)?;
    let provider = provider::provider_from_config(config)?;
    division_known(division, &data);

    let mut out = io::stdout().lock();
    output::print_header(&mut out, division)?;

    // Per-district failures are logged by the printer; the run still succeeds.
    let mut write_result = Ok(());
    let report = report::build_report_with(division, &data, provider.as_ref(), |entry| {
        if write_result.is_ok() {
            write_result = output::print_entry(&mut out, entry);
        }
    })
    .await;
    write_result.context("Failed to write to stdout")?;

    info!(
        division,
        districts = report.entries.len(),
        failures = report.failures(),
        "Finished"
    );
    Ok(())
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    let division = inquire::Text::new("Default division:")
        .with_default(&config.default_division)
        .prompt()
        .context("Failed to read default division")?;

    config.set_api_key(api_key.trim().to_string());
    config.default_division = division.trim().to_string();
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
