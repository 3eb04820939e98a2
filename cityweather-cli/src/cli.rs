use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use cityweather_core::{
    CityQuery, Config, Session, WeatherProvider, icon::resolve_icon,
    provider::provider_from_config,
};

use crate::input;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather by city name")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prompt for the OpenWeatherMap API key and save it.
    Configure,

    /// Prompt for cities until one returns weather (the default).
    Search,

    /// Show weather for one city.
    Show {
        /// City name, sent as typed.
        city: String,
    },

    /// Print the icon path for a condition code, e.g. "01d".
    Icon {
        /// Condition code as the provider reports it.
        code: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let config_path = self.config.as_deref();

        match self.command.unwrap_or(Command::Search) {
            Command::Configure => configure(config_path),
            Command::Search => {
                let session = Session::new(provider_from_config(&load_config(config_path)?)?);
                search_loop(&session).await
            }
            Command::Show { city } => {
                let session = Session::new(provider_from_config(&load_config(config_path)?)?);
                session.search(&CityQuery::from(city)).await;

                println!("{}", session.render().await);
                if session.state().await.shows_weather() {
                    Ok(ExitCode::SUCCESS)
                } else {
                    Ok(ExitCode::FAILURE)
                }
            }
            Command::Icon { code } => match resolve_icon(&code) {
                Some(path) => {
                    println!("{path}");
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    tracing::warn!(code = %code, "no icon mapped for condition code");
                    Ok(ExitCode::FAILURE)
                }
            },
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn configure(path: Option<&Path>) -> anyhow::Result<ExitCode> {
    let mut cfg = load_config(path)?;

    let Some(key) = input::prompt_api_key()? else {
        return Ok(ExitCode::FAILURE);
    };
    cfg.set_api_key(key);

    let target = match path {
        Some(p) => p.to_path_buf(),
        None => Config::config_file_path()?,
    };
    cfg.save_to(&target)?;
    println!("Saved API key to {}", target.display());

    Ok(ExitCode::SUCCESS)
}

/// Keep collecting input while the input view is active. Stops on the first
/// record, which is printed, or when the user cancels the prompt.
async fn search_loop<P: WeatherProvider>(session: &Session<P>) -> anyhow::Result<ExitCode> {
    while session.state().await.shows_input() {
        println!("{}", session.render().await);

        let Some(query) = input::prompt_city()? else {
            return Ok(ExitCode::SUCCESS);
        };
        session.search(&query).await;
    }

    println!("{}", session.render().await);
    Ok(ExitCode::SUCCESS)
}
