use anyhow::Context;
use clap::{Parser, Subcommand};
use cityweather_core::{AppState, Config, FileStorage, provider_from_config};
use inquire::Password;

use crate::{render, ui};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Look up current weather and keep favorite cities")]
pub struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive Home / Favorites screens (default).
    App,

    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name.
        city: String,

        /// Also add the result to favorites.
        #[arg(long)]
        save: bool,
    },

    /// List stored favorites.
    Favorites,

    /// Remove a city from favorites.
    Remove {
        /// City name, exactly as listed.
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::App) {
            Command::App => {
                let config = Config::load()?;
                let provider = provider_from_config(&config)?;
                let mut storage = open_storage()?;
                ui::run(provider.as_ref(), &mut storage).await?;
            }
            Command::Configure => configure()?,
            Command::Show { city, save } => {
                let config = Config::load()?;
                let provider = provider_from_config(&config)?;
                let mut storage = open_storage()?;
                let mut app = AppState::load(&storage);

                let record = app.search_weather(provider.as_ref(), &city).await?;
                print!("{}", render::record_card(record));

                if save {
                    let outcome = app.add_to_favorites();
                    if outcome.changed() {
                        app.save_favorites(&mut storage)?;
                    }
                    println!("{}", outcome.message());
                }
            }
            Command::Favorites => {
                let storage = open_storage()?;
                let app = AppState::load(&storage);
                print!("{}", render::favorites_table(&app.favorites));
            }
            Command::Remove { city } => {
                let mut storage = open_storage()?;
                let mut app = AppState::load(&storage);

                if app.remove_favorite(&city) {
                    app.save_favorites(&mut storage)?;
                    println!("{city} removed from favorites.");
                } else {
                    println!("{city} is not in your favorite list.");
                }
            }
        }

        Ok(())
    }
}

fn open_storage() -> anyhow::Result<FileStorage> {
    FileStorage::in_data_dir().context("Failed to open favorites storage")
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim();
    if api_key.is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    config.set_api_key(api_key.to_string());
    config.save()?;

    println!(
        "Saved API key to {}",
        Config::config_file_path()?.display()
    );
    Ok(())
}
