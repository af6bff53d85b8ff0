//! Core library for the `cityweather` tool.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather provider abstraction and its OpenWeather implementation
//! - Display records and the persisted favorites list
//! - Application state tying search, favorites and navigation together
//!
//! It is used by `cityweather-cli`, but has no terminal dependencies of its own.

pub mod app;
pub mod config;
pub mod error;
pub mod favorites;
pub mod model;
pub mod provider;
pub mod storage;
pub mod view;

pub use app::AppState;
pub use config::Config;
pub use error::{StorageError, WeatherError};
pub use favorites::{AddOutcome, FavoritesList};
pub use model::WeatherRecord;
pub use provider::{WeatherProvider, provider_from_config};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use view::ViewState;
