//! Application state shared by the query, favorites and view components.
//!
//! Nothing here touches storage on its own: after a mutating call reports a
//! change, the caller persists with [`AppState::save_favorites`].

use tracing::info;

use crate::{
    error::{StorageError, WeatherError},
    favorites::{AddOutcome, FavoritesList},
    model::WeatherRecord,
    provider::WeatherProvider,
    storage::Storage,
    view::ViewState,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Text currently in the search box.
    pub query: String,
    /// Record shown on the home screen.
    pub current: Option<WeatherRecord>,
    pub favorites: FavoritesList,
    pub view: ViewState,
}

impl AppState {
    /// Fresh state with favorites hydrated from `storage`.
    pub fn load(storage: &dyn Storage) -> Self {
        Self {
            favorites: FavoritesList::load(storage),
            ..Self::default()
        }
    }

    /// Query the provider for `city` and display the result.
    ///
    /// Holding `&mut self` across the request means a second search on the
    /// same state cannot start until this one resolves. On error the state is
    /// left untouched.
    pub async fn search_weather(
        &mut self,
        provider: &dyn WeatherProvider,
        city: &str,
    ) -> Result<&WeatherRecord, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::Validation);
        }

        let record = provider.current_weather(city).await?;
        info!(city = %record.city, "weather updated");

        self.view = ViewState::Home;
        Ok(&*self.current.insert(record))
    }

    /// Bookmark the displayed record.
    pub fn add_to_favorites(&mut self) -> AddOutcome {
        match &self.current {
            Some(record) => self.favorites.add(record.clone()),
            None => AddOutcome::NothingToAdd,
        }
    }

    pub fn remove_favorite(&mut self, city: &str) -> bool {
        self.favorites.remove(city)
    }

    /// Show a stored record on the home screen.
    pub fn load_detail(&mut self, record: WeatherRecord) {
        self.query = record.city.clone();
        self.current = Some(record);
        self.view = ViewState::Home;
    }

    pub fn navigate(&mut self, view: ViewState) {
        self.view = view;
    }

    pub fn save_favorites(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        self.favorites.save(storage)
    }
}
