use std::collections::HashSet;

use tracing::{debug, warn};

use crate::{error::StorageError, model::WeatherRecord, storage::Storage};

/// Storage key holding the serialized favorites list.
pub const FAVORITES_KEY: &str = "weatherFavorite";

/// Result of bookmarking a record; each variant maps to a user notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(String),
    AlreadyPresent(String),
    NothingToAdd,
}

impl AddOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }

    pub fn message(&self) -> String {
        match self {
            AddOutcome::Added(city) => format!("{city} added to favorites!"),
            AddOutcome::AlreadyPresent(city) => {
                format!("{city} is already in your favorite list!")
            }
            AddOutcome::NothingToAdd => "Search for a city first.".to_string(),
        }
    }
}

/// Bookmarked records in insertion order, unique by city name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesList {
    records: Vec<WeatherRecord>,
}

impl FavoritesList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate from storage. Missing or unreadable data yields an empty list.
    pub fn load(storage: &dyn Storage) -> Self {
        let raw = match storage.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::new(),
            Err(err) => {
                warn!(error = %err, "could not read stored favorites, starting empty");
                return Self::new();
            }
        };

        match serde_json::from_str::<Vec<WeatherRecord>>(&raw) {
            Ok(records) => Self::from_records(records),
            Err(err) => {
                warn!(error = %err, "stored favorites are malformed, starting empty");
                Self::new()
            }
        }
    }

    /// Build a list from arbitrary records, keeping the first entry per city.
    pub fn from_records(records: impl IntoIterator<Item = WeatherRecord>) -> Self {
        let mut seen = HashSet::new();
        let records = records
            .into_iter()
            .filter(|r| seen.insert(r.city.clone()))
            .collect();
        Self { records }
    }

    /// Write the whole list under [`FAVORITES_KEY`].
    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.records)?;
        storage.set(FAVORITES_KEY, &json)?;
        debug!(count = self.records.len(), "saved favorites");
        Ok(())
    }

    pub fn add(&mut self, record: WeatherRecord) -> AddOutcome {
        if self.contains(&record.city) {
            return AddOutcome::AlreadyPresent(record.city);
        }

        let city = record.city.clone();
        self.records.push(record);
        AddOutcome::Added(city)
    }

    /// Remove the entry named exactly `city`. Returns whether anything changed.
    pub fn remove(&mut self, city: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.city != city);
        self.records.len() != before
    }

    pub fn contains(&self, city: &str) -> bool {
        self.records.iter().any(|r| r.city == city)
    }

    pub fn get(&self, city: &str) -> Option<&WeatherRecord> {
        self.records.iter().find(|r| r.city == city)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeatherRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
