use reqwest::StatusCode;

/// Failures on the query path. Every variant is non-fatal: the caller keeps
/// its previous state and may retry with a new request.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Please enter a city name")]
    Validation,

    #[error("City \"{city}\" not found. Please check the spelling!")]
    NotFound { city: String },

    #[error("Invalid API key. Please check your configuration.")]
    InvalidApiKey,

    #[error("Failed to fetch weather data. Please try again.")]
    Fetch { status: StatusCode },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected weather data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures reading or writing the key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize stored value: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Could not determine platform data directory")]
    NoDataDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_city() {
        let err = WeatherError::NotFound {
            city: "Atlantis".into(),
        };
        assert_eq!(
            err.to_string(),
            "City \"Atlantis\" not found. Please check the spelling!"
        );
    }

    #[test]
    fn fetch_message_is_generic() {
        let err = WeatherError::Fetch {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(!err.to_string().contains("500"));
    }
}
