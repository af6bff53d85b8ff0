use async_trait::async_trait;
use chrono::Local;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::{
    error::WeatherError,
    model::{Conditions, WeatherRecord},
};

use super::WeatherProvider;

const CURRENT_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    /// Point the provider at another endpoint root, e.g. a mock server.
    pub fn with_base_url(api_key: String, base_url: &str) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn fetch_current(&self, city: &str) -> Result<OwCurrentResponse, WeatherError> {
        let url = format!("{}{CURRENT_PATH}", self.base_url);
        debug!(city, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        match status {
            StatusCode::NOT_FOUND => {
                return Err(WeatherError::NotFound {
                    city: city.to_string(),
                });
            }
            StatusCode::UNAUTHORIZED => return Err(WeatherError::InvalidApiKey),
            s if !s.is_success() => {
                warn!(%status, city, "OpenWeather request failed");
                return Err(WeatherError::Fetch { status });
            }
            _ => {}
        }

        let body = res.text().await?;
        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    gust: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    wind: OwWind,
    visibility: Option<f64>,
    rain: Option<OwRain>,
}

impl From<OwCurrentResponse> for Conditions {
    fn from(res: OwCurrentResponse) -> Self {
        Conditions {
            city: res.name,
            temperature_c: res.main.temp,
            feels_like_c: res.main.feels_like,
            wind_speed_mps: res.wind.speed,
            wind_gust_mps: res.wind.gust,
            visibility_m: res.visibility,
            humidity_pct: res.main.humidity,
            pressure_hpa: res.main.pressure,
            rain_1h_mm: res.rain.and_then(|r| r.one_hour),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherRecord, WeatherError> {
        let parsed = self.fetch_current(city).await?;
        Ok(WeatherRecord::from_conditions(parsed.into(), Local::now()))
    }
}
