use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Display format for [`WeatherRecord::observed_at`].
pub const OBSERVED_AT_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Formatted snapshot of current conditions for one city.
///
/// Every field is a ready-to-render string; this is what gets shown on the
/// home screen and what gets stored in the favorites list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    /// Canonical city name as returned by the provider.
    pub city: String,
    #[serde(rename = "date")]
    pub observed_at: String,
    pub temperature: String,
    pub feels_like: String,
    pub wind: String,
    pub wind_gust: String,
    pub visibility: String,
    pub humidity: String,
    pub pressure: String,
    pub precipitation: String,
}

/// Raw current-conditions readings, already in metric units.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditions {
    pub city: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub wind_speed_mps: f64,
    pub wind_gust_mps: Option<f64>,
    pub visibility_m: Option<f64>,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub rain_1h_mm: Option<f64>,
}

impl WeatherRecord {
    /// Render readings into display strings, stamped with `observed_at`.
    pub fn from_conditions(conditions: Conditions, observed_at: DateTime<Local>) -> Self {
        let visibility = match conditions.visibility_m {
            Some(meters) => format!("{} km", one_decimal(meters / 1000.0)),
            None => "n/a".to_string(),
        };

        Self {
            city: conditions.city,
            observed_at: observed_at.format(OBSERVED_AT_FORMAT).to_string(),
            temperature: format!("{} °C", conditions.temperature_c),
            feels_like: format!("{} °C", conditions.feels_like_c),
            wind: format!("{} m/s", conditions.wind_speed_mps),
            wind_gust: format!("{} m/s", conditions.wind_gust_mps.unwrap_or(0.0)),
            visibility,
            humidity: format!("{} %", conditions.humidity_pct),
            pressure: format!("{} hPa", conditions.pressure_hpa),
            precipitation: format!("{} mm/h", conditions.rain_1h_mm.unwrap_or(0.0)),
        }
    }
}

/// One decimal place, with exact ties rounded away from zero.
///
/// `{:.1}` already rounds from the exact binary value, so only values that sit
/// exactly on a `.x5` boundary (like 1.25) need different handling.
fn one_decimal(value: f64) -> String {
    let exact = format!("{value:.1100}");
    let tail = exact
        .split_once('.')
        .map(|(_, frac)| frac.get(1..).unwrap_or(""))
        .unwrap_or("");
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    if is_tie {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn london() -> Conditions {
        Conditions {
            city: "London".into(),
            temperature_c: 15.2,
            feels_like_c: 14.0,
            wind_speed_mps: 4.63,
            wind_gust_mps: None,
            visibility_m: Some(10000.0),
            humidity_pct: 72.0,
            pressure_hpa: 1012.0,
            rain_1h_mm: None,
        }
    }

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, 12, 0, 5).unwrap()
    }

    #[test]
    fn formats_readings_with_units() {
        let record = WeatherRecord::from_conditions(london(), noon());

        assert_eq!(record.city, "London");
        assert_eq!(record.observed_at, "14/03/2026, 12:00:05");
        assert_eq!(record.temperature, "15.2 °C");
        assert_eq!(record.feels_like, "14 °C");
        assert_eq!(record.wind, "4.63 m/s");
        assert_eq!(record.visibility, "10.0 km");
        assert_eq!(record.humidity, "72 %");
        assert_eq!(record.pressure, "1012 hPa");
    }

    #[test]
    fn optional_readings_default_to_zero() {
        let record = WeatherRecord::from_conditions(london(), noon());

        assert_eq!(record.wind_gust, "0 m/s");
        assert_eq!(record.precipitation, "0 mm/h");
    }

    #[test]
    fn visibility_rounds_to_one_decimal() {
        let mut conditions = london();
        conditions.visibility_m = Some(8437.0);
        conditions.rain_1h_mm = Some(0.25);
        conditions.wind_gust_mps = Some(9.8);

        let record = WeatherRecord::from_conditions(conditions, noon());

        assert_eq!(record.visibility, "8.4 km");
        assert_eq!(record.precipitation, "0.25 mm/h");
        assert_eq!(record.wind_gust, "9.8 m/s");
    }

    #[test]
    fn visibility_ties_round_up() {
        let cases = [
            (250.0, "0.3 km"),
            (750.0, "0.8 km"),
            (1250.0, "1.3 km"),
            (6250.0, "6.3 km"),
            // 0.35 is stored just below the tie.
            (350.0, "0.3 km"),
            (10000.0, "10.0 km"),
        ];

        for (meters, expected) in cases {
            let mut conditions = london();
            conditions.visibility_m = Some(meters);
            let record = WeatherRecord::from_conditions(conditions, noon());
            assert_eq!(record.visibility, expected, "visibility of {meters} m");
        }
    }

    #[test]
    fn missing_visibility_is_marked() {
        let mut conditions = london();
        conditions.visibility_m = None;

        let record = WeatherRecord::from_conditions(conditions, noon());
        assert_eq!(record.visibility, "n/a");
    }

    #[test]
    fn serializes_with_stored_field_names() {
        let record = WeatherRecord::from_conditions(london(), noon());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["date"], "14/03/2026, 12:00:05");
        assert_eq!(value["feelsLike"], "14 °C");
        assert_eq!(value["windGust"], "0 m/s");
        assert!(value.get("observed_at").is_none());
    }
}
