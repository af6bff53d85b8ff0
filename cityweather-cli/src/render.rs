use cityweather_core::{FavoritesList, WeatherRecord};

/// Multi-line card for one record.
pub fn record_card(record: &WeatherRecord) -> String {
    let rows = [
        ("Temperature", &record.temperature),
        ("Feels like", &record.feels_like),
        ("Wind", &record.wind),
        ("Wind gust", &record.wind_gust),
        ("Visibility", &record.visibility),
        ("Humidity", &record.humidity),
        ("Pressure", &record.pressure),
        ("Precipitation", &record.precipitation),
    ];

    let mut out = format!("{}\n{}\n", record.city, record.observed_at);
    for (label, value) in rows {
        out.push_str(&format!("  {label:<14}{value}\n"));
    }
    out
}

/// Header plus one line per favorite, in stored order.
pub fn favorites_table(favorites: &FavoritesList) -> String {
    if favorites.is_empty() {
        return "No favorites yet. Search for a city and add it!\n".to_string();
    }

    let mut out = format!(
        "{:<20}{:>12}{:>12}{:>10}{:>12}\n",
        "City", "Temperature", "Feels like", "Humidity", "Wind"
    );
    for r in favorites.iter() {
        out.push_str(&format!(
            "{:<20}{:>12}{:>12}{:>10}{:>12}\n",
            r.city, r.temperature, r.feels_like, r.humidity, r.wind
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(city: &str) -> WeatherRecord {
        WeatherRecord {
            city: city.into(),
            observed_at: "17/10/2026, 08:15:00".into(),
            temperature: "15.2 °C".into(),
            feels_like: "14 °C".into(),
            wind: "4 m/s".into(),
            wind_gust: "0 m/s".into(),
            visibility: "10.0 km".into(),
            humidity: "70 %".into(),
            pressure: "1012 hPa".into(),
            precipitation: "0 mm/h".into(),
        }
    }

    #[test]
    fn card_lists_every_reading() {
        let card = record_card(&record("London"));

        assert!(card.starts_with("London\n17/10/2026, 08:15:00\n"));
        assert!(card.contains("Temperature   15.2 °C"));
        assert!(card.contains("Precipitation 0 mm/h"));
        assert_eq!(card.lines().count(), 10);
    }

    #[test]
    fn empty_table_has_hint() {
        assert!(favorites_table(&FavoritesList::new()).starts_with("No favorites yet"));
    }

    #[test]
    fn table_keeps_order() {
        let favorites = FavoritesList::from_records([record("Oslo"), record("Lima")]);
        let table = favorites_table(&favorites);

        let cities: Vec<_> = table
            .lines()
            .skip(1)
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(cities, ["Oslo", "Lima"]);
    }

    #[test]
    fn table_shows_card_readings() {
        let table = favorites_table(&FavoritesList::from_records([record("Oslo")]));
        let mut lines = table.lines();

        let header = lines.next().unwrap();
        for column in ["City", "Temperature", "Feels like", "Humidity", "Wind"] {
            assert!(header.contains(column), "missing {column} column");
        }

        let row = lines.next().unwrap();
        assert!(row.starts_with("Oslo"));
        for value in ["15.2 °C", "14 °C", "70 %", "4 m/s"] {
            assert!(row.contains(value), "missing {value} in {row}");
        }
    }
}
