use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// What the user asked for: a free-text city or a pair of coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    City(String),
    Coords(Coordinates),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Provider condition record: coarse category, icon code and free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// e.g. "Rain", "Clear".
    pub category: String,
    /// e.g. "10d".
    pub icon: String,
    pub description: String,
}

impl Condition {
    pub fn unknown() -> Self {
        Self {
            category: "Unknown".to_string(),
            icon: String::new(),
            description: "Unknown".to_string(),
        }
    }
}

/// One 3-hour tick of the provider forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: i64,
    /// Provider-formatted date and time (`dt_txt`). Days are grouped on this,
    /// never on `timestamp`.
    pub local_time: NaiveDateTime,
    pub temp_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub condition: Condition,
}

impl ForecastSample {
    pub fn date(&self) -> NaiveDate {
        self.local_time.date()
    }

    /// True for the 12:00:00 tick.
    pub fn is_midday(&self) -> bool {
        let t = self.local_time.time();
        t.hour() == 12 && t.minute() == 0 && t.second() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon".
    pub day_label: String,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub location_name: String,
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub pressure_hpa: f64,
    pub condition: Condition,
}

/// Everything one fetch produces. Replaced wholesale on the next fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastSample>,
    pub fetched_at: DateTime<Utc>,
}
